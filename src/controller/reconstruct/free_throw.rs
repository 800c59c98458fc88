use crate::model::{ActionKind, Anomaly, AnomalyLog, GameEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeThrowEnd {
    /// `n of n`
    Final,
    /// No subtype at all.
    MissingMarker,
    /// A subtype that is not `n of m`, e.g. a technical.
    Unrecognized,
}

#[must_use]
pub fn starts_sequence(event: &GameEvent) -> bool {
    event.kind == ActionKind::FreeThrow
        && event
            .sub_type
            .as_deref()
            .is_some_and(|s| s.contains("1 of"))
}

#[must_use]
pub fn sequence_end(event: &GameEvent) -> Option<FreeThrowEnd> {
    if event.kind != ActionKind::FreeThrow {
        return None;
    }
    match event.sub_type.as_deref().map(str::trim) {
        None | Some("") => Some(FreeThrowEnd::MissingMarker),
        Some(_) => match event.free_throw_marker() {
            Some((shot, total)) if shot == total => Some(FreeThrowEnd::Final),
            Some(_) => None,
            None => Some(FreeThrowEnd::Unrecognized),
        },
    }
}

/// Holds substitutions recorded during a free-throw sequence until the last
/// attempt, then releases them together.
#[derive(Debug, Clone, Default)]
pub struct FreeThrowBuffer {
    in_progress: bool,
    pending: Vec<GameEvent>,
}

impl FreeThrowBuffer {
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.pending
    }

    pub fn hold(&mut self, substitution: GameEvent) {
        self.pending.push(substitution);
    }

    /// Feeds a non-substitution event. Returns the held substitutions, in the
    /// order received, when this event closes the sequence.
    pub fn observe(
        &mut self,
        event: &GameEvent,
        anomalies: &mut AnomalyLog,
    ) -> Option<Vec<GameEvent>> {
        if starts_sequence(event) {
            self.in_progress = true;
        }
        if !self.in_progress {
            return None;
        }
        let end = sequence_end(event)?;
        if end == FreeThrowEnd::MissingMarker {
            anomalies.push(Anomaly::FreeThrowWithoutMarker {
                action_number: event.action_number,
            });
        }
        self.in_progress = false;
        Some(std::mem::take(&mut self.pending))
    }

    /// Ends the sequence unconditionally, e.g. when the log runs out.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.in_progress = false;
        std::mem::take(&mut self.pending)
    }
}
