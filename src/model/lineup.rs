use serde::Serialize;

use crate::model::PlayerId;

pub const LINEUP_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubOutcome {
    Applied,
    NotOnCourt,
    AlreadyOnCourt,
    Full,
}

/// Players on court for one team, in five fixed slots.
///
/// A player keeps their slot while on court and an incoming player takes the
/// first empty slot, so positional output columns stay stable. Equality is
/// set equality and ignores slot order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Lineup {
    slots: [Option<PlayerId>; LINEUP_SIZE],
}

impl Lineup {
    /// Seats the first five ids; any extra are ignored.
    #[must_use]
    pub fn from_players(players: &[PlayerId]) -> Self {
        let mut lineup = Self::default();
        for id in players.iter().take(LINEUP_SIZE) {
            lineup.add(*id);
        }
        lineup
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<PlayerId>; LINEUP_SIZE] {
        &self.slots
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.slots.iter().flatten().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.slots.contains(&Some(id))
    }

    pub fn remove(&mut self, id: PlayerId) -> SubOutcome {
        match self.slots.iter_mut().find(|s| **s == Some(id)) {
            Some(slot) => {
                *slot = None;
                SubOutcome::Applied
            }
            None => SubOutcome::NotOnCourt,
        }
    }

    pub fn add(&mut self, id: PlayerId) -> SubOutcome {
        if self.contains(id) {
            return SubOutcome::AlreadyOnCourt;
        }
        match self.slots.iter_mut().find(|s| s.is_none()) {
            Some(slot) => {
                *slot = Some(id);
                SubOutcome::Applied
            }
            None => SubOutcome::Full,
        }
    }

    /// Sorted player ids; two lineups with the same signature are the same unit.
    #[must_use]
    pub fn signature(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self.players().collect();
        ids.sort_unstable();
        ids
    }
}

impl PartialEq for Lineup {
    fn eq(&self, other: &Self) -> bool {
        self.signature() == other.signature()
    }
}

impl Eq for Lineup {}
