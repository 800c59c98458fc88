pub mod csv;
pub mod json;
pub mod sqlite;

use std::path::Path;

use tracing::{error, info};

use crate::args::OutputFormat;
use crate::controller::nba::GameOutcome;
use crate::controller::reconstruct::GameReconstruction;
use crate::error::AppError;

pub use self::csv::write_game_csv;
pub use self::json::write_game_json;
pub use self::sqlite::SqliteStore;

fn write_one(
    recon: &GameReconstruction,
    formats: &[OutputFormat],
    dir: &Path,
    store: &mut Option<&mut SqliteStore>,
) -> Result<(), AppError> {
    for format in formats {
        match format {
            OutputFormat::Csv => {
                let paths = write_game_csv(dir, recon)?;
                info!(game_id = %recon.game_id(), files = paths.len(), "wrote csv");
            }
            OutputFormat::Json => {
                let path = write_game_json(dir, recon)?;
                info!(game_id = %recon.game_id(), path = %path.display(), "wrote json");
            }
            OutputFormat::Sqlite => {
                if let Some(store) = store.as_deref_mut() {
                    store.store_game(recon)?;
                }
            }
        }
    }
    Ok(())
}

/// Writes every reconstructed game in each of `formats` and returns how many
/// games failed, either upstream or while writing. A write failure is logged
/// and the remaining games are still written.
pub fn write_outcomes(
    outcomes: &[GameOutcome],
    formats: &[OutputFormat],
    dir: &Path,
    mut store: Option<&mut SqliteStore>,
) -> usize {
    let mut failed = 0;
    for outcome in outcomes {
        let Ok(recon) = &outcome.result else {
            failed += 1;
            continue;
        };
        if let Err(e) = write_one(recon, formats, dir, &mut store) {
            error!(game_id = %outcome.game_id, error = %e, "could not write game");
            failed += 1;
        }
    }
    failed
}
