pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod nba;
    pub mod reconstruct;
    pub mod summary;
}
pub mod storage;

pub use controller::nba::{GameOutcome, GameSource, NbaClient, process_games};
pub use controller::reconstruct::{GameReconstruction, reconstruct_game};
pub use error::AppError;
