pub mod anomaly;
pub mod event;
pub mod interval;
pub mod lineup;
pub mod payload;
pub mod roster;
pub mod types;

pub use anomaly::*;
pub use event::*;
pub use interval::*;
pub use lineup::*;
pub use roster::*;
pub use types::*;
