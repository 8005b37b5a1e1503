pub mod config;
pub mod error;
pub mod human_number;
pub mod interrupt;
pub mod progress;
pub mod reference_sort;
pub mod report;
pub mod run;
pub mod shuffle;

pub use config::RunConfig;
pub use error::ShotgunError;
pub use interrupt::StopFlag;
pub use run::{RunOutcome, ShotgunSort, Termination};
