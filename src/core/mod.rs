pub mod processor;

pub use crate::domain::model::ProcessOutcome;
pub use crate::domain::ports::Processor;
pub use crate::utils::error::Result;
