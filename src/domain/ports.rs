use crate::utils::error::Result;

pub trait Processor: Send + Sync {
    /// Validate and transform one input. `None` stands for an absent value.
    fn process(&self, input: Option<&str>) -> Result<String>;
}
