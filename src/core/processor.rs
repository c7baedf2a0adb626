use crate::domain::ports::Processor;
use crate::utils::error::{AsterError, Result};

const PREFIX: &str = "Processed: ";

/// Stateless; every call is independent, so one value can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputProcessor;

impl InputProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Processor for InputProcessor {
    fn process(&self, input: Option<&str>) -> Result<String> {
        match input {
            Some(data) if !data.is_empty() => Ok(format!("{}{}", PREFIX, data)),
            _ => Err(AsterError::InvalidArgument {
                message: "input_data cannot be empty".to_string(),
            }),
        }
    }
}

/// Returns `"Processed: <input>"`, or `InvalidArgument` for empty or absent input.
pub fn process(input: Option<&str>) -> Result<String> {
    InputProcessor.process(input)
}
