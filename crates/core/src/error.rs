#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input was rejected. The message names the field path and the
    /// constraint it broke, e.g. `sets[0].steps: step_order must be ...`.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// The bare rejection text, without the `Validation failed:` prefix.
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation(msg) => msg,
        }
    }
}
