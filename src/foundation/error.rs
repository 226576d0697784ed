/// Result alias used across the crate.
pub type BackdropResult<T> = Result<T, BackdropError>;

/// Errors raised while assembling, configuring or driving a backdrop.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    /// Programmer error in how the backdrop was assembled or configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Config or saved state could not be read or written as JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failure raised by an activation listener.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackdropError {
    /// Build a [`BackdropError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`BackdropError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this is a [`BackdropError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
