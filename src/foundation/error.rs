/// Convenience alias for results carrying [`ImagoError`].
pub type ImagoResult<T> = Result<T, ImagoError>;

/// Errors produced at the crate's boundary (scene parsing and validation).
///
/// Field evaluation itself is infallible; only constructing fields from
/// external descriptions can fail.
#[derive(thiserror::Error, Debug)]
pub enum ImagoError {
    /// A scene description violates a boundary invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A scene description failed to parse.
    #[error("scene parse error: {0}")]
    Serde(String),

    /// Any other error, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImagoError {
    /// Build a [`ImagoError::Validation`] from a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ImagoError::Serde`] from a message.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ImagoError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            ImagoError::serde("x")
                .to_string()
                .contains("scene parse error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ImagoError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
