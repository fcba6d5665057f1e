pub type LaminaResult<T> = Result<T, LaminaError>;

#[derive(thiserror::Error, Debug)]
pub enum LaminaError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("init error: {0}")]
    Init(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaminaError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            LaminaError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(LaminaError::init("x").to_string().contains("init error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = LaminaError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
