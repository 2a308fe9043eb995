use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("invalid scene parameter `{name}`: {reason}")]
    InvalidParam { name: &'static str, reason: String },
}

impl SceneError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SceneError::InvalidParam {
            name,
            reason: reason.into(),
        }
    }
}
