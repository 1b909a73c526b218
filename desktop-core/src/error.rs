#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DesktopError {
    #[error("Unknown app: {0}")]
    UnknownApp(String),

    #[error("Invalid desktop config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        DesktopError::InvalidConfig(e.to_string())
    }
}
