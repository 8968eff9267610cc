#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

pub type AppResult<T> = Result<T, AppError>;
