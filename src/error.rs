//! Application-boundary error type.
//!
//! Domain modules report typed errors (`LoadFailure`, `CatalogError`,
//! `PredictionFailure`); the app layer converts them into `AppError` with a
//! stable exit code:
//!
//! - 2: invalid input (bad flag value, out-of-catalog selection)
//! - 3: artifacts unavailable (missing or corrupt files)
//! - 4: prediction failure inside the transform chain

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
