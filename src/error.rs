use thiserror::Error;

#[derive(Error, Debug)]
pub enum AllotmentError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Source error in {path}: {message}")]
    Source { path: String, message: String },
    #[error("CSV error: {0}")]
    Csv(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, AllotmentError>;

// Helper conversions
impl From<config::ConfigError> for AllotmentError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<csv::Error> for AllotmentError {
    fn from(e: csv::Error) -> Self { Self::Csv(e.to_string()) }
}
impl From<std::io::Error> for AllotmentError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
