use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Port with ID {0} not found")]
    NotFound(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl PortError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

pub type Result<T> = std::result::Result<T, PortError>;

impl From<reqwest::Error> for PortError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}

impl From<std::io::Error> for PortError {
    fn from(err: std::io::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}
