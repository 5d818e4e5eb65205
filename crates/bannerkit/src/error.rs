use thiserror::Error;

#[derive(Debug, Error)]
pub enum BannerError {
    #[error("font '{0}' not found")]
    FontNotFound(String),
    #[error("font parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, BannerError>;
