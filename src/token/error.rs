use thiserror::Error;

pub type TokenResult<T> = std::result::Result<T, TokenError>;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("random source error: {0}")]
    RandomSource(#[from] rand::rand_core::OsError),
    #[error("decode error: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("invalid scalar type: expected bytes, found {found}")]
    InvalidScalarType { found: String },
}
