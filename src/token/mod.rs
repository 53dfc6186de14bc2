//! Random tokens of arbitrary length that can be encoded to and from binary, text and SQL
//! database values. The text form is unpadded URL-safe base64, so it can be placed in a URL
//! path or query without escaping.

use std::{fmt, str::FromStr};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{TryRngCore, rngs::OsRng};

use crate::error::AppResult;

mod error;
pub use error::{TokenError, TokenResult};

mod scalar;
pub use scalar::{LoadScalar, ScalarValue, ToScalar};

mod serialize;
mod sql;

/// An owned sequence of random bytes.
///
/// Every `load_*` method replaces the whole contents on success and leaves the token
/// untouched on failure.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Token(Vec<u8>);

impl Token {
    /// An empty token, usually as a target for one of the `load_*` methods.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns a token of `length` bytes read from the operating system's CSPRNG.
    pub fn generate(length: usize) -> TokenResult<Self> {
        let mut bytes = vec![0u8; length];
        OsRng.try_fill_bytes(&mut bytes)?;

        tracing::trace!(length, "generated token");
        Ok(Self(bytes))
    }

    /// Generates a token using the length from the loaded configuration.
    pub async fn generate_default() -> AppResult<Self> {
        let config = crate::Config::get_or_init(false).await?;
        let token = Self::generate(config.token().length())?;
        Ok(token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns a copy of the raw bytes.
    #[inline]
    pub fn to_binary(&self) -> Vec<u8> {
        self.0.clone()
    }

    /// Replaces the contents with a copy of `data`. Any input is accepted.
    pub fn load_binary(&mut self, data: &[u8]) {
        self.0 = data.to_vec();
    }

    /// Encodes the bytes as unpadded URL-safe base64.
    pub fn to_text(&self) -> String {
        URL_SAFE_NO_PAD.encode(&self.0)
    }

    /// Decodes unpadded URL-safe base64 into this token.
    pub fn load_text(&mut self, text: &str) -> TokenResult<()> {
        let bytes = URL_SAFE_NO_PAD.decode(text).map_err(|e| {
            tracing::debug!("rejected token text: {}", e);
            TokenError::from(e)
        })?;

        self.0 = bytes;
        Ok(())
    }
}

impl From<Vec<u8>> for Token {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Token {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Token> for Vec<u8> {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> TokenResult<Self> {
        let mut token = Token::new();
        token.load_text(s)?;
        Ok(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// tokens are secrets, keep them out of debug logs
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({} bytes)", self.0.len())
    }
}
