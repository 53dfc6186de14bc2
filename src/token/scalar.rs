use super::{Token, TokenError, TokenResult};

/// A single column value as seen by a generic persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Bytes(Vec<u8>),
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl ScalarValue {
    /// Name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ScalarValue::Bytes(_) => "bytes",
            ScalarValue::Text(_) => "text",
            ScalarValue::Integer(_) => "integer",
            ScalarValue::Float(_) => "float",
            ScalarValue::Boolean(_) => "boolean",
            ScalarValue::Null => "null",
        }
    }
}

/// Produces a value for parameter binding.
pub trait ToScalar {
    fn to_scalar(&self) -> ScalarValue;
}

/// Consumes a value from row scanning, replacing the current contents.
pub trait LoadScalar {
    fn load_scalar(&mut self, value: &ScalarValue) -> TokenResult<()>;
}

impl ToScalar for Token {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        ScalarValue::Bytes(self.to_binary())
    }
}

impl LoadScalar for Token {
    fn load_scalar(&mut self, value: &ScalarValue) -> TokenResult<()> {
        match value {
            ScalarValue::Bytes(data) => {
                self.load_binary(data);
                Ok(())
            }
            other => {
                let err = TokenError::InvalidScalarType {
                    found: other.kind().to_string(),
                };
                tracing::debug!("rejected scalar value: {}", err);
                Err(err)
            }
        }
    }
}
