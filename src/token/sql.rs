//! `sqlx` integration. A token is stored as the driver's byte type (`BYTEA` on Postgres,
//! `BLOB` on SQLite); any other column type is rejected on read.

use sqlx::{Database, Decode, Encode, Type, TypeInfo, ValueRef, encode::IsNull, error::BoxDynError};

use super::{Token, TokenError};

impl<DB: Database> Type<DB> for Token
where
    Vec<u8>: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        <Vec<u8> as Type<DB>>::type_info()
    }

    // the column type is checked in `Decode`, so a mismatch surfaces as a `TokenError`
    fn compatible(_ty: &DB::TypeInfo) -> bool {
        true
    }
}

impl<'q, DB: Database> Encode<'q, DB> for Token
where
    Vec<u8>: Encode<'q, DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <Vec<u8> as Encode<'q, DB>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r, DB: Database> Decode<'r, DB> for Token
where
    Vec<u8>: Decode<'r, DB> + Type<DB>,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Err(Box::new(TokenError::InvalidScalarType {
                found: "null".to_string(),
            }));
        }

        // strict, drivers that would coerce text into bytes are not followed
        let mismatch = {
            let ty = value.type_info();
            (*ty != <Vec<u8> as Type<DB>>::type_info()).then(|| ty.name().to_lowercase())
        };
        if let Some(found) = mismatch {
            tracing::debug!("rejected column of type {}", found);
            return Err(Box::new(TokenError::InvalidScalarType { found }));
        }

        let bytes = <Vec<u8> as Decode<'r, DB>>::decode(value)?;
        Ok(Token(bytes))
    }
}
