//! Conversions between the wrappers and `sqlx` database values.
//!
//! A `Null<T>` maps to the same SQL type as `T`. Decoding SQL `NULL` yields a null
//! wrapper; binding a null wrapper sends `NULL`.

use sqlx_core::database::Database;
use sqlx_core::decode::Decode;
use sqlx_core::encode::{Encode, IsNull};
use sqlx_core::error::BoxDynError;
use sqlx_core::types::Type;

use crate::null::Null;

impl<DB, T> Type<DB> for Null<T>
where
    DB: Database,
    T: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        <T as Type<DB>>::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        <T as Type<DB>>::compatible(ty)
    }
}

impl<'r, DB, T> Decode<'r, DB> for Null<T>
where
    DB: Database,
    T: Decode<'r, DB> + Default,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        <Option<T> as Decode<'r, DB>>::decode(value).map(Null::from)
    }
}

impl<'q, DB, T> Encode<'q, DB> for Null<T>
where
    DB: Database,
    T: Encode<'q, DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        if self.valid {
            <T as Encode<'q, DB>>::encode_by_ref(&self.value, buf)
        } else {
            Ok(IsNull::Yes)
        }
    }

    fn produces(&self) -> Option<DB::TypeInfo> {
        self.get().and_then(|value| <T as Encode<'q, DB>>::produces(value))
    }

    fn size_hint(&self) -> usize {
        self.get().map_or(0, |value| <T as Encode<'q, DB>>::size_hint(value))
    }
}
