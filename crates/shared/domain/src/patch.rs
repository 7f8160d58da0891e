//! Nullable fields of partial updates.
//!
//! Used with `#[serde(default, deserialize_with = "crate::patch::nullable")]` on an
//! `Option<Option<T>>`: an absent field stays `None`, `null` becomes `Some(None)` and
//! clears the stored value, anything else becomes `Some(Some(value))`.

use serde::{Deserialize, Deserializer};

/// # Errors
/// Propagates the error of `T`'s deserializer.
#[allow(clippy::option_option)]
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
