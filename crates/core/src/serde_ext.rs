//! Serde helpers shared by the record crates.

use serde::{Deserialize, Deserializer};

/// Deserialize a clearable field of a partial update.
///
/// Pair with `#[serde(default)]`: a missing key stays `None` (leave the field
/// alone), an explicit `null` becomes `Some(None)` (clear it), and a value
/// becomes `Some(Some(v))` (set it).
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
