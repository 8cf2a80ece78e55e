use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like a missing field.
///
/// Pair with `#[serde(default)]` so both absent and null values fall back
/// to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
