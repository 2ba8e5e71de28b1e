use serde::{Deserialize, Deserializer};

/// Decodes a field that may be sent as JSON `null`, leaving the zero value in place.
pub fn zero_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
