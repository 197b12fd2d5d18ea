//! The encode/decode seam shared by every GeoJSON type in this crate.

use crate::config::Config;
use crate::error::Result;
use serde_json::Value;

/// Conversion between a GeoJSON type and the JSON value tree.
///
/// Decoding is a pure function of the input value and the [`Config`];
/// encoding never fails.
pub trait GeoJsonCodec: Sized {
    /// Encode into a JSON value.
    fn to_json(&self) -> Value;

    /// Decode from a JSON value using an explicit configuration.
    fn from_json_with(value: &Value, config: &Config) -> Result<Self>;

    /// Decode from a JSON value using the default configuration.
    fn from_json(value: &Value) -> Result<Self> {
        Self::from_json_with(value, &Config::default())
    }

    /// Parse JSON text and decode it.
    fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// Encode into compact JSON text.
    fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

/// Implements `Serialize`/`Deserialize` by going through [`GeoJsonCodec`].
macro_rules! impl_serde_via_codec {
    ($($ty:ty),* $(,)?) => {$(
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(
                    &$crate::codec::GeoJsonCodec::to_json(self),
                    serializer,
                )
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::codec::GeoJsonCodec>::from_json(&value)
                    .map_err(serde::de::Error::custom)
            }
        }
    )*};
}

pub(crate) use impl_serde_via_codec;
