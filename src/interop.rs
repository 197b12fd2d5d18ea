//! Conversions to and from the `geojson` crate.
//!
//! Both directions go through the JSON value tree, so anything one side
//! cannot represent surfaces as [`GeoJsonError::Interop`] (or as the usual
//! decode error when coming back into this crate). Foreign members carried
//! by `geojson` values are dropped.

use crate::codec::GeoJsonCodec;
use crate::document::GeoJson;
use crate::error::{GeoJsonError, Result};
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::Geometry;

macro_rules! impl_geojson_interop {
    ($($ty:ident),*) => {$(
        impl TryFrom<&$ty> for geojson::$ty {
            type Error = GeoJsonError;

            fn try_from(value: &$ty) -> Result<Self> {
                geojson::$ty::try_from(value.to_json())
                    .map_err(|e| GeoJsonError::Interop(e.to_string()))
            }
        }

        impl TryFrom<$ty> for geojson::$ty {
            type Error = GeoJsonError;

            fn try_from(value: $ty) -> Result<Self> {
                geojson::$ty::try_from(&value)
            }
        }

        impl TryFrom<&geojson::$ty> for $ty {
            type Error = GeoJsonError;

            fn try_from(value: &geojson::$ty) -> Result<Self> {
                $ty::from_json(&serde_json::to_value(value)?)
            }
        }

        impl TryFrom<geojson::$ty> for $ty {
            type Error = GeoJsonError;

            fn try_from(value: geojson::$ty) -> Result<Self> {
                $ty::try_from(&value)
            }
        }
    )*};
}

impl_geojson_interop!(Geometry, Feature, FeatureCollection, GeoJson);
