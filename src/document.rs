//! Top-level GeoJSON documents.

use crate::codec::{GeoJsonCodec, impl_serde_via_codec};
use crate::config::Config;
use crate::error::Result;
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::Geometry;
use crate::json;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Any GeoJSON object that may appear at the root of a document.
///
/// # Examples
///
/// ```
/// use spatio_geojson::GeoJson;
///
/// let doc: GeoJson = r#"{"type":"Feature","geometry":null,"properties":{}}"#.parse()?;
/// assert!(matches!(doc, GeoJson::Feature(_)));
/// assert_eq!(doc.to_string(), r#"{"type":"Feature","geometry":null,"properties":{}}"#);
/// # Ok::<(), spatio_geojson::GeoJsonError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl GeoJson {
    pub fn as_geometry(&self) -> Option<&Geometry> {
        match self {
            Self::Geometry(geometry) => Some(geometry),
            _ => None,
        }
    }

    pub fn as_feature(&self) -> Option<&Feature> {
        match self {
            Self::Feature(feature) => Some(feature),
            _ => None,
        }
    }

    pub fn as_feature_collection(&self) -> Option<&FeatureCollection> {
        match self {
            Self::FeatureCollection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Encode into indented JSON text.
    pub fn to_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

impl GeoJsonCodec for GeoJson {
    fn to_json(&self) -> Value {
        match self {
            Self::Geometry(geometry) => geometry.to_json(),
            Self::Feature(feature) => feature.to_json(),
            Self::FeatureCollection(collection) => collection.to_json(),
        }
    }

    fn from_json_with(value: &Value, config: &Config) -> Result<Self> {
        let object = json::as_object(value, "GeoJSON object")?;
        match json::discriminator(object) {
            Some("Feature") => Feature::from_json_with(value, config).map(Self::Feature),
            Some("FeatureCollection") => {
                FeatureCollection::from_json_with(value, config).map(Self::FeatureCollection)
            }
            _ => Geometry::from_json_with(value, config).map(Self::Geometry),
        }
    }
}

impl_serde_via_codec!(GeoJson);

impl FromStr for GeoJson {
    type Err = crate::error::GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

impl fmt::Display for GeoJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<Geometry> for GeoJson {
    fn from(geometry: Geometry) -> Self {
        Self::Geometry(geometry)
    }
}

impl From<Feature> for GeoJson {
    fn from(feature: Feature) -> Self {
        Self::Feature(feature)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(collection: FeatureCollection) -> Self {
        Self::FeatureCollection(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoJsonError;
    use crate::geometry::{GeometryType, Point};
    use crate::position::Position;

    #[test]
    fn test_parse_each_kind() {
        let doc: GeoJson = r#"{"type":"Point","coordinates":[1,2]}"#.parse().unwrap();
        assert_eq!(
            doc.as_geometry().map(Geometry::geometry_type),
            Some(GeometryType::Point)
        );

        let doc: GeoJson = r#"{"type":"FeatureCollection","features":[]}"#.parse().unwrap();
        assert!(doc.as_feature_collection().unwrap().is_empty());
        assert!(doc.as_feature().is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "not json".parse::<GeoJson>(),
            Err(GeoJsonError::Json(_))
        ));
        assert!(matches!(
            r#"{"type":"Topology"}"#.parse::<GeoJson>(),
            Err(GeoJsonError::UnsupportedGeometryType(Some(_)))
        ));
        assert!(matches!(
            "[1, 2]".parse::<GeoJson>(),
            Err(GeoJsonError::UnexpectedJson {
                expected: "object",
                ..
            })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let doc = GeoJson::from(Geometry::from(Point::new(Position::new(1.5, -2.0))));
        let text = doc.to_string();
        assert_eq!(text, r#"{"type":"Point","coordinates":[1.5,-2.0]}"#);
        assert_eq!(text.parse::<GeoJson>().unwrap(), doc);
    }

    #[test]
    fn test_pretty_output() {
        let doc = GeoJson::from(Feature::new(None));
        let pretty = doc.to_string_pretty().unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(pretty.parse::<GeoJson>().unwrap(), doc);
    }
}
