//! Features and feature collections.
//!
//! A feature pairs an optional geometry with an identifier and a bag of
//! properties. The properties are passed through untouched.

use crate::bbox::{BoundingBox, read_bbox, write_bbox};
use crate::codec::{GeoJsonCodec, impl_serde_via_codec};
use crate::config::Config;
use crate::error::{GeoJsonError, Result};
use crate::geometry::Geometry;
use crate::json;
use serde_json::{Map, Number, Value};
use std::fmt;

const FEATURE: &str = "Feature";
const FEATURE_COLLECTION: &str = "FeatureCollection";
const GEOMETRY: &str = "geometry";
const ID: &str = "id";
const PROPERTIES: &str = "properties";
const FEATURES: &str = "features";

/// Feature properties, in insertion order.
pub type Properties = Map<String, Value>;

/// A feature identifier: either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureId {
    String(String),
    Number(Number),
}

impl FeatureId {
    fn to_json(&self) -> Value {
        match self {
            Self::String(id) => Value::String(id.clone()),
            Self::Number(id) => Value::Number(id.clone()),
        }
    }

    fn from_json(value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(id) => Ok(Some(Self::String(id.clone()))),
            Value::Number(id) => Ok(Some(Self::Number(id.clone()))),
            other => Err(GeoJsonError::InvalidFeatureId(json::kind(other))),
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(id) => f.write_str(id),
            Self::Number(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        Self::String(id.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(id: String) -> Self {
        Self::String(id)
    }
}

impl From<i64> for FeatureId {
    fn from(id: i64) -> Self {
        Self::Number(id.into())
    }
}

impl From<u64> for FeatureId {
    fn from(id: u64) -> Self {
        Self::Number(id.into())
    }
}

impl From<Number> for FeatureId {
    fn from(id: Number) -> Self {
        Self::Number(id)
    }
}

/// A spatially bounded thing: a geometry plus properties.
///
/// # Examples
///
/// ```
/// use spatio_geojson::{Feature, GeoJsonCodec, Point, Position};
///
/// let feature = Feature::new(Some(Point::new(Position::new(-74.006, 40.7128)).into()))
///     .with_id("nyc")
///     .with_property("name", "New York");
///
/// assert_eq!(feature.string_property("name"), Some("New York"));
/// assert!(feature.to_json_string().starts_with(r#"{"type":"Feature","geometry":"#));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    geometry: Option<Geometry>,
    id: Option<FeatureId>,
    properties: Properties,
    bbox: Option<BoundingBox>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry>) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    pub fn from_parts(
        geometry: Option<Geometry>,
        id: Option<FeatureId>,
        properties: Properties,
        bbox: Option<BoundingBox>,
    ) -> Self {
        Self {
            geometry,
            id,
            properties,
            bbox,
        }
    }

    #[inline]
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn into_geometry(self) -> Option<Geometry> {
        self.geometry
    }

    #[inline]
    pub fn id(&self) -> Option<&FeatureId> {
        self.id.as_ref()
    }

    #[inline]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    #[inline]
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    pub fn with_id(mut self, id: impl Into<FeatureId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn contains_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(Value::as_str)
    }

    pub fn number_property(&self, key: &str) -> Option<f64> {
        self.property(key).and_then(Value::as_f64)
    }

    pub fn bool_property(&self, key: &str) -> Option<bool> {
        self.property(key).and_then(Value::as_bool)
    }

    /// The envelope of the feature's geometry, if it has one.
    pub fn compute_bbox(&self) -> Option<BoundingBox> {
        self.geometry.as_ref().and_then(Geometry::compute_bbox)
    }
}

/// Check the `type` discriminator of a feature or feature collection.
fn expect_type(object: &Map<String, Value>, expected: &'static str) -> Result<()> {
    match json::discriminator(object) {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(GeoJsonError::TypeMismatch {
            expected,
            found: found.to_string(),
        }),
        None => Err(GeoJsonError::MissingMember(json::TYPE)),
    }
}

impl GeoJsonCodec for Feature {
    fn to_json(&self) -> Value {
        let mut object = json::typed_object(FEATURE);
        object.insert(
            GEOMETRY.to_string(),
            self.geometry.as_ref().map_or(Value::Null, Geometry::to_json),
        );
        if let Some(id) = &self.id {
            object.insert(ID.to_string(), id.to_json());
        }
        object.insert(
            PROPERTIES.to_string(),
            Value::Object(self.properties.clone()),
        );
        write_bbox(&mut object, self.bbox.as_ref());
        Value::Object(object)
    }

    fn from_json_with(value: &Value, config: &Config) -> Result<Self> {
        let object = json::as_object(value, "feature")?;
        expect_type(object, FEATURE)?;

        let geometry = json::member(object, GEOMETRY)
            .map(|geometry| Geometry::from_json_with(geometry, config))
            .transpose()?;

        let id = match object.get(ID) {
            Some(id) => FeatureId::from_json(id)?,
            None => None,
        };

        let properties = match json::member(object, PROPERTIES) {
            Some(properties) => json::as_object(properties, PROPERTIES)?.clone(),
            None => Properties::new(),
        };

        Ok(Self {
            geometry,
            id,
            properties,
            bbox: read_bbox(object, config)?,
        })
    }
}

/// An ordered list of features.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    features: Vec<Feature>,
    bbox: Option<BoundingBox>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            bbox: None,
        }
    }

    #[inline]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }

    #[inline]
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// The envelope of every feature geometry in the collection.
    pub fn compute_bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_positions(
            self.features
                .iter()
                .filter_map(Feature::geometry)
                .flat_map(Geometry::positions),
        )
    }
}

impl GeoJsonCodec for FeatureCollection {
    fn to_json(&self) -> Value {
        let mut object = json::typed_object(FEATURE_COLLECTION);
        object.insert(
            FEATURES.to_string(),
            Value::Array(self.features.iter().map(Feature::to_json).collect()),
        );
        write_bbox(&mut object, self.bbox.as_ref());
        Value::Object(object)
    }

    fn from_json_with(value: &Value, config: &Config) -> Result<Self> {
        let object = json::as_object(value, "feature collection")?;
        expect_type(object, FEATURE_COLLECTION)?;

        let features = json::as_array(json::required(object, FEATURES)?, FEATURES)?
            .iter()
            .map(|feature| Feature::from_json_with(feature, config))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            features,
            bbox: read_bbox(object, config)?,
        })
    }
}

impl_serde_via_codec!(Feature, FeatureCollection);

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
