//! Encoding and decoding of geometry objects.
//!
//! A geometry object carries its `type` discriminator, then either a
//! `coordinates` member nested to the depth its type requires or, for a
//! collection, a `geometries` member; `bbox` is optional.

use super::{
    Geometry, GeometryCollection, GeometryType, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::bbox::{BoundingBox, read_bbox, write_bbox};
use crate::codec::{GeoJsonCodec, impl_serde_via_codec};
use crate::config::{Config, RingClosure};
use crate::error::{GeoJsonError, Result};
use crate::json;
use crate::position::Position;
use serde_json::Value;

const COORDINATES: &str = "coordinates";
const GEOMETRIES: &str = "geometries";

fn positions_to_json(positions: &[Position]) -> Value {
    Value::Array(positions.iter().map(Position::to_json).collect())
}

fn positions_from_json(
    value: &Value,
    config: &Config,
    context: &'static str,
) -> Result<Vec<Position>> {
    json::as_array(value, context)?
        .iter()
        .map(|position| Position::from_json_with(position, config))
        .collect()
}

fn line_string_from_json(value: &Value, config: &Config) -> Result<LineString> {
    LineString::new(positions_from_json(value, config, "line string")?)
}

fn ring_from_json(value: &Value, config: &Config) -> Result<LinearRing> {
    let positions = positions_from_json(value, config, "linear ring")?;
    match config.ring_closure {
        RingClosure::Strict => LinearRing::new(positions),
        RingClosure::AutoClose => LinearRing::closing(positions),
    }
}

fn polygon_to_json(polygon: &Polygon) -> Value {
    Value::Array(
        polygon
            .rings()
            .iter()
            .map(|ring| positions_to_json(ring.coordinates()))
            .collect(),
    )
}

fn polygon_from_json(value: &Value, config: &Config) -> Result<Polygon> {
    let rings = json::as_array(value, "polygon")?
        .iter()
        .map(|ring| ring_from_json(ring, config))
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(rings))
}

/// The member name and nested-array value holding a geometry's contents.
fn contents(geometry: &Geometry) -> (&'static str, Value) {
    match geometry {
        Geometry::Point(g) => g.contents(),
        Geometry::MultiPoint(g) => g.contents(),
        Geometry::LineString(g) => g.contents(),
        Geometry::MultiLineString(g) => g.contents(),
        Geometry::Polygon(g) => g.contents(),
        Geometry::MultiPolygon(g) => g.contents(),
        Geometry::GeometryCollection(g) => g.contents(),
    }
}

fn encode_parts(
    kind: GeometryType,
    member: &str,
    value: Value,
    bbox: Option<&BoundingBox>,
) -> Value {
    let mut object = json::typed_object(kind.as_str());
    object.insert(member.to_string(), value);
    write_bbox(&mut object, bbox);
    Value::Object(object)
}

fn encode(geometry: &Geometry) -> Value {
    let (member, value) = contents(geometry);
    encode_parts(geometry.geometry_type(), member, value, geometry.bbox())
}

/// Decode a geometry nested inside `depth` enclosing collections.
fn decode(value: &Value, config: &Config, depth: usize) -> Result<Geometry> {
    let object = json::as_object(value, "geometry")?;
    let kind = match json::discriminator(object) {
        Some(name) => name.parse::<GeometryType>()?,
        None => return Err(GeoJsonError::UnsupportedGeometryType(None)),
    };

    let coordinates = || json::required(object, COORDINATES);

    let geometry: Geometry = match kind {
        GeometryType::Point => {
            Point::new(Position::from_json_with(coordinates()?, config)?).into()
        }
        GeometryType::MultiPoint => {
            MultiPoint::new(positions_from_json(coordinates()?, config, "multi point")?).into()
        }
        GeometryType::LineString => line_string_from_json(coordinates()?, config)?.into(),
        GeometryType::MultiLineString => {
            let line_strings = json::as_array(coordinates()?, "multi line string")?
                .iter()
                .map(|line| line_string_from_json(line, config))
                .collect::<Result<Vec<_>>>()?;
            MultiLineString::new(line_strings).into()
        }
        GeometryType::Polygon => polygon_from_json(coordinates()?, config)?.into(),
        GeometryType::MultiPolygon => {
            let polygons = json::as_array(coordinates()?, "multi polygon")?
                .iter()
                .map(|polygon| polygon_from_json(polygon, config))
                .collect::<Result<Vec<_>>>()?;
            MultiPolygon::new(polygons).into()
        }
        GeometryType::GeometryCollection => {
            if depth >= config.max_nesting_depth {
                return Err(GeoJsonError::NestingTooDeep(config.max_nesting_depth));
            }
            let geometries = json::as_array(json::required(object, GEOMETRIES)?, GEOMETRIES)?
                .iter()
                .map(|child| decode(child, config, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            GeometryCollection::new(geometries).into()
        }
    };

    Ok(match read_bbox(object, config)? {
        Some(bbox) => geometry.with_bbox(bbox),
        None => geometry,
    })
}

impl GeoJsonCodec for Geometry {
    fn to_json(&self) -> Value {
        encode(self)
    }

    fn from_json_with(value: &Value, config: &Config) -> Result<Self> {
        decode(value, config, 0)
    }
}

macro_rules! impl_variant_codec {
    ($($ty:ident),*) => {$(
        impl GeoJsonCodec for $ty {
            fn to_json(&self) -> Value {
                let (member, value) = self.contents();
                encode_parts(GeometryType::$ty, member, value, self.bbox())
            }

            fn from_json_with(value: &Value, config: &Config) -> Result<Self> {
                match Geometry::from_json_with(value, config)? {
                    Geometry::$ty(geometry) => Ok(geometry),
                    other => Err(GeoJsonError::TypeMismatch {
                        expected: GeometryType::$ty.as_str(),
                        found: other.geometry_type().to_string(),
                    }),
                }
            }
        }
    )*};
}

/// Per-variant contents, so variants encode without being wrapped in a [`Geometry`].
trait VariantContents {
    fn contents(&self) -> (&'static str, Value);
}

impl VariantContents for Point {
    fn contents(&self) -> (&'static str, Value) {
        (COORDINATES, self.coordinates().to_json())
    }
}

impl VariantContents for MultiPoint {
    fn contents(&self) -> (&'static str, Value) {
        (COORDINATES, positions_to_json(self.coordinates()))
    }
}

impl VariantContents for LineString {
    fn contents(&self) -> (&'static str, Value) {
        (COORDINATES, positions_to_json(self.coordinates()))
    }
}

impl VariantContents for MultiLineString {
    fn contents(&self) -> (&'static str, Value) {
        let lines = self
            .line_strings()
            .iter()
            .map(|line| positions_to_json(line.coordinates()))
            .collect();
        (COORDINATES, Value::Array(lines))
    }
}

impl VariantContents for Polygon {
    fn contents(&self) -> (&'static str, Value) {
        (COORDINATES, polygon_to_json(self))
    }
}

impl VariantContents for MultiPolygon {
    fn contents(&self) -> (&'static str, Value) {
        (
            COORDINATES,
            Value::Array(self.polygons().iter().map(polygon_to_json).collect()),
        )
    }
}

impl VariantContents for GeometryCollection {
    fn contents(&self) -> (&'static str, Value) {
        (
            GEOMETRIES,
            Value::Array(self.geometries().iter().map(encode).collect()),
        )
    }
}

impl_variant_codec!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection
);

impl_serde_via_codec!(
    Geometry,
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection
);
