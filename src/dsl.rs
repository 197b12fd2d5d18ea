//! Builders for constructing geometries and features incrementally.
//!
//! Each builder accumulates its parts and is consumed by `build`, which is
//! the only way to obtain the finished value. Builders that can be misused
//! (line strings, rings) validate at `build` or on the offending call, so an
//! invalid geometry never leaves this module.
//!
//! ```rust
//! use spatio_geojson::dsl::{feature_collection, line_string, point_3d, polygon};
//!
//! let simple_line = line_string().point(45.0, 45.0).point(0.0, 0.0).build()?;
//!
//! let simple_polygon = polygon()
//!     .ring_with(|ring| ring.line_string(&simple_line)?.point(12.0, 12.0)?.complete())?
//!     .build();
//!
//! let collection = feature_collection()
//!     .feature_with(|f| f.geometry(point_3d(-75.0, 45.0, 100.0)).id("point1"))
//!     .feature_with(|f| f.geometry(simple_polygon))
//!     .build();
//!
//! assert_eq!(collection.len(), 2);
//! # Ok::<(), spatio_geojson::GeoJsonError>(())
//! ```

use crate::bbox::BoundingBox;
use crate::error::{GeoJsonError, Result};
use crate::feature::{Feature, FeatureCollection, FeatureId, Properties};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::position::Position;
use serde_json::Value;

/// A 2D point geometry.
pub fn point(longitude: f64, latitude: f64) -> Point {
    Point::new(Position::new(longitude, latitude))
}

/// A 3D point geometry.
pub fn point_3d(longitude: f64, latitude: f64, altitude: f64) -> Point {
    Point::new(Position::with_altitude(longitude, latitude, altitude))
}

pub fn multi_point() -> MultiPointBuilder {
    MultiPointBuilder::default()
}

pub fn line_string() -> LineStringBuilder {
    LineStringBuilder::default()
}

pub fn ring() -> RingBuilder {
    RingBuilder::default()
}

pub fn polygon() -> PolygonBuilder {
    PolygonBuilder::default()
}

pub fn multi_line_string() -> MultiLineStringBuilder {
    MultiLineStringBuilder::default()
}

pub fn multi_polygon() -> MultiPolygonBuilder {
    MultiPolygonBuilder::default()
}

pub fn geometry_collection() -> GeometryCollectionBuilder {
    GeometryCollectionBuilder::default()
}

pub fn feature() -> FeatureBuilder {
    FeatureBuilder::default()
}

pub fn feature_collection() -> FeatureCollectionBuilder {
    FeatureCollectionBuilder::default()
}

/// Builder for [`MultiPoint`].
#[derive(Debug, Clone, Default)]
pub struct MultiPointBuilder {
    positions: Vec<Position>,
    bbox: Option<BoundingBox>,
}

impl MultiPointBuilder {
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.positions.push(position.into());
        self
    }

    pub fn point(self, longitude: f64, latitude: f64) -> Self {
        self.position(Position::new(longitude, latitude))
    }

    pub fn point_3d(self, longitude: f64, latitude: f64, altitude: f64) -> Self {
        self.position(Position::with_altitude(longitude, latitude, altitude))
    }

    pub fn positions<I>(mut self, positions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Position>,
    {
        self.positions.extend(positions.into_iter().map(Into::into));
        self
    }

    pub fn bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn build(self) -> MultiPoint {
        let multi_point = MultiPoint::new(self.positions);
        match self.bbox {
            Some(bbox) => multi_point.with_bbox(bbox),
            None => multi_point,
        }
    }
}

/// Builder for [`LineString`]. Needs at least two positions by `build`.
#[derive(Debug, Clone, Default)]
pub struct LineStringBuilder {
    positions: Vec<Position>,
    bbox: Option<BoundingBox>,
}

impl LineStringBuilder {
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.positions.push(position.into());
        self
    }

    pub fn point(self, longitude: f64, latitude: f64) -> Self {
        self.position(Position::new(longitude, latitude))
    }

    pub fn point_3d(self, longitude: f64, latitude: f64, altitude: f64) -> Self {
        self.position(Position::with_altitude(longitude, latitude, altitude))
    }

    pub fn positions<I>(mut self, positions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Position>,
    {
        self.positions.extend(positions.into_iter().map(Into::into));
        self
    }

    pub fn bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Fails with `InsufficientPoints` for fewer than two positions.
    pub fn build(self) -> Result<LineString> {
        let line_string = LineString::new(self.positions)?;
        Ok(match self.bbox {
            Some(bbox) => line_string.with_bbox(bbox),
            None => line_string,
        })
    }
}

/// Builder for one [`LinearRing`] of a polygon.
///
/// `complete` closes the ring, repeating the first position if the last one
/// differs. A completed ring accepts no more positions and cannot be
/// completed again; both fail with `RingAlreadyClosed`.
#[derive(Debug, Clone, Default)]
pub struct RingBuilder {
    positions: Vec<Position>,
    closed: bool,
}

impl RingBuilder {
    pub fn position(mut self, position: impl Into<Position>) -> Result<Self> {
        if self.closed {
            return Err(GeoJsonError::RingAlreadyClosed);
        }
        self.positions.push(position.into());
        Ok(self)
    }

    pub fn point(self, longitude: f64, latitude: f64) -> Result<Self> {
        self.position(Position::new(longitude, latitude))
    }

    pub fn point_3d(self, longitude: f64, latitude: f64, altitude: f64) -> Result<Self> {
        self.position(Position::with_altitude(longitude, latitude, altitude))
    }

    pub fn positions<I>(mut self, positions: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Position>,
    {
        if self.closed {
            return Err(GeoJsonError::RingAlreadyClosed);
        }
        self.positions.extend(positions.into_iter().map(Into::into));
        Ok(self)
    }

    /// Append every position of `line_string`.
    pub fn line_string(self, line_string: &LineString) -> Result<Self> {
        self.positions(line_string.coordinates().iter().copied())
    }

    pub fn complete(mut self) -> Result<Self> {
        if self.closed {
            return Err(GeoJsonError::RingAlreadyClosed);
        }

        if let (Some(&first), Some(&last)) = (self.positions.first(), self.positions.last())
            && first != last
        {
            log::debug!("Closing ring by repeating its first position {:?}", first);
            self.positions.push(first);
        }

        self.closed = true;
        Ok(self)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Validate as [`LinearRing::new`]. The ring must have been completed,
    /// even if its positions already end where they start.
    pub fn build(self) -> Result<LinearRing> {
        if !self.closed
            && let (Some(&first), Some(&last)) = (self.positions.first(), self.positions.last())
        {
            return Err(GeoJsonError::UnclosedRing { first, last });
        }
        LinearRing::new(self.positions)
    }
}

/// Builder for [`Polygon`]. The first ring added is the exterior.
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    rings: Vec<LinearRing>,
    bbox: Option<BoundingBox>,
}

impl PolygonBuilder {
    pub fn linear_ring(mut self, ring: LinearRing) -> Self {
        self.rings.push(ring);
        self
    }

    pub fn ring(self, ring: RingBuilder) -> Result<Self> {
        Ok(self.linear_ring(ring.build()?))
    }

    /// Build a ring in a nested scope.
    pub fn ring_with<F>(self, scope: F) -> Result<Self>
    where
        F: FnOnce(RingBuilder) -> Result<RingBuilder>,
    {
        self.ring(scope(RingBuilder::default())?)
    }

    pub fn bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn build(self) -> Polygon {
        let polygon = Polygon::new(self.rings);
        match self.bbox {
            Some(bbox) => polygon.with_bbox(bbox),
            None => polygon,
        }
    }
}

/// Builder for [`MultiLineString`].
#[derive(Debug, Clone, Default)]
pub struct MultiLineStringBuilder {
    line_strings: Vec<LineString>,
    bbox: Option<BoundingBox>,
}

impl MultiLineStringBuilder {
    pub fn line_string(mut self, line_string: LineString) -> Self {
        self.line_strings.push(line_string);
        self
    }

    pub fn line_string_builder(self, builder: LineStringBuilder) -> Result<Self> {
        Ok(self.line_string(builder.build()?))
    }

    /// Build a line string in a nested scope.
    pub fn line_string_with<F>(self, scope: F) -> Result<Self>
    where
        F: FnOnce(LineStringBuilder) -> LineStringBuilder,
    {
        self.line_string_builder(scope(LineStringBuilder::default()))
    }

    pub fn bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn build(self) -> MultiLineString {
        let multi_line_string = MultiLineString::new(self.line_strings);
        match self.bbox {
            Some(bbox) => multi_line_string.with_bbox(bbox),
            None => multi_line_string,
        }
    }
}

/// Builder for [`MultiPolygon`].
#[derive(Debug, Clone, Default)]
pub struct MultiPolygonBuilder {
    polygons: Vec<Polygon>,
    bbox: Option<BoundingBox>,
}

impl MultiPolygonBuilder {
    pub fn polygon(mut self, polygon: Polygon) -> Self {
        self.polygons.push(polygon);
        self
    }

    /// Build a polygon in a nested scope.
    pub fn polygon_with<F>(self, scope: F) -> Result<Self>
    where
        F: FnOnce(PolygonBuilder) -> Result<PolygonBuilder>,
    {
        Ok(self.polygon(scope(PolygonBuilder::default())?.build()))
    }

    pub fn bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn build(self) -> MultiPolygon {
        let multi_polygon = MultiPolygon::new(self.polygons);
        match self.bbox {
            Some(bbox) => multi_polygon.with_bbox(bbox),
            None => multi_polygon,
        }
    }
}

/// Builder for [`GeometryCollection`].
#[derive(Debug, Clone, Default)]
pub struct GeometryCollectionBuilder {
    geometries: Vec<Geometry>,
    bbox: Option<BoundingBox>,
}

impl GeometryCollectionBuilder {
    pub fn geometry(mut self, geometry: impl Into<Geometry>) -> Self {
        self.geometries.push(geometry.into());
        self
    }

    pub fn bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn build(self) -> GeometryCollection {
        let collection = GeometryCollection::new(self.geometries);
        match self.bbox {
            Some(bbox) => collection.with_bbox(bbox),
            None => collection,
        }
    }
}

/// Builder for [`Feature`].
#[derive(Debug, Clone, Default)]
pub struct FeatureBuilder {
    geometry: Option<Geometry>,
    id: Option<FeatureId>,
    properties: Properties,
    bbox: Option<BoundingBox>,
}

impl FeatureBuilder {
    pub fn geometry(mut self, geometry: impl Into<Geometry>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    pub fn id(mut self, id: impl Into<FeatureId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn properties(mut self, properties: Properties) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn build(self) -> Feature {
        Feature::from_parts(self.geometry, self.id, self.properties, self.bbox)
    }
}

/// Builder for [`FeatureCollection`].
#[derive(Debug, Clone, Default)]
pub struct FeatureCollectionBuilder {
    features: Vec<Feature>,
    bbox: Option<BoundingBox>,
}

impl FeatureCollectionBuilder {
    pub fn feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Build a feature in a nested scope.
    pub fn feature_with<F>(self, scope: F) -> Self
    where
        F: FnOnce(FeatureBuilder) -> FeatureBuilder,
    {
        self.feature(scope(FeatureBuilder::default()).build())
    }

    pub fn bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn build(self) -> FeatureCollection {
        let collection = FeatureCollection::new(self.features);
        match self.bbox {
            Some(bbox) => collection.with_bbox(bbox),
            None => collection,
        }
    }
}
