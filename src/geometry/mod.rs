//! The seven RFC 7946 geometry types.
//!
//! Every variant is an immutable value with an optional bounding box.
//! Constructors enforce the structural invariants (line strings need two
//! positions, rings must be closed and hold at least four), so a value that
//! exists can always be encoded and decoded back unchanged.

pub mod codec;

use crate::bbox::BoundingBox;
use crate::error::{GeoJsonError, Result};
use crate::position::Position;
use std::fmt;
use std::str::FromStr;

/// The `type` discriminator of a geometry object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    pub const ALL: [GeometryType; 7] = [
        Self::Point,
        Self::MultiPoint,
        Self::LineString,
        Self::MultiLineString,
        Self::Polygon,
        Self::MultiPolygon,
        Self::GeometryCollection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GeoJsonError::UnsupportedGeometryType(Some(s.to_string())))
    }
}

/// A single position.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coordinates: Position,
    bbox: Option<BoundingBox>,
}

impl Point {
    pub fn new(coordinates: Position) -> Self {
        Self {
            coordinates,
            bbox: None,
        }
    }

    #[inline]
    pub fn coordinates(&self) -> Position {
        self.coordinates
    }
}

/// Any number of unconnected positions.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    coordinates: Vec<Position>,
    bbox: Option<BoundingBox>,
}

impl MultiPoint {
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self {
            coordinates,
            bbox: None,
        }
    }

    #[inline]
    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }
}

/// A connected path of two or more positions.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coordinates: Vec<Position>,
    bbox: Option<BoundingBox>,
}

impl LineString {
    pub const MIN_POSITIONS: usize = 2;

    /// Fails with `InsufficientPoints` for fewer than two positions.
    pub fn new(coordinates: Vec<Position>) -> Result<Self> {
        if coordinates.len() < Self::MIN_POSITIONS {
            return Err(GeoJsonError::InsufficientPoints {
                kind: "LineString",
                required: Self::MIN_POSITIONS,
                actual: coordinates.len(),
            });
        }

        Ok(Self {
            coordinates,
            bbox: None,
        })
    }

    #[inline]
    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }
}

/// Several line strings.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    bbox: Option<BoundingBox>,
}

impl MultiLineString {
    /// Bounding boxes of the members are dropped; only their coordinates
    /// belong to the multi geometry.
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self {
            line_strings: line_strings.into_iter().map(LineString::without_bbox).collect(),
            bbox: None,
        }
    }

    #[inline]
    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }
}

/// A closed loop of at least four positions whose first and last are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing {
    coordinates: Vec<Position>,
}

impl LinearRing {
    pub const MIN_POSITIONS: usize = 4;

    /// Fails with `UnclosedRing` when the endpoints differ and with
    /// `InsufficientPoints` when fewer than four positions are given.
    pub fn new(coordinates: Vec<Position>) -> Result<Self> {
        if let (Some(first), Some(last)) = (coordinates.first(), coordinates.last())
            && first != last
        {
            return Err(GeoJsonError::UnclosedRing {
                first: *first,
                last: *last,
            });
        }

        if coordinates.len() < Self::MIN_POSITIONS {
            return Err(GeoJsonError::InsufficientPoints {
                kind: "LinearRing",
                required: Self::MIN_POSITIONS,
                actual: coordinates.len(),
            });
        }

        Ok(Self { coordinates })
    }

    /// Close `coordinates` by repeating the first position if needed, then
    /// validate as [`LinearRing::new`].
    pub fn closing(mut coordinates: Vec<Position>) -> Result<Self> {
        if let (Some(&first), Some(&last)) = (coordinates.first(), coordinates.last())
            && first != last
        {
            coordinates.push(first);
        }
        Self::new(coordinates)
    }

    #[inline]
    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }
}

/// An exterior ring followed by any number of holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LinearRing>,
    bbox: Option<BoundingBox>,
}

impl Polygon {
    /// The first ring is the exterior; the rest are holes. No check is made
    /// that holes lie inside the exterior.
    pub fn new(rings: Vec<LinearRing>) -> Self {
        Self { rings, bbox: None }
    }

    #[inline]
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or_default()
    }
}

/// Several polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    bbox: Option<BoundingBox>,
}

impl MultiPolygon {
    /// Bounding boxes of the members are dropped.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons: polygons.into_iter().map(Polygon::without_bbox).collect(),
            bbox: None,
        }
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

/// A heterogeneous, possibly nested, list of geometries.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    bbox: Option<BoundingBox>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            bbox: None,
        }
    }

    #[inline]
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

macro_rules! impl_bbox_accessors {
    ($($ty:ident),*) => {$(
        impl $ty {
            #[inline]
            pub fn bbox(&self) -> Option<&BoundingBox> {
                self.bbox.as_ref()
            }

            pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
                self.bbox = Some(bbox);
                self
            }

            pub fn without_bbox(mut self) -> Self {
                self.bbox = None;
                self
            }

            /// The envelope of every position in this geometry.
            pub fn compute_bbox(&self) -> Option<BoundingBox> {
                BoundingBox::from_positions(self.positions())
            }
        }
    )*};
}

impl_bbox_accessors!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection
);

impl Point {
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        std::iter::once(&self.coordinates)
    }
}

impl MultiPoint {
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.coordinates.iter()
    }
}

impl LineString {
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.coordinates.iter()
    }
}

impl MultiLineString {
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.line_strings.iter().flat_map(LineString::positions)
    }
}

impl LinearRing {
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.coordinates.iter()
    }
}

impl Polygon {
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.rings.iter().flat_map(LinearRing::positions)
    }
}

impl MultiPolygon {
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.polygons.iter().flat_map(Polygon::positions)
    }
}

impl GeometryCollection {
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        Box::new(self.geometries.iter().flat_map(Geometry::positions))
    }
}

/// Any GeoJSON geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::LineString(_) => GeometryType::LineString,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
            Self::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        match self {
            Self::Point(g) => g.bbox(),
            Self::MultiPoint(g) => g.bbox(),
            Self::LineString(g) => g.bbox(),
            Self::MultiLineString(g) => g.bbox(),
            Self::Polygon(g) => g.bbox(),
            Self::MultiPolygon(g) => g.bbox(),
            Self::GeometryCollection(g) => g.bbox(),
        }
    }

    pub fn with_bbox(self, bbox: BoundingBox) -> Self {
        match self {
            Self::Point(g) => Self::Point(g.with_bbox(bbox)),
            Self::MultiPoint(g) => Self::MultiPoint(g.with_bbox(bbox)),
            Self::LineString(g) => Self::LineString(g.with_bbox(bbox)),
            Self::MultiLineString(g) => Self::MultiLineString(g.with_bbox(bbox)),
            Self::Polygon(g) => Self::Polygon(g.with_bbox(bbox)),
            Self::MultiPolygon(g) => Self::MultiPolygon(g.with_bbox(bbox)),
            Self::GeometryCollection(g) => Self::GeometryCollection(g.with_bbox(bbox)),
        }
    }

    /// Every position of the geometry, depth first.
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Self::Point(g) => Box::new(g.positions()),
            Self::MultiPoint(g) => Box::new(g.positions()),
            Self::LineString(g) => Box::new(g.positions()),
            Self::MultiLineString(g) => Box::new(g.positions()),
            Self::Polygon(g) => Box::new(g.positions()),
            Self::MultiPolygon(g) => Box::new(g.positions()),
            Self::GeometryCollection(g) => g.positions(),
        }
    }

    pub fn compute_bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_positions(self.positions())
    }
}

macro_rules! impl_from_variant {
    ($($ty:ident),*) => {$(
        impl From<$ty> for Geometry {
            fn from(geometry: $ty) -> Self {
                Self::$ty(geometry)
            }
        }
    )*};
}

impl_from_variant!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection
);
