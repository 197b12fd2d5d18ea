//! Conversions between the GeoJSON model and `geo` types.
//!
//! `geo` is strictly 2D, so altitudes are dropped on the way out and absent
//! on the way back. Conversions into `geo` are infallible. Conversions out
//! of `geo` go through the validating constructors and return
//! [`GeoJsonError`] when `geo` holds something GeoJSON cannot, such as a
//! single-coordinate line string.

use crate::bbox::BoundingBox;
use crate::error::{GeoJsonError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::position::Position;

impl From<Position> for geo::Coord<f64> {
    fn from(position: Position) -> Self {
        geo::Coord {
            x: position.longitude(),
            y: position.latitude(),
        }
    }
}

impl From<geo::Coord<f64>> for Position {
    fn from(coord: geo::Coord<f64>) -> Self {
        Position::new(coord.x, coord.y)
    }
}

impl From<geo::Point<f64>> for Position {
    fn from(point: geo::Point<f64>) -> Self {
        point.0.into()
    }
}

fn coords(positions: &[Position]) -> Vec<geo::Coord<f64>> {
    positions.iter().map(|p| (*p).into()).collect()
}

fn positions(line: geo::LineString<f64>) -> Vec<Position> {
    line.0.into_iter().map(Position::from).collect()
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        geo::Point(point.coordinates().into())
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Point::new(point.into())
    }
}

impl From<MultiPoint> for geo::MultiPoint<f64> {
    fn from(multi_point: MultiPoint) -> Self {
        geo::MultiPoint(
            multi_point
                .coordinates()
                .iter()
                .map(|p| geo::Point((*p).into()))
                .collect(),
        )
    }
}

impl From<geo::MultiPoint<f64>> for MultiPoint {
    fn from(multi_point: geo::MultiPoint<f64>) -> Self {
        MultiPoint::new(multi_point.0.into_iter().map(Position::from).collect())
    }
}

impl From<LineString> for geo::LineString<f64> {
    fn from(line_string: LineString) -> Self {
        geo::LineString(coords(line_string.coordinates()))
    }
}

impl TryFrom<geo::LineString<f64>> for LineString {
    type Error = GeoJsonError;

    fn try_from(line_string: geo::LineString<f64>) -> Result<Self> {
        LineString::new(positions(line_string))
    }
}

impl From<LinearRing> for geo::LineString<f64> {
    fn from(ring: LinearRing) -> Self {
        geo::LineString(coords(ring.coordinates()))
    }
}

/// Closes the ring if `geo` left it open.
impl TryFrom<geo::LineString<f64>> for LinearRing {
    type Error = GeoJsonError;

    fn try_from(line_string: geo::LineString<f64>) -> Result<Self> {
        LinearRing::closing(positions(line_string))
    }
}

impl From<MultiLineString> for geo::MultiLineString<f64> {
    fn from(multi_line_string: MultiLineString) -> Self {
        geo::MultiLineString(
            multi_line_string
                .line_strings()
                .iter()
                .map(|line| geo::LineString(coords(line.coordinates())))
                .collect(),
        )
    }
}

impl TryFrom<geo::MultiLineString<f64>> for MultiLineString {
    type Error = GeoJsonError;

    fn try_from(multi_line_string: geo::MultiLineString<f64>) -> Result<Self> {
        let line_strings = multi_line_string
            .0
            .into_iter()
            .map(LineString::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiLineString::new(line_strings))
    }
}

/// A polygon without rings becomes a `geo` polygon with an empty exterior.
impl From<Polygon> for geo::Polygon<f64> {
    fn from(polygon: Polygon) -> Self {
        let exterior = polygon
            .exterior()
            .map(|ring| geo::LineString(coords(ring.coordinates())))
            .unwrap_or_else(|| geo::LineString(Vec::new()));
        let interiors = polygon
            .interiors()
            .iter()
            .map(|ring| geo::LineString(coords(ring.coordinates())))
            .collect();
        geo::Polygon::new(exterior, interiors)
    }
}

impl TryFrom<geo::Polygon<f64>> for Polygon {
    type Error = GeoJsonError;

    fn try_from(polygon: geo::Polygon<f64>) -> Result<Self> {
        let (exterior, interiors) = polygon.into_inner();
        if exterior.0.is_empty() && interiors.is_empty() {
            return Ok(Polygon::new(Vec::new()));
        }

        let rings = std::iter::once(exterior)
            .chain(interiors)
            .map(LinearRing::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new(rings))
    }
}

impl From<MultiPolygon> for geo::MultiPolygon<f64> {
    fn from(multi_polygon: MultiPolygon) -> Self {
        geo::MultiPolygon(
            multi_polygon
                .polygons()
                .iter()
                .cloned()
                .map(geo::Polygon::from)
                .collect(),
        )
    }
}

impl TryFrom<geo::MultiPolygon<f64>> for MultiPolygon {
    type Error = GeoJsonError;

    fn try_from(multi_polygon: geo::MultiPolygon<f64>) -> Result<Self> {
        let polygons = multi_polygon
            .0
            .into_iter()
            .map(Polygon::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiPolygon::new(polygons))
    }
}

impl From<GeometryCollection> for geo::GeometryCollection<f64> {
    fn from(collection: GeometryCollection) -> Self {
        geo::GeometryCollection(
            collection
                .geometries()
                .iter()
                .cloned()
                .map(geo::Geometry::from)
                .collect(),
        )
    }
}

impl TryFrom<geo::GeometryCollection<f64>> for GeometryCollection {
    type Error = GeoJsonError;

    fn try_from(collection: geo::GeometryCollection<f64>) -> Result<Self> {
        let geometries = collection
            .0
            .into_iter()
            .map(Geometry::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(GeometryCollection::new(geometries))
    }
}

impl From<Geometry> for geo::Geometry<f64> {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Point(g) => geo::Geometry::Point(g.into()),
            Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(g.into()),
            Geometry::LineString(g) => geo::Geometry::LineString(g.into()),
            Geometry::MultiLineString(g) => geo::Geometry::MultiLineString(g.into()),
            Geometry::Polygon(g) => geo::Geometry::Polygon(g.into()),
            Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(g.into()),
            Geometry::GeometryCollection(g) => geo::Geometry::GeometryCollection(g.into()),
        }
    }
}

/// `Line` maps to a two-position `LineString`. `Rect` and `Triangle` map to
/// single-ring polygons.
impl TryFrom<geo::Geometry<f64>> for Geometry {
    type Error = GeoJsonError;

    fn try_from(geometry: geo::Geometry<f64>) -> Result<Self> {
        Ok(match geometry {
            geo::Geometry::Point(g) => Point::from(g).into(),
            geo::Geometry::Line(line) => {
                LineString::new(vec![line.start.into(), line.end.into()])?.into()
            }
            geo::Geometry::LineString(g) => LineString::try_from(g)?.into(),
            geo::Geometry::Polygon(g) => Polygon::try_from(g)?.into(),
            geo::Geometry::MultiPoint(g) => MultiPoint::from(g).into(),
            geo::Geometry::MultiLineString(g) => MultiLineString::try_from(g)?.into(),
            geo::Geometry::MultiPolygon(g) => MultiPolygon::try_from(g)?.into(),
            geo::Geometry::GeometryCollection(g) => GeometryCollection::try_from(g)?.into(),
            geo::Geometry::Rect(rect) => Polygon::try_from(rect.to_polygon())?.into(),
            geo::Geometry::Triangle(triangle) => {
                Polygon::try_from(triangle.to_polygon())?.into()
            }
        })
    }
}

/// Altitudes are dropped. A box crossing the antimeridian is normalized by
/// `geo::Rect`, so west and east swap.
impl From<BoundingBox> for geo::Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        geo::Rect::new(
            geo::Coord::from(bbox.southwest()),
            geo::Coord::from(bbox.northeast()),
        )
    }
}

impl From<geo::Rect<f64>> for BoundingBox {
    fn from(rect: geo::Rect<f64>) -> Self {
        BoundingBox::new(rect.min().into(), rect.max().into())
    }
}
