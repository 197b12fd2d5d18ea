//! Bounding boxes.
//!
//! A bounding box is serialized as `[west, south, east, north]`, or as
//! `[west, south, low, east, north, high]` when both corners carry an
//! altitude.

use crate::codec::{GeoJsonCodec, impl_serde_via_codec};
use crate::config::Config;
use crate::error::{GeoJsonError, Result};
use crate::json;
use crate::position::Position;
use serde_json::Value;

const ARRAY_SIZE_2D: usize = 4;
const ARRAY_SIZE_3D: usize = 6;

/// An axis-aligned box given by its southwest and northeast corners.
///
/// # Examples
///
/// ```
/// use spatio_geojson::{BoundingBox, GeoJsonCodec, Position};
///
/// let bbox = BoundingBox::new(Position::new(-74.05, 40.68), Position::new(-73.9, 40.88));
/// assert_eq!(bbox.to_json_string(), "[-74.05,40.68,-73.9,40.88]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    southwest: Position,
    northeast: Position,
}

impl BoundingBox {
    pub fn new(southwest: Position, northeast: Position) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    /// Create a 2D bounding box from its edges.
    pub fn from_coords(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::new(Position::new(west, south), Position::new(east, north))
    }

    #[inline]
    pub fn southwest(&self) -> Position {
        self.southwest
    }

    #[inline]
    pub fn northeast(&self) -> Position {
        self.northeast
    }

    /// True when both corners carry an altitude.
    pub fn is_3d(&self) -> bool {
        self.southwest.has_altitude() && self.northeast.has_altitude()
    }

    /// True when the corners agree on altitude presence.
    ///
    /// An inconsistent box encodes as 2D, losing the one altitude it has.
    pub fn is_consistent(&self) -> bool {
        self.southwest.has_altitude() == self.northeast.has_altitude()
    }

    /// The envelope of `positions`, or `None` when there are none.
    ///
    /// The altitude range is included only if every position has an altitude.
    pub fn from_positions<'a, I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut iter = positions.into_iter();
        let first = iter.next()?;

        let (mut west, mut south, altitude) = first.components();
        let (mut east, mut north) = (west, south);
        let mut alt_range = altitude.map(|a| (a, a));

        for position in iter {
            west = west.min(position.longitude());
            east = east.max(position.longitude());
            south = south.min(position.latitude());
            north = north.max(position.latitude());

            alt_range = match (alt_range, position.altitude()) {
                (Some((low, high)), Some(a)) => Some((low.min(a), high.max(a))),
                _ => None,
            };
        }

        Some(match alt_range {
            Some((low, high)) => Self::new(
                Position::with_altitude(west, south, low),
                Position::with_altitude(east, north, high),
            ),
            None => Self::from_coords(west, south, east, north),
        })
    }
}

impl GeoJsonCodec for BoundingBox {
    fn to_json(&self) -> Value {
        let include_altitudes = self.is_3d();
        let mut array = Vec::with_capacity(ARRAY_SIZE_3D);

        for corner in [self.southwest, self.northeast] {
            array.push(Value::from(corner.longitude()));
            array.push(Value::from(corner.latitude()));
            if include_altitudes && let Some(altitude) = corner.altitude() {
                array.push(Value::from(altitude));
            }
        }

        Value::Array(array)
    }

    fn from_json_with(value: &Value, _config: &Config) -> Result<Self> {
        let array = json::as_array(value, "bbox")?;
        let number = |index: usize| json::as_f64(&array[index], "bbox");

        match array.len() {
            ARRAY_SIZE_2D => Ok(Self::from_coords(
                number(0)?,
                number(1)?,
                number(2)?,
                number(3)?,
            )),
            ARRAY_SIZE_3D => Ok(Self::new(
                Position::with_altitude(number(0)?, number(1)?, number(2)?),
                Position::with_altitude(number(3)?, number(4)?, number(5)?),
            )),
            len => Err(GeoJsonError::MalformedBoundingBox { len }),
        }
    }
}

impl_serde_via_codec!(BoundingBox);

/// Encode an optional bbox into the `bbox` member of `object`.
pub(crate) fn write_bbox(object: &mut serde_json::Map<String, Value>, bbox: Option<&BoundingBox>) {
    if let Some(bbox) = bbox {
        object.insert(json::BBOX.to_string(), bbox.to_json());
    }
}

/// Decode the optional `bbox` member of `object`.
pub(crate) fn read_bbox(
    object: &serde_json::Map<String, Value>,
    config: &Config,
) -> Result<Option<BoundingBox>> {
    json::member(object, json::BBOX)
        .map(|value| BoundingBox::from_json_with(value, config))
        .transpose()
}
