//! The position, the fundamental geometry construct.
//!
//! In JSON a position is an array of two or three numbers in the order
//! `[longitude, latitude, altitude?]`.

use crate::codec::{GeoJsonCodec, impl_serde_via_codec};
use crate::config::Config;
use crate::error::{GeoJsonError, Result};
use crate::json;
use serde_json::Value;

/// A longitude/latitude pair with an optional altitude.
///
/// # Examples
///
/// ```
/// use spatio_geojson::{GeoJsonCodec, Position};
///
/// let position = Position::new(-75.0, 45.0);
/// assert_eq!(position.to_json_string(), "[-75.0,45.0]");
///
/// let (lng, lat, alt) = Position::with_altitude(-75.0, 45.0, 100.0).components();
/// assert_eq!((lng, lat, alt), (-75.0, 45.0, Some(100.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    longitude: f64,
    latitude: f64,
    altitude: Option<f64>,
}

impl Position {
    /// Create a 2D position.
    #[inline]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self::from_parts(longitude, latitude, None)
    }

    /// Create a 3D position.
    #[inline]
    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self::from_parts(longitude, latitude, Some(altitude))
    }

    #[inline]
    pub fn from_parts(longitude: f64, latitude: f64, altitude: Option<f64>) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    /// Longitude (or easting for projected coordinates).
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude (or northing for projected coordinates).
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    #[inline]
    pub fn has_altitude(&self) -> bool {
        self.altitude.is_some()
    }

    /// The components in array order: `(longitude, latitude, altitude)`.
    #[inline]
    pub fn components(&self) -> (f64, f64, Option<f64>) {
        (self.longitude, self.latitude, self.altitude)
    }

    /// The same position without its altitude.
    #[inline]
    pub fn to_2d(&self) -> Self {
        Self::new(self.longitude, self.latitude)
    }
}

impl GeoJsonCodec for Position {
    fn to_json(&self) -> Value {
        let mut array = Vec::with_capacity(3);
        array.push(Value::from(self.longitude));
        array.push(Value::from(self.latitude));
        if let Some(altitude) = self.altitude {
            array.push(Value::from(altitude));
        }
        Value::Array(array)
    }

    fn from_json_with(value: &Value, config: &Config) -> Result<Self> {
        let array = json::as_array(value, "position")?;

        if array.len() < 2 || (array.len() > 3 && !config.ignore_extra_position_elements) {
            return Err(GeoJsonError::MalformedCoordinates { len: array.len() });
        }

        let longitude = json::as_f64(&array[0], "longitude")?;
        let latitude = json::as_f64(&array[1], "latitude")?;
        let altitude = array
            .get(2)
            .map(|value| json::as_f64(value, "altitude"))
            .transpose()?;

        Ok(Self::from_parts(longitude, latitude, altitude))
    }
}

impl_serde_via_codec!(Position);

impl From<(f64, f64)> for Position {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((longitude, latitude, altitude): (f64, f64, f64)) -> Self {
        Self::with_altitude(longitude, latitude, altitude)
    }
}

impl From<[f64; 2]> for Position {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<[f64; 3]> for Position {
    fn from([longitude, latitude, altitude]: [f64; 3]) -> Self {
        Self::with_altitude(longitude, latitude, altitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_position_creation() {
        let position = Position::new(-74.0060, 40.7128);
        assert_eq!(position.longitude(), -74.0060);
        assert_eq!(position.latitude(), 40.7128);
        assert_eq!(position.altitude(), None);
        assert!(!position.has_altitude());

        let position = Position::with_altitude(-74.0060, 40.7128, 12.5);
        assert_eq!(position.altitude(), Some(12.5));
        assert_eq!(position.to_2d(), Position::new(-74.0060, 40.7128));
    }

    #[test]
    fn test_position_from_tuples() {
        assert_eq!(Position::from((1.0, 2.0)), Position::new(1.0, 2.0));
        assert_eq!(
            Position::from([1.0, 2.0, 3.0]),
            Position::with_altitude(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_encode_2d_omits_altitude() {
        let json = Position::new(-75.0, 45.0).to_json();
        assert_eq!(json, json!([-75.0, 45.0]));
        assert_eq!(json.to_string(), "[-75.0,45.0]");
    }

    #[test]
    fn test_encode_3d() {
        let json = Position::with_altitude(-75.0, 45.0, 100.0).to_json();
        assert_eq!(json.to_string(), "[-75.0,45.0,100.0]");
    }

    #[test]
    fn test_decode_too_short() {
        let result = Position::from_json(&json!([1.0]));
        assert!(matches!(
            result,
            Err(GeoJsonError::MalformedCoordinates { len: 1 })
        ));

        let result = Position::from_json(&json!([]));
        assert!(matches!(
            result,
            Err(GeoJsonError::MalformedCoordinates { len: 0 })
        ));
    }

    #[test]
    fn test_decode_2d() {
        let position = Position::from_json(&json!([1.0, 2.0])).unwrap();
        assert_eq!(position, Position::new(1.0, 2.0));
        assert_eq!(position.altitude(), None);
    }

    #[test]
    fn test_decode_ignores_extra_elements() {
        let position = Position::from_json(&json!([1.0, 2.0, 3.0, 999.0])).unwrap();
        assert_eq!(position, Position::with_altitude(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_decode_rejects_extra_elements_when_configured() {
        let config = Config::default().with_ignore_extra_position_elements(false);
        let result = Position::from_json_with(&json!([1.0, 2.0, 3.0, 999.0]), &config);
        assert!(matches!(
            result,
            Err(GeoJsonError::MalformedCoordinates { len: 4 })
        ));
    }

    #[test]
    fn test_decode_integers() {
        let position = Position::from_json(&json!([0, -1])).unwrap();
        assert_eq!(position, Position::new(0.0, -1.0));
    }

    #[test]
    fn test_decode_non_numeric() {
        let result = Position::from_json(&json!([1.0, "north"]));
        assert!(matches!(
            result,
            Err(GeoJsonError::UnexpectedJson {
                context: "latitude",
                ..
            })
        ));

        let result = Position::from_json(&json!({"lng": 1.0}));
        assert!(matches!(
            result,
            Err(GeoJsonError::UnexpectedJson {
                expected: "array",
                ..
            })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = Position::with_altitude(-74.006, 40.7128, 3.0);
        let text = serde_json::to_string(&original).unwrap();
        assert_eq!(text, "[-74.006,40.7128,3.0]");
        let parsed: Position = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_text_roundtrip_is_exact() {
        let position = Position::new(19.048899982094078, 19.048899982094078);
        let text = position.to_json_string();
        assert_eq!(text, "[19.048899982094078,19.048899982094078]");
        assert_eq!(Position::from_json_str(&text).unwrap(), position);
    }

    #[test]
    fn test_large_integral_values_use_exponent() {
        // Past 1e16 the shortest form is exponent notation without a '.'.
        let position = Position::new(1e16, 45.0);
        let text = position.to_json_string();
        assert!(text.starts_with("[1e"), "{}", text);
        assert!(text.ends_with(",45.0]"), "{}", text);
        assert_eq!(Position::from_json_str(&text).unwrap(), position);
    }
}
