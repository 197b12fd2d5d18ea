//! Error types for GeoJSON encoding, decoding and geometry construction.

use crate::position::Position;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoJsonError>;

/// Errors produced by the codec, the geometry constructors and the builders.
///
/// All variants are local failures; nothing in this crate retries or aborts
/// on its own.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// A position array held fewer than two numbers.
    #[error("malformed coordinates: a position needs 2 or 3 numbers, got {len}")]
    MalformedCoordinates { len: usize },

    /// A bounding box array was neither 4 nor 6 elements long.
    #[error("malformed bounding box: expected array of size 4 or 6, got array of size {len}")]
    MalformedBoundingBox { len: usize },

    /// The `type` member is absent or names no known geometry.
    #[error("unsupported geometry type: {}", .0.as_deref().unwrap_or("<missing>"))]
    UnsupportedGeometryType(Option<String>),

    /// A polygon ring does not end where it starts.
    #[error("unclosed ring: first position {first:?} differs from last position {last:?}")]
    UnclosedRing { first: Position, last: Position },

    #[error("insufficient points: {kind} requires at least {required} positions, got {actual}")]
    InsufficientPoints {
        kind: &'static str,
        required: usize,
        actual: usize,
    },

    /// A ring builder was appended to or completed after it was closed.
    #[error("ring already closed")]
    RingAlreadyClosed,

    #[error("expected {expected} for {context}, found {found}")]
    UnexpectedJson {
        expected: &'static str,
        found: &'static str,
        context: &'static str,
    },

    #[error("missing member `{0}`")]
    MissingMember(&'static str),

    /// The `type` discriminator is valid GeoJSON but not the object requested.
    #[error("expected GeoJSON object of type {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("geometry collections nested deeper than {0} levels")]
    NestingTooDeep(usize),

    #[error("invalid feature id: expected string or number, found {0}")]
    InvalidFeatureId(&'static str),

    #[error("JSON syntax error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("geojson interop error: {0}")]
    Interop(String),
}

impl GeoJsonError {
    /// True for errors caused by the shape or content of the input document,
    /// as opposed to builder misuse or configuration problems.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedCoordinates { .. }
                | Self::MalformedBoundingBox { .. }
                | Self::UnsupportedGeometryType(_)
                | Self::UnclosedRing { .. }
                | Self::InsufficientPoints { .. }
                | Self::UnexpectedJson { .. }
                | Self::MissingMember(_)
                | Self::TypeMismatch { .. }
                | Self::NestingTooDeep(_)
                | Self::InvalidFeatureId(_)
                | Self::Json(_)
        )
    }
}
