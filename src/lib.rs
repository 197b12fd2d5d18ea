//! GeoJSON (RFC 7946) data model, codec, and builder DSL.
//!
//! ```rust
//! use spatio_geojson::prelude::*;
//!
//! let feature = dsl::feature()
//!     .geometry(dsl::point_3d(-75.0, 45.0, 100.0))
//!     .id("point1")
//!     .property("name", "Hello World")
//!     .build();
//!
//! let text = feature.to_json_string();
//! assert_eq!(Feature::from_json_str(&text)?, feature);
//!
//! let doc: GeoJson = text.parse()?;
//! assert!(doc.as_feature().is_some());
//! # Ok::<(), spatio_geojson::GeoJsonError>(())
//! ```

pub mod bbox;
pub mod codec;
pub mod config;
pub mod conversions;
pub mod document;
pub mod dsl;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod position;

#[cfg(feature = "geojson")]
pub mod interop;

mod json;

pub use bbox::BoundingBox;
pub use codec::GeoJsonCodec;
pub use config::{Config, RingClosure};
pub use document::GeoJson;
pub use error::{GeoJsonError, Result};
pub use feature::{Feature, FeatureCollection, FeatureId, Properties};
pub use geometry::{
    Geometry, GeometryCollection, GeometryType, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
pub use position::Position;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeoJsonCodec, GeoJsonError, Result};

    pub use crate::{BoundingBox, Position};

    pub use crate::{
        Geometry, GeometryCollection, GeometryType, LineString, LinearRing, MultiLineString,
        MultiPoint, MultiPolygon, Point, Polygon,
    };

    pub use crate::{Feature, FeatureCollection, FeatureId, GeoJson, Properties};

    pub use crate::{Config, RingClosure};

    pub use crate::dsl;
}
