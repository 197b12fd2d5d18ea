use serde_json::json;
use spatio_geojson::dsl;
use spatio_geojson::prelude::*;
use std::io::Write;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test 1: Extreme coordinate values survive a round trip
#[test]
fn test_extreme_coordinates() {
    let corners = [
        Position::new(0.0, 90.0),
        Position::new(0.0, -90.0),
        Position::new(180.0, 0.0),
        Position::new(-180.0, 0.0),
        Position::with_altitude(1e-12, -1e-12, -11_034.0),
        Position::new(f64::MAX, f64::MIN),
    ];

    for position in corners {
        let decoded = Position::from_json(&position.to_json()).unwrap();
        assert_eq!(decoded, position);
    }
}

/// Test 2: Non-finite numbers cannot be represented in JSON
#[test]
fn test_non_finite_coordinates() {
    let point: Geometry = dsl::point(f64::NAN, 0.0).into();
    let encoded = point.to_json();
    assert_eq!(encoded["coordinates"], json!([null, 0.0]));

    assert!(matches!(
        Geometry::from_json(&encoded),
        Err(GeoJsonError::UnexpectedJson {
            expected: "number",
            found: "null",
            ..
        })
    ));
}

/// Test 3: Antimeridian bounding boxes keep west > east
#[test]
fn test_antimeridian_bbox() {
    let bbox = BoundingBox::from_coords(170.0, -10.0, -170.0, 10.0);
    let decoded = BoundingBox::from_json(&bbox.to_json()).unwrap();

    assert_eq!(decoded.southwest().longitude(), 170.0);
    assert_eq!(decoded.northeast().longitude(), -170.0);
}

/// Test 4: Empty containers are valid
#[test]
fn test_empty_containers() {
    let cases = [
        json!({"type": "MultiPoint", "coordinates": []}),
        json!({"type": "MultiLineString", "coordinates": []}),
        json!({"type": "Polygon", "coordinates": []}),
        json!({"type": "MultiPolygon", "coordinates": []}),
        json!({"type": "GeometryCollection", "geometries": []}),
    ];

    for value in cases {
        let geometry = Geometry::from_json(&value).unwrap();
        assert_eq!(geometry.positions().count(), 0);
        assert!(geometry.compute_bbox().is_none());
        assert_eq!(geometry.to_json(), value);
    }

    let collection = FeatureCollection::from_json(&json!({
        "type": "FeatureCollection",
        "features": []
    }))
    .unwrap();
    assert!(collection.is_empty());
}

/// Test 5: Line strings and rings below their minimum length
#[test]
fn test_short_line_and_ring() {
    assert!(matches!(
        Geometry::from_json(&json!({"type": "LineString", "coordinates": [[0, 0]]})),
        Err(GeoJsonError::InsufficientPoints {
            kind: "LineString",
            ..
        })
    ));

    assert!(matches!(
        Geometry::from_json(&json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, 1], [0, 0]]]
        })),
        Err(GeoJsonError::InsufficientPoints {
            kind: "LinearRing",
            ..
        })
    ));
}

/// Test 6: Ring closure compares every present component
#[test]
fn test_ring_closure_includes_altitude() {
    let value = json!({
        "type": "Polygon",
        "coordinates": [[[0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 0, 2]]]
    });
    assert!(matches!(
        Geometry::from_json(&value),
        Err(GeoJsonError::UnclosedRing { .. })
    ));
}

/// Test 7: Malformed documents
#[test]
fn test_malformed_documents() {
    let cases: [(&str, fn(&GeoJsonError) -> bool); 7] = [
        (r#"{"coordinates":[0,0]}"#, |e| {
            matches!(e, GeoJsonError::UnsupportedGeometryType(None))
        }),
        (r#"{"type":"Circle","coordinates":[0,0]}"#, |e| {
            matches!(e, GeoJsonError::UnsupportedGeometryType(Some(t)) if t == "Circle")
        }),
        (r#"{"type":"Point"}"#, |e| {
            matches!(e, GeoJsonError::MissingMember("coordinates"))
        }),
        (r#"{"type":"GeometryCollection"}"#, |e| {
            matches!(e, GeoJsonError::MissingMember("geometries"))
        }),
        (r#"{"type":"Point","coordinates":"0,0"}"#, |e| {
            matches!(e, GeoJsonError::UnexpectedJson { expected: "array", .. })
        }),
        (r#"{"type":"MultiPoint","coordinates":[[0]]}"#, |e| {
            matches!(e, GeoJsonError::MalformedCoordinates { len: 1 })
        }),
        (r#"{"type":"Point","coordinates":[0,0],"bbox":[0,0,1]}"#, |e| {
            matches!(e, GeoJsonError::MalformedBoundingBox { len: 3 })
        }),
    ];

    for (text, check) in cases {
        let err = Geometry::from_json_str(text).unwrap_err();
        assert!(check(&err), "{} produced {:?}", text, err);
        assert!(err.is_malformed_input(), "{} produced {:?}", text, err);
    }
}

/// Test 8: Decoding the wrong object kind
#[test]
fn test_object_kind_mismatch() {
    let point = json!({"type": "Point", "coordinates": [0, 0]});

    assert!(matches!(
        Feature::from_json(&point),
        Err(GeoJsonError::TypeMismatch { expected: "Feature", .. })
    ));
    assert!(matches!(
        LineString::from_json(&point),
        Err(GeoJsonError::TypeMismatch { .. })
    ));
    assert!(matches!(
        FeatureCollection::from_json(&json!({"type": "FeatureCollection"})),
        Err(GeoJsonError::MissingMember("features"))
    ));
}

/// Test 9: Deeply nested geometry collections
#[test]
fn test_deep_nesting() {
    let mut value = json!({"type": "Point", "coordinates": [0, 0]});
    for _ in 0..40 {
        value = json!({"type": "GeometryCollection", "geometries": [value]});
    }

    assert!(matches!(
        Geometry::from_json(&value),
        Err(GeoJsonError::NestingTooDeep(32))
    ));

    let config = Config::default().with_max_nesting_depth(64);
    let geometry = Geometry::from_json_with(&value, &config).unwrap();
    assert_eq!(geometry.positions().count(), 1);
}

/// Test 10: Large feature collection
#[test]
fn test_large_feature_collection() {
    let collection: FeatureCollection = (0..5_000)
        .map(|i| {
            let lon = -74.0 + i as f64 * 0.0001;
            let lat = 40.0 + i as f64 * 0.0001;
            dsl::feature()
                .geometry(dsl::point(lon, lat))
                .id(i as u64)
                .property("name", format!("site{}", i))
                .build()
        })
        .collect();

    let text = collection.to_json_string();
    let decoded = FeatureCollection::from_json_str(&text).expect("decode failed");

    assert_eq!(decoded.len(), 5_000);
    assert_eq!(decoded, collection);
}

/// Test 11: Builder auto-close logs and closes
#[test]
fn test_builder_auto_close() {
    init_logging();

    let ring = dsl::ring()
        .positions([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])
        .and_then(|r| r.complete())
        .and_then(|r| r.build())
        .unwrap();
    assert_eq!(ring.coordinates().len(), 4);
    assert_eq!(ring.coordinates().first(), ring.coordinates().last());
}

/// Test 12: Configuration loaded from disk
#[test]
fn test_config_from_file() {
    init_logging();

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"ring_closure": "auto_close", "max_nesting_depth": 4}}"#).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.ring_closure, RingClosure::AutoClose);
    assert_eq!(config.max_nesting_depth, 4);
    assert!(config.ignore_extra_position_elements);

    let mut bad = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(bad, r#"{{"max_nesting_depth": 0}}"#).unwrap();
    assert!(matches!(
        Config::from_file(bad.path()),
        Err(GeoJsonError::Config(_))
    ));

    let unknown = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    assert!(matches!(
        Config::from_file(unknown.path()),
        Err(GeoJsonError::Config(_))
    ));
}

/// Test 13: Pretty output decodes to the same document
#[test]
fn test_pretty_document() {
    let doc = GeoJson::from(
        dsl::feature_collection()
            .feature_with(|f| f.geometry(dsl::point(1.0, 2.0)).property("k", "v"))
            .build(),
    );

    let pretty = doc.to_string_pretty().unwrap();
    assert!(pretty.lines().count() > 1);
    assert_eq!(pretty.parse::<GeoJson>().unwrap(), doc);
}
