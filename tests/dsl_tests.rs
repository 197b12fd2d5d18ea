use spatio_geojson::dsl::{
    feature_collection, geometry_collection, line_string, multi_line_string, multi_point,
    multi_polygon, point_3d, polygon,
};
use spatio_geojson::{FeatureCollection, GeoJsonCodec, Position, Result};

const COLLECTION_JSON: &str = concat!(
    r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":"#,
    r#"[-75.0,45.0,100.0]},"id":"point1","properties":{"name":"Hello World"}},{"type":"Feature","geometry":"#,
    r#"{"type":"MultiPoint","coordinates":[[-75.0,45.0,100.0],[45.0,45.0],[0.0,0.0]]},"properties":{}},{"type":"Feature","#,
    r#""geometry":{"type":"LineString","coordinates":[[45.0,45.0],[0.0,0.0]]},"properties":{}},{"type":"Feature","#,
    r#""geometry":{"type":"MultiLineString","coordinates":[[[45.0,45.0],[0.0,0.0]],[[44.4,55.5],[55.5,66.6]]]},"#,
    r#""properties":{}},{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[45.0,45.0],[0.0,0.0],[12.0,12.0],"#,
    r#"[45.0,45.0]],[[4.0,4.0],[2.0,2.0],[3.0,3.0],[4.0,4.0]]]},"properties":{}},{"type":"Feature","#,
    r#""geometry":{"type":"MultiPolygon","coordinates":[[[[45.0,45.0],[0.0,0.0],[12.0,12.0],[45.0,45.0]],[[4.0,4.0],[2.0,2.0],"#,
    r#"[3.0,3.0],[4.0,4.0]]],[[[12.0,0.0],[0.0,12.0],[-12.0,0.0],[5.0,5.0],[12.0,0.0]]]]},"properties":{}},{"type":"Feature","#,
    r#""geometry":{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[-75.0,45.0,100.0]},"#,
    r#"{"type":"LineString","coordinates":[[45.0,45.0],[0.0,0.0]]},{"type":"Polygon","coordinates":[[[45.0,45.0],[0.0,0.0],"#,
    r#"[12.0,12.0],[45.0,45.0]],[[4.0,4.0],[2.0,2.0],[3.0,3.0],[4.0,4.0]]]}]},"properties":{}}]}"#,
);

fn build_collection() -> Result<FeatureCollection> {
    let simple_point = point_3d(-75.0, 45.0, 100.0);

    let simple_line = line_string()
        .position(Position::new(45.0, 45.0))
        .position(Position::new(0.0, 0.0))
        .build()?;

    let simple_polygon = polygon()
        .ring_with(|ring| ring.line_string(&simple_line)?.point(12.0, 12.0)?.complete())?
        .ring_with(|ring| {
            ring.point(4.0, 4.0)?
                .point(2.0, 2.0)?
                .point(3.0, 3.0)?
                .complete()
        })?
        .build();

    let multi_polygon = multi_polygon()
        .polygon(simple_polygon.clone())
        .polygon_with(|polygon| {
            polygon.ring_with(|ring| {
                ring.point(12.0, 0.0)?
                    .point(0.0, 12.0)?
                    .point(-12.0, 0.0)?
                    .point(5.0, 5.0)?
                    .complete()
            })
        })?
        .build();

    let multi_line_string = multi_line_string()
        .line_string(simple_line.clone())
        .line_string_with(|line| line.point(44.4, 55.5).point(55.5, 66.6))?
        .build();

    Ok(feature_collection()
        .feature_with(|f| {
            f.geometry(simple_point.clone())
                .id("point1")
                .property("name", "Hello World")
        })
        .feature_with(|f| {
            f.geometry(
                multi_point()
                    .position(simple_point.coordinates())
                    .position(Position::new(45.0, 45.0))
                    .position(Position::new(0.0, 0.0))
                    .build(),
            )
        })
        .feature_with(|f| f.geometry(simple_line.clone()))
        .feature_with(|f| f.geometry(multi_line_string))
        .feature_with(|f| f.geometry(simple_polygon.clone()))
        .feature_with(|f| f.geometry(multi_polygon))
        .feature_with(|f| {
            f.geometry(
                geometry_collection()
                    .geometry(simple_point)
                    .geometry(simple_line)
                    .geometry(simple_polygon)
                    .build(),
            )
        })
        .build())
}

#[test]
fn test_dsl_matches_decoded_collection() {
    let built = build_collection().expect("DSL construction failed");
    let decoded = FeatureCollection::from_json_str(COLLECTION_JSON).expect("decode failed");

    assert_eq!(decoded, built);
}

#[test]
fn test_dsl_encodes_to_expected_text() {
    let built = build_collection().expect("DSL construction failed");

    assert_eq!(built.to_json_string(), COLLECTION_JSON);
}

#[test]
fn test_dsl_collection_shape() {
    let built = build_collection().expect("DSL construction failed");
    let kinds: Vec<&str> = built
        .iter()
        .filter_map(|f| f.geometry())
        .map(|g| g.geometry_type().as_str())
        .collect();

    assert_eq!(
        kinds,
        [
            "Point",
            "MultiPoint",
            "LineString",
            "MultiLineString",
            "Polygon",
            "MultiPolygon",
            "GeometryCollection",
        ]
    );
    assert!(built.iter().skip(1).all(|f| f.id().is_none()));
}
