use super::*;

fn north_cap(cm: f64) -> Cap {
    Cap::new(UnitVec3 { x: 0.0, y: 0.0, z: 1.0 }, cm).unwrap()
}

fn v(ra: f64, dec: f64) -> UnitVec3 {
    UnitVec3::from_radec_deg(ra, dec)
}

#[test]
fn positive_cm_is_a_disc_around_the_axis() {
    // cm = 1 - cos(30 deg): everything north of dec = 60
    let cap = north_cap(1.0 - 30f64.to_radians().cos());
    assert!(cap.contains(v(0.0, 90.0)));
    assert!(cap.contains(v(123.0, 61.0)));
    assert!(!cap.contains(v(123.0, 59.0)));
}

#[test]
fn negative_cm_is_the_complement() {
    let cap = north_cap(-(1.0 - 30f64.to_radians().cos()));
    assert!(!cap.contains(v(0.0, 90.0)));
    assert!(!cap.contains(v(123.0, 61.0)));
    assert!(cap.contains(v(123.0, 59.0)));
}

#[test]
fn zero_cm_contains_nothing_and_two_covers_everything() {
    let empty = north_cap(0.0);
    let full = north_cap(2.0);
    for (ra, dec) in [(0.0, 90.0), (10.0, 0.0), (200.0, -89.0)] {
        assert!(!empty.contains(v(ra, dec)));
        assert!(full.contains(v(ra, dec)));
    }
}

#[test]
fn cap_rejects_non_unit_axis() {
    assert!(Cap::new(UnitVec3 { x: 0.0, y: 0.0, z: 1.1 }, 0.5).is_err());
    assert!(Cap::new(UnitVec3 { x: 0.0, y: 0.0, z: 1.0 }, f64::NAN).is_err());
}

#[test]
fn polygon_is_the_intersection_of_its_caps() {
    // dec > 0 and ra within 90 deg of ra = 0
    let north = north_cap(1.0);
    let east = Cap::new(UnitVec3 { x: 1.0, y: 0.0, z: 0.0 }, 1.0).unwrap();
    let poly = Polygon::new(0, 1.0, vec![north, east]);

    assert!(poly.contains(v(10.0, 10.0)));
    assert!(poly.contains(v(350.0, 10.0)));
    assert!(!poly.contains(v(180.0, 10.0)));
    assert!(!poly.contains(v(10.0, -10.0)));

    let whole_sky = Polygon::new(1, 1.0, vec![]);
    assert!(whole_sky.contains(v(180.0, -45.0)));
}

#[test]
fn mask_is_the_union_and_reports_first_polygon() {
    let north = Polygon::new(10, 0.5, vec![north_cap(1.0)]);
    let south = Polygon::new(
        20,
        0.0,
        vec![Cap::new(UnitVec3 { x: 0.0, y: 0.0, z: -1.0 }, 1.0).unwrap()],
    );
    let mask = MangleMask::new(vec![north, south]);

    assert_eq!(mask.polygon_index(0.0, 45.0).unwrap(), Some(0));
    assert_eq!(mask.polygon_index(0.0, -45.0).unwrap(), Some(1));
    assert_eq!(mask.polygon_index(0.0, 0.0).unwrap(), None);

    assert_eq!(mask.weight(0.0, 45.0).unwrap(), 0.5);
    assert_eq!(mask.weight(0.0, 0.0).unwrap(), 0.0);

    // zero weight polygons still count as contained
    assert!(mask.contains(0.0, -45.0).unwrap());
    assert!(!mask.contains(0.0, 0.0).unwrap());
}

#[test]
fn non_finite_queries_fail() {
    let mask = MangleMask::new(vec![Polygon::new(0, 1.0, vec![])]);
    assert!(matches!(
        mask.contains(f64::NAN, 0.0),
        Err(MaskError::OracleFailure(_))
    ));
}

#[test]
fn from_str_parses() {
    let mask: MangleMask = "polygon 0 ( 1 caps, 1 weight):\n 0 0 1 1\n".parse().unwrap();
    assert!(mask.contains(0.0, 30.0).unwrap());
    assert!(!mask.contains(0.0, -30.0).unwrap());
}

#[test]
fn open_reports_missing_file() {
    let err = MangleMask::open(Path::new("target/does-not-exist.ply")).unwrap_err();
    assert!(err.to_string().contains("read mangle file"), "{err}");
}
