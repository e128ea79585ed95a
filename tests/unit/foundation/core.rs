use super::*;

#[test]
fn checked_rejects_out_of_range_declination() {
    assert!(SkyCoord::checked(10.0, 90.0).is_ok());
    assert!(SkyCoord::checked(10.0, -90.0).is_ok());
    assert!(matches!(
        SkyCoord::checked(10.0, 90.5),
        Err(MaskError::InvalidConfig(_))
    ));
    assert!(SkyCoord::checked(f64::NAN, 0.0).is_err());
    assert!(SkyCoord::checked(0.0, f64::INFINITY).is_err());
}

#[test]
fn normalized_wraps_right_ascension() {
    assert_eq!(SkyCoord::new(-10.0, 5.0).normalized(), SkyCoord::new(350.0, 5.0));
    assert_eq!(SkyCoord::new(370.0, 5.0).normalized(), SkyCoord::new(10.0, 5.0));
    assert_eq!(SkyCoord::new(10.0, 5.0).normalized(), SkyCoord::new(10.0, 5.0));
}

#[test]
fn grid_shape_requires_positive_dimensions() {
    assert_eq!(GridShape::new(3, 2).unwrap().pixel_count(), 6);
    assert!(GridShape::new(0, 2).is_err());
    assert!(GridShape::new(2, 0).is_err());
}

#[test]
fn grid_shape_caps_total_pixel_count() {
    let edge = GridShape::new(65_536, 65_536).unwrap();
    assert_eq!(edge.pixel_count() as u64, GridShape::MAX_PIXELS);

    for (w, h) in [(65_536, 65_537), (u32::MAX, 2), (u32::MAX, u32::MAX)] {
        assert!(matches!(
            GridShape::new(w, h),
            Err(MaskError::InvalidConfig(_))
        ));
    }
}
