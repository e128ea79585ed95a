use super::*;

fn proj(ra: f64, dec: f64, pixel_size: f64, nx: u32, ny: u32) -> TanProjection {
    TanProjection::new(ProjectionConfig::build(ra, dec, pixel_size, nx, ny).unwrap())
}

#[test]
fn grid_size_floors_and_adds_one() {
    let s = grid_size(2.0, 2.0, 1.0).unwrap();
    assert_eq!((s.width, s.height), (3, 3));

    let s = grid_size(2.5, 0.99, 1.0).unwrap();
    assert_eq!((s.width, s.height), (3, 1));

    let s = grid_size(0.0, 0.0, 0.1).unwrap();
    assert_eq!((s.width, s.height), (1, 1));

    // exactly divisible
    let s = grid_size(1.0, 0.5, 0.25).unwrap();
    assert_eq!((s.width, s.height), (5, 3));
}

#[test]
fn grid_size_rejects_bad_pixel_size() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            grid_size(1.0, 1.0, bad),
            Err(MaskError::InvalidConfig(_))
        ));
    }
}

#[test]
fn grid_size_rejects_negative_fov() {
    assert!(matches!(
        grid_size(-0.5, 1.0, 1.0),
        Err(MaskError::InvalidConfig(_))
    ));
    assert!(matches!(
        grid_size(1.0, -3.0, 1.0),
        Err(MaskError::InvalidConfig(_))
    ));
    assert!(grid_size(f64::NAN, 1.0, 1.0).is_err());
    assert!(grid_size(1e12, 1.0, 1e-3).is_err());
}

#[test]
fn grid_size_rejects_grids_too_large_to_allocate() {
    // each axis fits in u32, the product does not fit in memory
    let err = grid_size(360.0, 360.0, 1e-5).unwrap_err();
    assert!(matches!(err, MaskError::InvalidConfig(_)), "{err}");
    assert!(err.to_string().contains("exceeds"), "{err}");

    let s = grid_size(65_535.0, 65_535.0, 1.0).unwrap();
    assert_eq!((s.width, s.height), (65_536, 65_536));
}

#[test]
fn build_truncates_reference_pixel() {
    let cfg = ProjectionConfig::build(10.0, 20.0, 1.0, 3, 3).unwrap();
    assert_eq!(cfg.reference_pixel(), [1.0, 1.0]);

    let cfg = ProjectionConfig::build(10.0, 20.0, 1.0, 4, 5).unwrap();
    assert_eq!(cfg.reference_pixel(), [2.0, 2.0]);

    let cfg = ProjectionConfig::build(10.0, 20.0, 1.0, 1, 1).unwrap();
    assert_eq!(cfg.reference_pixel(), [0.0, 0.0]);
}

#[test]
fn build_validates_inputs() {
    assert!(ProjectionConfig::build(10.0, 20.0, 0.0, 3, 3).is_err());
    assert!(ProjectionConfig::build(10.0, 20.0, 1.0, 0, 3).is_err());
    assert!(ProjectionConfig::build(10.0, 95.0, 1.0, 3, 3).is_err());
}

#[test]
fn reference_pixel_maps_to_center_exactly() {
    let p = proj(10.0, 20.0, 1.0, 3, 3);
    assert_eq!(p.pixel_to_sky(1, 1), SkyCoord::new(10.0, 20.0));

    let p = proj(359.75, -89.0, 0.01, 100, 41);
    assert_eq!(p.pixel_to_sky(50, 20), SkyCoord::new(359.75, -89.0));
}

#[test]
fn negative_center_ra_is_normalized_everywhere() {
    let p = proj(-10.0, 5.0, 0.5, 3, 3);
    assert_eq!(p.config().center(), SkyCoord::new(350.0, 5.0));
    assert_eq!(p.pixel_to_sky(1, 1), SkyCoord::new(350.0, 5.0));

    let east = p.pixel_to_sky(2, 1);
    assert!((350.0..360.0).contains(&east.ra), "{east:?}");
    let west = p.pixel_to_sky(0, 1);
    assert!((349.0..350.0).contains(&west.ra), "{west:?}");
}

#[test]
fn ra_step_scales_with_declination() {
    let pixel = 0.01;
    for dec in [0.0_f64, 30.0, 60.0, -75.0] {
        let p = proj(150.0, dec, pixel, 101, 101);
        let a = p.pixel_to_sky(50, 50);
        let b = p.pixel_to_sky(51, 50);
        let expected = pixel / dec.to_radians().cos();
        let got = b.ra - a.ra;
        assert!(
            (got - expected).abs() < 1e-6 * expected.max(1.0),
            "dec={dec}: got {got}, expected {expected}"
        );
        assert!(b.ra > a.ra);
    }
}

#[test]
fn dec_step_is_pixel_size_along_central_column() {
    let p = proj(150.0, 40.0, 0.02, 101, 101);
    let a = p.pixel_to_sky(50, 50);
    let b = p.pixel_to_sky(50, 51);
    assert!((b.dec - a.dec - 0.02).abs() < 1e-8);
    assert!((b.ra - a.ra).abs() < 1e-12);
}

#[test]
fn far_pixels_are_still_valid_queries() {
    let p = proj(10.0, 20.0, 1.0, 3, 3);
    let far = p.pixel_to_sky(-1_000_000, 1_000_000);
    assert!(far.is_finite());
    assert!((0.0..360.0).contains(&far.ra));
    assert!((-90.0..=90.0).contains(&far.dec));
}

#[test]
fn ra_wraps_through_zero() {
    let p = proj(0.0, 0.0, 0.5, 5, 5);
    let west = p.pixel_to_sky(1, 2);
    assert!((west.ra - 359.5).abs() < 1e-3, "{west:?}");
}

#[test]
fn sky_to_pixel_inverts_pixel_to_sky() {
    let p = proj(210.3, -47.2, 0.05, 64, 48);
    for (i, j) in [(0, 0), (63, 47), (10, 40), (32, 24), (-20, 90)] {
        let sky = p.pixel_to_sky(i, j);
        let (x, y) = p.sky_to_pixel(sky).unwrap();
        assert!((x - i as f64).abs() < 1e-6, "i={i} x={x}");
        assert!((y - j as f64).abs() < 1e-6, "j={j} y={y}");
    }
}

#[test]
fn sky_to_pixel_rejects_far_hemisphere() {
    let p = proj(10.0, 20.0, 1.0, 3, 3);
    let antipode = SkyCoord::new(190.0, -20.0);
    assert!(matches!(
        p.sky_to_pixel(antipode),
        Err(MaskError::Projection(_))
    ));
    assert!(p.sky_to_pixel(SkyCoord::new(f64::NAN, 0.0)).is_err());
}
