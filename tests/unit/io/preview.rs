use super::*;
use crate::foundation::core::GridShape;

#[test]
fn preview_flips_rows_and_scales_flags() {
    let grid = MaskGrid::from_flags(GridShape::new(2, 2).unwrap(), vec![0, 1, 1, 1]).unwrap();
    assert_eq!(preview_luma(&grid), vec![255, 255, 0, 255]);
}

#[test]
fn png_round_trips_through_image() {
    let dir = std::path::PathBuf::from("target").join("unit_preview");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("mask.png");

    let grid = MaskGrid::from_flags(GridShape::new(3, 1).unwrap(), vec![1, 0, 1]).unwrap();
    write_png(&path, &grid).unwrap();

    let img = image::open(&path).unwrap().to_luma8();
    assert_eq!(img.dimensions(), (3, 1));
    assert_eq!(img.into_raw(), vec![255, 0, 255]);
}
