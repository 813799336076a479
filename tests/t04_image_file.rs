extern crate softras;

use softras::{Pixfmt, Point, Polygon, Rgb8, Rgba8, Surface};
use std::path::PathBuf;

fn tmp(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("softras_{}_{}", std::process::id(), name));
    p
}

fn scene() -> Pixfmt<Rgb8> {
    let mut pix = Pixfmt::<Rgb8>::new(64, 48);
    pix.clear();
    let tri = Polygon::new(vec![(4.,40.),(30.,5.),(60.,30.)], Rgb8::new(127,200,0)).unwrap();
    softras::fill_polygon(&mut pix, &tri).unwrap();
    softras::draw_line(&mut pix, Point::new(0.,47.), Point::new(63.,0.), Rgb8::black()).unwrap();
    softras::fill_ring(&mut pix, Point::new(50.,38.), 4.0, 2.0, Rgb8::new(255,0,0), Rgb8::new(0,0,255)).unwrap();
    pix
}

#[test]
fn t04_png_round_trip() {
    let pix = scene();
    let f = tmp("t04_scene.png");
    pix.to_file(&f).unwrap();
    let back = Pixfmt::<Rgb8>::from_file(&f).unwrap();
    assert_eq!(back, pix);
    assert!(softras::ppm::img_diff(&f, &f).unwrap());
    let _ = std::fs::remove_file(&f);
}

#[test]
fn t04_img_diff_detects_change() {
    let pix = scene();
    let mut other = scene();
    other.set_pixel(10, 10, Rgb8::new(1,2,3));
    let (f1, f2) = (tmp("t04_a.png"), tmp("t04_b.png"));
    pix.to_file(&f1).unwrap();
    other.to_file(&f2).unwrap();
    assert!(! softras::ppm::img_diff(&f1, &f2).unwrap());

    let small = Pixfmt::<Rgb8>::new(3, 3);
    small.to_file(&f2).unwrap();
    assert!(! softras::ppm::img_diff(&f1, &f2).unwrap());
    let _ = std::fs::remove_file(&f1);
    let _ = std::fs::remove_file(&f2);
}

#[test]
fn t04_rgba_file() {
    let mut pix = Pixfmt::<Rgba8>::new(8, 8);
    pix.fill(Rgb8::white());
    softras::draw_line(&mut pix, Point::new(0.,0.), Point::new(7.,7.), Rgb8::black()).unwrap();
    let f = tmp("t04_rgba.png");
    pix.to_file(&f).unwrap();
    let back = Pixfmt::<Rgba8>::from_file(&f).unwrap();
    assert_eq!(back, pix);
    let _ = std::fs::remove_file(&f);
}

#[test]
fn t04_missing_file() {
    match Pixfmt::<Rgb8>::from_file(tmp("does_not_exist.png")) {
        Err(softras::Error::Image(_)) | Err(softras::Error::Io(_)) => {},
        other => panic!("expected an image error, got {:?}", other.map(|p| p.width())),
    }
}
