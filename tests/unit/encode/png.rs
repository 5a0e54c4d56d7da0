use super::*;

#[test]
fn png_round_trips_dimensions_and_pixels() {
    let mut img = image::RgbImage::from_pixel(7, 3, image::Rgb([10, 20, 30]));
    img.put_pixel(6, 2, image::Rgb([255, 0, 128]));
    let bytes = encode_png(&img).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let back = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(back.dimensions(), (7, 3));
    assert_eq!(back, img);
}

