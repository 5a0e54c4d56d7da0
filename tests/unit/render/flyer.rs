use std::path::PathBuf;

use super::*;
use crate::assets::color::Rgb;
use crate::foundation::error::FlyerError;
use crate::templates::TemplateId;

fn scratch_png(name: &str, color: [u8; 4]) -> PathBuf {
    let dir = PathBuf::from("target").join("flyerkit-unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    image::RgbaImage::from_pixel(48, 32, image::Rgba(color))
        .save(&path)
        .unwrap();
    path
}

fn small(template: TemplateId) -> ResolvedConfig {
    ResolvedConfig {
        template,
        width: 400,
        height: 600,
        padding: 40,
        ..ResolvedConfig::default()
    }
}

fn px(img: &image::RgbImage, x: u32, y: u32) -> [u8; 3] {
    img.get_pixel(x, y).0
}

fn near(a: [u8; 3], b: [u8; 3]) -> bool {
    a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= 2)
}

#[test]
fn minimal_without_assets_keeps_default_background() {
    let cfg = small(TemplateId::Minimal);
    let img = render_flyer(&cfg).unwrap();
    assert_eq!(img.dimensions(), (400, 600));
    assert_eq!(px(&img, 3, 300), [0xFD, 0xFD, 0xFD]);
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let cfg = ResolvedConfig {
        width: 0,
        ..small(TemplateId::Minimal)
    };
    assert!(matches!(render_flyer(&cfg), Err(FlyerError::Validation(_))));
}

#[test]
fn gradient_background_runs_top_to_bottom() {
    let cfg = ResolvedConfig {
        bg_kind: BackgroundKind::Gradient,
        gradient_start: Rgb::new(255, 0, 0),
        gradient_end: Rgb::new(0, 0, 255),
        accents_enabled: false,
        ..small(TemplateId::Minimal)
    };
    let img = render_flyer(&cfg).unwrap();
    let top = px(&img, 3, 0);
    let bottom = px(&img, 3, 599);
    assert!(top[0] > 245 && top[2] < 10, "top={top:?}");
    assert!(bottom[2] > 245 && bottom[0] < 10, "bottom={bottom:?}");
}

#[test]
fn missing_background_is_not_full_bleed() {
    let cfg = ResolvedConfig {
        bg_image_path: Some(PathBuf::from("target/flyerkit-unit/absent.png")),
        full_bleed_background: true,
        ..small(TemplateId::Minimal)
    };
    let img = render_flyer(&cfg).unwrap();
    // The decorative top band is still drawn.
    assert_eq!(px(&img, 200, 4), [0x00, 0x76, 0xBC]);
}

#[test]
fn full_bleed_background_covers_canvas_and_skips_decoration() {
    let bg = scratch_png("full_bleed_bg.png", [20, 140, 60, 255]);
    let cfg = ResolvedConfig {
        bg_image_path: Some(bg),
        full_bleed_background: true,
        ..small(TemplateId::Minimal)
    };
    let img = render_flyer(&cfg).unwrap();
    assert!(near(px(&img, 200, 4), [20, 140, 60]));
    assert!(near(px(&img, 3, 300), [20, 140, 60]));
}

#[test]
fn overlay_darkens_background() {
    let cfg = ResolvedConfig {
        overlay: Some(Rgb::BLACK.with_alpha(128)),
        ..small(TemplateId::Minimal)
    };
    let img = render_flyer(&cfg).unwrap();
    let p = px(&img, 3, 300);
    assert!(p[0] < 140 && p[0] > 110, "p={p:?}");
}

#[test]
fn png_output_decodes() {
    let bytes = render_flyer_png(&small(TemplateId::QuoteSocial)).unwrap();
    let back = image::load_from_memory(&bytes).unwrap();
    assert_eq!((back.width(), back.height()), (400, 600));
}
