use recursive_tiles::core::{Canvas, DrawList, DrawOp, Surface};
use recursive_tiles::math::{Color, Rect};

const ORANGE: Color = Color::rgb(255, 128, 64);

// ============================================================================
// Canvas Core Functionality Tests
// ============================================================================

#[test]
fn test_canvas_new() {
    let canvas = Canvas::new(640, 480);
    assert_eq!(canvas.dimensions(), (640, 480));
    assert_eq!(canvas.pixels().len(), 640 * 480);
    assert_eq!(canvas.pixel(639, 479), Some(Color::TRANSPARENT));
    assert_eq!(canvas.pixel(640, 0), None);
}

#[test]
fn test_canvas_clear_bytes() {
    let mut canvas = Canvas::new(100, 100);
    canvas.clear(ORANGE);

    let bytes = canvas.as_bytes();
    assert_eq!(&bytes[0..4], &[255, 128, 64, 255]);

    let mid_idx = (50 * 100 + 50) * 4;
    assert_eq!(&bytes[mid_idx..mid_idx + 4], &[255, 128, 64, 255]);

    let last_idx = (100 * 100 - 1) * 4;
    assert_eq!(&bytes[last_idx..last_idx + 4], &[255, 128, 64, 255]);
}

#[test]
fn test_clear_overwrites_previous_fills() {
    let mut canvas = Canvas::new(10, 10);
    canvas.fill_rect(Rect::new(0, 0, 2, 2), ORANGE);
    canvas.clear(Color::BLACK);

    assert!(canvas.pixels().iter().all(|p| *p == Color::BLACK));
}

#[test]
fn test_fill_preserves_surrounding_pixels() {
    let mut base = Canvas::new(10, 10);
    base.clear(Color::BLACK);

    let mut layered = base.clone();
    layered.fill_rect(Rect::new(0, 0, 2, 2), ORANGE);

    assert_eq!(layered.pixel(1, 1), Some(ORANGE));
    assert_eq!(layered.pixel(5, 5), Some(Color::BLACK));
    // the base canvas is untouched
    assert_eq!(base.pixel(1, 1), Some(Color::BLACK));
}

#[test]
fn test_rect_row_layout() {
    let mut canvas = Canvas::new(4, 3);
    canvas.fill_rect(Rect::new(1, 1, 2, 1), ORANGE);

    let expected = [
        Color::TRANSPARENT, Color::TRANSPARENT, Color::TRANSPARENT, Color::TRANSPARENT,
        Color::TRANSPARENT, ORANGE, ORANGE, Color::TRANSPARENT,
        Color::TRANSPARENT, Color::TRANSPARENT, Color::TRANSPARENT, Color::TRANSPARENT,
    ];
    assert_eq!(canvas.pixels(), &expected);
}

#[test]
fn test_rect_larger_than_canvas_fills_everything() {
    let mut canvas = Canvas::new(8, 8);
    canvas.fill_rect(Rect::new(-100, -100, 1000, 1000), ORANGE);

    assert!(canvas.pixels().iter().all(|p| *p == ORANGE));
}

#[test]
fn test_extreme_coordinates_do_not_overflow() {
    let mut canvas = Canvas::new(8, 8);
    canvas.fill_rect(Rect::new(i32::MAX - 1, i32::MAX - 1, i32::MAX, i32::MAX), ORANGE);
    canvas.fill_rect(Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX), ORANGE);

    assert!(canvas.pixels().iter().all(|p| *p == Color::TRANSPARENT));
}

// ============================================================================
// Surface trait
// ============================================================================

fn paint_cross(surface: &mut impl Surface) {
    surface.clear(Color::PANEL_GRAY);
    surface.fill_rect(Rect::new(0, 2, 5, 1), ORANGE);
    surface.fill_rect(Rect::new(2, 0, 1, 5), Color::BLACK);
}

#[test]
fn test_surfaces_agree() {
    let mut list = DrawList::new();
    paint_cross(&mut list);

    let mut direct = Canvas::new(5, 5);
    paint_cross(&mut direct);

    // Rasterize the recorded ops by hand
    let mut recorded = Canvas::new(5, 5);
    for op in list.ops() {
        match *op {
            DrawOp::Clear(color) => recorded.clear(color),
            DrawOp::Rect { rect, color } => recorded.fill_rect(rect, color),
        }
    }

    assert_eq!(list.len(), 3);
    assert_eq!(list.ops()[0], DrawOp::Clear(Color::PANEL_GRAY));
    assert_eq!(direct, recorded);
    assert_eq!(direct.pixel(2, 2), Some(Color::BLACK));
    assert_eq!(direct.pixel(0, 2), Some(ORANGE));
    assert_eq!(direct.pixel(0, 0), Some(Color::PANEL_GRAY));
}
