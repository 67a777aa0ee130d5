// Host-side integration tests for the canvas coordinate mappings.

use app_core::*;
use glam::Vec2;

#[test]
fn normalized_space_flips_y() {
    let m = CanvasMetrics::new(1000.0, 500.0, 1.0);
    let top_middle = m.to_normalized(Vec2::new(500.0, 0.0));
    assert!((top_middle.x - 0.5).abs() < 1e-6);
    assert!(
        (top_middle.y - 1.0).abs() < 1e-6,
        "top of the page must map to y=1"
    );
    let bottom_left = m.to_normalized(Vec2::new(0.0, 500.0));
    assert!(bottom_left.x.abs() < 1e-6);
    assert!(bottom_left.y.abs() < 1e-6);
}

#[test]
fn pixel_ratio_relates_css_to_backing_pixels() {
    // 1000px backing store at 2x ratio means a 500px CSS canvas
    let m = CanvasMetrics::new(1000.0, 1000.0, 2.0);
    assert!((m.css_width() - 500.0).abs() < 1e-6);
    let center = m.to_normalized(Vec2::new(250.0, 250.0));
    assert!((center.x - 0.5).abs() < 1e-6);
    assert!((center.y - 0.5).abs() < 1e-6);
}

#[test]
fn page_round_trip_is_identity() {
    let m = CanvasMetrics::new(1234.0, 789.0, 1.5);
    for &x in &[0.05_f32, 0.25, 0.5, 0.75, 0.95] {
        for &y in &[0.05_f32, 0.25, 0.5, 0.75, 0.95] {
            let norm = Vec2::new(x, y);
            let back = m.to_normalized(m.to_page(norm));
            assert!(
                (back - norm).length() < 1e-4,
                "round trip drifted at ({x},{y}): got ({},{})",
                back.x,
                back.y
            );
        }
    }
}

#[test]
fn landmark_maps_video_space_to_css_page() {
    let m = CanvasMetrics::new(800.0, 600.0, 2.0);
    let middle = m.landmark_to_page(Vec2::new(0.5, 0.5));
    assert!((middle.x - 200.0).abs() < 1e-3);
    assert!((middle.y - 150.0).abs() < 1e-3);
    let corner = m.landmark_to_page(Vec2::new(1.0, 1.0));
    assert!((corner.x - 400.0).abs() < 1e-3);
    assert!((corner.y - 300.0).abs() < 1e-3);
}

#[test]
fn landmark_pipeline_reduces_to_plain_y_flip() {
    // Video -> page -> normalized must equal (x, 1 - y) exactly
    let m = CanvasMetrics::new(640.0, 480.0, 1.25);
    for &x in &[0.1_f32, 0.4, 0.9] {
        for &y in &[0.2_f32, 0.5, 0.8] {
            let lm = Vec2::new(x, y);
            let norm = m.to_normalized(m.landmark_to_page(lm));
            assert!((norm.x - x).abs() < 1e-5);
            assert!((norm.y - (1.0 - y)).abs() < 1e-5);
        }
    }
}

#[test]
fn collapsed_canvas_is_clamped_not_nan() {
    let m = CanvasMetrics::new(0.0, 0.0, 1.0);
    let p = m.to_normalized(Vec2::new(0.5, 0.5));
    assert!(p.x.is_finite() && p.y.is_finite());
}
