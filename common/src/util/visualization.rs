use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect as ImageRect;
use std::path::Path;

/// Draws the first two coordinates of a descent trajectory over the
/// feasible box. The path may legitimately leave the box; segments outside
/// the canvas are clipped by the rasterizer.
pub fn draw_trajectory(trajectory: &[Vec<f64>], bounds: (f64, f64), filename: &str, dimension: u32) {
    if trajectory.len() < 2 || trajectory.iter().any(|p| p.len() < 2) {
        return;
    }
    let (low, high) = bounds;
    let span = high - low;
    if span <= 0.0 || dimension == 0 {
        return;
    }

    let mut img = RgbImage::from_pixel(dimension, dimension, Rgb([20, 20, 20]));

    let scale = dimension as f64 / span;
    let map = |x: f64, y: f64| ((x - low) * scale, dimension as f64 - (y - low) * scale);

    // Feasible box outline.
    draw_hollow_rect_mut(
        &mut img,
        ImageRect::at(0, 0).of_size(dimension, dimension),
        Rgb([90, 90, 90]),
    );

    let [r1, g1, b1] = [180u8, 60, 60];
    let [r2, g2, b2] = [60u8, 180, 120];
    let steps = (trajectory.len() - 1) as f64;

    for (i, pair) in trajectory.windows(2).enumerate() {
        let (x1, y1) = map(pair[0][0], pair[0][1]);
        let (x2, y2) = map(pair[1][0], pair[1][1]);
        let t = i as f64 / steps;
        let blend = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
        let color = Rgb([blend(r1, r2), blend(g1, g2), blend(b1, b2)]);
        draw_line_segment_mut(
            &mut img,
            (x1 as f32, y1 as f32),
            (x2 as f32, y2 as f32),
            color,
        );
    }

    // Start and end markers.
    if let Some(first) = trajectory.first() {
        let (x, y) = map(first[0], first[1]);
        draw_filled_rect_mut(
            &mut img,
            ImageRect::at(x as i32 - 2, y as i32 - 2).of_size(5, 5),
            Rgb([180, 120, 40]),
        );
    }
    if let Some(last) = trajectory.last() {
        let (x, y) = map(last[0], last[1]);
        draw_filled_rect_mut(
            &mut img,
            ImageRect::at(x as i32 - 2, y as i32 - 2).of_size(5, 5),
            Rgb([240, 240, 240]),
        );
    }

    let _ = img.save(Path::new(filename));
}
