use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

use crate::canvas::CanvasSurface;
use crate::primitive::Primitive;

/// Rasterizes the surface for export: white ground at the current surface
/// size, backdrop blitted first, then every primitive in insertion order.
pub fn snapshot(canvas: &CanvasSurface) -> RgbaImage {
    let size = canvas.size();
    let width = size.x.round().max(1.0) as u32;
    let height = size.y.round().max(1.0) as u32;
    let mut image = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));

    if let Some(backdrop) = canvas.backdrop() {
        blit(&mut image, backdrop.image());
    }
    for primitive in canvas.primitives() {
        draw_primitive(&mut image, primitive);
    }

    image
}

fn draw_primitive(image: &mut RgbaImage, primitive: &Primitive) {
    match primitive {
        Primitive::Polyline {
            points,
            color,
            width,
        } => {
            if let [point] = points.as_slice() {
                stamp_disc(image, *point, width / 2.0, *color);
            } else {
                for pair in points.windows(2) {
                    draw_segment(image, pair[0], pair[1], *width, *color);
                }
            }
        }
        Primitive::Ellipse {
            center,
            diameter,
            color,
        } => fill_ellipse(image, *center, diameter / 2.0, *color),
        Primitive::SquareOutline {
            center,
            side,
            color,
            width,
        } => {
            let half = side / 2.0;
            let corners = [
                Pos2::new(center.x - half, center.y - half),
                Pos2::new(center.x + half, center.y - half),
                Pos2::new(center.x + half, center.y + half),
                Pos2::new(center.x - half, center.y + half),
            ];
            for i in 0..4 {
                draw_segment(image, corners[i], corners[(i + 1) % 4], *width, *color);
            }
        }
    }
}

/// Copies the backdrop into the top-left corner, clipped to the snapshot.
fn blit(dst: &mut RgbaImage, src: &RgbaImage) {
    let width = src.width().min(dst.width());
    let height = src.height().min(dst.height());
    for y in 0..height {
        for x in 0..width {
            blend_pixel(dst, x, y, *src.get_pixel(x, y));
        }
    }
}

/// Stamps a filled disc, the brush footprint for line endpoints and joints.
fn stamp_disc(image: &mut RgbaImage, center: Pos2, radius: f32, color: Color32) {
    let radius = radius.max(0.5);
    let rgba = Rgba(color.to_array());
    let reach = radius.ceil() as i64;
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if (dx * dx + dy * dy) as f32 <= radius * radius {
                put_pixel(image, cx + dx, cy + dy, rgba);
            }
        }
    }
}

/// Draws a stroked segment by stamping the brush footprint along it.
fn draw_segment(image: &mut RgbaImage, a: Pos2, b: Pos2, width: f32, color: Color32) {
    let length = a.distance(b);
    let steps = length.ceil().max(1.0) as u32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp_disc(image, a.lerp(b, t), width / 2.0, color);
    }
}

fn fill_ellipse(image: &mut RgbaImage, center: Pos2, radius: f32, color: Color32) {
    let rgba = Rgba(color.to_array());
    let reach = radius.ceil() as i64;
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if (dx * dx + dy * dy) as f32 <= radius * radius {
                put_pixel(image, cx + dx, cy + dy, rgba);
            }
        }
    }
}

fn put_pixel(image: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < image.width() && y < image.height() {
        blend_pixel(image, x, y, color);
    }
}

/// Standard source-over blend in u8 space.
fn blend_pixel(image: &mut RgbaImage, x: u32, y: u32, src: Rgba<u8>) {
    let alpha = src.0[3] as u32;
    if alpha == 255 {
        image.put_pixel(x, y, src);
        return;
    }
    if alpha == 0 {
        return;
    }
    let dst = image.get_pixel(x, y);
    let mut out = [0u8; 4];
    for channel in 0..3 {
        let s = src.0[channel] as u32;
        let d = dst.0[channel] as u32;
        out[channel] = ((s * alpha + d * (255 - alpha)) / 255) as u8;
    }
    out[3] = (alpha + (dst.0[3] as u32 * (255 - alpha)) / 255) as u8;
    image.put_pixel(x, y, Rgba(out));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasSurface, ShapeKind};
    use crate::input::PointerHandler;
    use egui::Vec2;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn small_canvas() -> CanvasSurface {
        let mut canvas = CanvasSurface::new();
        canvas.set_surface_size(Vec2::new(100.0, 100.0));
        canvas
    }

    #[test]
    fn empty_surface_snapshots_to_white() {
        let image = snapshot(&small_canvas());
        assert_eq!(image.dimensions(), (100, 100));
        assert!(image.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn freehand_stroke_marks_pixels_along_the_segment() {
        let mut canvas = small_canvas();
        canvas.set_brush_color(Color32::RED);
        canvas.on_pointer_down(Pos2::new(10.0, 50.0));
        canvas.on_pointer_move(Pos2::new(90.0, 50.0));
        canvas.on_pointer_up();

        let image = snapshot(&canvas);
        for x in [10u32, 50, 90] {
            assert_eq!(*image.get_pixel(x, 50), Rgba([255, 0, 0, 255]));
        }
        assert_eq!(*image.get_pixel(50, 10), WHITE);
    }

    #[test]
    fn circle_fills_its_interior_only() {
        let mut canvas = small_canvas();
        canvas.set_shape(ShapeKind::Circle);
        canvas.on_pointer_down(Pos2::new(50.0, 50.0));

        let image = snapshot(&canvas);
        // Center and a point inside the 15-unit radius are colored.
        assert_ne!(*image.get_pixel(50, 50), WHITE);
        assert_ne!(*image.get_pixel(60, 50), WHITE);
        // A point past the radius is not.
        assert_eq!(*image.get_pixel(70, 50), WHITE);
    }

    #[test]
    fn square_outline_leaves_interior_untouched() {
        let mut canvas = small_canvas();
        canvas.set_shape(ShapeKind::Square);
        canvas.on_pointer_down(Pos2::new(50.0, 50.0));
        canvas.on_pointer_up();

        let image = snapshot(&canvas);
        // Left edge at x = 35, interior at the center.
        assert_ne!(*image.get_pixel(35, 50), WHITE);
        assert_eq!(*image.get_pixel(50, 50), WHITE);
    }

    #[test]
    fn backdrop_shows_under_later_strokes() {
        let mut canvas = small_canvas();
        canvas.set_backdrop(RgbaImage::from_pixel(40, 40, Rgba([0, 0, 255, 255])));
        canvas.set_brush_color(Color32::RED);
        canvas.on_pointer_down(Pos2::new(5.0, 5.0));
        canvas.on_pointer_move(Pos2::new(35.0, 5.0));
        canvas.on_pointer_up();

        let image = snapshot(&canvas);
        assert_eq!(*image.get_pixel(20, 5), Rgba([255, 0, 0, 255]));
        assert_eq!(*image.get_pixel(20, 20), Rgba([0, 0, 255, 255]));
        assert_eq!(*image.get_pixel(80, 80), WHITE);
    }
}
