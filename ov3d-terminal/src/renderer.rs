/// Half-block terminal canvas that paints a draw list in order
use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use ov3d_core::{DrawItem, Rgb};
use std::io::Write;

/// Upper half block: the glyph's foreground is the top pixel, its background the bottom one
const HALF_BLOCK: char = '▀';

const BACKGROUND: Rgb = Rgb::new(255, 255, 255);

/// Pixel grid where each terminal cell shows two vertically stacked pixels.
///
/// There is no depth buffer: every polygon overwrites what is already there,
/// so drawing a back-to-front list gives the painter's algorithm.
pub struct CellCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl CellCanvas {
    /// Canvas for a terminal of `columns` x `rows` cells
    pub fn for_terminal(columns: usize, rows: usize) -> Self {
        Self::new(columns, rows * 2)
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    pub fn paint(&mut self, items: &[DrawItem]) {
        for item in items {
            self.fill_polygon(&item.points, item.color);
            self.outline_polygon(&item.points, Rgb::BLACK);
        }
    }

    fn set(&mut self, x: i64, y: i64, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    /// Even-odd scanline fill, sampled at pixel centers
    fn fill_polygon(&mut self, points: &[Point2<f64>], color: Rgb) {
        if points.len() < 3 {
            return;
        }

        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        if !(min_y.is_finite() && max_y.is_finite()) {
            return;
        }
        let first_row = (min_y.floor() as i64).max(0);
        let last_row = (max_y.ceil() as i64).min(self.height as i64 - 1);

        let mut crossings = Vec::with_capacity(points.len());
        for row in first_row..=last_row {
            let py = row as f64 + 0.5;

            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = &points[(i + 1) % points.len()];
                if (a.y <= py) != (b.y <= py) {
                    crossings.push(a.x + (py - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                // Pixels whose center lies in [span[0], span[1])
                let start = (span[0] - 0.5).ceil() as i64;
                let end = (span[1] - 0.5).ceil() as i64;
                for x in start.max(0)..end.min(self.width as i64) {
                    self.set(x, row, color);
                }
            }
        }
    }

    fn outline_polygon(&mut self, points: &[Point2<f64>], color: Rgb) {
        for (i, a) in points.iter().enumerate() {
            let b = &points[(i + 1) % points.len()];
            self.line(a, b, color);
        }
    }

    /// DDA line between two points
    fn line(&mut self, a: &Point2<f64>, b: &Point2<f64>, color: Rgb) {
        let delta = b - a;
        let steps = delta.x.abs().max(delta.y.abs()).ceil();
        if !steps.is_finite() {
            return;
        }
        let steps = (steps as i64).max(1);

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let p = a + delta * t;
            self.set(p.x.floor() as i64, p.y.floor() as i64, color);
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in (0..self.height).step_by(2) {
            for x in 0..self.width {
                let top = self.pixels[row * self.width + x];
                let bottom = self.pixel(x, row + 1).unwrap_or(BACKGROUND);

                writer.queue(SetForegroundColor(to_color(top)))?;
                writer.queue(SetBackgroundColor(to_color(bottom)))?;
                writer.queue(Print(HALF_BLOCK))?;
            }
            writer.queue(ResetColor)?;
            if row + 2 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
