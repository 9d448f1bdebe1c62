//! ---------------------------------------------------------------------------
//! Software (CPU) line renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Lines are clipped to the buffer in float space first (Liang–Barsky), so
//!   wildly off-screen or non-finite projections cost nothing and never hang
//!   the integer stepper.
//! ---------------------------------------------------------------------------

use glam::Vec2;

use crate::renderer::{Renderer, Rgba};

/// Default clear colour: black, like an empty canvas.
pub const CLEAR: Rgba = 0x00_000000;

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

/// Bresenham line renderer with a square brush for thick strokes.
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
    clear: Rgba,
}

impl Default for Software {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            width: 0,
            height: 0,
            clear: CLEAR,
        }
    }
}

impl Software {
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.scratch
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.scratch[y * self.width + x])
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(self.clear);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, colour: Rgba, width: f32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let max = Vec2::new(self.width as f32 - 1.0, self.height as f32 - 1.0);
        let Some((a, b)) = clip_to_rect(from, to, max) else {
            return;
        };
        let brush = if width.is_finite() {
            (width.round() as i32).max(1)
        } else {
            1
        };

        let (mut x0, mut y0) = (a.x.round() as i32, a.y.round() as i32);
        let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.stamp(x0, y0, brush, colour);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────── helpers ────────────────────────────────────*/

impl Software {
    /// Fill a `brush`×`brush` square centred on `(x, y)`.
    fn stamp(&mut self, x: i32, y: i32, brush: i32, colour: Rgba) {
        let lo = -(brush / 2);
        for by in y + lo..y + lo + brush {
            if !(0..self.height as i32).contains(&by) {
                continue;
            }
            let row = by as usize * self.width;
            for bx in x + lo..x + lo + brush {
                if (0..self.width as i32).contains(&bx) {
                    self.scratch[row + bx as usize] = colour;
                }
            }
        }
    }
}

/// Liang–Barsky clip of segment `a-b` against `[0, max.x] × [0, max.y]`.
/// `None` if the segment misses the rectangle or has a non-finite endpoint.
fn clip_to_rect(a: Vec2, b: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    if !a.is_finite() || !b.is_finite() {
        return None;
    }
    let d = b - a;
    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;
    for (p, q) in [
        (-d.x, a.x),
        (d.x, max.x - a.x),
        (-d.y, a.y),
        (d.y, max.y - a.y),
    ] {
        if p == 0.0 {
            // parallel to this edge: fully outside or irrelevant
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((a + d * t0, a + d * t1))
}

/*──────────────────────────────── Tests ───────────────────────────────*/
