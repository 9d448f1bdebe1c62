//! Drawing-surface abstraction.
//!
//! *Projection never touches a pixel buffer directly.* It produces
//! [`ScreenLine`]s and hands them to a type implementing [`Renderer`], which
//! only has to know how to clear, stroke a 2-D line and present the frame.
//!
//! * [`software::Software`] rasterises into a `0x00RRGGBB` buffer for minifb.
//! * Tests plug in recording surfaces without touching game logic.

use glam::Vec2;

pub mod colour;
pub mod software;

pub use colour::{ColourError, parse_hex};
pub use software::Software;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// One screen-space line segment, in pixels (origin top-left, +y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenLine {
    pub from: Vec2,
    pub to: Vec2,
}

impl ScreenLine {
    #[inline]
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }
}

/// A drawing surface that owns its scratch buffer for the whole frame.
pub trait Renderer {
    /// (Re)allocate scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Stroke one line segment `width` pixels thick.
    fn draw_line(&mut self, from: Vec2, to: Vec2, colour: Rgba, width: f32);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl for batches of lines sharing one style.
pub trait RendererExt: Renderer {
    fn draw_lines(&mut self, lines: &[ScreenLine], colour: Rgba, width: f32) {
        for l in lines {
            self.draw_line(l.from, l.to, colour, width);
        }
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
