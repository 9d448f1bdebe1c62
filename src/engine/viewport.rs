use glam::{Vec2, vec2};

/// Horizontal projection scale `K` (pixels per unit of lateral/depth).
pub const LATERAL_SCALE: f32 = 80.0;
/// How far off the forward axis the near-clip rays start.
pub const NEAR_OFFSET: f32 = 0.0001;

/// Square canvas description; there is no camera matrix, everything the
/// projection needs is here.
///
/// `center` is half the canvas edge. It is the screen origin offset *and*
/// the half-height of a wall at depth 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: f32,
    pub lateral_scale: f32,
}

impl Viewport {
    pub fn new(center: f32, lateral_scale: f32) -> Self {
        Self {
            center,
            lateral_scale,
        }
    }

    /// Viewport for a `size`×`size` canvas with the default `K`.
    pub fn for_canvas(size: usize) -> Self {
        Self::new(size as f32 / 2.0, LATERAL_SCALE)
    }

    /// Canvas edge length in pixels.
    #[inline]
    pub fn size(&self) -> usize {
        (self.center * 2.0).round().max(0.0) as usize
    }

    /// The two near-clip rays in view space (`x` = lateral, `y` = depth),
    /// left then right. Each starts just off the origin and fans out to
    /// `(∓center, center / 10)`, so they are never parallel to the
    /// forward axis.
    #[inline]
    pub fn clip_rays(&self) -> [(Vec2, Vec2); 2] {
        let far_depth = self.center / 10.0;
        [
            (
                vec2(-NEAR_OFFSET, NEAR_OFFSET),
                vec2(-self.center, far_depth),
            ),
            (vec2(NEAR_OFFSET, NEAR_OFFSET), vec2(self.center, far_depth)),
        ]
    }

    /// Perspective divide of one view-space point.
    ///
    /// Returns `(screen_x, y_top, y_bottom)` in canvas pixels.
    #[inline]
    pub fn project(&self, p: Vec2) -> (f32, f32, f32) {
        let x = -p.x * self.lateral_scale / p.y;
        let top = -self.center / p.y;
        let bottom = self.center / p.y;
        (self.center + x, self.center + top, self.center + bottom)
    }
}
