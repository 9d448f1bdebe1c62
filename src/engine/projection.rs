//! Wall → screen: view transform, near-plane clip, perspective divide.
//!
//! ```text
//!   world ──translate/rotate──▶ view (lateral, depth)
//!         ──cull / clip───────▶ both endpoints at depth > 0
//!         ──divide by depth───▶ screen quad (4 lines)
//! ```

use glam::Vec2;
use tracing::trace;

use crate::engine::viewport::Viewport;
use crate::renderer::ScreenLine;
use crate::sim::Player;
use crate::world::{Wall, intersect_lines};

/// Outline of one projected wall.
///
/// `left.from.x <= right.from.x` whenever both are finite; `top` and
/// `bottom` run left → right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub top: ScreenLine,
    pub bottom: ScreenLine,
    pub left: ScreenLine,
    pub right: ScreenLine,
}

impl Quad {
    /// Stroke order: top, bottom, left, right.
    #[inline]
    pub fn edges(&self) -> [ScreenLine; 4] {
        [self.top, self.bottom, self.left, self.right]
    }
}

/// Both endpoints in view space (`x` = lateral, `y` = depth), with any
/// endpoint at depth ≤ 0 re-anchored on a near-clip ray.
///
/// `None` when the whole wall is behind the player.
///
/// The replacement point is always the *left* ray's hit if that has
/// positive depth, else the *right* ray's hit, whichever side of centre
/// the wall actually leaves the view on.
///
/// The right hit is taken unchecked: when both hits lie behind the player
/// (a wall that only grazes the view far off to one side), the replaced
/// endpoint keeps a depth ≤ 0 and the projected quad comes out mirrored.
pub fn view_segment(wall: &Wall, player: &Player, viewport: &Viewport) -> Option<(Vec2, Vec2)> {
    let mut a = player.to_view(wall.start);
    let mut b = player.to_view(wall.end);

    if a.y <= 0.0 && b.y <= 0.0 {
        trace!(?wall, "culled: behind player");
        return None;
    }

    if a.y <= 0.0 || b.y <= 0.0 {
        let [(l0, l1), (r0, r1)] = viewport.clip_rays();
        let hit_left = intersect_lines(a, b, l0, l1);
        let hit_right = intersect_lines(a, b, r0, r1);
        let anchor = if hit_left.y > 0.0 { hit_left } else { hit_right };

        if a.y <= 0.0 {
            a = anchor;
        }
        if b.y <= 0.0 {
            b = anchor;
        }
        trace!(?wall, ?anchor, "clipped at near rays");
    }

    Some((a, b))
}

/// Project `wall` for the current `player` pose.
///
/// `None` only when the wall is entirely behind the player. Degenerate
/// input (zero-length wall, wall parallel to a clip ray) still yields a
/// quad, possibly with non-finite coordinates.
pub fn project_wall(wall: &Wall, player: &Player, viewport: &Viewport) -> Option<Quad> {
    let (a, b) = view_segment(wall, player, viewport)?;

    let (xa, top_a, bot_a) = viewport.project(a);
    let (xb, top_b, bot_b) = viewport.project(b);

    // force left-to-right order in screen space
    let ((x1, t1, b1), (x2, t2, b2)) = if xb < xa {
        ((xb, top_b, bot_b), (xa, top_a, bot_a))
    } else {
        ((xa, top_a, bot_a), (xb, top_b, bot_b))
    };

    Some(Quad {
        top: ScreenLine::new(Vec2::new(x1, t1), Vec2::new(x2, t2)),
        bottom: ScreenLine::new(Vec2::new(x1, b1), Vec2::new(x2, b2)),
        left: ScreenLine::new(Vec2::new(x1, t1), Vec2::new(x1, b1)),
        right: ScreenLine::new(Vec2::new(x2, t2), Vec2::new(x2, b2)),
    })
}

/// Overhead-map line for `wall`: raw view-space endpoints (no clipping)
/// drawn heading-up around the canvas centre.
pub fn map_line(wall: &Wall, player: &Player, viewport: &Viewport) -> ScreenLine {
    let c = Vec2::splat(viewport.center);
    ScreenLine::new(c - player.to_view(wall.start), c - player.to_view(wall.end))
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
