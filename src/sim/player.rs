use std::f32::consts::PI;

use glam::{Vec2, vec2};

use super::input::InputState;
use crate::renderer::ScreenLine;
use crate::world::Pose;

/// Per-tick step when walking / boosting, in world units.
pub const WALK_SPEED: f32 = 0.5;
pub const BOOST_SPEED: f32 = 1.0;
/// Per-tick heading change while a turn key is held (radians).
pub const TURN_SPEED: f32 = 0.04;

/// The single view-point of the session.
///
/// * Speeds are **per tick**, not per second; a faster display makes the
///   player faster.
/// * `angle` is never wrapped; it grows without bound while turning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub angle: f32, // radians, 0 = +X, grows with the RIGHT key
    pub speed: f32,
    pub angular_speed: f32,
}

impl Player {
    pub fn new(start: Pose) -> Self {
        Self {
            pos: start.pos,
            angle: start.angle,
            speed: WALK_SPEED,
            angular_speed: TURN_SPEED,
        }
    }

    /// Transform a world point into view space:
    ///  .x = lateral offset
    ///  .y = depth along the heading (> 0 is in front)
    #[inline]
    pub fn to_view(&self, p: Vec2) -> Vec2 {
        let dx = p.x - self.pos.x;
        let dy = p.y - self.pos.y;
        let (s, c) = self.angle.sin_cos();
        let depth = dx * c + dy * s;
        let lateral = dx * s - dy * c;
        vec2(lateral, depth)
    }

    /// Unit heading vector on the X-Y plane.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        let (s, c) = self.angle.sin_cos();
        Vec2::new(c, s)
    }

    /// Advance one tick.
    ///
    /// Order matters and is fixed: move with the heading and speed from
    /// *before* this call, then turn, then derive the next speed from BOOST.
    pub fn update(&mut self, input: InputState) {
        let step = self.forward() * self.speed;
        if input.held(InputState::FORWARD) {
            self.pos += step;
        }
        if input.held(InputState::BACKWARD) {
            self.pos -= step;
        }
        if input.held(InputState::LEFT) {
            self.angle -= self.angular_speed;
        }
        if input.held(InputState::RIGHT) {
            self.angle += self.angular_speed;
        }

        self.speed = if input.held(InputState::BOOST) {
            BOOST_SPEED
        } else {
            WALK_SPEED
        };
    }

    /// Marker at the canvas centre: a 4 px square outline plus a 10 px
    /// tick pointing up the screen (the view is always heading-up).
    pub fn marker(canvas_center: f32) -> [ScreenLine; 5] {
        let c = Vec2::splat(canvas_center);
        let (tl, tr) = (c + vec2(-2.0, -2.0), c + vec2(2.0, -2.0));
        let (br, bl) = (c + vec2(2.0, 2.0), c + vec2(-2.0, 2.0));
        let up = PI * 3.0 / 2.0;
        let tip = c + vec2(up.cos(), up.sin()) * 10.0;
        [
            ScreenLine::new(tl, tr),
            ScreenLine::new(tr, br),
            ScreenLine::new(br, bl),
            ScreenLine::new(bl, tl),
            ScreenLine::new(c, tip),
        ]
    }

    /// Interior of the marker square as 1 px rows, to be stroked after
    /// [`marker`](Self::marker) so it covers the outline's inner half.
    pub fn marker_fill(canvas_center: f32) -> [ScreenLine; 4] {
        let c = Vec2::splat(canvas_center);
        [-2.0, -1.0, 0.0, 1.0].map(|dy| ScreenLine::new(c + vec2(-2.0, dy), c + vec2(1.0, dy)))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn player_at(x: f32, y: f32, angle: f32) -> Player {
        Player::new(Pose {
            pos: vec2(x, y),
            angle,
        })
    }

    #[test]
    fn idle_update_only_resets_speed() {
        let mut p = player_at(100.0, 150.0, 0.7);
        p.speed = BOOST_SPEED;
        p.update(InputState::empty());
        assert_eq!(p.pos, vec2(100.0, 150.0));
        assert_eq!(p.angle, 0.7);
        assert_eq!(p.speed, WALK_SPEED);
    }

    #[test]
    fn forward_moves_along_heading_by_speed() {
        let angle = 0.3_f32;
        let mut p = player_at(10.0, 20.0, angle);
        p.update(InputState::FORWARD);
        assert_eq!(p.pos.x, 10.0 + angle.cos() * 0.5);
        assert_eq!(p.pos.y, 20.0 + angle.sin() * 0.5);
    }

    #[test]
    fn boost_doubles_the_step_from_the_next_tick() {
        let mut walk = player_at(0.0, 0.0, 0.0);
        let mut run = player_at(0.0, 0.0, 0.0);
        let held = InputState::FORWARD | InputState::BOOST;

        // first tick primes the speed
        walk.update(InputState::FORWARD);
        run.update(held);
        assert_eq!(run.speed, BOOST_SPEED);

        let (w0, r0) = (walk.pos, run.pos);
        walk.update(InputState::FORWARD);
        run.update(held);
        assert_eq!(walk.pos.x - w0.x, 0.5);
        assert_eq!(run.pos.x - r0.x, 1.0);
    }

    #[test]
    fn movement_uses_heading_before_turn() {
        let mut p = player_at(0.0, 0.0, 0.0);
        p.update(InputState::FORWARD | InputState::RIGHT);
        assert_eq!(p.pos, vec2(0.5, 0.0));
        assert_eq!(p.angle, TURN_SPEED);

        let mut q = player_at(0.0, 0.0, 0.0);
        q.update(InputState::LEFT);
        assert_eq!(q.angle, -TURN_SPEED);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut p = player_at(5.0, 5.0, 1.0);
        p.update(InputState::all() - InputState::BOOST);
        assert!((p.pos - vec2(5.0, 5.0)).length() < 1e-6);
        assert!((p.angle - 1.0).abs() < 1e-6);
    }

    #[test]
    fn angle_is_not_wrapped() {
        let mut p = player_at(0.0, 0.0, 0.0);
        for _ in 0..200 {
            p.update(InputState::RIGHT);
        }
        assert!(p.angle > std::f32::consts::TAU);
    }

    #[test]
    fn to_view_axes() {
        let p = player_at(100.0, 150.0, 0.0);
        // straight ahead → (lateral 0, depth 40)
        assert_eq!(p.to_view(vec2(140.0, 150.0)), vec2(0.0, 40.0));
        // world +Y at heading 0 → negative lateral
        assert_eq!(p.to_view(vec2(100.0, 160.0)), vec2(-10.0, 0.0));

        let q = player_at(0.0, 0.0, FRAC_PI_2);
        let v = q.to_view(vec2(0.0, 10.0));
        assert!((v - vec2(0.0, 10.0)).length() < 1e-5);
    }

    #[test]
    fn marker_tick_points_up() {
        let lines = Player::marker(150.0);
        let tick = lines[4];
        assert_eq!(tick.from, vec2(150.0, 150.0));
        assert!((tick.to - vec2(150.0, 140.0)).length() < 1e-4);
    }

    #[test]
    fn marker_fill_covers_the_square_interior() {
        let rows = Player::marker_fill(150.0);
        assert_eq!(rows[0], ScreenLine::new(vec2(148.0, 148.0), vec2(151.0, 148.0)));
        assert_eq!(rows[3], ScreenLine::new(vec2(148.0, 151.0), vec2(151.0, 151.0)));
        assert!(rows.iter().all(|r| r.from.y == r.to.y));
    }
}
