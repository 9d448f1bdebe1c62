use glam::Vec2;

use crate::renderer::Rgba;

/// One world-space wall: an immutable segment plus its stroke colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
    pub colour: Rgba,
}

impl Wall {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, colour: Rgba) -> Self {
        Self {
            start: Vec2::new(x1, y1),
            end: Vec2::new(x2, y2),
            colour,
        }
    }
}

/// Initial player placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub pos: Vec2,
    pub angle: f32, // radians
}

/// Everything supplied once at start-up: walls in draw order and the
/// player's starting pose.
#[derive(Clone, Debug)]
pub struct Scene {
    pub walls: Vec<Wall>,
    pub start: Pose,
}

impl Scene {
    /// The demo room: a 70×100 box to the right of a `size`² canvas's
    /// left third, player at `(size/3, size/2)` looking along +X.
    pub fn room(size: f32, colour: Rgba) -> Self {
        let walls = vec![
            Wall::new(140.0, 100.0, 140.0, 200.0, colour),
            Wall::new(140.0, 100.0, 70.0, 100.0, colour),
            Wall::new(70.0, 100.0, 70.0, 200.0, colour),
            Wall::new(70.0, 200.0, 140.0, 200.0, colour),
        ];
        Self {
            walls,
            start: Pose {
                pos: Vec2::new(size / 3.0, size / 2.0),
                angle: 0.0,
            },
        }
    }

    /// Same walls, different heading.
    pub fn with_heading(mut self, angle: f32) -> Self {
        self.start.angle = angle;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_is_four_closed_walls() {
        let scene = Scene::room(300.0, 0xFF_FFFF);
        assert_eq!(scene.walls.len(), 4);
        assert_eq!(scene.start.pos, Vec2::new(100.0, 150.0));

        // every endpoint is shared by exactly two walls
        for w in &scene.walls {
            for p in [w.start, w.end] {
                let uses = scene
                    .walls
                    .iter()
                    .filter(|o| o.start == p || o.end == p)
                    .count();
                assert_eq!(uses, 2, "{p:?}");
            }
        }
    }
}
