mod geometry;
mod wall;

pub use geometry::{Point2D, cross_product, intersect, intersect_lines};
pub use wall::{Pose, Scene, Wall};
