mod projection;
mod viewport;

pub use projection::{Quad, map_line, project_wall, view_segment};
pub use viewport::{LATERAL_SCALE, NEAR_OFFSET, Viewport};
