mod driver;
mod input;
mod player;

pub use driver::{
    FrameDriver, FrameError, MAP_COLOUR, MAP_LINE_WIDTH, MARKER_COLOUR, MARKER_FILL, Overlays,
    SimulationState,
};
pub use input::{InputState, key_binding};
pub use player::{BOOST_SPEED, Player, TURN_SPEED, WALK_SPEED};
