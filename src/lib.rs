//! Wireframe first-person view of a handful of 2-D walls.
//!
//! Per frame: [`sim::InputState`] → [`sim::Player::update`], and for every
//! [`world::Wall`] → [`engine::project_wall`] → [`renderer::Renderer`] strokes.
//! [`sim::FrameDriver`] ties the pieces together; the window, the frame
//! scheduler and key events live in `src/bin/view_wire.rs`.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
