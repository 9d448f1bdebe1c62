//! Per-frame orchestration: clear → project & stroke walls → advance player.
//!
//! The caller owns scheduling (one [`FrameDriver::tick`] per display
//! refresh) and presentation (`Renderer::end_frame`).

use thiserror::Error;
use tracing::info;

use super::{InputState, Player};
use crate::engine::{Viewport, map_line, project_wall};
use crate::renderer::{Renderer, RendererExt, Rgba};
use crate::world::{Scene, Wall};

/// Grey used for the overhead map overlay.
pub const MAP_COLOUR: Rgba = 0x00_646464;
pub const MAP_LINE_WIDTH: f32 = 4.0;
/// `#777`, the player marker stroke.
pub const MARKER_COLOUR: Rgba = 0x00_777777;
/// Fill of the marker square.
pub const MARKER_FILL: Rgba = 0x00_FFFFFF;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame driver is idle: no scene has been loaded")]
    NotRunning,

    #[error("frame driver is already running a scene")]
    AlreadyRunning,
}

/// Everything one tick reads or writes; no globals.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub walls: Vec<Wall>,
    pub player: Player,
    pub input: InputState,
}

impl SimulationState {
    pub fn new(scene: Scene) -> Self {
        Self {
            player: Player::new(scene.start),
            walls: scene.walls,
            input: InputState::empty(),
        }
    }
}

/// Optional debug drawing on top of the walls.
///
/// Surfaces only stroke opaque lines, so the map is drawn in a solid dark
/// grey where a blending canvas would use light grey at 30 % alpha; walls
/// stroked after it still cover it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlays {
    /// Heading-up overhead map of every wall.
    pub map: bool,
    /// Player marker at the canvas centre.
    pub marker: bool,
}

#[derive(Debug)]
enum DriverState {
    Idle,
    Running(SimulationState),
}

pub struct FrameDriver {
    viewport: Viewport,
    line_width: f32,
    overlays: Overlays,
    state: DriverState,
    ticks: u64,
}

impl FrameDriver {
    pub fn new(viewport: Viewport, line_width: f32, overlays: Overlays) -> Self {
        Self {
            viewport,
            line_width,
            overlays,
            state: DriverState::Idle,
            ticks: 0,
        }
    }

    /// Idle → Running. Happens once per driver.
    pub fn start(&mut self, scene: Scene) -> Result<(), FrameError> {
        if self.is_running() {
            return Err(FrameError::AlreadyRunning);
        }
        info!(walls = scene.walls.len(), pos = ?scene.start.pos, "frame driver running");
        self.state = DriverState::Running(SimulationState::new(scene));
        Ok(())
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running(_))
    }

    /// Snapshot of the running simulation, `None` while idle.
    pub fn simulation(&self) -> Option<&SimulationState> {
        match &self.state {
            DriverState::Running(sim) => Some(sim),
            DriverState::Idle => None,
        }
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Ticks completed since [`start`](Self::start).
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Key went down. Ignored while idle.
    pub fn key_down(&mut self, key: InputState) {
        if let DriverState::Running(sim) = &mut self.state {
            sim.input.key_down(key);
        }
    }

    /// Key went up. Ignored while idle.
    pub fn key_up(&mut self, key: InputState) {
        if let DriverState::Running(sim) = &mut self.state {
            sim.input.key_up(key);
        }
    }

    /// Run one frame into `surface`: exactly one full wall redraw (list
    /// order, no depth sort) followed by exactly one player update.
    pub fn tick<R: Renderer>(&mut self, surface: &mut R) -> Result<(), FrameError> {
        let DriverState::Running(sim) = &mut self.state else {
            return Err(FrameError::NotRunning);
        };
        let vp = &self.viewport;
        let size = vp.size();

        surface.begin_frame(size, size);

        for wall in &sim.walls {
            if self.overlays.map {
                let l = map_line(wall, &sim.player, vp);
                surface.draw_line(l.from, l.to, MAP_COLOUR, MAP_LINE_WIDTH);
            }
            if let Some(quad) = project_wall(wall, &sim.player, vp) {
                surface.draw_lines(&quad.edges(), wall.colour, self.line_width);
            }
        }

        sim.player.update(sim.input);

        if self.overlays.marker {
            surface.draw_lines(&Player::marker(vp.center), MARKER_COLOUR, 1.0);
            surface.draw_lines(&Player::marker_fill(vp.center), MARKER_FILL, 1.0);
        }

        self.ticks += 1;
        Ok(())
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
