//! Viewer options, parsed with `clap` derive.

use clap::Parser;
use thiserror::Error;

use crate::engine::{LATERAL_SCALE, Viewport};
use crate::renderer::{ColourError, parse_hex};
use crate::sim::Overlays;
use crate::world::Scene;

/// Errors from turning [`ViewerConfig`] into runtime values.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("canvas size must be at least 1 pixel")]
    ZeroSize,

    #[error("projection scale must be finite and positive, got {0}")]
    BadScale(f32),

    #[error("line width must be positive and no wider than the canvas, got {0}")]
    BadLineWidth(f32),

    #[error("target fps must be at least 1")]
    ZeroFps,

    #[error("initial heading must be finite, got {0}")]
    BadAngle(f32),

    #[error("wall colour: {0}")]
    Colour(#[from] ColourError),
}

/// Wireframe first-person walls. Arrows move/turn, Shift boosts, Esc quits.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct ViewerConfig {
    /// Square canvas edge in pixels
    #[arg(long, value_name = "PX", default_value_t = 300)]
    pub size: usize,

    /// Horizontal projection scale
    #[arg(long, value_name = "K", default_value_t = LATERAL_SCALE, allow_negative_numbers = true)]
    pub scale: f32,

    /// Target frame rate of the window loop
    #[arg(long, value_name = "N", default_value_t = 60)]
    pub fps: usize,

    /// Wall stroke width in pixels
    #[arg(long, value_name = "PX", default_value_t = 2.0, allow_negative_numbers = true)]
    pub line_width: f32,

    /// Wall colour as `#rgb` or `#rrggbb`
    #[arg(long, value_name = "HEX", default_value = "#fff")]
    pub wall_colour: String,

    /// Initial heading in degrees (0 = +X)
    #[arg(long, value_name = "DEG", default_value_t = 0.0, allow_negative_numbers = true)]
    pub angle: f32,

    /// Draw the heading-up overhead map
    #[arg(long)]
    pub map: bool,

    /// Draw the player marker
    #[arg(long)]
    pub marker: bool,
}

impl ViewerConfig {
    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::BadScale(self.scale));
        }
        Ok(Viewport::new(self.size as f32 / 2.0, self.scale))
    }

    pub fn scene(&self) -> Result<Scene, ConfigError> {
        if !self.angle.is_finite() {
            return Err(ConfigError::BadAngle(self.angle));
        }
        let colour = parse_hex(&self.wall_colour)?;
        Ok(Scene::room(self.size as f32, colour).with_heading(self.angle.to_radians()))
    }

    pub fn line_width(&self) -> Result<f32, ConfigError> {
        // a brush wider than the canvas only burns time in the rasteriser
        let max = self.size as f32;
        if !(self.line_width.is_finite() && self.line_width > 0.0 && self.line_width <= max) {
            return Err(ConfigError::BadLineWidth(self.line_width));
        }
        Ok(self.line_width)
    }

    pub fn fps(&self) -> Result<usize, ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(self.fps)
    }

    pub fn overlays(&self) -> Overlays {
        Overlays {
            map: self.map,
            marker: self.marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn parse(args: &[&str]) -> ViewerConfig {
        ViewerConfig::try_parse_from(std::iter::once("view_wire").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_the_demo_room() {
        let cfg = parse(&[]);
        assert_eq!(cfg.viewport(), Ok(Viewport::new(150.0, 80.0)));
        assert_eq!(cfg.line_width(), Ok(2.0));
        assert_eq!(cfg.fps(), Ok(60));
        assert_eq!(cfg.overlays(), Overlays::default());

        let scene = cfg.scene().unwrap();
        assert_eq!(scene.walls.len(), 4);
        assert_eq!(scene.walls[0].colour, 0x00_FFFFFF);
        assert_eq!(scene.start.pos, glam::vec2(100.0, 150.0));
        assert_eq!(scene.start.angle, 0.0);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = parse(&[
            "--size", "400", "--scale", "100", "--angle", "-90", "--wall-colour", "#f00",
            "--map", "--marker",
        ]);
        assert_eq!(cfg.viewport(), Ok(Viewport::new(200.0, 100.0)));
        let scene = cfg.scene().unwrap();
        assert_eq!(scene.walls[0].colour, 0x00_FF0000);
        assert!((scene.start.angle + FRAC_PI_2).abs() < 1e-6);
        assert_eq!(
            cfg.overlays(),
            Overlays {
                map: true,
                marker: true
            }
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(parse(&["--size", "0"]).viewport(), Err(ConfigError::ZeroSize));
        assert_eq!(parse(&["--scale", "0"]).viewport(), Err(ConfigError::BadScale(0.0)));
        assert_eq!(parse(&["--fps", "0"]).fps(), Err(ConfigError::ZeroFps));
        assert_eq!(
            parse(&["--line-width", "-1"]).line_width(),
            Err(ConfigError::BadLineWidth(-1.0))
        );
        assert_eq!(
            parse(&["--line-width", "1e6"]).line_width(),
            Err(ConfigError::BadLineWidth(1.0e6))
        );
        assert_eq!(
            parse(&["--size", "300", "--line-width", "301"]).line_width(),
            Err(ConfigError::BadLineWidth(301.0))
        );
        assert_eq!(
            parse(&["--size", "300", "--line-width", "300"]).line_width(),
            Ok(300.0)
        );
        assert!(matches!(
            parse(&["--wall-colour", "white"]).scene(),
            Err(ConfigError::Colour(ColourError::MissingHash(_)))
        ));
        assert!(ViewerConfig::try_parse_from(["view_wire", "--size", "big"]).is_err());
    }
}
