//! User clip planes. Scene-global, independent of any object.

use glam::Vec3;
use prism_scene::ActiveClip;

/// A stored clip plane. `side` selects which half-space survives; `shown`
/// toggles the engine's visual helper for the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPlane {
    pub pos: Vec3,
    pub dir: Vec3,
    pub active: bool,
    pub side: f32,
    pub shown: bool,
}

/// Creation-time configuration with the engine's defaults filled in.
#[derive(Debug, Clone, Default)]
pub struct ClipConfig {
    pub pos: Option<[f32; 3]>,
    pub dir: Option<[f32; 3]>,
    pub active: Option<bool>,
    pub side: Option<f32>,
    pub shown: Option<bool>,
}

impl ClipPlane {
    pub fn from_config(cfg: ClipConfig) -> Self {
        Self {
            pos: cfg.pos.map(Vec3::from).unwrap_or(Vec3::ZERO),
            dir: cfg.dir.map(Vec3::from).unwrap_or(Vec3::Z),
            active: cfg.active.unwrap_or(true),
            side: cfg.side.unwrap_or(1.0),
            shown: cfg.shown.unwrap_or(false),
        }
    }

    pub fn to_active(&self) -> ActiveClip {
        ActiveClip {
            pos: self.pos,
            dir: self.dir,
            side: self.side,
        }
    }
}
