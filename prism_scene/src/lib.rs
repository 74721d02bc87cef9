//! Contract between the prism viewer and its scene-engine collaborator.
//!
//! The viewer never talks to a renderer directly; everything it needs from
//! one (entity lifecycle, boundary queries, picking, camera flights, the
//! per-frame tick) goes through the [`SceneEngine`] trait. Model parsing is
//! likewise delegated through [`ModelLoader`]. Keeping the two traits and
//! their exchange types in one small crate lets engine backends and the
//! viewer evolve independently.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type tag assigned to loaded objects that declare none.
pub const DEFAULT_TYPE: &str = "DEFAULT";

/// Axis-aligned world-space bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box spanning `[xmin, ymin, zmin, xmax, ymax, zmax]`, the layout the
    /// original viewer used on its wire.
    pub fn from_array(v: [f32; 6]) -> Self {
        Self {
            min: Vec3::new(v[0], v[1], v[2]),
            max: Vec3::new(v[3], v[4], v[5]),
        }
    }

    pub fn to_array(&self) -> [f32; 6] {
        [
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        ]
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn diagonal(&self) -> f32 {
        (self.max - self.min).length()
    }

    /// Component-wise min/max fold of two boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Camera pose as eye position, point-of-interest and up direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look: Vec3,
    pub up: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            look: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

/// Where a camera flight should end up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightTarget {
    /// Settle on an explicit pose.
    Pose(CameraPose),
    /// Frame a boundary, preserving the current view direction. `fit_fov`
    /// is the framing field-of-view angle in degrees.
    Boundary { aabb: Aabb, fit_fov: f32 },
}

/// Projection flavours the viewer can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    #[default]
    Perspective,
    Ortho,
}

/// Full projection configuration mirrored to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionSettings {
    pub kind: ProjectionKind,
    pub perspective_near: f32,
    pub perspective_far: f32,
    pub perspective_fov: f32,
    pub ortho_near: f32,
    pub ortho_far: f32,
    pub ortho_scale: f32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            kind: ProjectionKind::Perspective,
            perspective_near: 0.1,
            perspective_far: 10000.0,
            perspective_fov: 60.0,
            ortho_near: 0.1,
            ortho_far: 10000.0,
            ortho_scale: 1.0,
        }
    }
}

/// Material colour channels a backend may expose. Plain and specular
/// materials carry a diffuse channel, metallic ones a base-colour channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialChannel {
    Diffuse,
    BaseColor,
}

/// One entry of the active clip-plane list pushed to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveClip {
    pub pos: Vec3,
    pub dir: Vec3,
    pub side: f32,
}

/// A picking request, either through a canvas position or a world-space ray.
/// `surface` asks for the intersection point and triangle on top of the
/// entity hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickQuery {
    Canvas { pos: [f32; 2], surface: bool },
    Ray { origin: Vec3, dir: Vec3, surface: bool },
}

/// Result of a successful pick.
#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub entity: String,
    pub world_pos: Option<Vec3>,
    pub prim_index: Option<u32>,
    pub bary: Option<Vec3>,
}

/// Everything a loader hands the engine when instantiating an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpec {
    pub id: String,
    pub aabb: Option<Aabb>,
}

/// Scene backend the viewer drives. Implementations own the scene graph,
/// shading and ray casting; the viewer only issues state changes by ID and
/// reads boundaries back.
pub trait SceneEngine {
    fn create_entity(&mut self, spec: &EntitySpec);
    fn destroy_entity(&mut self, id: &str);

    /// Replace an entity's local transform matrix.
    fn set_local_matrix(&mut self, id: &str, matrix: Mat4);

    /// World-space boundary of one entity, if it has any geometry placed.
    fn entity_aabb(&self, id: &str) -> Option<Aabb>;
    /// Collective boundary of everything in the scene.
    fn scene_aabb(&self) -> Aabb;

    fn set_visible(&mut self, id: &str, visible: bool);
    fn set_opacity(&mut self, id: &str, opacity: f32);
    fn set_alpha_blend(&mut self, id: &str, blend: bool);
    fn has_channel(&self, id: &str, channel: MaterialChannel) -> bool;
    fn set_channel_color(&mut self, id: &str, channel: MaterialChannel, rgb: [f32; 3]);
    fn set_outlined(&mut self, id: &str, outlined: bool);
    fn set_clippable(&mut self, id: &str, clippable: bool);

    fn set_active_clips(&mut self, clips: &[ActiveClip]);

    fn pick(&self, query: &PickQuery) -> Option<PickHit>;

    /// Animate the camera towards the target.
    fn fly_to(&mut self, target: &FlightTarget);
    /// Cut straight to the target.
    fn jump_to(&mut self, target: &FlightTarget);
    fn camera_pose(&self) -> CameraPose;
    fn set_camera_pose(&mut self, pose: &CameraPose);
    fn rotate_eye_x(&mut self, degrees: f32);
    fn rotate_eye_y(&mut self, degrees: f32);
    fn zoom(&mut self, delta: f32);

    fn set_projection(&mut self, settings: &ProjectionSettings);
}

/// One object of a freshly loaded model, as reported by the loader. The
/// loader has already created the matching engine entities; `local_matrix`
/// is the object's accumulated transform relative to its model so the viewer
/// can later re-root it losslessly.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedObject {
    pub id: String,
    pub type_tag: Option<String>,
    pub local_matrix: Mat4,
}

/// Result of a completed model load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedModel {
    pub objects: Vec<LoadedObject>,
}

/// Failures a loader can report back to the viewer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source not found: {0}")]
    SourceNotFound(String),
    #[error("malformed asset {source_locator}: {detail}")]
    Malformed { source_locator: String, detail: String },
    #[error("engine rejected entity {0}")]
    Rejected(String),
}

/// Resolves a source locator (file path, database key, URL) to a parsed
/// model and instantiates its entities on the engine. The viewer issues at
/// most one load at a time; a call runs to completion or error.
pub trait ModelLoader {
    fn load(
        &mut self,
        model_id: &str,
        source: &str,
        engine: &mut dyn SceneEngine,
    ) -> Result<LoadedModel, LoadError>;
}
