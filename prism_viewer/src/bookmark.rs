//! Serializable full-state snapshots.
//!
//! The JSON layout matches what the original viewer persisted: a `models`
//! array, delta maps for `objects`, full dumps for `annotations` and
//! `clips`, the camera `lookat` and the flat projection parameters.
//! Transform fields are deltas and are omitted at identity so bookmarks
//! stay compact; annotations and clips are always recorded whole.

use std::collections::BTreeMap;

use prism_scene::{ProjectionKind, ProjectionSettings};
use serde::{Deserialize, Serialize};

/// A complete viewer snapshot, restorable with
/// [`crate::Viewer::apply_bookmark`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    #[serde(default)]
    pub models: Vec<ModelState>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub objects: BTreeMap<String, ObjectState>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, AnnotationState>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub clips: BTreeMap<String, ClipState>,
    pub lookat: LookAtState,
    #[serde(default)]
    pub projection: ProjectionKind,
    #[serde(rename = "perspectiveNear")]
    pub perspective_near: f32,
    #[serde(rename = "perspectiveFar")]
    pub perspective_far: f32,
    #[serde(rename = "perspectiveFOV")]
    pub perspective_fov: f32,
    #[serde(rename = "orthoNear")]
    pub ortho_near: f32,
    #[serde(rename = "orthoFar")]
    pub ortho_far: f32,
    #[serde(rename = "orthoScale")]
    pub ortho_scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelState {
    pub id: String,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<[f32; 3]>,
}

/// Per-object deltas. An entry only exists when at least one field deviates
/// from the engine defaults (visible, opaque, clippable).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObjectState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clippable: Option<bool>,
}

impl ObjectState {
    pub fn is_empty(&self) -> bool {
        self.translate.is_none()
            && self.scale.is_none()
            && self.rotate.is_none()
            && self.visible.is_none()
            && self.opacity.is_none()
            && self.clippable.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotationState {
    pub object: String,
    #[serde(rename = "primIndex")]
    pub prim_index: u32,
    pub bary: [f32; 3],
    pub glyph: String,
    pub title: String,
    pub desc: String,
    #[serde(rename = "pinShown")]
    pub pin_shown: bool,
    #[serde(rename = "labelShown")]
    pub label_shown: bool,
    pub occludable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub look: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<[f32; 3]>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClipState {
    pub pos: [f32; 3],
    pub dir: [f32; 3],
    pub active: bool,
    pub side: f32,
    pub shown: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookAtState {
    pub eye: [f32; 3],
    pub look: [f32; 3],
    pub up: [f32; 3],
}

impl Bookmark {
    /// Start a snapshot from the current projection and camera state; the
    /// registries are filled in by the codec.
    pub fn with_settings(lookat: LookAtState, projection: &ProjectionSettings) -> Self {
        Self {
            models: Vec::new(),
            objects: BTreeMap::new(),
            annotations: BTreeMap::new(),
            clips: BTreeMap::new(),
            lookat,
            projection: projection.kind,
            perspective_near: projection.perspective_near,
            perspective_far: projection.perspective_far,
            perspective_fov: projection.perspective_fov,
            ortho_near: projection.ortho_near,
            ortho_far: projection.ortho_far,
            ortho_scale: projection.ortho_scale,
        }
    }

    pub fn projection_settings(&self) -> ProjectionSettings {
        ProjectionSettings {
            kind: self.projection,
            perspective_near: self.perspective_near,
            perspective_far: self.perspective_far,
            perspective_fov: self.perspective_fov,
            ortho_near: self.ortho_near,
            ortho_far: self.ortho_far,
            ortho_scale: self.ortho_scale,
        }
    }
}
