//! The viewer facade. Owns every ID-addressable registry (models, objects,
//! types, transform chains, annotations, clip planes) plus the camera and
//! projection state, and drives the engine collaborator through them.
//! Submodules carry one concern each: `models` for load/unload and the type
//! index, `transforms` for the lazy chains, `targets` for resolving the
//! polymorphic target argument, `appearance` for visibility/opacity/colour,
//! `camera` for pose and view fitting, `picking`, `annotations`, `clips`,
//! and `bookmarks` for the snapshot codec.

use std::collections::{BTreeMap, BTreeSet};

use prism_scene::{CameraPose, ModelLoader, ProjectionSettings, SceneEngine};

use crate::annotation::Annotation;
use crate::clip::ClipPlane;
use crate::registry::{ModelRecord, ObjectRecord};
use crate::transform::TransformChain;

mod annotations;
mod appearance;
mod bookmarks;
mod camera;
mod clips;
mod models;
mod picking;
mod targets;
mod transforms;

/// Default flight duration in seconds; fits animate unless set to zero.
const DEFAULT_VIEW_FIT_DURATION: f32 = 1.0;
/// Default framing field-of-view in degrees.
const DEFAULT_VIEW_FIT_FOV: f32 = 45.0;

/// A stateful facade over a scene engine and a model loader.
///
/// Each instance is independently constructible and destructible; all state
/// lives in the instance, never in globals. Every mutator returns
/// `Result<_, ViewerError>` and leaves the registries untouched on failure.
pub struct Viewer<E: SceneEngine, L: ModelLoader> {
    pub(crate) engine: E,
    pub(crate) loader: L,
    pub(crate) models: BTreeMap<String, ModelRecord>,
    pub(crate) objects: BTreeMap<String, ObjectRecord>,
    pub(crate) types: BTreeMap<String, BTreeSet<String>>,
    pub(crate) chains: BTreeMap<String, TransformChain>,
    pub(crate) annotations: BTreeMap<String, Annotation>,
    pub(crate) object_annotations: BTreeMap<String, BTreeSet<String>>,
    pub(crate) clips: BTreeMap<String, ClipPlane>,
    pub(crate) clips_dirty: bool,
    pub(crate) pose: CameraPose,
    pub(crate) view_fit_duration: f32,
    pub(crate) view_fit_fov: f32,
    pub(crate) xspin: f32,
    pub(crate) yspin: f32,
    pub(crate) projection: ProjectionSettings,
}

impl<E: SceneEngine, L: ModelLoader> Viewer<E, L> {
    pub fn new(mut engine: E, loader: L) -> Self {
        let pose = CameraPose::default();
        let projection = ProjectionSettings::default();
        engine.set_camera_pose(&pose);
        engine.set_projection(&projection);
        Self {
            engine,
            loader,
            models: BTreeMap::new(),
            objects: BTreeMap::new(),
            types: BTreeMap::new(),
            chains: BTreeMap::new(),
            annotations: BTreeMap::new(),
            object_annotations: BTreeMap::new(),
            clips: BTreeMap::new(),
            clips_dirty: false,
            pose,
            view_fit_duration: DEFAULT_VIEW_FIT_DURATION,
            view_fit_fov: DEFAULT_VIEW_FIT_FOV,
            xspin: 0.0,
            yspin: 0.0,
            projection,
        }
    }

    /// Direct access to the engine collaborator, for host glue that needs
    /// to wire input controls or frame events.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Per-frame hook. Applies continuous orbit rates and flushes pending
    /// clip-plane edits; both are no-ops when nothing changed, so extra
    /// calls are harmless.
    pub fn tick(&mut self) {
        if self.yspin != 0.0 {
            self.engine.rotate_eye_y(self.yspin);
        }
        if self.xspin != 0.0 {
            self.engine.rotate_eye_x(self.xspin);
        }
        if self.yspin != 0.0 || self.xspin != 0.0 {
            self.pose = self.engine.camera_pose();
        }
        if self.clips_dirty {
            let active: Vec<_> = self
                .clips
                .values()
                .filter(|clip| clip.active)
                .map(ClipPlane::to_active)
                .collect();
            self.engine.set_active_clips(&active);
            self.clips_dirty = false;
        }
    }

    /// Unloads every model and drops all annotations and clip planes.
    pub fn clear(&mut self) {
        let ids: Vec<String> = self.models.keys().cloned().collect();
        for id in ids {
            // Infallible here: the id came from the map a moment ago.
            if let Err(err) = self.unload_model(&id) {
                log::warn!("clear: unloading {id}: {err}");
            }
        }
        self.clear_annotations();
        self.clear_clips();
    }

    /// Clears the viewer and consumes it.
    pub fn destroy(mut self) {
        self.clear();
    }

    /// Models, objects, annotations and clip planes share one namespace.
    pub(crate) fn id_in_use(&self, id: &str) -> bool {
        self.models.contains_key(id)
            || self.objects.contains_key(id)
            || self.annotations.contains_key(id)
            || self.clips.contains_key(id)
    }
}
