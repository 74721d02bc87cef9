//! Snapshot and replay of the complete viewer state.
//!
//! Capture walks the registries and records deltas from the engine defaults
//! so bookmarks stay compact; annotations and clip planes are dumped whole.
//! Replay is best-effort: individual failures are logged and skipped, so
//! one stale object ID cannot abort the rest of the restore.

use glam::Vec3;
use prism_scene::{ModelLoader, SceneEngine};

use crate::annotation::AnnotationConfig;
use crate::bookmark::{
    AnnotationState, Bookmark, ClipState, LookAtState, ModelState, ObjectState,
};
use crate::clip::ClipConfig;
use crate::error::ViewerError;
use crate::target::Target;
use crate::viewer::Viewer;

fn delta(v: Vec3, default: Vec3) -> Option<[f32; 3]> {
    if v == default {
        None
    } else {
        Some(v.to_array())
    }
}

impl<E: SceneEngine, L: ModelLoader> Viewer<E, L> {
    /// Captures the viewer's full reachable state as a plain data snapshot.
    pub fn bookmark(&self) -> Bookmark {
        let lookat = LookAtState {
            eye: self.pose.eye.to_array(),
            look: self.pose.look.to_array(),
            up: self.pose.up.to_array(),
        };
        let mut bookmark = Bookmark::with_settings(lookat, &self.projection);

        for (id, model) in &self.models {
            let mut state = ModelState {
                id: id.clone(),
                src: model.source.clone(),
                translate: None,
                scale: None,
                rotate: None,
            };
            if let Some(chain) = self.chains.get(id) {
                state.translate = delta(chain.translate(), Vec3::ZERO);
                state.scale = delta(chain.scale(), Vec3::ONE);
                state.rotate = delta(chain.euler_degrees(), Vec3::ZERO);
            }
            bookmark.models.push(state);
        }

        for (id, object) in &self.objects {
            let mut state = ObjectState::default();
            if let Some(chain) = self.chains.get(id) {
                state.translate = delta(chain.translate(), Vec3::ZERO);
                state.scale = delta(chain.scale(), Vec3::ONE);
                state.rotate = delta(chain.euler_degrees(), Vec3::ZERO);
            }
            if object.opacity < 1.0 {
                state.opacity = Some(object.opacity);
            }
            if !object.clippable {
                state.clippable = Some(false);
            }
            // Visibility is recorded asymmetrically: `true` always earns an
            // entry, `false` only rides along when another field already
            // forced one. Restore hides everything and shows the recorded
            // set, so absent entries come back hidden either way.
            if object.visible {
                state.visible = Some(true);
            } else if !state.is_empty() {
                state.visible = Some(false);
            }
            if !state.is_empty() {
                bookmark.objects.insert(id.clone(), state);
            }
        }

        for (id, annotation) in &self.annotations {
            bookmark.annotations.insert(
                id.clone(),
                AnnotationState {
                    object: annotation.object_id.clone(),
                    prim_index: annotation.prim_index,
                    bary: annotation.bary.to_array(),
                    glyph: annotation.glyph.clone(),
                    title: annotation.title.clone(),
                    desc: annotation.desc.clone(),
                    pin_shown: annotation.pin_shown,
                    label_shown: annotation.label_shown,
                    occludable: annotation.occludable,
                    eye: annotation.eye.map(|v| v.to_array()),
                    look: annotation.look.map(|v| v.to_array()),
                    up: annotation.up.map(|v| v.to_array()),
                },
            );
        }

        for (id, clip) in &self.clips {
            bookmark.clips.insert(
                id.clone(),
                ClipState {
                    pos: clip.pos.to_array(),
                    dir: clip.dir.to_array(),
                    active: clip.active,
                    side: clip.side,
                    shown: clip.shown,
                },
            );
        }

        bookmark
    }

    /// Restores the viewer to a snapshot.
    ///
    /// Models load strictly one after another, each model's transform
    /// deltas applied before the next load starts, so boundary-based
    /// pivot computations never race a still-changing scene boundary. A
    /// bookmark without models just clears the viewer.
    pub fn apply_bookmark(&mut self, bookmark: &Bookmark) -> Result<(), ViewerError> {
        if bookmark.models.is_empty() {
            self.clear();
            return Ok(());
        }
        self.clear_clips();
        self.clear_annotations();

        for model in &bookmark.models {
            if let Err(err) = self.load_model(&model.id, &model.src) {
                log::warn!("bookmark: loading model {}: {err}", model.id);
                continue;
            }
            if let Some(translate) = model.translate {
                if let Err(err) = self.set_translate(&model.id, translate) {
                    log::warn!("bookmark: translate on {}: {err}", model.id);
                }
            }
            if let Some(scale) = model.scale {
                if let Err(err) = self.set_scale(&model.id, scale) {
                    log::warn!("bookmark: scale on {}: {err}", model.id);
                }
            }
            if let Some(rotate) = model.rotate {
                if let Err(err) = self.set_rotate(&model.id, rotate) {
                    log::warn!("bookmark: rotate on {}: {err}", model.id);
                }
            }
        }

        let mut visible: Vec<String> = Vec::new();
        for (id, state) in &bookmark.objects {
            if state.visible == Some(true) {
                visible.push(id.clone());
            }
            if let Some(translate) = state.translate {
                if let Err(err) = self.set_translate(id, translate) {
                    log::warn!("bookmark: translate on {id}: {err}");
                }
            }
            if let Some(scale) = state.scale {
                if let Err(err) = self.set_scale(id, scale) {
                    log::warn!("bookmark: scale on {id}: {err}");
                }
            }
            if let Some(rotate) = state.rotate {
                if let Err(err) = self.set_rotate(id, rotate) {
                    log::warn!("bookmark: rotate on {id}: {err}");
                }
            }
            if let Some(opacity) = state.opacity {
                if let Err(err) = self.set_opacity(id.as_str(), opacity) {
                    log::warn!("bookmark: opacity on {id}: {err}");
                }
            }
            if let Some(clippable) = state.clippable {
                if let Err(err) = self.set_clippable(id.as_str(), clippable) {
                    log::warn!("bookmark: clippable on {id}: {err}");
                }
            }
        }

        for (id, state) in &bookmark.clips {
            let cfg = ClipConfig {
                pos: Some(state.pos),
                dir: Some(state.dir),
                active: Some(state.active),
                side: Some(state.side),
                shown: Some(state.shown),
            };
            if let Err(err) = self.create_clip(id, cfg) {
                log::warn!("bookmark: clip {id}: {err}");
            }
        }

        for (id, state) in &bookmark.annotations {
            let cfg = AnnotationConfig {
                object: Some(state.object.clone()),
                prim_index: Some(state.prim_index),
                bary: Some(state.bary),
                glyph: Some(state.glyph.clone()),
                title: Some(state.title.clone()),
                desc: Some(state.desc.clone()),
                pin_shown: Some(state.pin_shown),
                label_shown: Some(state.label_shown),
                occludable: Some(state.occludable),
                eye: state.eye,
                look: state.look,
                up: state.up,
            };
            if let Err(err) = self.create_annotation(id, cfg) {
                log::warn!("bookmark: annotation {id}: {err}");
            }
        }

        // Hide everything, then show exactly the recorded set.
        if let Err(err) = self.set_visible(&Target::All, false) {
            log::warn!("bookmark: hiding all objects: {err}");
        }
        for id in &visible {
            if let Err(err) = self.show(id.as_str()) {
                log::warn!("bookmark: showing {id}: {err}");
            }
        }

        self.set_eye_look_up(
            bookmark.lookat.eye,
            bookmark.lookat.look,
            Some(bookmark.lookat.up),
        );
        self.apply_projection_settings(bookmark.projection_settings());
        Ok(())
    }
}
