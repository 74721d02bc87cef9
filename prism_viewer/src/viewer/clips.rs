//! Clip-plane CRUD. Mutations only mark the active list dirty; the rebuild
//! happens once per frame in `tick`, so a burst of edits costs one push to
//! the engine.

use glam::Vec3;
use prism_scene::{ModelLoader, SceneEngine};

use crate::clip::{ClipConfig, ClipPlane};
use crate::error::ViewerError;
use crate::viewer::Viewer;

impl<E: SceneEngine, L: ModelLoader> Viewer<E, L> {
    pub fn create_clip(&mut self, id: &str, cfg: ClipConfig) -> Result<(), ViewerError> {
        if self.id_in_use(id) {
            return Err(ViewerError::DuplicateId(id.to_owned()));
        }
        self.clips.insert(id.to_owned(), ClipPlane::from_config(cfg));
        self.clips_dirty = true;
        Ok(())
    }

    /// Removes a clip plane; absent IDs are a silent no-op.
    pub fn destroy_clip(&mut self, id: &str) {
        if self.clips.remove(id).is_some() {
            self.clips_dirty = true;
        }
    }

    pub fn clear_clips(&mut self) {
        if !self.clips.is_empty() {
            self.clips.clear();
            self.clips_dirty = true;
        }
    }

    pub fn clips(&self) -> Vec<String> {
        self.clips.keys().cloned().collect()
    }

    fn clip(&self, id: &str) -> Result<&ClipPlane, ViewerError> {
        self.clips
            .get(id)
            .ok_or_else(|| ViewerError::NotFound(id.to_owned()))
    }

    fn clip_mut(&mut self, id: &str) -> Result<&mut ClipPlane, ViewerError> {
        match self.clips.get_mut(id) {
            Some(clip) => {
                self.clips_dirty = true;
                Ok(clip)
            }
            None => Err(ViewerError::NotFound(id.to_owned())),
        }
    }

    pub fn enable_clip(&mut self, id: &str) -> Result<(), ViewerError> {
        self.clip_mut(id)?.active = true;
        Ok(())
    }

    pub fn disable_clip(&mut self, id: &str) -> Result<(), ViewerError> {
        self.clip_mut(id)?.active = false;
        Ok(())
    }

    pub fn clip_active(&self, id: &str) -> Result<bool, ViewerError> {
        Ok(self.clip(id)?.active)
    }

    /// Shows the engine's visual helper for the plane.
    pub fn show_clip(&mut self, id: &str) -> Result<(), ViewerError> {
        self.clip_mut(id)?.shown = true;
        Ok(())
    }

    pub fn hide_clip(&mut self, id: &str) -> Result<(), ViewerError> {
        self.clip_mut(id)?.shown = false;
        Ok(())
    }

    pub fn set_clip_pos(&mut self, id: &str, pos: [f32; 3]) -> Result<(), ViewerError> {
        self.clip_mut(id)?.pos = Vec3::from(pos);
        Ok(())
    }

    pub fn clip_pos_of(&self, id: &str) -> Result<[f32; 3], ViewerError> {
        Ok(self.clip(id)?.pos.to_array())
    }

    pub fn set_clip_dir(&mut self, id: &str, dir: [f32; 3]) -> Result<(), ViewerError> {
        self.clip_mut(id)?.dir = Vec3::from(dir);
        Ok(())
    }

    pub fn clip_dir_of(&self, id: &str) -> Result<[f32; 3], ViewerError> {
        Ok(self.clip(id)?.dir.to_array())
    }
}
