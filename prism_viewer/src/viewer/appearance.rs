//! Bulk state mutators: visibility, opacity, colour, outline, clippability.
//! Every one accepts the polymorphic target shape and applies across the
//! resolved object set.

use prism_scene::{MaterialChannel, ModelLoader, SceneEngine};

use crate::error::ViewerError;
use crate::target::Target;
use crate::viewer::Viewer;

impl<E: SceneEngine, L: ModelLoader> Viewer<E, L> {
    /// Shows the targeted objects; with `Target::All`, everything.
    pub fn show(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        self.set_visible(&target.into(), true)
    }

    /// Hides the targeted objects; with `Target::All`, everything.
    pub fn hide(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        self.set_visible(&target.into(), false)
    }

    pub(crate) fn set_visible(&mut self, target: &Target, visible: bool) -> Result<(), ViewerError> {
        for id in self.resolve_objects(target)? {
            if let Some(object) = self.objects.get_mut(&id) {
                object.visible = visible;
                self.engine.set_visible(&id, visible);
            }
        }
        Ok(())
    }

    /// Whether an object is currently shown.
    pub fn visible_of(&self, object_id: &str) -> Result<bool, ViewerError> {
        match self.objects.get(object_id) {
            Some(object) => Ok(object.visible),
            None => Err(ViewerError::NotFound(object_id.to_owned())),
        }
    }

    /// Sets opacity in `[0, 1]` across a target. Anything below one also
    /// flips the object into alpha-blend mode, back to opaque at one.
    pub fn set_opacity(
        &mut self,
        target: impl Into<Target>,
        opacity: f32,
    ) -> Result<(), ViewerError> {
        for id in self.resolve_objects(&target.into())? {
            if let Some(object) = self.objects.get_mut(&id) {
                object.opacity = opacity;
                self.engine.set_opacity(&id, opacity);
                self.engine.set_alpha_blend(&id, opacity < 1.0);
            }
        }
        Ok(())
    }

    pub fn opacity_of(&self, object_id: &str) -> Result<f32, ViewerError> {
        match self.objects.get(object_id) {
            Some(object) => Ok(object.opacity),
            None => Err(ViewerError::NotFound(object_id.to_owned())),
        }
    }

    /// Sets an RGB colour across a target. Which material channel takes the
    /// write depends on the material kind; diffuse wins when both exist.
    pub fn set_color(
        &mut self,
        target: impl Into<Target>,
        rgb: [f32; 3],
    ) -> Result<(), ViewerError> {
        for id in self.resolve_objects(&target.into())? {
            if self.engine.has_channel(&id, MaterialChannel::Diffuse) {
                self.engine
                    .set_channel_color(&id, MaterialChannel::Diffuse, rgb);
            } else if self.engine.has_channel(&id, MaterialChannel::BaseColor) {
                self.engine
                    .set_channel_color(&id, MaterialChannel::BaseColor, rgb);
            }
            if let Some(object) = self.objects.get_mut(&id) {
                object.color = Some(rgb);
            }
        }
        Ok(())
    }

    /// The colour last set through the viewer, if any.
    pub fn color_of(&self, object_id: &str) -> Result<Option<[f32; 3]>, ViewerError> {
        match self.objects.get(object_id) {
            Some(object) => Ok(object.color),
            None => Err(ViewerError::NotFound(object_id.to_owned())),
        }
    }

    pub fn show_outline(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        self.set_outlined(&target.into(), true)
    }

    pub fn hide_outline(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        self.set_outlined(&target.into(), false)
    }

    fn set_outlined(&mut self, target: &Target, outlined: bool) -> Result<(), ViewerError> {
        for id in self.resolve_objects(target)? {
            if let Some(object) = self.objects.get_mut(&id) {
                object.outlined = outlined;
                self.engine.set_outlined(&id, outlined);
            }
        }
        Ok(())
    }

    /// Marks objects as clippable or exempt from the active clip planes.
    pub fn set_clippable(
        &mut self,
        target: impl Into<Target>,
        clippable: bool,
    ) -> Result<(), ViewerError> {
        for id in self.resolve_objects(&target.into())? {
            if let Some(object) = self.objects.get_mut(&id) {
                object.clippable = clippable;
                self.engine.set_clippable(&id, clippable);
            }
        }
        Ok(())
    }

    pub fn clippable_of(&self, object_id: &str) -> Result<bool, ViewerError> {
        match self.objects.get(object_id) {
            Some(object) => Ok(object.clippable),
            None => Err(ViewerError::NotFound(object_id.to_owned())),
        }
    }
}
