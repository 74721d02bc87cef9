//! Lazy transform chains for models and objects.
//!
//! A chain is only built the first time a transform mutator touches an
//! entity: the recentering pivot needs the entity's and the scene's world
//! boundaries, which are meaningless before the entity is placed, and most
//! objects never get transformed at all. Once built, the chain is cached
//! and every later call reuses it.

use glam::Vec3;
use prism_scene::{ModelLoader, SceneEngine};

use crate::error::ViewerError;
use crate::transform::TransformChain;
use crate::viewer::Viewer;

impl<E: SceneEngine, L: ModelLoader> Viewer<E, L> {
    /// Sets the scale of a model or object.
    pub fn set_scale(&mut self, id: &str, xyz: [f32; 3]) -> Result<(), ViewerError> {
        let chain = self.chain_mut(id)?;
        chain.set_scale(Vec3::from(xyz));
        self.push_matrix(id);
        Ok(())
    }

    /// Gets the scale of a model or object.
    pub fn scale_of(&mut self, id: &str) -> Result<[f32; 3], ViewerError> {
        Ok(self.chain_mut(id)?.scale().to_array())
    }

    /// Sets the translation of a model or object.
    pub fn set_translate(&mut self, id: &str, xyz: [f32; 3]) -> Result<(), ViewerError> {
        let chain = self.chain_mut(id)?;
        chain.set_translate(Vec3::from(xyz));
        self.push_matrix(id);
        Ok(())
    }

    /// Adds to the translation of a model or object.
    pub fn add_translate(&mut self, id: &str, xyz: [f32; 3]) -> Result<(), ViewerError> {
        let chain = self.chain_mut(id)?;
        chain.add_translate(Vec3::from(xyz));
        self.push_matrix(id);
        Ok(())
    }

    /// Gets the translation of a model or object.
    pub fn translate_of(&mut self, id: &str) -> Result<[f32; 3], ViewerError> {
        Ok(self.chain_mut(id)?.translate().to_array())
    }

    /// Sets the rotation of a model or object as XYZ Tait-Bryan degrees.
    pub fn set_rotate(&mut self, id: &str, degrees: [f32; 3]) -> Result<(), ViewerError> {
        let chain = self.chain_mut(id)?;
        chain.set_rotate_degrees(Vec3::from(degrees));
        self.push_matrix(id);
        Ok(())
    }

    /// Gets the rotation of a model or object: the same degrees that were
    /// set, not a quaternion decomposition.
    pub fn rotate_of(&mut self, id: &str) -> Result<[f32; 3], ViewerError> {
        Ok(self.chain_mut(id)?.euler_degrees().to_array())
    }

    /// Returns the entity's chain, building it on first access.
    pub(crate) fn chain_mut(&mut self, id: &str) -> Result<&mut TransformChain, ViewerError> {
        if !self.chains.contains_key(id) {
            let chain = self.build_chain(id)?;
            self.chains.insert(id.to_owned(), chain);
        }
        self.chains
            .get_mut(id)
            .ok_or_else(|| ViewerError::NotFound(id.to_owned()))
    }

    fn build_chain(&self, id: &str) -> Result<TransformChain, ViewerError> {
        let base = if self.models.contains_key(id) {
            glam::Mat4::IDENTITY
        } else if let Some(object) = self.objects.get(id) {
            object.base_matrix
        } else {
            return Err(ViewerError::NotFound(id.to_owned()));
        };
        let scene_center = self.engine.scene_aabb().center();
        let pivot = match self.engine.entity_aabb(id) {
            Some(aabb) => aabb.center() - scene_center,
            None => Vec3::ZERO,
        };
        Ok(TransformChain::new(pivot, base))
    }

    fn push_matrix(&mut self, id: &str) {
        if let Some(chain) = self.chains.get(id) {
            let matrix = chain.local_matrix();
            self.engine.set_local_matrix(id, matrix);
        }
    }
}
