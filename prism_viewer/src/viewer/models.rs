//! Model lifecycle and the ID registries: load/unload, the object map, and
//! the type reverse index.

use prism_scene::{ModelLoader, SceneEngine, DEFAULT_TYPE};

use crate::error::ViewerError;
use crate::registry::{ModelRecord, ObjectRecord};
use crate::viewer::Viewer;

impl<E: SceneEngine, L: ModelLoader> Viewer<E, L> {
    /// Loads a model and registers its objects.
    ///
    /// Reloading an ID with the identical source is a silent success and
    /// does not touch the loader. Reloading with a different source unloads
    /// the old model first. The loader runs to completion before this
    /// returns; there is no cancellation.
    pub fn load_model(&mut self, id: &str, source: &str) -> Result<(), ViewerError> {
        if let Some(model) = self.models.get(id) {
            if model.source == source {
                return Ok(());
            }
            self.unload_model(id)?;
        } else if self.id_in_use(id) {
            return Err(ViewerError::DuplicateId(id.to_owned()));
        }
        let loaded = self.loader.load(id, source, &mut self.engine)?;
        let mut record = ModelRecord {
            source: source.to_owned(),
            object_ids: Default::default(),
        };
        for object in loaded.objects {
            // The loader owns cross-model ID uniqueness, but a re-declared
            // ID must not linger in its previous type bucket.
            if let Some(previous) = self.objects.get(&object.id) {
                let old_tag = previous.type_tag.clone();
                self.remove_from_type_index(&old_tag, &object.id);
            }
            let tag = object.type_tag.unwrap_or_else(|| DEFAULT_TYPE.to_owned());
            self.types
                .entry(tag.clone())
                .or_default()
                .insert(object.id.clone());
            record.object_ids.insert(object.id.clone());
            self.objects.insert(
                object.id.clone(),
                ObjectRecord::new(id, tag, object.local_matrix),
            );
        }
        self.models.insert(id.to_owned(), record);
        Ok(())
    }

    /// Unloads a model and removes every trace of its objects: the object
    /// map, the type index, transform chains, engine entities, and any
    /// annotations hosted on those objects, so nothing is left orphaned.
    pub fn unload_model(&mut self, id: &str) -> Result<(), ViewerError> {
        let record = self
            .models
            .remove(id)
            .ok_or_else(|| ViewerError::NotFound(id.to_owned()))?;
        for object_id in &record.object_ids {
            if let Some(object) = self.objects.remove(object_id) {
                self.remove_from_type_index(&object.type_tag, object_id);
            }
            self.chains.remove(object_id);
            self.engine.destroy_entity(object_id);
            if let Some(annotation_ids) = self.object_annotations.remove(object_id) {
                for annotation_id in annotation_ids {
                    self.annotations.remove(&annotation_id);
                }
            }
        }
        self.chains.remove(id);
        self.engine.destroy_entity(id);
        Ok(())
    }

    /// IDs of the loaded models.
    pub fn models(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    /// IDs of every registered object.
    pub fn objects(&self) -> Vec<String> {
        self.objects.keys().cloned().collect()
    }

    /// IDs of the objects in a model or carrying a type tag.
    pub fn objects_of(&self, id: &str) -> Result<Vec<String>, ViewerError> {
        if let Some(bucket) = self.types.get(id) {
            return Ok(bucket.iter().cloned().collect());
        }
        match self.models.get(id) {
            Some(model) => Ok(model.object_ids.iter().cloned().collect()),
            None => Err(ViewerError::NotFound(id.to_owned())),
        }
    }

    /// The owning model of an object.
    pub fn model_of(&self, object_id: &str) -> Result<String, ViewerError> {
        match self.objects.get(object_id) {
            Some(object) => Ok(object.model_id.clone()),
            None => Err(ViewerError::NotFound(object_id.to_owned())),
        }
    }

    /// The source locator a model was loaded from.
    pub fn source_of(&self, model_id: &str) -> Result<String, ViewerError> {
        match self.models.get(model_id) {
            Some(model) => Ok(model.source.clone()),
            None => Err(ViewerError::NotFound(model_id.to_owned())),
        }
    }

    /// Every type tag currently carried by at least one object.
    pub fn types(&self) -> Vec<String> {
        self.types.keys().cloned().collect()
    }

    /// An object's type tag.
    pub fn type_of(&self, object_id: &str) -> Result<String, ViewerError> {
        match self.objects.get(object_id) {
            Some(object) => Ok(object.type_tag.clone()),
            None => Err(ViewerError::NotFound(object_id.to_owned())),
        }
    }

    /// Reassigns an object's type tag. Given a model ID, retags every
    /// object the model owns. An empty tag falls back to the default.
    pub fn set_type(&mut self, id: &str, tag: &str) -> Result<(), ViewerError> {
        let tag = if tag.is_empty() { DEFAULT_TYPE } else { tag };
        if self.objects.contains_key(id) {
            self.retag_object(id, tag);
            return Ok(());
        }
        if let Some(model) = self.models.get(id) {
            let object_ids: Vec<String> = model.object_ids.iter().cloned().collect();
            for object_id in object_ids {
                self.retag_object(&object_id, tag);
            }
            return Ok(());
        }
        Err(ViewerError::NotFound(id.to_owned()))
    }

    fn retag_object(&mut self, object_id: &str, tag: &str) {
        let old_tag = match self.objects.get_mut(object_id) {
            Some(object) if object.type_tag != tag => {
                std::mem::replace(&mut object.type_tag, tag.to_owned())
            }
            _ => return,
        };
        self.remove_from_type_index(&old_tag, object_id);
        self.types
            .entry(tag.to_owned())
            .or_default()
            .insert(object_id.to_owned());
    }

    /// Drops an object from its type bucket, retiring the bucket when it
    /// empties so `types()` never reports stale tags.
    pub(crate) fn remove_from_type_index(&mut self, tag: &str, object_id: &str) {
        if let Some(bucket) = self.types.get_mut(tag) {
            bucket.remove(object_id);
            if bucket.is_empty() {
                self.types.remove(tag);
            }
        }
    }
}
