//! Annotation CRUD and per-field accessors.

use glam::Vec3;
use prism_scene::{ModelLoader, SceneEngine};

use crate::annotation::{Annotation, AnnotationConfig};
use crate::error::ViewerError;
use crate::viewer::Viewer;

impl<E: SceneEngine, L: ModelLoader> Viewer<E, L> {
    /// Creates an annotation anchored to an object's surface. The host
    /// object and triangle index are required; the ID must be free in the
    /// shared namespace.
    pub fn create_annotation(
        &mut self,
        id: &str,
        cfg: AnnotationConfig,
    ) -> Result<(), ViewerError> {
        if self.id_in_use(id) {
            return Err(ViewerError::DuplicateId(id.to_owned()));
        }
        let object_id = match cfg.object.clone() {
            Some(object_id) => object_id,
            None => return Err(ViewerError::MissingField("object")),
        };
        let prim_index = match cfg.prim_index {
            Some(prim_index) => prim_index,
            None => return Err(ViewerError::MissingField("primIndex")),
        };
        if !self.objects.contains_key(&object_id) {
            return Err(ViewerError::NotFound(object_id));
        }
        self.object_annotations
            .entry(object_id.clone())
            .or_default()
            .insert(id.to_owned());
        self.annotations
            .insert(id.to_owned(), Annotation::from_config(object_id, prim_index, cfg));
        Ok(())
    }

    /// Removes an annotation; absent IDs are a silent no-op.
    pub fn destroy_annotation(&mut self, id: &str) {
        if let Some(annotation) = self.annotations.remove(id) {
            if let Some(ids) = self.object_annotations.get_mut(&annotation.object_id) {
                ids.remove(id);
                if ids.is_empty() {
                    self.object_annotations.remove(&annotation.object_id);
                }
            }
        }
    }

    pub fn clear_annotations(&mut self) {
        self.annotations.clear();
        self.object_annotations.clear();
    }

    pub fn annotations(&self) -> Vec<String> {
        self.annotations.keys().cloned().collect()
    }

    /// IDs of the annotations hosted by an object.
    pub fn annotations_of(&self, object_id: &str) -> Vec<String> {
        self.object_annotations
            .get(object_id)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn annotation(&self, id: &str) -> Result<&Annotation, ViewerError> {
        self.annotations
            .get(id)
            .ok_or_else(|| ViewerError::NotFound(id.to_owned()))
    }

    fn annotation_mut(&mut self, id: &str) -> Result<&mut Annotation, ViewerError> {
        self.annotations
            .get_mut(id)
            .ok_or_else(|| ViewerError::NotFound(id.to_owned()))
    }

    /// Re-anchors an annotation onto a different object.
    pub fn set_annotation_object(&mut self, id: &str, object_id: &str) -> Result<(), ViewerError> {
        if !self.objects.contains_key(object_id) {
            return Err(ViewerError::NotFound(object_id.to_owned()));
        }
        let old = {
            let annotation = self.annotation_mut(id)?;
            std::mem::replace(&mut annotation.object_id, object_id.to_owned())
        };
        if let Some(ids) = self.object_annotations.get_mut(&old) {
            ids.remove(id);
            if ids.is_empty() {
                self.object_annotations.remove(&old);
            }
        }
        self.object_annotations
            .entry(object_id.to_owned())
            .or_default()
            .insert(id.to_owned());
        Ok(())
    }

    pub fn annotation_object(&self, id: &str) -> Result<String, ViewerError> {
        Ok(self.annotation(id)?.object_id.clone())
    }

    pub fn set_annotation_prim_index(&mut self, id: &str, prim_index: u32) -> Result<(), ViewerError> {
        self.annotation_mut(id)?.prim_index = prim_index;
        Ok(())
    }

    pub fn annotation_prim_index(&self, id: &str) -> Result<u32, ViewerError> {
        Ok(self.annotation(id)?.prim_index)
    }

    pub fn set_annotation_bary(&mut self, id: &str, bary: [f32; 3]) -> Result<(), ViewerError> {
        self.annotation_mut(id)?.bary = Vec3::from(bary);
        Ok(())
    }

    pub fn annotation_bary(&self, id: &str) -> Result<[f32; 3], ViewerError> {
        Ok(self.annotation(id)?.bary.to_array())
    }

    pub fn set_annotation_glyph(&mut self, id: &str, glyph: &str) -> Result<(), ViewerError> {
        self.annotation_mut(id)?.glyph = glyph.to_owned();
        Ok(())
    }

    pub fn annotation_glyph(&self, id: &str) -> Result<String, ViewerError> {
        Ok(self.annotation(id)?.glyph.clone())
    }

    pub fn set_annotation_title(&mut self, id: &str, title: &str) -> Result<(), ViewerError> {
        self.annotation_mut(id)?.title = title.to_owned();
        Ok(())
    }

    pub fn annotation_title(&self, id: &str) -> Result<String, ViewerError> {
        Ok(self.annotation(id)?.title.clone())
    }

    pub fn set_annotation_desc(&mut self, id: &str, desc: &str) -> Result<(), ViewerError> {
        self.annotation_mut(id)?.desc = desc.to_owned();
        Ok(())
    }

    pub fn annotation_desc(&self, id: &str) -> Result<String, ViewerError> {
        Ok(self.annotation(id)?.desc.clone())
    }

    /// Stores the camera pose the annotation was authored from; `view_fit`
    /// on the annotation ID replays it.
    pub fn set_annotation_camera(
        &mut self,
        id: &str,
        eye: [f32; 3],
        look: [f32; 3],
        up: Option<[f32; 3]>,
    ) -> Result<(), ViewerError> {
        let annotation = self.annotation_mut(id)?;
        annotation.eye = Some(Vec3::from(eye));
        annotation.look = Some(Vec3::from(look));
        annotation.up = up.map(Vec3::from);
        Ok(())
    }

    pub fn set_annotation_occludable(&mut self, id: &str, occludable: bool) -> Result<(), ViewerError> {
        self.annotation_mut(id)?.occludable = occludable;
        Ok(())
    }

    pub fn annotation_occludable(&self, id: &str) -> Result<bool, ViewerError> {
        Ok(self.annotation(id)?.occludable)
    }

    pub fn set_annotation_pin_shown(&mut self, id: &str, shown: bool) -> Result<(), ViewerError> {
        self.annotation_mut(id)?.pin_shown = shown;
        Ok(())
    }

    pub fn annotation_pin_shown(&self, id: &str) -> Result<bool, ViewerError> {
        Ok(self.annotation(id)?.pin_shown)
    }

    pub fn set_annotation_label_shown(&mut self, id: &str, shown: bool) -> Result<(), ViewerError> {
        self.annotation_mut(id)?.label_shown = shown;
        Ok(())
    }

    pub fn annotation_label_shown(&self, id: &str) -> Result<bool, ViewerError> {
        Ok(self.annotation(id)?.label_shown)
    }
}
