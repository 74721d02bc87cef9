//! Records the viewer keeps per model and per object. The maps themselves
//! live on [`crate::Viewer`]; these are the row types.

use std::collections::BTreeSet;

use glam::Mat4;

/// A loaded asset. Owns its objects; they are registered in bulk when the
/// load completes and removed in bulk on unload.
#[derive(Debug, Clone)]
pub struct ModelRecord {
    pub source: String,
    pub object_ids: BTreeSet<String>,
}

/// A renderable sub-part of a model. IDs are globally unique across the
/// viewer; the loader collaborator guarantees that, not us.
#[derive(Debug, Clone)]
pub struct ObjectRecord {
    pub model_id: String,
    pub type_tag: String,
    /// Accumulated local transform under the owning model at load time.
    /// Consumed when the lazy transform chain is first built, so re-rooting
    /// the object under the chain does not move it.
    pub base_matrix: Mat4,
    pub color: Option<[f32; 3]>,
    pub opacity: f32,
    pub visible: bool,
    pub clippable: bool,
    pub outlined: bool,
}

impl ObjectRecord {
    pub fn new(model_id: &str, type_tag: String, base_matrix: Mat4) -> Self {
        Self {
            model_id: model_id.to_owned(),
            type_tag,
            base_matrix,
            color: None,
            opacity: 1.0,
            visible: true,
            clippable: true,
            outlined: false,
        }
    }
}
