//! Resolution of the polymorphic target argument into object lists and
//! boundaries.

use std::collections::BTreeSet;

use prism_scene::{Aabb, ModelLoader, SceneEngine};

use crate::error::ViewerError;
use crate::target::Target;
use crate::viewer::Viewer;

impl<E: SceneEngine, L: ModelLoader> Viewer<E, L> {
    /// Flattens a target into object IDs: a bare ID is tried as an object,
    /// then a model, then a type tag; lists resolve element-wise into a
    /// de-duplicated union that keeps first-seen order. Boundary targets
    /// carry no object membership and contribute nothing.
    pub fn resolve_objects(&self, target: &Target) -> Result<Vec<String>, ViewerError> {
        let mut out = Vec::new();
        let mut seen = BTreeSet::new();
        self.collect_objects(target, &mut out, &mut seen)?;
        Ok(out)
    }

    fn collect_objects(
        &self,
        target: &Target,
        out: &mut Vec<String>,
        seen: &mut BTreeSet<String>,
    ) -> Result<(), ViewerError> {
        match target {
            Target::All => {
                for id in self.objects.keys() {
                    push_unique(out, seen, id);
                }
            }
            Target::Boundary(_) => {}
            Target::Id(id) => {
                if self.objects.contains_key(id) {
                    push_unique(out, seen, id);
                } else if let Some(model) = self.models.get(id) {
                    for object_id in &model.object_ids {
                        push_unique(out, seen, object_id);
                    }
                } else if let Some(bucket) = self.types.get(id) {
                    for object_id in bucket {
                        push_unique(out, seen, object_id);
                    }
                } else {
                    return Err(ViewerError::NotFound(id.clone()));
                }
            }
            Target::Many(items) => {
                for item in items {
                    self.collect_objects(item, out, seen)?;
                }
            }
        }
        Ok(())
    }

    /// The collective world-space boundary of a target.
    ///
    /// A single unknown ID is an error; inside a list, entries without a
    /// boundary are skipped, and when nothing contributes the whole-scene
    /// boundary is returned.
    pub fn aabb_of(&self, target: impl Into<Target>) -> Result<Aabb, ViewerError> {
        match target.into() {
            Target::All => Ok(self.engine.scene_aabb()),
            Target::Boundary(aabb) => Ok(aabb),
            Target::Id(id) => {
                if self.objects.contains_key(&id) || self.models.contains_key(&id) {
                    Ok(self
                        .engine
                        .entity_aabb(&id)
                        .unwrap_or_else(|| self.engine.scene_aabb()))
                } else if self.types.contains_key(&id) {
                    Ok(self
                        .fold_aabbs(&[Target::Id(id)])
                        .unwrap_or_else(|| self.engine.scene_aabb()))
                } else {
                    Err(ViewerError::NotFound(id))
                }
            }
            Target::Many(items) => Ok(self
                .fold_aabbs(&items)
                .unwrap_or_else(|| self.engine.scene_aabb())),
        }
    }

    /// Center point of a target's boundary.
    pub fn center_of(&self, target: impl Into<Target>) -> Result<[f32; 3], ViewerError> {
        Ok(self.aabb_of(target)?.center().to_array())
    }

    /// Component-wise min/max fold over whatever boundaries the entries
    /// yield. Unknown IDs and boundary-less entities are skipped here:
    /// a list is best-effort, unlike a single ID.
    fn fold_aabbs(&self, items: &[Target]) -> Option<Aabb> {
        let mut folded: Option<Aabb> = None;
        for item in items {
            let contribution = match item {
                Target::All => Some(self.engine.scene_aabb()),
                Target::Boundary(aabb) => Some(*aabb),
                Target::Id(id) => {
                    if self.objects.contains_key(id) || self.models.contains_key(id) {
                        self.engine.entity_aabb(id)
                    } else if let Some(bucket) = self.types.get(id) {
                        let members: Vec<Target> =
                            bucket.iter().map(|id| Target::Id(id.clone())).collect();
                        self.fold_aabbs(&members)
                    } else {
                        None
                    }
                }
                Target::Many(nested) => self.fold_aabbs(nested),
            };
            if let Some(aabb) = contribution {
                folded = Some(match folded {
                    Some(acc) => acc.union(&aabb),
                    None => aabb,
                });
            }
        }
        folded
    }
}

fn push_unique(out: &mut Vec<String>, seen: &mut BTreeSet<String>, id: &str) {
    if seen.insert(id.to_owned()) {
        out.push(id.to_owned());
    }
}
