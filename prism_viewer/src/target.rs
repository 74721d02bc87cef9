//! The polymorphic target argument accepted by bulk operations.
//!
//! The original viewer probed its argument at runtime (string? array?
//! numbers?); here the shapes are spelled out as a tagged union and callers
//! build them through `From` conversions, so `viewer.show("chassis")` and
//! `viewer.hide(vec!["wheels", "doors"])` still read naturally.

use prism_scene::Aabb;

/// What a bulk operation should act on. A bare ID is tried as an object,
/// then a model, then a type tag, in that order.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Every object currently registered.
    All,
    /// A single object, model or type ID.
    Id(String),
    /// A ready-made boundary, passed through unchanged.
    Boundary(Aabb),
    /// A mixed list; resolved element-wise and unioned.
    Many(Vec<Target>),
}

impl From<&str> for Target {
    fn from(id: &str) -> Self {
        Target::Id(id.to_owned())
    }
}

impl From<String> for Target {
    fn from(id: String) -> Self {
        Target::Id(id)
    }
}

impl From<&String> for Target {
    fn from(id: &String) -> Self {
        Target::Id(id.clone())
    }
}

impl From<Aabb> for Target {
    fn from(aabb: Aabb) -> Self {
        Target::Boundary(aabb)
    }
}

impl From<[f32; 6]> for Target {
    fn from(v: [f32; 6]) -> Self {
        Target::Boundary(Aabb::from_array(v))
    }
}

impl<T: Into<Target>> From<Vec<T>> for Target {
    fn from(items: Vec<T>) -> Self {
        Target::Many(items.into_iter().map(Into::into).collect())
    }
}

impl From<Option<Target>> for Target {
    fn from(target: Option<Target>) -> Self {
        target.unwrap_or(Target::All)
    }
}
