//! A convenience facade over a 3D scene engine: load glTF models, address
//! everything by string ID, and manipulate transforms, visibility, colour,
//! camera framing, annotations and clip planes through one surface that can
//! be snapshotted to a JSON bookmark and replayed later.
//!
//! The hard rendering work (scene graph, shading, ray casting, camera
//! flight easing) lives behind the [`prism_scene::SceneEngine`] and
//! [`prism_scene::ModelLoader`] traits. This crate is the state layer on
//! top: registries, lazy transform composition, target resolution, and the
//! bookmark codec.

mod annotation;
mod bookmark;
mod clip;
mod error;
mod registry;
mod target;
mod transform;
mod viewer;

pub use annotation::{Annotation, AnnotationConfig};
pub use bookmark::{
    AnnotationState, Bookmark, ClipState, LookAtState, ModelState, ObjectState,
};
pub use clip::{ClipConfig, ClipPlane};
pub use error::ViewerError;
pub use target::Target;
pub use transform::TransformChain;
pub use viewer::Viewer;
