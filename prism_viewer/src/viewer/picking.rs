//! Ray and canvas picking, delegated to the engine's picking primitive.

use glam::Vec3;
use prism_scene::{ModelLoader, PickHit, PickQuery, SceneEngine};

use crate::viewer::Viewer;

impl<E: SceneEngine, L: ModelLoader> Viewer<E, L> {
    /// First object intersecting the ray, without surface detail.
    pub fn ray_cast_object(&self, origin: [f32; 3], dir: [f32; 3]) -> Option<PickHit> {
        self.engine.pick(&PickQuery::Ray {
            origin: Vec3::from(origin),
            dir: Vec3::from(dir),
            surface: false,
        })
    }

    /// First object intersecting the ray, with the world-space intersection
    /// point, triangle index and barycentric coordinates.
    pub fn ray_cast_surface(&self, origin: [f32; 3], dir: [f32; 3]) -> Option<PickHit> {
        self.engine.pick(&PickQuery::Ray {
            origin: Vec3::from(origin),
            dir: Vec3::from(dir),
            surface: true,
        })
    }

    /// Closest object at the canvas position.
    pub fn pick_object(&self, canvas_pos: [f32; 2]) -> Option<PickHit> {
        self.engine.pick(&PickQuery::Canvas {
            pos: canvas_pos,
            surface: false,
        })
    }

    /// Closest object at the canvas position, with surface detail.
    pub fn pick_surface(&self, canvas_pos: [f32; 2]) -> Option<PickHit> {
        self.engine.pick(&PickQuery::Canvas {
            pos: canvas_pos,
            surface: true,
        })
    }
}
