//! Pin/label annotations anchored to a point on an object's surface.

use glam::Vec3;

/// A stored annotation. The anchor is a triangle index plus barycentric
/// weights on the host object's mesh; an optional camera pose lets
/// `view_fit` frame the annotation exactly as it was authored.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub object_id: String,
    pub prim_index: u32,
    pub bary: Vec3,
    pub glyph: String,
    pub title: String,
    pub desc: String,
    pub pin_shown: bool,
    pub label_shown: bool,
    pub occludable: bool,
    pub eye: Option<Vec3>,
    pub look: Option<Vec3>,
    pub up: Option<Vec3>,
}

/// Creation-time configuration. `object` and `prim_index` are required;
/// everything else falls back to the defaults below.
#[derive(Debug, Clone, Default)]
pub struct AnnotationConfig {
    pub object: Option<String>,
    pub prim_index: Option<u32>,
    pub bary: Option<[f32; 3]>,
    pub glyph: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub pin_shown: Option<bool>,
    pub label_shown: Option<bool>,
    pub occludable: Option<bool>,
    pub eye: Option<[f32; 3]>,
    pub look: Option<[f32; 3]>,
    pub up: Option<[f32; 3]>,
}

impl Annotation {
    /// Build from a validated config; the caller has already checked that
    /// `object` and `prim_index` are present and that the object exists.
    pub fn from_config(object_id: String, prim_index: u32, cfg: AnnotationConfig) -> Self {
        Self {
            object_id,
            prim_index,
            bary: cfg
                .bary
                .map(Vec3::from)
                .unwrap_or(Vec3::new(0.3, 0.3, 0.3)),
            glyph: cfg.glyph.unwrap_or_default(),
            title: cfg.title.unwrap_or_default(),
            desc: cfg.desc.unwrap_or_default(),
            pin_shown: cfg.pin_shown.unwrap_or(true),
            label_shown: cfg.label_shown.unwrap_or(true),
            occludable: cfg.occludable.unwrap_or(true),
            eye: cfg.eye.map(Vec3::from),
            look: cfg.look.map(Vec3::from),
            up: cfg.up.map(Vec3::from),
        }
    }
}
