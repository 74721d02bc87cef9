//! Per-entity transform chains.
//!
//! Each model or object that has been touched by a transform mutator owns
//! one chain: user translate, rotate and scale composed around a recentering
//! pivot, applied on top of whatever local matrix the entity already had.
//! Chains are built lazily on first access because the pivot comes from a
//! boundary query that is only meaningful once the entity sits in the scene.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// A built transform chain. The local matrix it produces is
/// `T(pivot) · T(translate) · R(rotation) · S(scale) · T(-pivot) · base`:
/// the entity is shifted onto the scene center, transformed, and shifted
/// back, so rotation and scaling pivot around the entity rather than the
/// world origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformChain {
    pivot: Vec3,
    base: Mat4,
    translate: Vec3,
    rotation: Quat,
    /// Degrees as the caller supplied them. Kept verbatim so `rotate_of`
    /// round-trips instead of decomposing the quaternion.
    euler_degrees: Vec3,
    scale: Vec3,
}

impl TransformChain {
    pub fn new(pivot: Vec3, base: Mat4) -> Self {
        Self {
            pivot,
            base,
            translate: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            euler_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.pivot)
            * Mat4::from_translation(self.translate)
            * Mat4::from_quat(self.rotation)
            * Mat4::from_scale(self.scale)
            * Mat4::from_translation(-self.pivot)
            * self.base
    }

    pub fn translate(&self) -> Vec3 {
        self.translate
    }

    pub fn set_translate(&mut self, xyz: Vec3) {
        self.translate = xyz;
    }

    pub fn add_translate(&mut self, xyz: Vec3) {
        self.translate += xyz;
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, xyz: Vec3) {
        self.scale = xyz;
    }

    pub fn euler_degrees(&self) -> Vec3 {
        self.euler_degrees
    }

    /// Store the rotation as XYZ Tait-Bryan degrees. Internally encoded as a
    /// quaternion; the degree vector is cached for faithful retrieval.
    pub fn set_rotate_degrees(&mut self, degrees: Vec3) {
        self.euler_degrees = degrees;
        self.rotation = Quat::from_euler(
            EulerRot::XYZ,
            degrees.x.to_radians(),
            degrees.y.to_radians(),
            degrees.z.to_radians(),
        );
    }

    /// True when every link is still at identity and the chain would record
    /// nothing in a bookmark.
    pub fn is_identity(&self) -> bool {
        self.translate == Vec3::ZERO && self.euler_degrees == Vec3::ZERO && self.scale == Vec3::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat4_eq(a: Mat4, b: Mat4) {
        let (a, b) = (a.to_cols_array(), b.to_cols_array());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-5, "matrices differ: {a:?} vs {b:?}");
        }
    }

    #[test]
    fn fresh_chain_reproduces_the_base_matrix() {
        let base = Mat4::from_translation(Vec3::new(3.0, 0.0, -1.0));
        let chain = TransformChain::new(Vec3::new(5.0, 5.0, 5.0), base);
        assert_mat4_eq(chain.local_matrix(), base);
    }

    #[test]
    fn translate_ignores_the_pivot() {
        let mut chain = TransformChain::new(Vec3::new(2.0, 0.0, 0.0), Mat4::IDENTITY);
        chain.set_translate(Vec3::new(0.0, 4.0, 0.0));
        assert_mat4_eq(
            chain.local_matrix(),
            Mat4::from_translation(Vec3::new(0.0, 4.0, 0.0)),
        );
    }

    #[test]
    fn scale_pivots_around_the_entity_center() {
        let pivot = Vec3::new(1.0, 0.0, 0.0);
        let mut chain = TransformChain::new(pivot, Mat4::IDENTITY);
        chain.set_scale(Vec3::splat(2.0));
        // A point at the pivot must stay put while scaling doubles offsets.
        let at_pivot = chain.local_matrix().transform_point3(pivot);
        assert!((at_pivot - pivot).length() < 1e-5);
        let off_pivot = chain.local_matrix().transform_point3(Vec3::new(2.0, 0.0, 0.0));
        assert!((off_pivot - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn rotation_round_trips_as_degrees() {
        let mut chain = TransformChain::new(Vec3::ZERO, Mat4::IDENTITY);
        chain.set_rotate_degrees(Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(chain.euler_degrees(), Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn identity_check_tracks_every_link() {
        let mut chain = TransformChain::new(Vec3::ONE, Mat4::IDENTITY);
        assert!(chain.is_identity());
        chain.add_translate(Vec3::X);
        assert!(!chain.is_identity());
        chain.add_translate(-Vec3::X);
        assert!(chain.is_identity());
    }
}
