//! Camera pose, view fitting and the continuous orbit rates.

use glam::Vec3;
use prism_scene::{
    CameraPose, FlightTarget, ModelLoader, ProjectionKind, ProjectionSettings, SceneEngine,
};

use crate::error::ViewerError;
use crate::target::Target;
use crate::viewer::Viewer;

/// The six axis-locked viewpoints. Eye offsets and up vectors come from a
/// fixed table: lateral views are Y-up, top and bottom switch to ±Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FitAxis {
    Right,
    Back,
    Left,
    Front,
    Top,
    Bottom,
}

impl FitAxis {
    fn eye_offset(self, dist: f32) -> Vec3 {
        match self {
            FitAxis::Right => Vec3::new(-dist, 0.0, 0.0),
            FitAxis::Back => Vec3::new(0.0, 0.0, dist),
            FitAxis::Left => Vec3::new(dist, 0.0, 0.0),
            FitAxis::Front => Vec3::new(0.0, 0.0, -dist),
            FitAxis::Top => Vec3::new(0.0, -dist, 0.0),
            FitAxis::Bottom => Vec3::new(0.0, dist, 0.0),
        }
    }

    fn up(self) -> Vec3 {
        match self {
            FitAxis::Top => Vec3::new(0.0, 0.0, -1.0),
            FitAxis::Bottom => Vec3::new(0.0, 0.0, 1.0),
            _ => Vec3::Y,
        }
    }
}

impl<E: SceneEngine, L: ModelLoader> Viewer<E, L> {
    pub fn set_eye(&mut self, eye: [f32; 3]) {
        self.pose.eye = Vec3::from(eye);
        self.engine.set_camera_pose(&self.pose);
    }

    pub fn eye(&self) -> [f32; 3] {
        self.pose.eye.to_array()
    }

    pub fn set_look(&mut self, look: [f32; 3]) {
        self.pose.look = Vec3::from(look);
        self.engine.set_camera_pose(&self.pose);
    }

    pub fn look(&self) -> [f32; 3] {
        self.pose.look.to_array()
    }

    pub fn set_up(&mut self, up: [f32; 3]) {
        self.pose.up = Vec3::from(up);
        self.engine.set_camera_pose(&self.pose);
    }

    pub fn up(&self) -> [f32; 3] {
        self.pose.up.to_array()
    }

    /// Replaces the whole pose atomically; a missing up defaults to +Y.
    pub fn set_eye_look_up(&mut self, eye: [f32; 3], look: [f32; 3], up: Option<[f32; 3]>) {
        self.pose = CameraPose {
            eye: Vec3::from(eye),
            look: Vec3::from(look),
            up: up.map(Vec3::from).unwrap_or(Vec3::Y),
        };
        self.engine.set_camera_pose(&self.pose);
    }

    /// Flight duration in seconds for view fits; zero makes fits jump.
    pub fn set_view_fit_duration(&mut self, seconds: f32) {
        self.view_fit_duration = seconds;
    }

    pub fn view_fit_duration(&self) -> f32 {
        self.view_fit_duration
    }

    /// Field-of-view angle in degrees used when framing a boundary.
    pub fn set_view_fit_fov(&mut self, degrees: f32) {
        self.view_fit_fov = degrees;
    }

    pub fn view_fit_fov(&self) -> f32 {
        self.view_fit_fov
    }

    /// Moves the camera to fit the target in view, preserving the current
    /// view direction. An annotation ID with a stored camera pose flies to
    /// that pose instead of framing a boundary.
    pub fn view_fit(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        let target = target.into();
        if let Target::Id(id) = &target {
            if let Some(annotation) = self.annotations.get(id) {
                if let (Some(eye), Some(look)) = (annotation.eye, annotation.look) {
                    let pose = CameraPose {
                        eye,
                        look,
                        up: annotation.up.unwrap_or(Vec3::Y),
                    };
                    self.fly_or_jump(FlightTarget::Pose(pose));
                    return Ok(());
                }
            }
        }
        let aabb = self.aabb_of(target)?;
        self.fly_or_jump(FlightTarget::Boundary {
            aabb,
            fit_fov: self.view_fit_fov,
        });
        Ok(())
    }

    pub fn view_fit_right(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        self.view_fit_axis(&target.into(), FitAxis::Right)
    }

    pub fn view_fit_back(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        self.view_fit_axis(&target.into(), FitAxis::Back)
    }

    pub fn view_fit_left(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        self.view_fit_axis(&target.into(), FitAxis::Left)
    }

    pub fn view_fit_front(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        self.view_fit_axis(&target.into(), FitAxis::Front)
    }

    pub fn view_fit_top(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        self.view_fit_axis(&target.into(), FitAxis::Top)
    }

    pub fn view_fit_bottom(&mut self, target: impl Into<Target>) -> Result<(), ViewerError> {
        self.view_fit_axis(&target.into(), FitAxis::Bottom)
    }

    fn view_fit_axis(&mut self, target: &Target, axis: FitAxis) -> Result<(), ViewerError> {
        let aabb = self.aabb_of(target.clone())?;
        let center = aabb.center();
        let dist = (aabb.diagonal() / (self.view_fit_fov.to_radians() / 2.0).tan()).abs();
        let pose = CameraPose {
            eye: center + axis.eye_offset(dist),
            look: center,
            up: axis.up(),
        };
        self.fly_or_jump(FlightTarget::Pose(pose));
        Ok(())
    }

    fn fly_or_jump(&mut self, target: FlightTarget) {
        if self.view_fit_duration > 0.0 {
            self.engine.fly_to(&target);
        } else {
            self.engine.jump_to(&target);
        }
        // The engine settles on the final pose either way; mirror it.
        self.pose = self.engine.camera_pose();
    }

    /// Dolly the camera along its view direction.
    pub fn zoom(&mut self, delta: f32) {
        self.engine.zoom(delta);
        self.pose = self.engine.camera_pose();
    }

    /// Continuous yaw rate in degrees per frame; zero halts the spin.
    pub fn set_yspin(&mut self, rate: f32) {
        self.yspin = rate;
    }

    pub fn yspin(&self) -> f32 {
        self.yspin
    }

    /// Continuous pitch rate in degrees per frame; zero halts the spin.
    pub fn set_xspin(&mut self, rate: f32) {
        self.xspin = rate;
    }

    pub fn xspin(&self) -> f32 {
        self.xspin
    }

    pub fn set_projection(&mut self, kind: ProjectionKind) {
        self.projection.kind = kind;
        self.engine.set_projection(&self.projection);
    }

    pub fn projection(&self) -> ProjectionKind {
        self.projection.kind
    }

    pub fn set_perspective_near_far(&mut self, near: f32, far: f32) {
        self.projection.perspective_near = near;
        self.projection.perspective_far = far;
        self.engine.set_projection(&self.projection);
    }

    pub fn set_perspective_fov(&mut self, degrees: f32) {
        self.projection.perspective_fov = degrees;
        self.engine.set_projection(&self.projection);
    }

    pub fn set_ortho_near_far(&mut self, near: f32, far: f32) {
        self.projection.ortho_near = near;
        self.projection.ortho_far = far;
        self.engine.set_projection(&self.projection);
    }

    pub fn set_ortho_scale(&mut self, scale: f32) {
        self.projection.ortho_scale = scale;
        self.engine.set_projection(&self.projection);
    }

    pub fn projection_settings(&self) -> ProjectionSettings {
        self.projection
    }

    pub(crate) fn apply_projection_settings(&mut self, settings: ProjectionSettings) {
        self.projection = settings;
        self.engine.set_projection(&self.projection);
    }
}
