#![allow(dead_code)]

//! Recording fakes for the engine and loader collaborators. State sits
//! behind `Rc<RefCell<...>>` handles so tests keep a window into the fakes
//! after handing them to the viewer.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use glam::{Mat4, Quat, Vec3};
use prism_scene::{
    ActiveClip, Aabb, CameraPose, EntitySpec, FlightTarget, LoadError, LoadedModel, LoadedObject,
    MaterialChannel, ModelLoader, PickHit, PickQuery, ProjectionSettings, SceneEngine,
};

#[derive(Debug, Default)]
pub struct EngineState {
    pub aabbs: BTreeMap<String, Aabb>,
    pub aabb_queries: Vec<String>,
    pub created: Vec<String>,
    pub destroyed: Vec<String>,
    pub matrices: BTreeMap<String, Mat4>,
    pub visibility: BTreeMap<String, bool>,
    pub visibility_calls: Vec<(String, bool)>,
    pub opacity: BTreeMap<String, f32>,
    pub blend: BTreeMap<String, bool>,
    /// Which colour channel each entity's material exposes.
    pub channels: BTreeMap<String, MaterialChannel>,
    pub colors: BTreeMap<String, (MaterialChannel, [f32; 3])>,
    pub outlined: BTreeMap<String, bool>,
    pub clippable: BTreeMap<String, bool>,
    pub clip_pushes: Vec<Vec<ActiveClip>>,
    pub pose: Option<CameraPose>,
    pub flights: Vec<&'static str>,
    pub projection: Option<ProjectionSettings>,
    pub pick_result: Option<PickHit>,
    pub pick_queries: Vec<PickQuery>,
}

#[derive(Clone, Default)]
pub struct FakeEngine {
    pub state: Rc<RefCell<EngineState>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for inspecting recorded calls after the engine moved into the
    /// viewer.
    pub fn handle(&self) -> Rc<RefCell<EngineState>> {
        Rc::clone(&self.state)
    }

    fn pose(&self) -> CameraPose {
        self.state.borrow().pose.unwrap_or_default()
    }
}

impl SceneEngine for FakeEngine {
    fn create_entity(&mut self, spec: &EntitySpec) {
        let mut state = self.state.borrow_mut();
        state.created.push(spec.id.clone());
        if let Some(aabb) = spec.aabb {
            state.aabbs.insert(spec.id.clone(), aabb);
        }
    }

    fn destroy_entity(&mut self, id: &str) {
        let mut state = self.state.borrow_mut();
        state.destroyed.push(id.to_owned());
        state.aabbs.remove(id);
    }

    fn set_local_matrix(&mut self, id: &str, matrix: Mat4) {
        self.state
            .borrow_mut()
            .matrices
            .insert(id.to_owned(), matrix);
    }

    fn entity_aabb(&self, id: &str) -> Option<Aabb> {
        let mut state = self.state.borrow_mut();
        state.aabb_queries.push(id.to_owned());
        state.aabbs.get(id).copied()
    }

    fn scene_aabb(&self) -> Aabb {
        let state = self.state.borrow();
        let mut folded: Option<Aabb> = None;
        for aabb in state.aabbs.values() {
            folded = Some(match folded {
                Some(acc) => acc.union(aabb),
                None => *aabb,
            });
        }
        folded.unwrap_or(Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)))
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        let mut state = self.state.borrow_mut();
        state.visibility.insert(id.to_owned(), visible);
        state.visibility_calls.push((id.to_owned(), visible));
    }

    fn set_opacity(&mut self, id: &str, opacity: f32) {
        self.state
            .borrow_mut()
            .opacity
            .insert(id.to_owned(), opacity);
    }

    fn set_alpha_blend(&mut self, id: &str, blend: bool) {
        self.state.borrow_mut().blend.insert(id.to_owned(), blend);
    }

    fn has_channel(&self, id: &str, channel: MaterialChannel) -> bool {
        self.state
            .borrow()
            .channels
            .get(id)
            .copied()
            .unwrap_or(MaterialChannel::Diffuse)
            == channel
    }

    fn set_channel_color(&mut self, id: &str, channel: MaterialChannel, rgb: [f32; 3]) {
        self.state
            .borrow_mut()
            .colors
            .insert(id.to_owned(), (channel, rgb));
    }

    fn set_outlined(&mut self, id: &str, outlined: bool) {
        self.state
            .borrow_mut()
            .outlined
            .insert(id.to_owned(), outlined);
    }

    fn set_clippable(&mut self, id: &str, clippable: bool) {
        self.state
            .borrow_mut()
            .clippable
            .insert(id.to_owned(), clippable);
    }

    fn set_active_clips(&mut self, clips: &[ActiveClip]) {
        self.state.borrow_mut().clip_pushes.push(clips.to_vec());
    }

    fn pick(&self, query: &PickQuery) -> Option<PickHit> {
        let mut state = self.state.borrow_mut();
        state.pick_queries.push(*query);
        state.pick_result.clone()
    }

    fn fly_to(&mut self, target: &FlightTarget) {
        self.state.borrow_mut().flights.push("fly");
        self.settle(target);
    }

    fn jump_to(&mut self, target: &FlightTarget) {
        self.state.borrow_mut().flights.push("jump");
        self.settle(target);
    }

    fn camera_pose(&self) -> CameraPose {
        self.pose()
    }

    fn set_camera_pose(&mut self, pose: &CameraPose) {
        self.state.borrow_mut().pose = Some(*pose);
    }

    fn rotate_eye_x(&mut self, degrees: f32) {
        let pose = self.pose();
        let spun = Quat::from_axis_angle(Vec3::X, degrees.to_radians()) * (pose.eye - pose.look);
        self.state.borrow_mut().pose = Some(CameraPose {
            eye: pose.look + spun,
            ..pose
        });
    }

    fn rotate_eye_y(&mut self, degrees: f32) {
        let pose = self.pose();
        let spun = Quat::from_axis_angle(Vec3::Y, degrees.to_radians()) * (pose.eye - pose.look);
        self.state.borrow_mut().pose = Some(CameraPose {
            eye: pose.look + spun,
            ..pose
        });
    }

    fn zoom(&mut self, delta: f32) {
        let pose = self.pose();
        let dir = (pose.look - pose.eye).normalize_or_zero();
        self.state.borrow_mut().pose = Some(CameraPose {
            eye: pose.eye + dir * delta,
            ..pose
        });
    }

    fn set_projection(&mut self, settings: &ProjectionSettings) {
        self.state.borrow_mut().projection = Some(*settings);
    }
}

impl FakeEngine {
    fn settle(&mut self, target: &FlightTarget) {
        let pose = match target {
            FlightTarget::Pose(pose) => *pose,
            FlightTarget::Boundary { aabb, .. } => {
                let current = self.pose();
                let dir = (current.look - current.eye).normalize_or_zero();
                CameraPose {
                    eye: aabb.center() - dir * aabb.diagonal(),
                    look: aabb.center(),
                    up: current.up,
                }
            }
        };
        self.state.borrow_mut().pose = Some(pose);
    }
}

/// One object a scripted source will produce.
#[derive(Debug, Clone)]
pub struct ObjectSpec {
    pub id: String,
    pub type_tag: Option<String>,
    pub aabb: Aabb,
    pub local_matrix: Mat4,
}

impl ObjectSpec {
    pub fn new(id: &str, aabb: Aabb) -> Self {
        Self {
            id: id.to_owned(),
            type_tag: None,
            aabb,
            local_matrix: Mat4::IDENTITY,
        }
    }

    pub fn tagged(id: &str, tag: &str, aabb: Aabb) -> Self {
        Self {
            type_tag: Some(tag.to_owned()),
            ..Self::new(id, aabb)
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeLoader {
    catalog: BTreeMap<String, Vec<ObjectSpec>>,
    pub calls: Rc<RefCell<Vec<(String, String)>>>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: &str, objects: Vec<ObjectSpec>) -> Self {
        self.catalog.insert(source.to_owned(), objects);
        self
    }

    /// `(model_id, source)` pairs in the order loads were requested.
    pub fn calls_handle(&self) -> Rc<RefCell<Vec<(String, String)>>> {
        Rc::clone(&self.calls)
    }
}

impl ModelLoader for FakeLoader {
    fn load(
        &mut self,
        model_id: &str,
        source: &str,
        engine: &mut dyn SceneEngine,
    ) -> Result<LoadedModel, LoadError> {
        self.calls
            .borrow_mut()
            .push((model_id.to_owned(), source.to_owned()));
        let specs = self
            .catalog
            .get(source)
            .ok_or_else(|| LoadError::SourceNotFound(source.to_owned()))?
            .clone();
        let mut model_aabb: Option<Aabb> = None;
        for spec in &specs {
            engine.create_entity(&EntitySpec {
                id: spec.id.clone(),
                aabb: Some(spec.aabb),
            });
            model_aabb = Some(match model_aabb {
                Some(acc) => acc.union(&spec.aabb),
                None => spec.aabb,
            });
        }
        engine.create_entity(&EntitySpec {
            id: model_id.to_owned(),
            aabb: model_aabb,
        });
        Ok(LoadedModel {
            objects: specs
                .into_iter()
                .map(|spec| LoadedObject {
                    id: spec.id,
                    type_tag: spec.type_tag,
                    local_matrix: spec.local_matrix,
                })
                .collect(),
        })
    }
}

/// A unit box centred at `center`.
pub fn unit_box(center: [f32; 3]) -> Aabb {
    let center = Vec3::from(center);
    Aabb::new(center - Vec3::splat(0.5), center + Vec3::splat(0.5))
}

pub type TestViewer = prism_viewer::Viewer<FakeEngine, FakeLoader>;

/// A viewer wired to fresh fakes, with handles kept for inspection.
pub struct Rig {
    pub viewer: TestViewer,
    pub engine: Rc<RefCell<EngineState>>,
    pub loads: Rc<RefCell<Vec<(String, String)>>>,
}

pub fn rig(loader: FakeLoader) -> Rig {
    let engine = FakeEngine::new();
    let handle = engine.handle();
    let loads = loader.calls_handle();
    Rig {
        viewer: prism_viewer::Viewer::new(engine, loader),
        engine: handle,
        loads,
    }
}

/// Two sources the tests lean on: a car with typed parts and a crane.
pub fn car_and_crane_loader() -> FakeLoader {
    FakeLoader::new()
        .with_source(
            "models/car.gltf",
            vec![
                ObjectSpec::tagged("car#body", "body", unit_box([0.0, 0.0, 0.0])),
                ObjectSpec::tagged("car#wheel", "wheels", unit_box([2.0, 0.0, 0.0])),
                ObjectSpec::new("car#seat", unit_box([0.0, 1.0, 0.0])),
            ],
        )
        .with_source(
            "models/crane.gltf",
            vec![
                ObjectSpec::tagged("crane#boom", "steel", unit_box([10.0, 0.0, 0.0])),
                ObjectSpec::new("crane#cab", unit_box([12.0, 0.0, 0.0])),
            ],
        )
}
