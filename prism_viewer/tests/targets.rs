mod common;

use common::{car_and_crane_loader, rig, unit_box};
use prism_scene::Aabb;
use prism_viewer::{Target, ViewerError};

#[test]
fn a_model_id_expands_to_its_objects() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();

    let ids = rig.viewer.resolve_objects(&Target::from("car")).unwrap();
    assert_eq!(ids, vec!["car#body", "car#seat", "car#wheel"]);
}

#[test]
fn a_type_tag_expands_to_its_bucket() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();

    let ids = rig.viewer.resolve_objects(&Target::from("wheels")).unwrap();
    assert_eq!(ids, vec!["car#wheel"]);
}

#[test]
fn object_ids_shadow_model_and_type_lookups() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();

    let ids = rig.viewer.resolve_objects(&Target::from("car#wheel")).unwrap();
    assert_eq!(ids, vec!["car#wheel"]);
}

#[test]
fn unions_deduplicate_and_keep_first_seen_order() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();
    rig.viewer.load_model("crane", "models/crane.gltf").unwrap();

    // car#wheel already arrives through the model expansion.
    let ids = rig
        .viewer
        .resolve_objects(&Target::from(vec!["car", "car#wheel", "crane#cab"]))
        .unwrap();
    assert_eq!(
        ids,
        vec!["car#body", "car#seat", "car#wheel", "crane#cab"]
    );
}

#[test]
fn absent_targets_mean_every_object() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();

    let ids = rig.viewer.resolve_objects(&Target::All).unwrap();
    assert_eq!(ids.len(), 3);
}

#[test]
fn unknown_single_ids_fail_resolution() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();

    assert!(matches!(
        rig.viewer.resolve_objects(&Target::from("ghost")),
        Err(ViewerError::NotFound(_))
    ));
}

#[test]
fn literal_boundaries_pass_through_unchanged() {
    let rig = rig(car_and_crane_loader());
    let aabb = rig
        .viewer
        .aabb_of([1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .unwrap();
    assert_eq!(aabb, Aabb::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
}

#[test]
fn list_boundaries_fold_component_wise() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();

    let aabb = rig
        .viewer
        .aabb_of(vec!["car#body", "car#wheel"])
        .unwrap();
    assert_eq!(aabb, unit_box([0.0, 0.0, 0.0]).union(&unit_box([2.0, 0.0, 0.0])));
}

#[test]
fn mixed_lists_accept_ready_made_boundaries() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();

    let aabb = rig
        .viewer
        .aabb_of(Target::Many(vec![
            Target::from("car#body"),
            Target::from([5.0, 5.0, 5.0, 6.0, 6.0, 6.0]),
        ]))
        .unwrap();
    assert_eq!(
        aabb,
        unit_box([0.0, 0.0, 0.0]).union(&Aabb::from_array([5.0, 5.0, 5.0, 6.0, 6.0, 6.0]))
    );
}

#[test]
fn lists_skip_unknown_entries_instead_of_failing() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();

    let aabb = rig.viewer.aabb_of(vec!["car#body", "ghost"]).unwrap();
    assert_eq!(aabb, unit_box([0.0, 0.0, 0.0]));
}

#[test]
fn an_all_unknown_list_falls_back_to_the_scene_boundary() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();

    let aabb = rig.viewer.aabb_of(vec!["ghost", "phantom"]).unwrap();
    assert_eq!(aabb, rig.viewer.aabb_of(Target::All).unwrap());
}

#[test]
fn type_tags_aggregate_their_members_boundaries() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();
    rig.viewer.set_type("car#seat", "wheels").unwrap();

    let aabb = rig.viewer.aabb_of("wheels").unwrap();
    assert_eq!(aabb, unit_box([2.0, 0.0, 0.0]).union(&unit_box([0.0, 1.0, 0.0])));
}

#[test]
fn center_is_the_boundary_midpoint() {
    let mut rig = rig(car_and_crane_loader());
    rig.viewer.load_model("car", "models/car.gltf").unwrap();

    let center = rig.viewer.center_of("car#wheel").unwrap();
    assert_eq!(center, [2.0, 0.0, 0.0]);
}
