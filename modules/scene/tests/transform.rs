use cortex::math::prelude::*;
use cortex_scene::prelude::*;

fn assert_near(lhs: Vector3<f32>, rhs: [f32; 3]) {
    let rhs = Vector3::from(rhs);
    assert!((lhs - rhs).magnitude() < 1e-4, "{:?} != {:?}", lhs, rhs);
}

fn assert_same_pose(lhs: Transform, rhs: Transform) {
    assert!((lhs.scale - rhs.scale).abs() < 1e-4, "{:?} != {:?}", lhs, rhs);
    assert_near(lhs.position, rhs.position.into());

    for axis in &[Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z()] {
        let v = rhs.rotation.rotate_vector(*axis);
        assert_near(lhs.rotation.rotate_vector(*axis), v.into());
    }
}

fn rig() -> Transform {
    Transform {
        scale: 2.0,
        position: Vector3::new(1.0, 0.0, 2.0),
        rotation: Euler::new(Deg(0.0), Deg(0.0), Deg(90.0)).into(),
    }
}

#[test]
fn matrix_is_translate_rotate_scale() {
    let m: Matrix4<f32> = rig().into();

    let p = m * Vector4::new(1.0, 0.0, 0.0, 1.0);
    assert_near(p.truncate(), [1.0, 2.0, 2.0]);
    assert_near(m.w.truncate(), [1.0, 0.0, 2.0]);

    let identity: Matrix4<f32> = Transform::default().into();
    assert_eq!(identity, Matrix4::identity());
}

#[test]
fn decompose() {
    let t = Transform::from_matrix(rig().into()).unwrap();
    assert_same_pose(t, rig());

    let mut mirrored = rig();
    mirrored.scale = -0.5;
    assert_same_pose(Transform::from_matrix(mirrored.into()).unwrap(), mirrored);
}

#[test]
fn reject_non_decomposable() {
    let stretch = Matrix4::from_nonuniform_scale(1.0, 2.0, 1.0);
    assert_eq!(Transform::from_matrix(stretch), None);

    let flat = Matrix4::from_scale(0.0);
    assert_eq!(Transform::from_matrix(flat), None);

    let mut projective = Matrix4::identity();
    projective.x.w = 0.5;
    assert_eq!(Transform::from_matrix(projective), None);
}

#[test]
fn world_decomposition() {
    let mut scene = SceneGraph::new();
    let parent = scene.create_with(rig());
    let child = scene.create_with(Transform::from_position([1.0, 0.0, 0.0]));
    scene.attach(parent, child).unwrap();

    let world = scene.transform(child).unwrap();
    assert_near(world.position, [1.0, 2.0, 2.0]);
    assert!((world.scale - 2.0).abs() < 1e-4);
    assert_near(world.rotation.rotate_vector(Vector3::unit_x()), [0.0, 1.0, 0.0]);

    let squash = scene.create_with(Matrix4::from_nonuniform_scale(1.0, 3.0, 1.0));
    scene.attach(squash, parent).unwrap();
    assert!(scene.transform(child).is_none());
    assert!(scene.world_transform(child).is_some());
}

#[test]
fn keep_world_pose_round_trip() {
    let mut scene = SceneGraph::new();
    let parent = scene.create_with(rig());

    let pose = Transform {
        scale: 3.0,
        position: Vector3::new(-2.0, 5.0, 1.0),
        rotation: Euler::new(Deg(30.0), Deg(45.0), Deg(0.0)).into(),
    };
    let child = scene.create_with(pose);

    scene.attach_keep_world(parent, child).unwrap();
    assert_same_pose(scene.transform(child).unwrap(), pose);

    // The rewritten local is still a plain scale/rotation/position.
    let local = Transform::from_matrix(scene.local_transform(child).unwrap()).unwrap();
    assert!((local.scale - 1.5).abs() < 1e-4);
}
