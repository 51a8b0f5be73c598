use cortex::prelude::*;
use cortex_scene::prelude::*;

/// A pendulum-ish rig: a pivot moving along x every frame, and a bob hanging
/// under it. Draw collects world positions in traversal order.
struct Rig {
    scene: SceneGraph,
    pivot: Node,
    bob: Node,
    draws: Vec<Vec<Vector3<f32>>>,
}

impl Rig {
    fn new() -> Self {
        let mut scene = SceneGraph::new();
        let pivot = scene.create();
        let bob = scene.create_with(Transform::from_position([0.0, -2.0, 0.0]));

        Rig {
            scene,
            pivot,
            bob,
            draws: Vec::new(),
        }
    }
}

impl Application for Rig {
    fn on_load_content(&mut self, _: &mut Context) -> Result<()> {
        self.scene.attach(self.pivot, self.bob)?;
        Ok(())
    }

    fn on_update(&mut self, ctx: &mut Context, info: &FrameInfo) -> Result<()> {
        let x = (info.frame + 1) as f32;
        self.scene
            .set_local_transform(self.pivot, Transform::from_position([x, 0.0, 0.0]))?;

        if info.frame == 9 {
            ctx.shutdown();
        }

        Ok(())
    }

    fn on_draw(&mut self, _: &mut Context, _: &FrameInfo) -> Result<()> {
        let scene = &self.scene;
        let positions = scene
            .traverse(self.pivot)
            .filter_map(|v| scene.position(v))
            .collect();

        self.draws.push(positions);
        Ok(())
    }
}

fn settings(max_frames: Option<u64>) -> Settings {
    let mut settings = Settings::default();
    settings.engine.max_fps = 0;
    settings.engine.max_frames = max_frames;
    settings
}

#[test]
fn world_positions_follow_updates() {
    let _ = env_logger::try_init();

    let mut rig = Rig::new();
    let engine = Engine::new_with(&settings(Some(3))).unwrap();
    let frames = engine.run(&mut rig).unwrap();
    assert_eq!(frames, 3);

    assert_eq!(rig.draws.len(), 3);
    for (i, positions) in rig.draws.iter().enumerate() {
        let x = (i + 1) as f32;
        assert_eq!(
            positions,
            &[Vector3::new(x, 0.0, 0.0), Vector3::new(x, -2.0, 0.0)]
        );
    }
}

#[test]
fn shutdown_from_update() {
    let mut rig = Rig::new();
    let engine = Engine::new_with(&settings(None)).unwrap();
    assert_eq!(engine.run(&mut rig).unwrap(), 10);
    assert_eq!(rig.scene.position(rig.bob), Some(Vector3::new(10.0, -2.0, 0.0)));
}

struct Knot {
    scene: SceneGraph,
    exited: bool,
}

impl Application for Knot {
    fn on_update(&mut self, _: &mut Context, _: &FrameInfo) -> Result<()> {
        let root = self.scene.create();
        let leaf = self.scene.create();
        self.scene.attach(root, leaf)?;
        self.scene.attach(leaf, root)?;
        Ok(())
    }

    fn on_exit(&mut self, _: &mut Context) -> Result<()> {
        self.exited = true;
        Ok(())
    }
}

#[test]
fn scene_errors_abort_the_loop() {
    let mut knot = Knot {
        scene: SceneGraph::new(),
        exited: false,
    };

    let engine = Engine::new_with(&settings(Some(5))).unwrap();
    match engine.run(&mut knot) {
        Err(Error::Application(msg)) => assert!(msg.starts_with("Cycle error")),
        other => panic!("unexpected {:?}", other),
    }

    assert!(knot.exited);
    assert_eq!(knot.scene.len(), 2);
}
