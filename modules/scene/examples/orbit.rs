#[macro_use]
extern crate log;

use cortex::prelude::*;
use cortex_scene::prelude::*;

/// A sun spinning in place, with a planet orbiting it and a moon orbiting the planet.
struct Window {
    scene: SceneGraph,
    sun: Node,
    planet: Node,
    moon: Node,
}

impl Window {
    fn new() -> Self {
        let mut scene = SceneGraph::new();
        let sun = scene.create();
        let planet = scene.create_with(Transform::from_position([4.0, 0.0, 0.0]));
        let moon = scene.create_with(Transform::from_position([1.0, 0.0, 0.0]));

        Window {
            scene,
            sun,
            planet,
            moon,
        }
    }

    fn spin(&mut self, node: Node, position: [f32; 3], degrees: f32) -> Result<()> {
        let mut transform = Transform::from_position(position);
        transform.rotation = Euler::new(Deg(0.0), Deg(degrees), Deg(0.0)).into();

        self.scene.set_local_transform(node, transform)?;
        Ok(())
    }
}

impl Application for Window {
    fn on_load_content(&mut self, _: &mut Context) -> Result<()> {
        self.scene.attach(self.sun, self.planet)?;
        self.scene.attach(self.planet, self.moon)?;
        Ok(())
    }

    fn on_update(&mut self, _: &mut Context, info: &FrameInfo) -> Result<()> {
        let t = info.frame as f32;
        let (sun, planet) = (self.sun, self.planet);
        self.spin(sun, [0.0, 0.0, 0.0], t * 10.0)?;
        self.spin(planet, [4.0, 0.0, 0.0], t * 40.0)
    }

    fn on_draw(&mut self, _: &mut Context, info: &FrameInfo) -> Result<()> {
        for node in self.scene.traverse(self.sun) {
            if let Some(p) = self.scene.position(node) {
                info!(
                    "[frame {}] {} at ({:.2}, {:.2}, {:.2})",
                    info.frame, node, p.x, p.y, p.z
                );
            }
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut settings = Settings::default();
    settings.engine.max_fps = 10;
    settings.engine.max_frames = Some(36);

    Engine::new_with(&settings)?.run(Window::new())?;
    Ok(())
}
