use std::fs;

use cortex::prelude::*;

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
    fail_at: Option<u64>,
}

impl Application for Recorder {
    fn on_initialize(&mut self, _: &mut Context) -> Result<()> {
        self.calls.push("initialize".into());
        Ok(())
    }

    fn on_load_content(&mut self, _: &mut Context) -> Result<()> {
        self.calls.push("load_content".into());
        Ok(())
    }

    fn on_update(&mut self, _: &mut Context, info: &FrameInfo) -> Result<()> {
        if Some(info.frame) == self.fail_at {
            return Err(cortex::app_err!("update failed at frame {}", info.frame));
        }

        self.calls.push(format!("update {}", info.frame));
        Ok(())
    }

    fn on_draw(&mut self, _: &mut Context, info: &FrameInfo) -> Result<()> {
        self.calls.push(format!("draw {}", info.frame));
        Ok(())
    }

    fn on_exit(&mut self, _: &mut Context) -> Result<()> {
        self.calls.push("exit".into());
        Ok(())
    }
}

fn unthrottled(max_frames: u64) -> Settings {
    let mut settings = Settings::default();
    settings.engine.max_fps = 0;
    settings.engine.max_frames = Some(max_frames);
    settings
}

#[test]
fn lifecycle_order() {
    let _ = env_logger::try_init();

    let mut app = Recorder::default();
    let frames = Engine::new_with(&unthrottled(2))
        .unwrap()
        .run(&mut app)
        .unwrap();

    assert_eq!(frames, 2);
    assert_eq!(
        app.calls,
        [
            "initialize",
            "load_content",
            "update 0",
            "draw 0",
            "update 1",
            "draw 1",
            "exit"
        ]
    );
}

#[test]
fn error_stops_loop() {
    let mut app = Recorder {
        fail_at: Some(1),
        ..Default::default()
    };

    match Engine::new_with(&unthrottled(5)).unwrap().run(&mut app) {
        Err(Error::Application(msg)) => assert_eq!(msg, "update failed at frame 1"),
        other => panic!("unexpected {:?}", other),
    }

    assert_eq!(app.calls.last().map(|v| v.as_str()), Some("exit"));
    assert!(!app.calls.iter().any(|v| v == "draw 1"));
}

#[test]
fn shutdown_request() {
    struct Once;

    impl Application for Once {
        fn on_update(&mut self, ctx: &mut Context, _: &FrameInfo) -> Result<()> {
            ctx.shutdown();
            Ok(())
        }
    }

    let mut settings = unthrottled(0);
    settings.engine.max_frames = None;
    assert_eq!(Engine::new_with(&settings).unwrap().run(Once).unwrap(), 1);
}

#[test]
fn load_settings_from_file() {
    let path = std::env::temp_dir().join(format!("cortex-settings-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{ "engine": { "max_fps": 0, "max_frames": 4, "time_smooth_step": 3 } }"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(settings.engine.time_smooth_step, 3);
    assert_eq!(Engine::new_with(&settings).unwrap().run(Once).unwrap(), 4);

    struct Once;
    impl Application for Once {}
}

#[test]
fn invalid_settings() {
    assert!(Settings::load("/non-existent/cortex.json").is_err());

    match Settings::from_json("{ not json") {
        Err(Error::Json(_)) => {}
        other => panic!("unexpected {:?}", other),
    }

    let mut settings = Settings::default();
    settings.engine.min_fps = 120;
    settings.engine.max_fps = 60;
    assert!(Engine::new_with(&settings).is_err());
}
