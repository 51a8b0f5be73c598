use std::time::Duration;

use super::settings::Settings;
use super::time::TimeSystem;
use super::Application;
use crate::errors::*;

/// The context shared with `Application` callbacks during a frame.
#[derive(Debug, Default)]
pub struct Context {
    shutdown: bool,
}

impl Context {
    /// Shutdown the whole application at the end of this frame.
    #[inline]
    pub fn shutdown(&mut self) {
        self.shutdown = true;
    }

    /// Returns true if we are going to shutdown the application at the end of this frame.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }
}

/// Statistics of the frame being processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInfo {
    /// Zero-based index of this frame.
    pub frame: u64,
    /// The timestep measured before this frame.
    pub duration: Duration,
    pub fps: u32,
}

/// `Engine` is the root object of the game application. It owns the main loop and
/// takes take of trivial tasks like the execution order of `Application` callbacks.
pub struct Engine {
    pub time: TimeSystem,
    context: Context,
    max_frames: Option<u64>,
}

impl Engine {
    /// Constructs a new engine with default settings.
    pub fn new() -> Result<Self> {
        Engine::new_with(&Settings::default())
    }

    /// Setup engine with specified settings.
    pub fn new_with(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        if !settings.headless {
            warn!("Windowed mode is not available, the engine always runs headless.");
        }

        Ok(Engine {
            time: TimeSystem::new(&settings.engine),
            context: Context::default(),
            max_frames: settings.engine.max_frames,
        })
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Runs the main loop, this will block the working thread until we finished.
    /// Returns the number of frames executed.
    ///
    /// The first error returned by a callback stops the loop. `on_exit` is still
    /// called before that error is propagated.
    pub fn run<T: Application>(mut self, mut application: T) -> Result<u64> {
        info!("Engine starts.");

        let mut frames = 0;
        let result = self.execute(&mut application, &mut frames);
        let exit = application.on_exit(&mut self.context);

        info!("Engine stops after {} frames.", frames);
        result.and(exit).map(|_| frames)
    }

    fn execute<T: Application>(&mut self, application: &mut T, frames: &mut u64) -> Result<()> {
        application.on_initialize(&mut self.context)?;
        application.on_load_content(&mut self.context)?;

        while !self.context.is_shutdown() {
            if let Some(max) = self.max_frames {
                if *frames >= max {
                    break;
                }
            }

            let duration = self.time.advance();
            let info = FrameInfo {
                frame: *frames,
                duration,
                fps: self.time.fps(),
            };

            application.on_update(&mut self.context, &info)?;
            application.on_draw(&mut self.context, &info)?;
            *frames += 1;
        }

        Ok(())
    }
}
