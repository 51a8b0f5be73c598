//! A headless application model.
//!
//! ## Application
//!
//! We offers a convenient trait `Application` which defines a simple
//! application-state-model. `on_initialize` and `on_load_content` are called once,
//! then the per-frame methods `on_update` and `on_draw` are called in this order,
//! until the application asks the `Context` to shutdown.
//!
//! ## Engine
//!
//! `Engine` is where we actully running the main loop and fire `Application` instance.

pub mod settings;
pub mod time;

mod engine;

pub use self::engine::{Context, Engine, FrameInfo};
pub use self::settings::{EngineParams, Settings};
pub use self::time::TimeSystem;

use crate::errors::Result;

/// `Application` is a user-friendly facade to building application, which defines a number
/// of event functions that get executed in a pre-determined order.
pub trait Application {
    /// `Application::on_initialize` is called once before the main loop starts.
    fn on_initialize(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }

    /// `Application::on_load_content` is called once after initialization.
    fn on_load_content(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }

    /// `Application::on_update` is called every frame. Its the main workhorse
    /// function for frame updates.
    fn on_update(&mut self, _: &mut Context, _: &FrameInfo) -> Result<()> {
        Ok(())
    }

    /// `Application::on_draw` is called after `on_update` every frame.
    fn on_draw(&mut self, _: &mut Context, _: &FrameInfo) -> Result<()> {
        Ok(())
    }

    /// `Application::on_exit` is called when exiting.
    fn on_exit(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }
}

impl<'a, T: Application + ?Sized> Application for &'a mut T {
    fn on_initialize(&mut self, ctx: &mut Context) -> Result<()> {
        (**self).on_initialize(ctx)
    }

    fn on_load_content(&mut self, ctx: &mut Context) -> Result<()> {
        (**self).on_load_content(ctx)
    }

    fn on_update(&mut self, ctx: &mut Context, info: &FrameInfo) -> Result<()> {
        (**self).on_update(ctx, info)
    }

    fn on_draw(&mut self, ctx: &mut Context, info: &FrameInfo) -> Result<()> {
        (**self).on_draw(ctx, info)
    }

    fn on_exit(&mut self, ctx: &mut Context) -> Result<()> {
        (**self).on_exit(ctx)
    }
}
