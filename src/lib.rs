//! # What is This?
//!
//! Cortex is a small game framework core. It carries the pieces a frame-driven
//! game needs before any rendering happens: a headless main loop with a fixed
//! lifecycle, frame timing, settings, and the generational handle pools that the
//! feature modules (e.g. `cortex-scene`) build their arenas on.
//!
//! ## Application
//!
//! Implement the `Application` trait and hand it over to `Engine::run`. Every frame
//! the engine advances its `TimeSystem`, then calls `on_update` and `on_draw` in
//! this order, until `Context::shutdown` is requested or the configured frame
//! budget is reached.
//!
//! ```rust
//! use cortex::prelude::*;
//!
//! struct Window;
//!
//! impl Application for Window {}
//!
//! let mut settings = Settings::default();
//! settings.engine.max_fps = 0;
//! settings.engine.max_frames = Some(3);
//!
//! let frames = Engine::new_with(&settings).unwrap().run(Window).unwrap();
//! assert_eq!(frames, 3);
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub extern crate cgmath;

#[macro_use]
pub mod utils;
pub mod application;
pub mod errors;
pub mod math;
pub mod prelude;
