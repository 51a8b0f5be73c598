pub use crate::application::{Application, Context, Engine, FrameInfo, Settings, TimeSystem};
pub use crate::errors::{Error, Result};
pub use crate::math::prelude::*;
pub use crate::utils::prelude::*;
