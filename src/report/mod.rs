//! Display-ready report model and formatter.

mod format;
mod models;
mod window;

pub use format::*;
pub use models::*;
pub use window::*;
