pub mod app;
pub mod apply;
pub mod cli;
pub mod logging;
pub mod util;

pub use app::config::Settings;
pub use apply::{Action, Apply, ApplyError};
