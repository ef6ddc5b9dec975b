// Exit codes for CLI automation
pub const SUCCESS: i32 = 0;
pub const ERROR: i32 = 1;
/// Argument errors; clap exits with this code itself
pub const USAGE: i32 = 2;
