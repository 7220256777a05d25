//! Command implementations behind the CLI

pub mod shorten;

pub use shorten::{handle_shorten_command, handle_shorten_command_with_input, ShortenArgs};
