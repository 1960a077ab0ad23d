//! User-facing text.
//!
//! - [`types`]: the closed [`Message`] catalogue, one variant per line of output
//! - [`display`]: the English rendering of each variant
//! - [`macros`]: `msg_*` macros that print a message with its severity prefix
//!
//! Keeping text in one enum means command handlers never format strings
//! themselves and every message can be found from its variant name.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
