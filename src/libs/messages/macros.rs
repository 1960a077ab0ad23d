//! Output macros for [`super::Message`] values.
//!
//! Every line agenda shows the user goes through one of these macros, so the
//! same call site works for an interactive session and for a debugging run
//! where output should be interleaved with the store's `tracing` events.
//!
//! ## Output routing
//!
//! The routing decision is made once per process by [`is_debug_mode`]:
//!
//! - **`AGENDA_DEBUG`** set (any value): debug mode
//! - **`RUST_LOG`** set (any value): debug mode
//! - otherwise: plain console output
//!
//! ```text
//! msg_info!(msg) ──▶ debug mode? ──yes──▶ tracing::info!("ℹ️  {msg}")
//!                        │
//!                        no──▶ println!("ℹ️  {msg}")
//! ```
//!
//! ## Macros
//!
//! ### Display
//! - **`msg_print!`**: no prefix; `msg_print!(msg, true)` adds blank lines around it
//! - **`msg_success!`**: ✅ prefix, stdout
//! - **`msg_info!`**: ℹ️ prefix, stdout
//! - **`msg_warning!`**: ⚠️ prefix, stdout
//!
//! ### Errors
//! - **`msg_error!`**: ❌ prefix, stderr
//! - **`msg_error_anyhow!`**: builds an `anyhow::Error` carrying the ❌ text,
//!   for command handlers that return `anyhow::Result`
//!
//! ### Debug
//! - **`msg_debug!`**: 🔍 prefix, printed only in debug mode
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda::{msg_success, msg_error};
//! use agenda::libs::messages::Message;
//!
//! msg_success!(Message::TaskRegistered(7));
//! msg_error!(Message::TaskNotFoundWithId(42));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether output is routed to `tracing`. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("AGENDA_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without prefix. `msg_print!(msg, true)` surrounds it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️  {}", $msg);
        } else {
            println!("ℹ️  {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️  {}", $msg);
        } else {
            println!("⚠️  {}", $msg);
        }
    };
}

/// Errors go to stderr outside debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Only emitted in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
