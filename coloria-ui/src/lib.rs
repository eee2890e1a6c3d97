//! coloria-ui - view components for the ColorIA web app
//!
//! Pure, props-driven components plus the browser hooks they rely on. No data
//! fetching happens here.

pub mod components;
pub mod display_types;
pub mod hooks;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
