//! Platform hosts
//!
//! - `web`: DOM binding and the animation-frame loop (wasm32 only)
//! - `headless`: fixed geometry for native runs and tests

pub mod headless;

#[cfg(target_arch = "wasm32")]
pub mod web;
