//! WebGPU client for Flappy
//!
//! Engine-free rendering using wgpu 24.0 with the "webgpu" feature. The
//! browser host and GPU code only build for wasm32; scene building, input
//! mapping and HUD state are plain Rust and are tested natively.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod camera;
mod hud;
mod input;
mod mesh;
mod renderer;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::start_game;
