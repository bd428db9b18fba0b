//! MedAssist AI - Yew WASM Frontend
//!
//! This crate provides the web UI for the MedAssist emergency-locator
//! mockup: the auth screen, the patient dashboard, and the hospital
//! admin dashboard.

mod app;
mod components;
mod pages;
mod toaster;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
