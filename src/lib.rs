//! Review Desk: a Leptos front end for moderating product reviews held by a
//! remote REST service.
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod editor;
pub mod list_controller;
pub mod models;
pub mod polling;
pub mod theme;
pub mod utils;
pub mod validation;

#[cfg(test)]
mod test_support;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    utils::panic_hook::init();
    leptos::mount_to_body(app::App);
}
