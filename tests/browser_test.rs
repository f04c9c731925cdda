#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use review_desk::polling::start_polling;
use review_desk::theme::{
    commit_theme, init_theme, BrowserStorage, DocumentRoot, Theme, ThemeStorage, THEME_KEY,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root_classes() -> web_sys::DomTokenList {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap()
        .class_list()
}

fn clear_stored_theme() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(THEME_KEY).unwrap();
}

#[wasm_bindgen_test]
async fn polling_ticks_until_cancelled() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = ticks.clone();
    let handle = start_polling("test poll", Duration::from_millis(20), move || {
        counter.set(counter.get() + 1)
    });
    assert!(handle.is_active());

    sleep(Duration::from_millis(150)).await;
    let seen = ticks.get();
    assert!(seen >= 2, "expected several ticks, saw {seen}");

    handle.cancel();
    sleep(Duration::from_millis(100)).await;
    assert_eq!(ticks.get(), seen);
}

#[wasm_bindgen_test]
async fn dropping_the_handle_stops_polling() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = ticks.clone();
    {
        let _handle = start_polling("scoped poll", Duration::from_millis(10), move || {
            counter.set(counter.get() + 1)
        });
    }

    sleep(Duration::from_millis(60)).await;
    assert_eq!(ticks.get(), 0);
}

#[wasm_bindgen_test]
fn theme_defaults_to_dark_on_document_root() {
    clear_stored_theme();

    let theme = init_theme(&BrowserStorage, &DocumentRoot);

    assert_eq!(theme, Theme::Dark);
    let classes = root_classes();
    assert!(classes.contains("dark"));
    assert!(!classes.contains("light"));
}

#[wasm_bindgen_test]
fn committed_theme_survives_a_reload() {
    clear_stored_theme();
    init_theme(&BrowserStorage, &DocumentRoot);

    commit_theme(Theme::Light, &BrowserStorage, &DocumentRoot);

    assert_eq!(BrowserStorage.load().as_deref(), Some("light"));
    let classes = root_classes();
    assert!(classes.contains("light"));
    assert!(!classes.contains("dark"));
    assert_eq!(init_theme(&BrowserStorage, &DocumentRoot), Theme::Light);

    clear_stored_theme();
}
