use leptos::*;
use wasm_bindgen::JsCast;

/// A fresh container attached to `<body>`.
pub fn container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into()
}

pub fn mount<F, N>(container: &web_sys::HtmlElement, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    mount_to(container.clone(), view);
}

pub fn click(container: &web_sys::HtmlElement, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

pub fn text_of(container: &web_sys::HtmlElement, selector: &str) -> Option<String> {
    container
        .query_selector(selector)
        .unwrap()
        .and_then(|element| element.text_content())
}

pub fn count(container: &web_sys::HtmlElement, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

pub fn remove(container: web_sys::HtmlElement) {
    container.remove();
}
