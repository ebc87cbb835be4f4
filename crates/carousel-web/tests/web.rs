//! Browser tests for the mounted slider
//!
//! Run with `wasm-pack test --headless --firefox crates/carousel-web`.

#![cfg(target_arch = "wasm32")]

use carousel_web::Slider;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    host.dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .set_property("width", "600px")
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("data:image/gif;base64,R0lGODlhAQABAAAAACw=#{}", i)).collect()
}

fn count(host: &Element, selector: &str) -> u32 {
    host.query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test]
fn mounts_markup() {
    let host = host();
    let slider = Slider::mount(&host, images(3), None).unwrap();

    assert_eq!(count(&host, ".image-slider-wrapper"), 1);
    assert_eq!(count(&host, ".slide-image"), 3);
    assert_eq!(count(&host, "button.navigation-arrow"), 2);
    assert_eq!(slider.current_index(), 0);

    let previous = host
        .query_selector(".navigation-arrow-previous")
        .unwrap()
        .unwrap();
    assert_eq!(previous.get_attribute("aria-label").as_deref(), Some("Previous slide"));
    assert!(previous.has_attribute("disabled"));
}

#[wasm_bindgen_test]
fn loop_mode_renders_clones() {
    let host = host();
    let slider = Slider::mount(&host, images(3), Some(r#"{"loop":true}"#.to_string())).unwrap();
    assert_eq!(count(&host, ".slide-image"), 5);
    assert_eq!(slider.position(), 1);

    // Clamped, not reset
    slider.set_loop(false);
    assert_eq!(count(&host, ".slide-image"), 3);
    assert_eq!(slider.position(), 1);
}

#[wasm_bindgen_test]
fn next_moves_strip() {
    let host = host();
    let slider = Slider::mount(&host, images(3), None).unwrap();

    assert!(slider.next());
    assert_eq!(slider.current_index(), 1);
    assert!(slider.view_json().contains("translateX(calc(-100% - 0%))"));
    // Locked until the transition ends
    assert!(!slider.next());
}

#[wasm_bindgen_test]
fn empty_shows_placeholder() {
    let host = host();
    let slider = Slider::mount(&host, Vec::new(), None).unwrap();
    let text = host.text_content().unwrap_or_default();
    assert!(text.contains("No images provided"));
    assert!(slider.view_json().contains("\"empty\":true"));
}

#[wasm_bindgen_test]
fn rejects_bad_config() {
    let host = host();
    assert!(Slider::mount(&host, images(2), Some("{\"autoPlayInterval\":-5}".to_string())).is_err());
    assert!(Slider::mount(&host, images(2), Some("not json".to_string())).is_err());
}

#[wasm_bindgen_test]
fn unmount_removes_markup() {
    let host = host();
    let mut slider = Slider::mount(&host, images(2), None).unwrap();
    slider.set_auto_play(true, Some(1000.0)).unwrap();
    assert!(slider.status_json().contains("\"autoplayArmed\":true"));

    slider.unmount();
    assert!(!slider.is_mounted());
    assert_eq!(count(&host, ".image-slider-container"), 0);
}
