#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use neon_portfolio::frontend::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount() -> (yew::AppHandle<App>, Element) {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    let handle = yew::Renderer::<App>::with_root(root.clone()).render();

    (handle, root)
}

fn dispatch_mousemove(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);

    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn particle_styles(root: &Element) -> Vec<String> {
    let nodes = root.query_selector_all(".particle").unwrap();
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|element| element.get_attribute("style").unwrap_or_default())
        .collect()
}

#[wasm_bindgen_test(async)]
async fn renders_fixed_particle_field_and_project_table() {
    let (handle, root) = mount();
    TimeoutFuture::new(50).await;

    assert_eq!(particle_styles(&root).len(), 20);

    let cards = root.query_selector_all(".project-card").unwrap();
    assert_eq!(cards.length(), 4);

    for index in 0..cards.length() {
        let card: Element = cards.item(index).unwrap().dyn_into().unwrap();

        let title = card.query_selector("h3").unwrap().unwrap();
        assert!(!title.text_content().unwrap_or_default().trim().is_empty());

        let link = card.query_selector(".project-link").unwrap().unwrap();
        let href = link.get_attribute("href").unwrap_or_default();
        assert!(href.starts_with("https://"), "unexpected link {href}");
    }

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn glow_tracks_the_latest_pointer_position() {
    let (handle, root) = mount();
    TimeoutFuture::new(50).await;

    dispatch_mousemove(120, 80);
    dispatch_mousemove(400, 250);
    TimeoutFuture::new(50).await;

    let glow = root.query_selector(".cursor-glow").unwrap().unwrap();
    let style = glow.get_attribute("style").unwrap_or_default();
    assert!(style.contains("--glow-x: 400px"), "style was {style}");
    assert!(style.contains("--glow-y: 250px"), "style was {style}");

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn particle_field_survives_re_renders_unchanged() {
    let (handle, root) = mount();
    TimeoutFuture::new(50).await;

    let before = particle_styles(&root);

    // A pointer update re-renders the whole page.
    dispatch_mousemove(33, 44);
    TimeoutFuture::new(50).await;

    let after = particle_styles(&root);
    assert_eq!(before, after);

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn scrolled_in_region_latches_and_stays_revealed() {
    let (handle, root) = mount();
    TimeoutFuture::new(50).await;

    let title = document().get_element_by_id("projects-title").unwrap();
    title.scroll_into_view();
    TimeoutFuture::new(300).await;

    let class = title.get_attribute("class").unwrap_or_default();
    assert!(class.contains("is-revealed"), "class was {class}");

    // Scrolling away must not undo the reveal.
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    TimeoutFuture::new(300).await;

    let class = title.get_attribute("class").unwrap_or_default();
    assert!(class.contains("is-revealed"), "class was {class}");

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn teardown_leaves_no_markup_and_inert_listeners() {
    let (handle, root) = mount();
    TimeoutFuture::new(50).await;

    handle.destroy();
    TimeoutFuture::new(50).await;
    assert_eq!(root.child_element_count(), 0);

    // Late events against the removed page must be no-ops.
    dispatch_mousemove(999, 999);
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 10.0);
    TimeoutFuture::new(50).await;
    assert_eq!(root.child_element_count(), 0);

    root.remove();
}
