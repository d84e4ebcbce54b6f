//! Header behaviour in a real browser: the menu button drives the mobile panel.
//!
//! Run with `wasm-pack test --headless --firefox site/wasm`.

use estatehub_site::auth::{AuthHandle, StaticAuth};
use estatehub_site::components::Header;
use estatehub_site_wasm::logging;
use leptos::prelude::*;
use leptos::task::Executor;
use pretty_assertions::assert_eq;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const ANCHORS: [&str; 5] = ["#home", "#properties", "#services", "#about", "#contact"];

/// Mounts a header into a fresh host element and returns the host.
fn mount_header(auth: StaticAuth) -> HtmlElement {
    let _ = Executor::init_wasm_bindgen();
    logging::init();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let host: HtmlElement = document
        .create_element("div")
        .expect("create host")
        .unchecked_into();
    document
        .body()
        .expect("body")
        .append_child(&host)
        .expect("attach host");

    let auth = AuthHandle::new(auth);
    let handle = leptos::mount::mount_to(host.clone(), move || view! { <Header auth=auth /> });
    // Keep the header mounted for the rest of the test.
    std::mem::forget(handle);
    host
}

fn find(host: &HtmlElement, selector: &str) -> Option<Element> {
    host.query_selector(selector).expect("valid selector")
}

fn aria_expanded(host: &HtmlElement) -> Option<String> {
    find(host, ".menu-toggle")
        .expect("menu toggle")
        .get_attribute("aria-expanded")
}

fn panel_hrefs(host: &HtmlElement) -> Vec<String> {
    let links = host
        .query_selector_all(".mobile-menu .nav-link")
        .expect("valid selector");
    (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| el.get_attribute("href"))
        .collect()
}

async fn click_toggle(host: &HtmlElement) {
    let toggle: HtmlElement = find(host, ".menu-toggle")
        .expect("menu toggle")
        .unchecked_into();
    toggle.click();
    Executor::tick().await;
}

#[wasm_bindgen_test]
async fn menu_button_opens_then_closes_panel() {
    let host = mount_header(StaticAuth::signed_out());

    assert!(find(&host, ".mobile-menu").is_none());
    assert_eq!(aria_expanded(&host).as_deref(), Some("false"));

    click_toggle(&host).await;
    assert!(find(&host, ".mobile-menu").is_some());
    assert_eq!(aria_expanded(&host).as_deref(), Some("true"));
    assert_eq!(panel_hrefs(&host), ANCHORS);
    assert!(find(&host, ".mobile-menu [data-auth=\"sign-in\"]").is_some());
    assert!(find(&host, ".mobile-menu [data-auth=\"sign-up\"]").is_some());

    click_toggle(&host).await;
    assert!(find(&host, ".mobile-menu").is_none());
    assert_eq!(aria_expanded(&host).as_deref(), Some("false"));
    assert!(panel_hrefs(&host).is_empty());
}

#[wasm_bindgen_test]
async fn open_panel_follows_signed_in_session() {
    let host = mount_header(StaticAuth::signed_in());

    click_toggle(&host).await;
    assert!(find(&host, ".mobile-menu [data-auth=\"user-menu\"]").is_some());
    assert!(find(&host, ".mobile-menu [data-action=\"list-property\"]").is_some());
    assert!(find(&host, ".mobile-menu [data-auth=\"sign-in\"]").is_none());
    assert!(find(&host, ".mobile-menu [data-auth=\"sign-up\"]").is_none());
}

#[wasm_bindgen_test]
async fn repeated_clicks_follow_parity() {
    let host = mount_header(StaticAuth::signed_out());

    for clicks in 1..=5 {
        click_toggle(&host).await;
        let open = clicks % 2 == 1;
        assert_eq!(find(&host, ".mobile-menu").is_some(), open, "after {clicks} clicks");
        assert_eq!(
            aria_expanded(&host).as_deref(),
            Some(if open { "true" } else { "false" })
        );
    }
}
