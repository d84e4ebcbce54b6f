//! End-to-end checks on the server-rendered landing page.

use estatehub_site::auth::{AuthCapability, AuthHandle, StaticAuth};
use estatehub_site::content::{NAV_ANCHORS, PROPERTIES, SERVICES, STATS, TESTIMONIALS};
use estatehub_site::render_page;
use leptos::prelude::*;
use pretty_assertions::assert_eq;

fn page(auth: impl AuthCapability) -> String {
    render_page(AuthHandle::new(auth))
}

#[test]
fn sections_render_in_fixed_order() {
    let html = page(StaticAuth::signed_out());

    let order: Vec<_> = [
        "class=\"site-header\"",
        "id=\"home\"",
        "id=\"properties\"",
        "id=\"services\"",
        "id=\"about\"",
        "What Our Clients Say",
        "id=\"contact\"",
        "class=\"site-footer\"",
    ]
    .iter()
    .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
    .collect();

    assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");
}

#[test]
fn every_anchor_has_a_target() {
    let html = page(StaticAuth::signed_out());

    for anchor in NAV_ANCHORS {
        assert!(html.contains(&format!("id=\"{}\"", anchor.id)), "{}", anchor.id);
    }
}

#[test]
fn card_counts_match_content() {
    let html = page(StaticAuth::signed_out());

    assert_eq!(html.matches("class=\"card property-card\"").count(), PROPERTIES.len());
    assert_eq!(html.matches("class=\"card service-card\"").count(), SERVICES.len());
    assert_eq!(html.matches("class=\"card stat-card\"").count(), STATS.len());
    assert_eq!(html.matches("class=\"card testimonial-card\"").count(), TESTIMONIALS.len());
}

#[test]
fn auth_branches_are_mutually_exclusive() {
    let signed_out = page(StaticAuth::signed_out());
    assert!(signed_out.contains("data-auth=\"sign-in\""));
    assert!(!signed_out.contains("data-action=\"list-property\""));

    let signed_in = page(StaticAuth::signed_in());
    assert!(signed_in.contains("data-action=\"list-property\""));
    assert!(!signed_in.contains("data-auth=\"sign-in\""));
}

/// Provider that renders recognisable markers, to show the header only
/// ever reaches widgets through the capability.
struct MarkerAuth {
    signed_in: bool,
}

impl AuthCapability for MarkerAuth {
    fn is_authenticated(&self) -> bool {
        self.signed_in
    }

    fn sign_in_trigger(&self) -> AnyView {
        view! { <span class="marker-sign-in"></span> }.into_any()
    }

    fn sign_up_trigger(&self) -> AnyView {
        view! { <span class="marker-sign-up"></span> }.into_any()
    }

    fn user_menu(&self) -> AnyView {
        view! { <span class="marker-user-menu"></span> }.into_any()
    }
}

#[test]
fn header_delegates_widgets_to_the_provider() {
    let html = page(MarkerAuth { signed_in: false });
    assert_eq!(html.matches("marker-sign-in").count(), 1);
    assert_eq!(html.matches("marker-sign-up").count(), 1);
    assert!(!html.contains("marker-user-menu"));

    let html = page(MarkerAuth { signed_in: true });
    assert_eq!(html.matches("marker-user-menu").count(), 1);
    assert!(!html.contains("marker-sign-in"));
}
