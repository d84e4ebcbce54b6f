//! Site header: brand, navigation, auth widgets and the mobile menu.
//!
//! The only stateful part of the page. The header owns a [`NavDisclosure`];
//! the menu button is its single writer.

use leptos::prelude::*;

use super::icons::{ICON_HOUSE, ICON_LIST, ICON_X, Icon};
use crate::auth::{AuthBranch, AuthHandle};
use crate::content::NAV_ANCHORS;
use crate::disclosure::NavDisclosure;
use crate::site::BRAND_NAME;

/// Where a set of auth actions is placed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionLayout {
    /// Right side of the header bar, hidden on small screens
    Desktop,
    /// Stacked, full width, inside the mobile menu
    Mobile,
}

impl ActionLayout {
    fn class(self) -> &'static str {
        match self {
            ActionLayout::Desktop => "auth-actions desktop-actions",
            ActionLayout::Mobile => "auth-actions mobile-actions",
        }
    }
}

/// Header with its own closed-by-default disclosure.
#[component]
pub fn Header(auth: AuthHandle) -> impl IntoView {
    let disclosure = NavDisclosure::new();
    view! { <HeaderBar auth=auth disclosure=disclosure /> }
}

/// Header markup for a given disclosure handle.
///
/// The mobile panel is only in the output while the disclosure is open.
#[component]
pub fn HeaderBar(auth: AuthHandle, disclosure: NavDisclosure) -> impl IntoView {
    let mobile_auth = auth.clone();

    view! {
        <header class="site-header">
            <div class="container">
                <div class="header-row">
                    <div class="brand">
                        <Icon path=ICON_HOUSE size="32" class="brand-mark" />
                        <span class="brand-name">{BRAND_NAME}</span>
                    </div>

                    <nav class="desktop-nav">
                        <NavLinks />
                    </nav>

                    <AuthActions auth=auth layout=ActionLayout::Desktop />

                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label="Toggle navigation"
                        aria-expanded=move || disclosure.is_open().to_string()
                        on:click=move |_| disclosure.toggle()
                    >
                        {move || if disclosure.is_open() {
                            view! { <Icon path=ICON_X size="24" /> }
                        } else {
                            view! { <Icon path=ICON_LIST size="24" /> }
                        }}
                    </button>
                </div>

                <Show when=move || disclosure.is_open()>
                    <MobileMenu auth={mobile_auth.clone()} />
                </Show>
            </div>
        </header>
    }
}

/// Collapsible panel shown below the header bar on small screens.
#[component]
pub fn MobileMenu(auth: AuthHandle) -> impl IntoView {
    view! {
        <div class="mobile-menu">
            <nav class="mobile-nav">
                <NavLinks />
                <AuthActions auth=auth layout=ActionLayout::Mobile />
            </nav>
        </div>
    }
}

/// The five in-page anchors, in order.
#[component]
pub fn NavLinks() -> impl IntoView {
    NAV_ANCHORS
        .iter()
        .map(|anchor| view! { <a href={anchor.href()} class="nav-link">{anchor.label}</a> })
        .collect::<Vec<_>>()
}

/// Sign-in/sign-up triggers or the user menu, depending on the session.
#[component]
pub fn AuthActions(auth: AuthHandle, layout: ActionLayout) -> impl IntoView {
    view! {
        <div class={layout.class()}>
            {move || match auth.branch() {
                AuthBranch::SignedOut => view! {
                    {auth.sign_in_trigger()}
                    {auth.sign_up_trigger()}
                }
                .into_any(),
                AuthBranch::SignedIn => view! {
                    <div class="user-menu-slot">{auth.user_menu()}</div>
                    <button class="btn btn-primary btn-sm" data-action="list-property">
                        "List Property"
                    </button>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticAuth;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render(auth: StaticAuth, disclosure: NavDisclosure) -> String {
        let auth = AuthHandle::new(auth);
        view! { <HeaderBar auth=auth disclosure=disclosure /> }.to_html()
    }

    fn mobile_panel(html: &str) -> &str {
        let start = html.find("class=\"mobile-menu\"").expect("mobile panel rendered");
        &html[start..]
    }

    #[test]
    fn closed_header_hides_mobile_panel() {
        Owner::new().with(|| {
            let html = render(StaticAuth::signed_out(), NavDisclosure::new());

            assert!(!html.contains("mobile-menu"));
            assert!(!html.contains("mobile-actions"));
            assert!(html.contains("aria-expanded=\"false\""));
        });
    }

    #[test]
    fn toggle_scenario_shows_then_hides_panel() {
        Owner::new().with(|| {
            let disclosure = NavDisclosure::new();
            assert!(!render(StaticAuth::signed_out(), disclosure).contains("mobile-menu"));

            disclosure.toggle();
            let html = render(StaticAuth::signed_out(), disclosure);
            assert!(html.contains("mobile-menu"));
            assert!(html.contains("aria-expanded=\"true\""));

            disclosure.toggle();
            assert!(!render(StaticAuth::signed_out(), disclosure).contains("mobile-menu"));
        });
    }

    #[test]
    fn open_panel_lists_anchors_in_order() {
        Owner::new().with(|| {
            let disclosure = NavDisclosure::new();
            disclosure.toggle();
            let html = render(StaticAuth::signed_out(), disclosure);
            let panel = mobile_panel(&html);

            assert_eq!(panel.matches("class=\"nav-link\"").count(), 5);
            let positions: Vec<_> = ["#home", "#properties", "#services", "#about", "#contact"]
                .iter()
                .map(|href| panel.find(&format!("href=\"{href}\"")).expect("anchor in panel"))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        });
    }

    #[test]
    fn open_panel_exposes_sign_in_triggers_when_signed_out() {
        Owner::new().with(|| {
            let disclosure = NavDisclosure::new();
            disclosure.toggle();
            let html = render(StaticAuth::signed_out(), disclosure);
            let panel = mobile_panel(&html);

            assert!(panel.contains("data-auth=\"sign-in\""));
            assert!(panel.contains("data-auth=\"sign-up\""));
            assert!(!panel.contains("List Property"));
        });
    }

    #[test]
    fn open_panel_exposes_user_menu_when_signed_in() {
        Owner::new().with(|| {
            let disclosure = NavDisclosure::new();
            disclosure.toggle();
            let html = render(StaticAuth::signed_in(), disclosure);
            let panel = mobile_panel(&html);

            assert!(panel.contains("data-auth=\"user-menu\""));
            assert!(panel.contains("List Property"));
            assert!(!panel.contains("data-auth=\"sign-in\""));
            assert!(!panel.contains("data-auth=\"sign-up\""));
        });
    }

    #[test]
    fn signed_in_header_shows_user_menu_only() {
        Owner::new().with(|| {
            let html = render(StaticAuth::signed_in(), NavDisclosure::new());

            assert!(html.contains("data-auth=\"user-menu\""));
            assert!(html.contains("List Property"));
            assert!(!html.contains("data-auth=\"sign-in\""));
            assert!(!html.contains("data-auth=\"sign-up\""));
        });
    }

    #[test]
    fn signed_out_header_shows_triggers_only() {
        Owner::new().with(|| {
            let html = render(StaticAuth::signed_out(), NavDisclosure::new());

            assert_eq!(html.matches("data-auth=\"sign-in\"").count(), 1);
            assert_eq!(html.matches("data-auth=\"sign-up\"").count(), 1);
            assert!(!html.contains("data-auth=\"user-menu\""));
            assert!(!html.contains("List Property"));
        });
    }

    #[test]
    fn brand_is_rendered() {
        Owner::new().with(|| {
            let html = render(StaticAuth::signed_out(), NavDisclosure::new());
            assert!(html.contains(BRAND_NAME));
        });
    }
}
