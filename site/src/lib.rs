//! # estatehub-site
//!
//! Leptos components for the EstateHub landing page, plus a server-side
//! renderer that turns the whole page into a static HTML document.
//!
//! ## Features
//!
//! - **Static content** - properties, services, stats and testimonials are
//!   literal data in [`content`]
//! - **One piece of state** - the mobile navigation [`disclosure`]
//! - **Pluggable auth** - sign-in/sign-up/user-menu widgets come from an
//!   injected [`auth::AuthCapability`]
//!
//! ## Quick Start
//!
//! ```rust
//! use estatehub_site::{render_page, auth::{AuthHandle, StaticAuth}};
//!
//! let html = render_page(AuthHandle::new(StaticAuth::signed_out()));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Logging
//!
//! Toggles and page renders emit `tracing` debug events. The crate installs
//! no subscriber; the browser build forwards them to the console.
//!
//! ## Architecture
//!
//! - [`content`] - literal content records
//! - [`disclosure`] - navigation disclosure state
//! - [`auth`] - external authentication capability
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`site`] - brand and contact constants
//!
//! The browser build (`estatehub-site-wasm`) mounts [`components::App`]
//! client-side with the `csr` feature.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod components;
pub mod content;
pub mod disclosure;
pub mod site;
pub mod styles;

use auth::AuthHandle;
use components::LandingDocument;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page as an HTML document.
///
/// The navigation disclosure starts closed, so the mobile menu panel is not
/// part of the output.
///
/// # Example
///
/// ```rust
/// use estatehub_site::{render_page, auth::{AuthHandle, StaticAuth}};
///
/// let html = render_page(AuthHandle::new(StaticAuth::signed_in()));
/// assert!(html.contains("List Property"));
/// ```
pub fn render_page(auth: AuthHandle) -> String {
    // The header's disclosure signal needs a reactive owner while rendering
    let owner = Owner::new();
    let html = owner.with(|| view! { <LandingDocument auth=auth /> }.to_html());
    tracing::debug!(bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::StaticAuth;

    #[test]
    fn renders_full_document() {
        let html = render_page(AuthHandle::new(StaticAuth::signed_out()));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<style>"));
        assert!(html.contains(site::BRAND_NAME));
    }

    #[test]
    fn initial_render_has_no_mobile_panel() {
        let html = render_page(AuthHandle::new(StaticAuth::signed_out()));

        assert!(html.contains("class=\"menu-toggle\""));
        assert!(!html.contains("class=\"mobile-menu\""));
    }
}
