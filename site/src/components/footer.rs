//! Page footer.

use leptos::prelude::*;

use super::header::NavLinks;
use super::icons::{ICON_HOUSE, Icon};
use crate::site::{BRAND_NAME, COPYRIGHT};

/// Page footer: brand, anchors, copyright.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-brand">
                    <Icon path=ICON_HOUSE size="24" class="brand-mark" />
                    <span class="footer-title">{BRAND_NAME}</span>
                </div>
                <nav class="footer-links">
                    <NavLinks />
                </nav>
                <p class="footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
