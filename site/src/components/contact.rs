//! Contact band. Static details only, nothing is submitted anywhere.

use leptos::prelude::*;

use super::icons::{ICON_ENVELOPE, ICON_MAP_PIN, ICON_PHONE, Icon};
use crate::site::{CONTACT_EMAIL, CONTACT_OFFICE, CONTACT_PHONE};

/// Section anchored at `#contact`.
#[component]
pub fn Contact() -> impl IntoView {
    let tel = format!("tel:{}", CONTACT_PHONE.replace([' ', '(', ')', '-'], ""));
    let mailto = format!("mailto:{CONTACT_EMAIL}");

    view! {
        <section id="contact" class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>"Get in Touch"</h2>
                    <p>"Questions about a listing or ready to sell? Our agents are a call away."</p>
                </div>

                <div class="contact-grid">
                    <a href=tel class="contact-item">
                        <Icon path=ICON_PHONE size="24" />
                        <span>{CONTACT_PHONE}</span>
                    </a>
                    <a href=mailto class="contact-item">
                        <Icon path=ICON_ENVELOPE size="24" />
                        <span>{CONTACT_EMAIL}</span>
                    </a>
                    <div class="contact-item">
                        <Icon path=ICON_MAP_PIN size="24" />
                        <span>{CONTACT_OFFICE}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn links_phone_and_mail() {
        let html = view! { <Contact /> }.to_html();

        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("href=\"tel:+15551234567\""));
        assert!(html.contains("href=\"mailto:hello@estatehub.com\""));
    }
}
