//! Services grid.

use leptos::prelude::*;

use super::icons::Icon;
use crate::content::SERVICES;

/// Section anchored at `#services`, one card per service.
#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>"Our Services"</h2>
                    <p>"Comprehensive real estate services to guide you through every step of your property journey"</p>
                </div>

                <div class="card-grid grid-3">
                    {SERVICES.iter().map(|service| view! {
                        <article class="card service-card">
                            <div class="service-icon">
                                <Icon path={service.icon.path()} size="32" />
                            </div>
                            <h3 class="service-title">{service.title}</h3>
                            <p class="service-description">{service.description}</p>
                        </article>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_card_per_service_in_order() {
        let html = view! { <Services /> }.to_html();

        assert!(html.contains("id=\"services\""));
        assert_eq!(html.matches("class=\"card service-card\"").count(), 6);
        let positions: Vec<_> = SERVICES
            .iter()
            .map(|s| html.find(s.title).expect("title rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
