//! Stats band. Doubles as the `#about` anchor target.

use leptos::prelude::*;

use crate::content::STATS;

/// Headline figures, one card each.
#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section id="about" class="section section-accent">
            <div class="container">
                <div class="card-grid grid-4">
                    {STATS.iter().map(|stat| view! {
                        <div class="card stat-card">
                            <div class="stat-number">{stat.number}</div>
                            <div class="stat-label">{stat.label}</div>
                            <div class="stat-description">{stat.description}</div>
                        </div>
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
    fn one_card_per_stat() {
        let html = view! { <Stats /> }.to_html();

        assert_eq!(html.matches("class=\"card stat-card\"").count(), 4);
        assert!(html.find("Properties Listed") < html.find("Years Experience"));
    }
}
