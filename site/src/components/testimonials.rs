//! Client testimonials.

use leptos::prelude::*;

use super::icons::{ICON_STAR, Icon};
use crate::content::{TESTIMONIALS, Testimonial};

/// Quote cards, one per testimonial.
#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section section-muted testimonials">
            <div class="container">
                <div class="section-heading">
                    <h2>"What Our Clients Say"</h2>
                    <p>"Don't just take our word for it - hear from our satisfied clients"</p>
                </div>

                <div class="card-grid grid-3">
                    {TESTIMONIALS.iter().map(|t| view! { <TestimonialCard testimonial={*t} /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let quote = format!("\u{201c}{}\u{201d}", testimonial.content);

    view! {
        <article class="card testimonial-card">
            <div class="rating">
                {(0..testimonial.rating).map(|_| view! {
                    <Icon path=ICON_STAR class="star" />
                }).collect::<Vec<_>>()}
            </div>
            <p class="testimonial-quote">{quote}</p>
            <div class="testimonial-author">
                <img src=testimonial.avatar alt=testimonial.name class="avatar" />
                <div>
                    <div class="author-name">{testimonial.name}</div>
                    <div class="author-role">{testimonial.role}</div>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_card_per_testimonial_in_order() {
        let html = view! { <Testimonials /> }.to_html();

        assert_eq!(html.matches("class=\"card testimonial-card\"").count(), 3);
        assert!(html.find("Sarah Johnson") < html.find("Michael Chen"));
        assert!(html.find("Michael Chen") < html.find("Emily Rodriguez"));
    }

    #[test]
    fn stars_match_rating() {
        let mut testimonial = TESTIMONIALS[0];
        testimonial.rating = 3;
        let html = view! { <TestimonialCard testimonial=testimonial /> }.to_html();

        assert_eq!(html.matches("class=\"star\"").count(), 3);
    }
}
