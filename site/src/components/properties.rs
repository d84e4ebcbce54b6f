//! Featured properties grid.

use leptos::prelude::*;

use super::icons::{ICON_BATHTUB, ICON_BED, ICON_HEART, ICON_MAP_PIN, ICON_SQUARE, Icon};
use crate::content::{PROPERTIES, Property};

/// Section anchored at `#properties`, one card per listing.
#[component]
pub fn FeaturedProperties() -> impl IntoView {
    view! {
        <section id="properties" class="section section-muted">
            <div class="container">
                <div class="section-heading">
                    <h2>"Featured Properties"</h2>
                    <p>"Discover our handpicked selection of premium properties in the most desirable locations"</p>
                </div>

                <div class="card-grid grid-4">
                    {PROPERTIES.iter().map(|property| view! { <PropertyCard property={*property} /> }).collect::<Vec<_>>()}
                </div>

                <div class="section-actions">
                    <button class="btn btn-primary btn-lg">"View All Properties"</button>
                </div>
            </div>
        </section>
    }
}

/// A single listing card
#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    view! {
        <article class="card property-card" data-property-id={property.id.to_string()}>
            <div class="property-media">
                <img src=property.image alt=property.title class="property-image" />
                <div class="property-badges">
                    {property.featured.then(|| view! { <span class="badge badge-featured">"Featured"</span> })}
                    <span class="badge badge-secondary">{property.kind.label()}</span>
                </div>
                <button class="favorite-button" type="button" aria-label="Save property">
                    <Icon path=ICON_HEART size="16" />
                </button>
            </div>

            <div class="card-body">
                <div class="property-location">
                    <Icon path=ICON_MAP_PIN size="16" />
                    {property.location}
                </div>
                <h3 class="property-title">{property.title}</h3>
                <div class="property-price">{property.price}</div>

                <div class="property-facts">
                    <span class="property-fact">
                        <Icon path=ICON_BED size="16" />
                        {property.beds} " beds"
                    </span>
                    <span class="property-fact">
                        <Icon path=ICON_BATHTUB size="16" />
                        {property.baths} " baths"
                    </span>
                    <span class="property-fact">
                        <Icon path=ICON_SQUARE size="16" />
                        {property.sqft} " sqft"
                    </span>
                </div>

                <button class="btn btn-outline btn-block">"View Details"</button>
            </div>
        </article>
    }
}
