//! Hero banner with the (non-functional) search form.

use leptos::prelude::*;

use super::icons::{ICON_CURRENCY_DOLLAR, ICON_HOUSE, ICON_MAGNIFYING_GLASS, ICON_MAP_PIN, Icon};
use crate::content::{HERO_HIGHLIGHTS, PRICE_RANGE_OPTIONS, PROPERTY_TYPE_OPTIONS, SearchOption};
use crate::site::HERO_IMAGE;

/// Full-height banner that anchors `#home`.
#[component]
pub fn Hero() -> impl IntoView {
    let background = format!("background-image: url({HERO_IMAGE});");

    view! {
        <section id="home" class="hero">
            <div class="hero-background" style=background>
                <div class="hero-overlay"></div>
            </div>

            <div class="container hero-content">
                <h1 class="hero-title">
                    "Find Your"
                    <span class="hero-title-accent">"Dream Home"</span>
                </h1>
                <p class="hero-description">
                    "Discover the perfect property with our comprehensive real estate platform. "
                    "Your journey to homeownership starts here."
                </p>

                <div class="search-panel">
                    <div class="search-grid">
                        <label class="search-field">
                            <Icon path=ICON_MAP_PIN class="search-field-icon" />
                            <input type="text" class="search-input" placeholder="Location" />
                        </label>
                        <SearchSelect icon=ICON_HOUSE placeholder="Property Type" options={&PROPERTY_TYPE_OPTIONS} />
                        <SearchSelect icon=ICON_CURRENCY_DOLLAR placeholder="Price Range" options={&PRICE_RANGE_OPTIONS} />
                        <button type="button" class="btn btn-primary btn-lg search-button">
                            <Icon path=ICON_MAGNIFYING_GLASS />
                            "Search"
                        </button>
                    </div>

                    <div class="search-highlights">
                        {HERO_HIGHLIGHTS.iter().enumerate().map(|(idx, text)| {
                            let dot = format!("highlight-dot dot-{}", idx);
                            view! {
                                <span class="search-highlight">
                                    <span class=dot></span>
                                    {*text}
                                </span>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-indicator-track">
                    <div class="scroll-indicator-thumb"></div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SearchSelect(
    icon: &'static str,
    placeholder: &'static str,
    options: &'static [SearchOption],
) -> impl IntoView {
    view! {
        <label class="search-field">
            <Icon path=icon class="search-field-icon" />
            <select class="search-select">
                <option value="" disabled=true selected=true>{placeholder}</option>
                {options.iter().map(|option| view! {
                    <option value=option.value>{option.label}</option>
                }).collect::<Vec<_>>()}
            </select>
        </label>
    }
}
