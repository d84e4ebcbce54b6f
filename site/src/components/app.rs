//! Root composer. Sections stack in a fixed order and share no data.

use leptos::prelude::*;

use super::{Contact, FeaturedProperties, Footer, Header, Hero, Services, Stats, Testimonials};
use crate::auth::AuthHandle;

/// The whole page body.
#[component]
pub fn App(auth: AuthHandle) -> impl IntoView {
    view! {
        <div class="page">
            <Header auth=auth />
            <main>
                <Hero />
                <FeaturedProperties />
                <Services />
                <Stats />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
