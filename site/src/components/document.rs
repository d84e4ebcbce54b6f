//! Root document component - the complete HTML page for server rendering.

use leptos::prelude::*;

use super::App;
use crate::auth::AuthHandle;
use crate::site::PAGE_TITLE;
use crate::styles::LANDING_CSS;

/// `<html>` shell with inline styles around [`App`].
#[component]
pub fn LandingDocument(auth: AuthHandle) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{PAGE_TITLE}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <App auth=auth />
            </body>
        </html>
    }
}
