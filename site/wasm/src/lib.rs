//! Browser entry point for the EstateHub landing page.
//!
//! Mounts [`estatehub_site::components::App`] client-side and wires the
//! header's auth widgets to Clerk (see [`clerk`]). The host page is expected
//! to load the Clerk JS SDK so that `window.Clerk` exists.

pub mod clerk;
pub mod logging;

use estatehub_site::auth::AuthHandle;
use estatehub_site::components::App;
use estatehub_site::styles::LANDING_CSS;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub use clerk::{ClerkAuth, ClerkError};

/// Install the panic hook and console logging, then mount the page into `<body>`.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| {
        let auth = AuthHandle::new(ClerkAuth::connect());
        view! {
            <style>{LANDING_CSS}</style>
            <App auth=auth />
        }
    });
}
