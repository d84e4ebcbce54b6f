//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument (server rendering only)
//! └── App
//!     ├── Header
//!     │   └── HeaderBar
//!     │       ├── NavLinks
//!     │       ├── AuthActions (desktop)
//!     │       └── MobileMenu (only while the disclosure is open)
//!     │           ├── NavLinks
//!     │           └── AuthActions (mobile)
//!     ├── Hero
//!     ├── FeaturedProperties
//!     │   └── PropertyCard (x4)
//!     ├── Services
//!     ├── Stats
//!     ├── Testimonials
//!     ├── Contact
//!     └── Footer
//! ```
//!
//! Everything except `Header` is a pure function of the literals in
//! [`crate::content`].

mod app;
mod contact;
mod document;
mod footer;
mod header;
mod hero;
mod icons;
mod properties;
mod services;
mod stats;
mod testimonials;

pub use app::App;
pub use contact::Contact;
pub use document::LandingDocument;
pub use footer::Footer;
pub use header::{ActionLayout, AuthActions, Header, HeaderBar, MobileMenu, NavLinks};
pub use hero::Hero;
pub use icons::*;
pub use properties::{FeaturedProperties, PropertyCard};
pub use services::Services;
pub use stats::Stats;
pub use testimonials::Testimonials;
