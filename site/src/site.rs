//! Brand, contact and asset constants shared across the page.
//!
//! Single source of truth for strings that appear in more than one section.

/// Brand name shown in the header, footer and document title
pub const BRAND_NAME: &str = "EstateHub";

/// Document title
pub const PAGE_TITLE: &str = "EstateHub - Find Your Dream Home";

/// Hero background image, served with the page assets
pub const HERO_IMAGE: &str = "/images/landing-hero.jpg";

/// Where the user menu sends people after signing out
pub const AFTER_SIGN_OUT_URL: &str = "/";

/// Contact phone number
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";

/// Contact e-mail address
pub const CONTACT_EMAIL: &str = "hello@estatehub.com";

/// Office address
pub const CONTACT_OFFICE: &str = "123 Market Street, New York, NY";

/// Footer copyright line
pub const COPYRIGHT: &str = "© 2025 EstateHub. All rights reserved.";
