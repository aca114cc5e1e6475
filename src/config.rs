//! Application configuration.
//!
//! Centralized constants for the MonApp landing page. Everything here is
//! compile-time: the page takes no runtime configuration.

/// Brand name, displayed in the header, the footer and the document title.
pub const BRAND: &str = "MonApp";

/// Copyright year shown in the footer.
pub const COPYRIGHT_YEAR: u16 = 2024;

/// Fragment identifier of the features section.
///
/// Used both as the section `id` and as the nav anchor target, so the
/// in-page navigation contract holds by construction.
pub const SECTION_FEATURES: &str = "features";

/// Fragment identifier of the "à propos" landmark (the CTA band).
pub const SECTION_ABOUT: &str = "about";

/// Fragment identifier of the contact landmark (the footer).
pub const SECTION_CONTACT: &str = "contact";
