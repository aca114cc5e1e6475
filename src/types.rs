//! Common types used across the landing page.
//!
//! The page renders nothing but constants, so these are plain `'static`
//! content descriptors consumed by the components in [`crate::components`].
//! The actual values live in [`crate::content`].

// =============================================================================
// Navigation Types
// =============================================================================

/// An in-page navigation link.
///
/// `fragment` is a same-document anchor target and must match the `id` of a
/// section landmark rendered elsewhere on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible label
    pub label: &'static str,
    /// Fragment identifier (without the leading `#`)
    pub fragment: &'static str,
}

impl NavLink {
    /// The `href` form of the link (`#fragment`).
    pub fn href(&self) -> String {
        format!("#{}", self.fragment)
    }
}

// =============================================================================
// Feature Card Types
// =============================================================================

/// One card of the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Card title
    pub title: &'static str,
    /// Card description
    pub description: &'static str,
    /// SVG path data of the decorative icon (24x24 viewBox, stroked)
    pub icon_path: &'static str,
    /// CSS accent class for the icon disc
    pub accent: &'static str,
}

// =============================================================================
// Footer Types
// =============================================================================

/// A column of placeholder links in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    /// Column heading
    pub title: &'static str,
    /// Link labels (inert placeholders, all pointing to `#`)
    pub links: &'static [&'static str],
}
