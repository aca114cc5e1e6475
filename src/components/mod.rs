//! UI Components for the MonApp landing page.
//!
//! One component per visual block, composed top-to-bottom by the
//! landing page root in `lib.rs`:
//!
//! - [`Header`] - Brand, in-page navigation, CTA button
//! - [`Hero`] - Headline, sub-headline, two CTA buttons
//! - [`Features`] - Three-card feature grid (`#features`)
//! - [`CallToAction`] - Full-width CTA band (`#about`)
//! - [`Footer`] - Brand blurb, link columns, copyright (`#contact`)
//!
//! Every component renders constants from [`crate::content`]; none of the
//! buttons or placeholder links carries a handler.

mod cta;
mod features;
mod footer;
mod header;
mod hero;

pub use cta::*;
pub use features::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
