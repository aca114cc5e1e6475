//! Call-to-action band
//!
//! Doubles as the `#about` landmark so the header's "À propos" anchor
//! resolves within the page.

use leptos::*;

use crate::config::SECTION_ABOUT;
use crate::content::{CTA_BUTTON_LABEL, CTA_SUBTITLE, CTA_TITLE};

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id=SECTION_ABOUT class="cta-band">
            <h2>{CTA_TITLE}</h2>
            <p>{CTA_SUBTITLE}</p>
            <button class="btn btn-light btn-large">{CTA_BUTTON_LABEL}</button>
        </section>
    }
}
