//! Feature grid component
//!
//! Renders the `#features` section landmark targeted by the header nav:
//! a heading, a sub-heading and the three cards from
//! [`crate::content::FEATURES`].

use leptos::*;

use crate::config::SECTION_FEATURES;
use crate::content::{FEATURES, FEATURES_SUBTITLE, FEATURES_TITLE};
use crate::types::Feature;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=SECTION_FEATURES class="features">
            <div class="section-heading">
                <h2>{FEATURES_TITLE}</h2>
                <p class="subtitle">{FEATURES_SUBTITLE}</p>
            </div>
            <div class="features-grid">
                {FEATURES
                    .iter()
                    .map(|feature| view! { <FeatureCard feature=*feature/> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// One card: decorative icon, title, description.
#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class=format!("feature-icon {}", feature.accent)>
                // Icône décorative, masquée des lecteurs d'écran
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d=feature.icon_path
                    />
                </svg>
            </div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}
