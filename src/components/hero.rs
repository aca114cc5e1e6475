//! Hero section component

use leptos::*;

use crate::content::{
    HERO_PRIMARY_CTA, HERO_SECONDARY_CTA, HERO_SUBTITLE, HERO_TITLE, HERO_TITLE_ACCENT,
};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-title">
                {HERO_TITLE}
                <span class="accent">{HERO_TITLE_ACCENT}</span>
            </h1>
            <p class="subtitle">{HERO_SUBTITLE}</p>
            <div class="hero-actions">
                <button class="btn btn-primary btn-large">{HERO_PRIMARY_CTA}</button>
                <button class="btn btn-outline btn-large">{HERO_SECONDARY_CTA}</button>
            </div>
        </section>
    }
}
