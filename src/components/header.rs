use leptos::*;

use crate::config::BRAND;
use crate::content::{NAV_CTA_LABEL, NAV_LINKS};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <nav class="navbar">
                <a href="#" class="logo">{BRAND}</a>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href() class="nav-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                // Bouton CTA volontairement inerte (page vitrine)
                <button class="btn btn-primary">{NAV_CTA_LABEL}</button>
            </nav>
        </header>
    }
}
