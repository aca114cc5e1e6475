//! Footer component

use leptos::*;

use crate::config::{BRAND, SECTION_CONTACT};
use crate::content::{copyright_line, FOOTER_BLURB, FOOTER_COLUMNS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id=SECTION_CONTACT>
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="logo">{BRAND}</div>
                    <p>{FOOTER_BLURB}</p>
                </div>
                {FOOTER_COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div class="footer-column">
                                <h3>{column.title}</h3>
                                <ul>
                                    {column
                                        .links
                                        .iter()
                                        .map(|label| {
                                            // Liens de remplacement, sans destination
                                            view! {
                                                <li>
                                                    <a href="#" class="footer-link">
                                                        {*label}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="copyright">{copyright_line()}</div>
        </footer>
    }
}
