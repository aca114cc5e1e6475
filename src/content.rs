//! Display copy for the landing page.
//!
//! All marketing strings live here as constants; the components only lay
//! them out. Copy is French, matching the product's target audience.

use crate::config::{BRAND, COPYRIGHT_YEAR, SECTION_ABOUT, SECTION_CONTACT, SECTION_FEATURES};
use crate::types::{Feature, FooterColumn, NavLink};

// =============================================================================
// Header
// =============================================================================

/// In-page navigation, in display order.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Fonctionnalités",
        fragment: SECTION_FEATURES,
    },
    NavLink {
        label: "À propos",
        fragment: SECTION_ABOUT,
    },
    NavLink {
        label: "Contact",
        fragment: SECTION_CONTACT,
    },
];

/// Label of the header call-to-action button.
pub const NAV_CTA_LABEL: &str = "Commencer";

// =============================================================================
// Hero
// =============================================================================

/// First line of the headline.
pub const HERO_TITLE: &str = "Bienvenue dans le futur";

/// Second, accented line of the headline.
pub const HERO_TITLE_ACCENT: &str = "de votre projet";

pub const HERO_SUBTITLE: &str = "Une solution simple et élégante pour transformer vos idées en \
     réalité. Commencez dès aujourd'hui et découvrez la différence.";

/// Labels of the two hero buttons (primary, secondary).
pub const HERO_PRIMARY_CTA: &str = "Commencer gratuitement";
pub const HERO_SECONDARY_CTA: &str = "En savoir plus";

// =============================================================================
// Features
// =============================================================================

pub const FEATURES_TITLE: &str = "Fonctionnalités principales";

pub const FEATURES_SUBTITLE: &str =
    "Tout ce dont vous avez besoin pour réussir, intégré dans une seule plateforme";

/// The three feature cards, in display order.
///
/// Icon paths are 24x24 stroked outlines (bolt, check-circle, heart).
pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Performance Ultra-rapide",
        description: "Optimisé pour la vitesse avec les dernières technologies modernes",
        icon_path: "M13 10V3L4 14h7v7l9-11h-7z",
        accent: "icon-blue",
    },
    Feature {
        title: "Sécurité Avancée",
        description: "Protection de niveau entreprise pour toutes vos données",
        icon_path: "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        accent: "icon-green",
    },
    Feature {
        title: "Interface Intuitive",
        description: "Design moderne et facile à utiliser pour tous les utilisateurs",
        icon_path: "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 \
                    4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z",
        accent: "icon-purple",
    },
];

// =============================================================================
// Call To Action
// =============================================================================

pub const CTA_TITLE: &str = "Prêt à commencer ?";

pub const CTA_SUBTITLE: &str =
    "Rejoignez des milliers d'utilisateurs qui font déjà confiance à notre solution";

pub const CTA_BUTTON_LABEL: &str = "Démarrer maintenant";

// =============================================================================
// Footer
// =============================================================================

/// Brand blurb shown under the footer logo.
pub const FOOTER_BLURB: &str = "La solution moderne pour vos besoins digitaux.";

/// The three footer link columns, in display order.
pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Produit",
        links: &["Fonctionnalités", "Prix", "Support"],
    },
    FooterColumn {
        title: "Entreprise",
        links: &["À propos", "Blog", "Carrières"],
    },
    FooterColumn {
        title: "Contact",
        links: &["Support", "Documentation", "Communauté"],
    },
];

/// Copyright line rendered at the bottom of the footer.
pub fn copyright_line() -> String {
    format!("© {} {}. Tous droits réservés.", COPYRIGHT_YEAR, BRAND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_target_section_landmarks() {
        // The in-page anchors must match the section ids, in order.
        let fragments: Vec<&str> = NAV_LINKS.iter().map(|l| l.fragment).collect();
        assert_eq!(fragments, vec!["features", "about", "contact"]);

        let landmarks = [SECTION_FEATURES, SECTION_ABOUT, SECTION_CONTACT];
        for link in &NAV_LINKS {
            assert!(landmarks.contains(&link.fragment));
            assert!(!link.label.is_empty());
            assert_eq!(link.href(), format!("#{}", link.fragment));
        }
    }

    #[test]
    fn test_header_has_brand_and_cta() {
        assert!(!BRAND.is_empty());
        assert!(!NAV_CTA_LABEL.is_empty());
    }

    #[test]
    fn test_exactly_three_feature_cards() {
        assert_eq!(FEATURES.len(), 3);
        for feature in &FEATURES {
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
            assert!(!feature.icon_path.is_empty());
            assert!(feature.accent.starts_with("icon-"));
        }
    }

    #[test]
    fn test_feature_titles_are_distinct() {
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        let mut deduped = titles.clone();
        deduped.dedup();
        assert_eq!(titles, deduped);
    }

    #[test]
    fn test_footer_has_three_columns_of_links() {
        assert_eq!(FOOTER_COLUMNS.len(), 3);
        for column in &FOOTER_COLUMNS {
            assert!(!column.title.is_empty());
            assert_eq!(column.links.len(), 3);
            for link in column.links {
                assert!(!link.is_empty());
            }
        }
    }

    #[test]
    fn test_copyright_line_has_year_and_brand() {
        let line = copyright_line();
        assert!(line.contains(&COPYRIGHT_YEAR.to_string()));
        assert!(line.contains(BRAND));
    }

    #[test]
    fn test_hero_copy_is_present() {
        assert!(!HERO_TITLE.is_empty());
        assert!(!HERO_TITLE_ACCENT.is_empty());
        assert!(!HERO_SUBTITLE.is_empty());
        assert!(!HERO_PRIMARY_CTA.is_empty());
        assert!(!HERO_SECONDARY_CTA.is_empty());
    }
}
