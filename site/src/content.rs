//! Literal page content (single source of truth).
//!
//! The copy is Norwegian, carried verbatim from the live site. Components
//! never hold text of their own; they map these tables to markup in listed
//! order.

use crate::types::{FeatureItem, ProcessStep, ServiceItem, StatItem};

// --- Hero ---

pub const HERO_TITLE: &str = "PROTONORD";
pub const HERO_SUBTITLE: &str = "Fra idé til virkelighet med Azure Static Web Apps";

/// The four platform feature cards under the hero headline.
pub const FEATURES: &[FeatureItem] = &[
    FeatureItem {
        icon: "☁️",
        title: "Azure Hosting",
        description: "Automatisk deployment til Azure Static Web Apps med GitHub Actions",
    },
    FeatureItem {
        icon: "⚡",
        title: "Rask deployment",
        description: "Endringer publiseres automatisk ved hver commit til main branch",
    },
    FeatureItem {
        icon: "🔧",
        title: "Docusaurus Wiki",
        description: "Kraftig dokumentasjonsplattform basert på React",
    },
    FeatureItem {
        icon: "🛒",
        title: "Shopify Integrasjon",
        description: "Automatisk synkronisering av produktdata fra Shopify Admin API",
    },
];

// --- Stats ---

pub const STATS: &[StatItem] = &[
    StatItem { value: "100%", label: "Automatisk" },
    StatItem { value: "24/7", label: "Tilgjengelig" },
    StatItem { value: "161", label: "Shopify Produkter" },
    StatItem { value: "∞", label: "Skalerbart" },
];

// --- Services ---

pub const SERVICES_HEADING: &str = "Azure Static Web Apps Features";

pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        icon: "🚀",
        title: "Automatisk Deployment",
        description: "GitHub Actions workflow deployer automatisk ved push til main branch med konfigurert app_location: / og output_location: build",
    },
    ServiceItem {
        icon: "🔐",
        title: "Gratis SSL Sertifikat",
        description: "Azure Static Web Apps tilbyr automatisk SSL-sertifikat for sikker HTTPS-tilkobling.",
    },
    ServiceItem {
        icon: "🌐",
        title: "Global CDN",
        description: "Innebygd Content Delivery Network for rask lasting verden over.",
    },
    ServiceItem {
        icon: "🛒",
        title: "Shopify API Integrasjon",
        description: "Automatisk henting av produktdata fra Shopify butikk med filtering på aktive produkter og sikker API-tilgang.",
    },
    ServiceItem {
        icon: "☁️",
        title: "Cloud Files Tilgang",
        description: "Planlagt integrasjon med rclone for tilgang til Google Drive og Jottacloud filer direkte fra nettstedet.",
    },
];

// --- Deployment process ---

pub const PROCESS_HEADING: &str = "Deployment Process";

/// Ordered pipeline steps; the rendered step number is the 1-based index.
pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Code Push",
        description: "Push kode til GitHub repository main branch",
    },
    ProcessStep {
        title: "GitHub Actions",
        description: "Automatisk trigger av build og deployment workflow",
    },
    ProcessStep {
        title: "Shopify Sync",
        description: "Henter produktdata fra Shopify API og oppdaterer lokale data filer",
    },
    ProcessStep {
        title: "Docusaurus Build",
        description: "npm run build genererer statiske filer til build/ mappe",
    },
    ProcessStep {
        title: "Azure Deploy",
        description: "Statiske filer deployeres til Azure Static Web Apps",
    },
];

// --- Footer info ---

pub const ABOUT_HEADING: &str = "Om Dette Prosjektet";
pub const ABOUT_TEXT: &str = "Dette er en Docusaurus-basert wiki og dokumentasjonsside som automatisk deployes til Azure Static Web Apps. Prosjektet demonstrerer moderne web-deployment med GitHub Actions og Azure-integrering samt Shopify API-integrasjon.";

pub const TECH_HEADING: &str = "Teknologier";
pub const TECHNOLOGIES: &[&str] = &[
    "⚛️ React/Docusaurus",
    "☁️ Azure Static Web Apps",
    "🔄 GitHub Actions",
    "🛒 Shopify Admin API",
];

pub const FOOTER_COPYRIGHT: &str = "© 2025, PROTONORD - Azure Static Web Apps Demo";
pub const FOOTER_TAGLINE: &str = "Automatisk deployment med GitHub Actions og Shopify integrasjon";

// --- Shopify placeholder page ---

pub const SHOPIFY_HEADING: &str = "🛍️ Shopify Dashboard";
pub const SHOPIFY_INTRO: &str =
    "Her vil Shopify dashboard være tilgjengelig når det er implementert.";

pub const SHOPIFY_COMING: &[&str] = &[
    "Produktoversikt og statistikk",
    "Bestillingsovervåking",
    "Lagerstatistikk",
    "Shopify API integrasjon",
    "Real-time data synkronisering",
];

pub const SHOPIFY_DETAILS_LEAD: &str = "Dashboard vil vise:";

/// (bold lead-in, rest of the line) pairs for the detail list.
pub const SHOPIFY_DETAILS: &[(&str, &str)] = &[
    ("Produkter:", "Oversikt over alle produkter i Shopify"),
    ("Bestillinger:", "Statistikk og trender"),
    ("Lagerstatus:", "Real-time oversikt"),
    ("Integrasjon:", "Kobling mellom filserver og Shopify-produkter"),
];

pub const SHOPIFY_DOCS_HREF: &str = "/docs/shopify-sync";
pub const SHOPIFY_DOCS_TEXT: &str = " for mer informasjon om Shopify-integrasjonen.";

// --- Cloud Files placeholder page ---

pub const CLOUD_FILES_HEADING: &str = "☁️ Cloud Files";
pub const CLOUD_FILES_INTRO: &str =
    "Her vil cloud fil-oversikten være tilgjengelig når den er implementert.";

pub const CLOUD_FILES_COMING: &[&str] = &[
    "Filutforsker for cloud storage",
    "Sync med Google Drive og Jottacloud",
    "Automatisk katalogisering",
    "rclone integrasjon",
];

pub const CLOUD_FILES_DOCS_HREF: &str = "/docs/cloud-storage";
pub const CLOUD_FILES_DOCS_TEXT: &str = " for mer informasjon om cloud storage setup.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_tables_are_populated() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(STATS.len(), 4);
        assert_eq!(SERVICES.len(), 5);
        assert_eq!(PROCESS_STEPS.len(), 5);
        assert_eq!(TECHNOLOGIES.len(), 4);
    }

    #[test]
    fn coming_features_lists_are_non_empty() {
        assert!(!SHOPIFY_COMING.is_empty());
        assert!(!CLOUD_FILES_COMING.is_empty());
        assert!(!SHOPIFY_DETAILS.is_empty());
    }
}
