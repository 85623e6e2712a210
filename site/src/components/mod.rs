//! Leptos components for the site.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (layout wrapper: head metadata + nav chrome)
//! └── page body
//!     ├── HomeView
//!     │   ├── Hero (4 feature cards)
//!     │   ├── Stats (4 stat cards)
//!     │   ├── Services (5 service cards)
//!     │   ├── DeploymentProcess (5 numbered steps)
//!     │   └── FooterInfo
//!     ├── ShopifyView (placeholder)
//!     │   └── ComingSoonPanel
//!     └── CloudFilesView (placeholder)
//!         └── ComingSoonPanel
//! ```
//!
//! Components are pure: they read [`crate::content`] tables and produce
//! markup, nothing else.

mod cloud_files;
mod coming_soon;
mod footer;
mod hero;
mod home;
mod layout;
mod process;
mod services;
mod shopify;
mod stats;

pub use cloud_files::CloudFilesView;
pub use coming_soon::ComingSoonPanel;
pub use footer::FooterInfo;
pub use hero::Hero;
pub use home::HomeView;
pub use layout::PageDocument;
pub use process::DeploymentProcess;
pub use services::Services;
pub use shopify::ShopifyView;
pub use stats::Stats;
