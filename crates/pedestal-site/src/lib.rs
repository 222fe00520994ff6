//! Site generator for pedestal documentation.
//!
//! Turns a loaded record catalog into cross-linked HTML fragments (documentation
//! table rows, example navigation, the runnable example data block) and composes
//! them with page templates into a complete static site.

pub mod assets;
pub mod composer;
pub mod examples;
pub mod html;
pub mod tables;
pub mod templates;

pub use assets::{build_dist, AssetPipeline};
pub use composer::{BuildError, BuildStats, LibraryConfig, SiteBuilder, SiteConfig};
pub use templates::TemplateSet;
