//! Record catalog for pedestal documentation sites.
//!
//! This crate holds the input collections a site is generated from: configuration
//! properties, methods, error codes, interactive examples, and the ordered
//! example-group table. Everything is loaded once per run and read-only afterwards.

pub mod catalog;
pub mod docs;
pub mod example;
pub mod list;

pub use catalog::{Catalog, CatalogError, ExampleGroup};
pub use docs::{ConfigProperty, DocEntry, DocRecords, ErrorRecord, Method};
pub use example::{parse_example, Example, ExampleError};
pub use list::OneOrMany;
