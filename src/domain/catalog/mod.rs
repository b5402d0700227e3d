//! Catalog module - keyword-triggered response patterns.
//!
//! A [`ResponseCatalog`] is an ordered list of [`CatalogEntry`] values plus
//! a fallback generator. Resolution is first-match-wins in registration
//! order. Adding a pattern means appending one entry; nothing else changes.

mod entry;
mod patterns;
mod registry;

pub use entry::{CatalogEntry, Generator};
pub use patterns::{
    generic_guidance, product_management, software_engineering, standard_entries,
    PRODUCT_MANAGEMENT, SOFTWARE_ENGINEERING,
};
pub use registry::{CatalogBuilder, CatalogError, Classification, ResponseCatalog, FALLBACK_ENTRY};
