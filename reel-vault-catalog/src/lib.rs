//! Movie library data model and release-name heuristics.
//!
//! This crate defines the persistent catalog records (library items and the
//! files committed to them) without any storage dependency. Persistence sits
//! behind the [`CatalogWriter`] trait; `reel-vault-import` drives it and
//! tests use the bundled [`MemoryCatalog`].

pub mod release_name;
pub mod types;
pub mod writer;

pub use release_name::{is_release_name, remove_media_extension};
pub use types::{LibraryFile, LibraryItem, LibraryItemId};
pub use writer::{CatalogError, CatalogWriter, MemoryCatalog};
