// ScanShelf - core/mod.rs
//
// Core catalog logic: data model, ordering, pagination, display formatting,
// column/row-action descriptions, export.
// Dependencies: util only.
// Must NOT touch the filesystem.

pub mod columns;
pub mod export;
pub mod format;
pub mod model;
pub mod paginate;
pub mod sort;
