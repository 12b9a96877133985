// ScanShelf - app/mod.rs
//
// Application layer: directory scanning, bulk delete, notices, and the
// catalog service that composes them.
// Dependencies: core, platform, util.

pub mod catalog;
pub mod delete;
pub mod notify;
pub mod repository;
