// ScanShelf - lib.rs
//
// Library entry point. Hosts (the admin UI, the bundled CLI, integration
// tests) drive the catalog through `app::catalog`; the lower layers are
// public for renderers that need columns, formatting, or export directly.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
