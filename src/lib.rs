//! Bookmark Gallery: import a browser bookmarks export, categorize every link
//! by keyword and browse the result with search and sidebar filters.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
