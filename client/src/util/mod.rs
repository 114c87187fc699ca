//! Environment helpers for the registration client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anything that depends on where the page runs (host env on the server,
//! document head in the browser) is resolved here, not in pages.

pub mod config;
