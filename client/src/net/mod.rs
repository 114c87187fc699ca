//! Networking modules for the remote Users API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema and `api` issues the list/create
//! calls against the `/users` collection endpoint.

pub mod api;
pub mod types;
