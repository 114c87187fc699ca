//! The registration route and the request flows it drives.
//!
//! ARCHITECTURE
//! ============
//! `register` wires signals and callbacks to the form and roster components;
//! `register_flow` holds the async list/create sequencing so it can run
//! against any `UsersApi`.

pub mod register;
pub mod register_flow;
