//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The page keeps a single `RegistrationState` in an `RwSignal`; all
//! transitions live on the struct so they can be exercised without a
//! reactive runtime.

pub mod registration;
