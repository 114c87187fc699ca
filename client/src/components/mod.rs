//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the registration form and roster while reading/writing
//! the page's `RegistrationState` signal.

pub mod registration_form;
pub mod roster_list;
pub mod user_card;
