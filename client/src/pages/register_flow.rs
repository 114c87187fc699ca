//! Request orchestration for the registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both flows run as `spawn_local` tasks on the browser event loop. State is
//! touched only between awaits, through a [`RegistrationStore`], so the
//! ordering below is the whole concurrency story: the roster refresh after a
//! registration starts only once the create response has resolved.

#[cfg(test)]
#[path = "register_flow_test.rs"]
mod register_flow_test;

use crate::net::api::{ApiError, UsersApi};
use crate::state::registration::{RegistrationState, RegistrationStore, SubmitRejected};

/// Why [`submit_registration`] did not end with a registered user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] SubmitRejected),
    #[error("create request failed: {0}")]
    Create(#[from] ApiError),
    #[error("registration state dropped before the request finished")]
    Detached,
}

/// Fetch the roster and replace the displayed list on success.
///
/// Best-effort: failures are logged by [`RegistrationState::apply_roster`]
/// and the current roster stays visible.
pub async fn load_roster<A, S>(api: &A, store: &S)
where
    A: UsersApi,
    S: RegistrationStore,
{
    let result = api.list_users().await;
    if store.modify(|state| state.apply_roster(result)).is_none() {
        log::debug!("roster response dropped: registration state is gone");
    }
}

/// Register the current draft, then refresh the roster.
///
/// Step one validates and POSTs the draft; its result short-circuits with
/// `?` so step two (one `GET`) only runs after a successful create.
///
/// # Errors
///
/// Returns [`SubmitError::Rejected`] when validation or the in-flight guard
/// refused the submission, [`SubmitError::Create`] when the POST failed, and
/// [`SubmitError::Detached`] if the state disappeared mid-flight.
pub async fn submit_registration<A, S>(api: &A, store: &S) -> Result<(), SubmitError>
where
    A: UsersApi,
    S: RegistrationStore,
{
    let payload = store.modify(RegistrationState::begin_submit).ok_or(SubmitError::Detached)??;

    let created = api.create_user(&payload).await;
    store
        .modify(|state| state.finish_submit(&created))
        .ok_or(SubmitError::Detached)?;
    created?;

    load_roster(api, store).await;
    Ok(())
}
