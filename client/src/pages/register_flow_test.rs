use std::cell::RefCell;
use std::collections::VecDeque;

use futures::executor::block_on;

use super::*;
use crate::net::types::{NewUser, User};
use crate::state::registration::{Draft, MISSING_FIELDS_MESSAGE, REGISTER_FAILED_MESSAGE, REGISTERED_MESSAGE};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    List,
    Create(NewUser),
}

/// In-memory Users API that replays scripted responses and records calls.
#[derive(Default)]
struct ScriptedApi {
    calls: RefCell<Vec<Call>>,
    list_responses: RefCell<VecDeque<Result<Vec<User>, ApiError>>>,
    create_responses: RefCell<VecDeque<Result<(), ApiError>>>,
}

impl ScriptedApi {
    fn on_list(self, response: Result<Vec<User>, ApiError>) -> Self {
        self.list_responses.borrow_mut().push_back(response);
        self
    }

    fn on_create(self, response: Result<(), ApiError>) -> Self {
        self.create_responses.borrow_mut().push_back(response);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl UsersApi for ScriptedApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.calls.borrow_mut().push(Call::List);
        self.list_responses.borrow_mut().pop_front().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Create(user.clone()));
        self.create_responses.borrow_mut().pop_front().unwrap_or(Err(ApiError::Unavailable))
    }
}

struct CellStore(RefCell<RegistrationState>);

impl CellStore {
    fn with_draft(name: &str, email: &str) -> Self {
        let mut state = RegistrationState::default();
        state.draft = Draft { name: name.to_owned(), email: email.to_owned() };
        Self(RefCell::new(state))
    }

    fn snapshot(&self) -> RegistrationState {
        self.0.borrow().clone()
    }
}

impl RegistrationStore for CellStore {
    fn modify<R>(&self, f: impl FnOnce(&mut RegistrationState) -> R) -> Option<R> {
        Some(f(&mut self.0.borrow_mut()))
    }
}

/// A store whose page has gone away.
struct DroppedStore;

impl RegistrationStore for DroppedStore {
    fn modify<R>(&self, _f: impl FnOnce(&mut RegistrationState) -> R) -> Option<R> {
        None
    }
}

fn user(id: i64, name: &str, email: &str) -> User {
    User { id, name: name.to_owned(), email: email.to_owned() }
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser { name: name.to_owned(), email: email.to_owned() }
}

// =============================================================
// load_roster
// =============================================================

#[test]
fn load_roster_replaces_roster_on_success() {
    let api = ScriptedApi::default().on_list(Ok(vec![user(1, "Ana", "a@x.com")]));
    let store = CellStore::with_draft("", "");
    block_on(load_roster(&api, &store));
    assert_eq!(store.snapshot().roster, vec![user(1, "Ana", "a@x.com")]);
    assert_eq!(api.calls(), vec![Call::List]);
}

#[test]
fn load_roster_twice_with_same_response_does_not_duplicate() {
    let response = vec![user(1, "Ana", "a@x.com"), user(2, "Bo", "b@x.com")];
    let api = ScriptedApi::default().on_list(Ok(response.clone())).on_list(Ok(response.clone()));
    let store = CellStore::with_draft("", "");
    block_on(load_roster(&api, &store));
    block_on(load_roster(&api, &store));
    assert_eq!(store.snapshot().roster, response);
}

#[test]
fn load_roster_failure_is_silent() {
    let api = ScriptedApi::default()
        .on_list(Ok(vec![user(1, "Ana", "a@x.com")]))
        .on_list(Err(ApiError::Network("connection refused".to_owned())));
    let store = CellStore::with_draft("", "");
    block_on(load_roster(&api, &store));
    block_on(load_roster(&api, &store));
    let state = store.snapshot();
    assert_eq!(state.roster, vec![user(1, "Ana", "a@x.com")]);
    assert_eq!(state.error, None);
    assert_eq!(state.success, None);
}

#[test]
fn load_roster_on_dropped_state_is_a_no_op() {
    let api = ScriptedApi::default().on_list(Ok(vec![user(1, "Ana", "a@x.com")]));
    block_on(load_roster(&api, &DroppedStore));
    assert_eq!(api.calls(), vec![Call::List]);
}

// =============================================================
// submit_registration
// =============================================================

#[test]
fn submit_posts_exact_payload_once_then_refreshes_once() {
    let api = ScriptedApi::default().on_create(Ok(())).on_list(Ok(vec![user(1, "Ana", "a@x.com")]));
    let store = CellStore::with_draft("Ana", "a@x.com");
    assert_eq!(block_on(submit_registration(&api, &store)), Ok(()));
    assert_eq!(api.calls(), vec![Call::Create(new_user("Ana", "a@x.com")), Call::List]);
}

#[test]
fn submit_with_empty_field_issues_no_request() {
    for (name, email) in [("", "a@x.com"), ("Ana", ""), ("", "")] {
        let api = ScriptedApi::default();
        let store = CellStore::with_draft(name, email);
        let result = block_on(submit_registration(&api, &store));
        assert_eq!(result, Err(SubmitError::Rejected(SubmitRejected::MissingFields)));
        assert!(api.calls().is_empty());
        let state = store.snapshot();
        assert_eq!(state.error.as_deref(), Some(MISSING_FIELDS_MESSAGE));
        assert!(!state.is_submitting());
    }
}

#[test]
fn submit_success_clears_draft_and_reconciles_roster() {
    let api = ScriptedApi::default()
        .on_create(Ok(()))
        .on_list(Ok(vec![user(1, "Ana", "a@x.com"), user(2, "Bo", "b@x.com")]));
    let store = CellStore::with_draft("Bo", "b@x.com");
    store.0.borrow_mut().roster = vec![user(1, "Ana", "a@x.com")];

    block_on(submit_registration(&api, &store)).unwrap();

    let state = store.snapshot();
    assert_eq!(state.draft, Draft::default());
    assert_eq!(state.success.as_deref(), Some(REGISTERED_MESSAGE));
    assert_eq!(state.error, None);
    assert!(!state.is_submitting());
    assert!(state.roster.contains(&user(2, "Bo", "b@x.com")));
}

#[test]
fn submit_success_survives_failed_refresh() {
    let api = ScriptedApi::default()
        .on_create(Ok(()))
        .on_list(Err(ApiError::Status { status: 500, detail: None }));
    let store = CellStore::with_draft("Bo", "b@x.com");

    assert_eq!(block_on(submit_registration(&api, &store)), Ok(()));

    let state = store.snapshot();
    assert_eq!(state.success.as_deref(), Some(REGISTERED_MESSAGE));
    assert_eq!(state.error, None);
    assert!(state.roster.is_empty());
}

#[test]
fn submit_failure_with_detail_surfaces_it_and_keeps_draft() {
    let failure = ApiError::Status { status: 400, detail: Some("X".to_owned()) };
    let api = ScriptedApi::default().on_create(Err(failure.clone()));
    let store = CellStore::with_draft("Bo", "b@x.com");

    let result = block_on(submit_registration(&api, &store));

    assert_eq!(result, Err(SubmitError::Create(failure)));
    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some("X"));
    assert_eq!(state.success, None);
    assert_eq!(state.draft, Draft { name: "Bo".to_owned(), email: "b@x.com".to_owned() });
    assert!(!state.is_submitting());
    assert_eq!(api.calls(), vec![Call::Create(new_user("Bo", "b@x.com"))]);
}

#[test]
fn submit_failure_without_detail_uses_generic_message() {
    let api = ScriptedApi::default().on_create(Err(ApiError::Status { status: 500, detail: None }));
    let store = CellStore::with_draft("Bo", "b@x.com");
    let _ = block_on(submit_registration(&api, &store));
    assert_eq!(store.snapshot().error.as_deref(), Some(REGISTER_FAILED_MESSAGE));
}

#[test]
fn submit_while_in_flight_is_refused_without_request() {
    let api = ScriptedApi::default();
    let store = CellStore::with_draft("Bo", "b@x.com");
    store.0.borrow_mut().begin_submit().unwrap();

    let result = block_on(submit_registration(&api, &store));

    assert_eq!(result, Err(SubmitError::Rejected(SubmitRejected::InFlight)));
    assert!(api.calls().is_empty());
    assert!(store.snapshot().is_submitting());
}

#[test]
fn submit_on_dropped_state_issues_no_request() {
    let api = ScriptedApi::default();
    assert_eq!(block_on(submit_registration(&api, &DroppedStore)), Err(SubmitError::Detached));
    assert!(api.calls().is_empty());
}

#[test]
fn scenario_register_bo_after_empty_initial_load() {
    let api = ScriptedApi::default()
        .on_list(Ok(Vec::new()))
        .on_create(Ok(()))
        .on_list(Ok(vec![user(2, "Bo", "b@x.com")]));
    let store = CellStore::with_draft("", "");

    block_on(load_roster(&api, &store));
    assert!(store.snapshot().roster.is_empty());

    {
        let mut state = store.0.borrow_mut();
        state.set_name("Bo".to_owned());
        state.set_email("b@x.com".to_owned());
    }
    block_on(submit_registration(&api, &store)).unwrap();

    let state = store.snapshot();
    assert_eq!(state.roster, vec![user(2, "Bo", "b@x.com")]);
    assert_eq!(state.draft, Draft::default());
    assert_eq!(state.success.as_deref(), Some(REGISTERED_MESSAGE));
    assert_eq!(api.calls(), vec![Call::List, Call::Create(new_user("Bo", "b@x.com")), Call::List]);
}
