//! Roster section: refresh control plus either the empty state or one card
//! per registered user, in server order.

#[cfg(test)]
#[path = "roster_list_test.rs"]
mod roster_list_test;

use leptos::prelude::*;

use crate::components::user_card::{CardLabels, UserCard};
use crate::net::types::User;
use crate::state::registration::RegistrationState;

pub const EMPTY_ROSTER_MESSAGE: &str = "📭 No users registered yet";

/// What the roster section shows for a given roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterView {
    Empty,
    Cards(Vec<CardLabels>),
}

impl RosterView {
    pub fn from_roster(roster: &[User]) -> Self {
        if roster.is_empty() {
            return Self::Empty;
        }
        Self::Cards(roster.iter().map(CardLabels::from).collect())
    }
}

#[component]
pub fn RosterList(state: RwSignal<RegistrationState>, on_refresh: Callback<()>) -> impl IntoView {
    let body = move || match state.with(|s| RosterView::from_roster(&s.roster)) {
        RosterView::Empty => view! {
            <div class="empty-state">
                <p>{EMPTY_ROSTER_MESSAGE}</p>
            </div>
        }
        .into_any(),
        RosterView::Cards(cards) => view! {
            <div class="users-list">
                {cards.into_iter().map(|labels| view! { <UserCard labels=labels/> }).collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="section">
            <div class="section-header">
                <h2>"📋 Registered Users"</h2>
                <button class="btn-refresh" on:click=move |_| on_refresh.run(())>
                    "🔄 Refresh"
                </button>
            </div>
            {body}
        </div>
    }
}
