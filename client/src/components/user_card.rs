//! Card for a single roster entry.

#[cfg(test)]
#[path = "user_card_test.rs"]
mod user_card_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Display strings for one card, derived from a [`User`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardLabels {
    pub avatar: String,
    pub name: String,
    pub email: String,
    pub id: String,
}

impl From<&User> for CardLabels {
    fn from(user: &User) -> Self {
        Self {
            avatar: avatar_letter(&user.name),
            name: user.name.clone(),
            email: user.email.clone(),
            id: format!("ID: {}", user.id),
        }
    }
}

/// First character of the name, upper-cased. Empty for an empty name.
pub fn avatar_letter(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

/// A registered user: avatar initial, name, email and server id.
#[component]
pub fn UserCard(labels: CardLabels) -> impl IntoView {
    view! {
        <div class="user-card">
            <div class="user-avatar">{labels.avatar}</div>
            <div class="user-info">
                <h3>{labels.name}</h3>
                <p>{labels.email}</p>
            </div>
            <div class="user-id">
                <span>{labels.id}</span>
            </div>
        </div>
    }
}
