// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core board types: Ticket, User, Status, and Priority.
//!
//! `Ticket` mirrors the upstream record. Its `status` and `priority` fields
//! keep the raw values so that unexpected upstream data still reaches the
//! projection engine; `Status` and `Priority` are the closed, typed views.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::error::Result;

/// Identifier for tickets and users.
///
/// Upstream ids arrive as strings (`"CAM-1"`, `"usr-1"`) or integers; both
/// are kept as text and compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct Id(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for Id {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => Id(s),
            RawId::Number(n) => Id(n.to_string()),
        }
    }
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Id(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id(s)
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id(n.to_string())
    }
}

/// Workflow status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Captured but not yet planned.
    Backlog,
    /// Planned, not started.
    Todo,
    /// Currently being worked on.
    InProgress,
    /// Successfully completed.
    Done,
    /// Abandoned.
    Canceled,
}

impl Status {
    /// All statuses in canonical display order.
    pub const ALL: [Status; 5] = [
        Status::Backlog,
        Status::Todo,
        Status::InProgress,
        Status::Done,
        Status::Canceled,
    ];

    /// Returns the label used upstream and as the column title.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Backlog => "Backlog",
            Status::Todo => "Todo",
            Status::InProgress => "In progress",
            Status::Done => "Done",
            Status::Canceled => "Canceled",
        }
    }

    /// Matches an upstream status label exactly.
    ///
    /// Returns `None` for anything else, including case variants: the board
    /// keeps such values as their own column instead of folding them in.
    pub fn from_label(label: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// Position in the canonical column order (Backlog first).
    pub fn display_rank(&self) -> usize {
        match self {
            Status::Backlog => 0,
            Status::Todo => 1,
            Status::InProgress => 2,
            Status::Done => 3,
            Status::Canceled => 4,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket urgency, from level 0 (no priority) to level 4 (urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All priorities in column display order.
    pub const DISPLAY_ORDER: [Priority; 5] = [
        Priority::NoPriority,
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Maps a raw level to a priority. Anything outside 1..=4 is `NoPriority`.
    pub fn from_level(level: i64) -> Priority {
        match level {
            4 => Priority::Urgent,
            3 => Priority::High,
            2 => Priority::Medium,
            1 => Priority::Low,
            _ => Priority::NoPriority,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Priority::NoPriority => 0,
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Urgent => 4,
        }
    }

    /// Returns the column title for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::NoPriority => "No priority",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn from_label(label: &str) -> Option<Priority> {
        Priority::DISPLAY_ORDER
            .into_iter()
            .find(|p| p.as_str() == label)
    }

    /// Weight used to order priority columns.
    ///
    /// "No priority" deliberately comes first, ahead of "Urgent".
    pub fn display_weight(&self) -> u8 {
        match self {
            Priority::NoPriority => 0,
            Priority::Urgent => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A ticket as delivered by the board data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Id,
    pub title: String,
    /// Status label, kept verbatim (see [`Ticket::known_status`]).
    pub status: String,
    /// Raw priority level; a missing or null value reads as 0.
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: i64,
    /// Weak reference to the assigned user.
    #[serde(default)]
    pub user_id: Option<Id>,
    /// Labels; only the first is shown on a card.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag: Vec<String>,
}

impl Ticket {
    /// Creates a ticket with no assignee, no priority, and no tags.
    pub fn new(id: impl Into<Id>, title: impl Into<String>, status: impl Into<String>) -> Self {
        Ticket {
            id: id.into(),
            title: title.into(),
            status: status.into(),
            priority: 0,
            user_id: None,
            tag: Vec::new(),
        }
    }

    /// Sets the raw priority level (builder pattern).
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Assigns the ticket to a user (builder pattern).
    pub fn with_user(mut self, user_id: impl Into<Id>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Appends a tag (builder pattern).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag.push(tag.into());
        self
    }

    pub fn known_status(&self) -> Option<Status> {
        Status::from_label(&self.status)
    }

    pub fn priority_level(&self) -> Priority {
        Priority::from_level(self.priority)
    }

    /// The tag shown on the card.
    pub fn first_tag(&self) -> Option<&str> {
        self.tag.first().map(String::as_str)
    }

    /// Reports values that break the ticket invariants.
    ///
    /// None of these stop the ticket from being shown; the projection
    /// recovers from each one.
    pub fn check(&self) -> Vec<TicketWarning> {
        let mut warnings = Vec::new();
        if self.known_status().is_none() {
            warnings.push(TicketWarning::UnknownStatus(self.status.clone()));
        }
        if !(0..=i64::from(Priority::Urgent.level())).contains(&self.priority) {
            warnings.push(TicketWarning::PriorityOutOfRange(self.priority));
        }
        if self.tag.is_empty() {
            warnings.push(TicketWarning::EmptyTag);
        }
        warnings
    }
}

/// A recoverable problem with a single ticket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketWarning {
    #[error("unknown status '{0}', shown in its own column")]
    UnknownStatus(String),

    #[error("priority {0} outside 0-4, treated as no priority")]
    PriorityOutOfRange(i64),

    #[error("ticket has no tags")]
    EmptyTag,
}

/// A person tickets can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    /// Display name, also the column title when grouping by user.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Presence flag shown on cards.
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,
}

impl User {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, available: bool) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            available,
        }
    }
}

/// Lookup of users by id.
///
/// When ids repeat, the first user wins.
#[derive(Debug, Default)]
pub struct UserDirectory<'a> {
    by_id: HashMap<&'a Id, &'a User>,
}

impl<'a> UserDirectory<'a> {
    pub fn new(users: &'a [User]) -> Self {
        let mut by_id = HashMap::with_capacity(users.len());
        for user in users {
            by_id.entry(&user.id).or_insert(user);
        }
        UserDirectory { by_id }
    }

    pub fn get(&self, id: &Id) -> Option<&'a User> {
        self.by_id.get(id).copied()
    }

    /// Resolves the user a ticket is assigned to, if any.
    pub fn resolve(&self, ticket: &Ticket) -> Option<&'a User> {
        ticket.user_id.as_ref().and_then(|id| self.get(id))
    }
}

/// The board document: every ticket and user, fetched once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl BoardData {
    /// Parses a board document from JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.users.is_empty()
    }

    /// Collects per-ticket warnings, keyed by ticket id.
    pub fn ticket_warnings(&self) -> Vec<(&Id, TicketWarning)> {
        self.tickets
            .iter()
            .flat_map(|t| t.check().into_iter().map(move |w| (&t.id, w)))
            .collect()
    }

    /// User ids that appear more than once, in first-seen order.
    pub fn duplicate_user_ids(&self) -> Vec<&Id> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for user in &self.users {
            if !seen.insert(&user.id) && !duplicates.contains(&&user.id) {
                duplicates.push(&user.id);
            }
        }
        duplicates
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
