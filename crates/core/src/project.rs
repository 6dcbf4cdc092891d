// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The view-projection engine.
//!
//! [`project`] turns a flat ticket/user snapshot into board columns:
//!
//! 1. assign every ticket a column key for the grouping mode, starting
//!    from the pre-seeded empty columns,
//! 2. sort tickets inside each column by the ordering mode,
//! 3. order the columns for display.
//!
//! The engine is total and pure: it never fails and consults nothing but
//! its arguments.

use serde::Serialize;
use std::collections::HashMap;

use crate::collate::compare_text;
use crate::ticket::{Priority, Status, Ticket, User, UserDirectory};
use crate::view::{GroupingMode, OrderingMode, ViewSelection};

/// A single board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub label: String,
    pub tickets: Vec<Ticket>,
}

impl Group {
    fn empty(label: &str) -> Self {
        Group {
            label: label.to_string(),
            tickets: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Ticket ids in column order.
    pub fn ids(&self) -> Vec<&str> {
        self.tickets.iter().map(|t| t.id.as_str()).collect()
    }
}

/// The columns of a board, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Projection {
    pub grouping: GroupingMode,
    pub ordering: OrderingMode,
    pub groups: Vec<Group>,
}

/// Alias used by rendering code.
pub type OrderedGroups = Projection;

impl Projection {
    pub fn group(&self, label: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// Column labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    /// Number of tickets placed across all columns.
    pub fn ticket_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn selection(&self) -> ViewSelection {
        ViewSelection::new(self.grouping, self.ordering)
    }
}

/// Columns keyed by label, remembering the order labels were first seen.
#[derive(Default)]
struct Buckets {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl Buckets {
    fn seed(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        self.groups.push(Group::empty(label));
        self.index.insert(label.to_string(), self.groups.len() - 1);
        self.groups.len() - 1
    }

    fn push(&mut self, label: &str, ticket: &Ticket) {
        let i = self.seed(label);
        self.groups[i].tickets.push(ticket.clone());
    }
}

/// Projects tickets into ordered columns.
pub fn project(
    tickets: &[Ticket],
    users: &[User],
    grouping: GroupingMode,
    ordering: OrderingMode,
) -> Projection {
    let mut groups = match grouping {
        GroupingMode::Status => group_by_status(tickets),
        GroupingMode::User => group_by_user(tickets, users),
        GroupingMode::Priority => group_by_priority(tickets),
    };

    for group in &mut groups {
        sort_tickets(&mut group.tickets, ordering);
    }
    order_groups(&mut groups, grouping);

    let projection = Projection {
        grouping,
        ordering,
        groups,
    };
    tracing::debug!(
        %grouping,
        %ordering,
        columns = projection.groups.len(),
        placed = projection.ticket_count(),
        total = tickets.len(),
        "projected board"
    );
    projection
}

/// [`project`] driven by a [`ViewSelection`].
pub fn project_selection(tickets: &[Ticket], users: &[User], selection: ViewSelection) -> Projection {
    project(tickets, users, selection.grouping, selection.ordering)
}

fn group_by_status(tickets: &[Ticket]) -> Vec<Group> {
    let mut buckets = Buckets::default();
    for status in Status::ALL {
        buckets.seed(status.as_str());
    }
    for ticket in tickets {
        buckets.push(&ticket.status, ticket);
    }
    buckets.groups
}

fn group_by_priority(tickets: &[Ticket]) -> Vec<Group> {
    let mut buckets = Buckets::default();
    for priority in Priority::DISPLAY_ORDER {
        buckets.seed(priority.as_str());
    }
    for ticket in tickets {
        buckets.push(ticket.priority_level().as_str(), ticket);
    }
    buckets.groups
}

/// Tickets without a resolvable, named user are left out.
fn group_by_user(tickets: &[Ticket], users: &[User]) -> Vec<Group> {
    let mut buckets = Buckets::default();
    for user in users.iter().filter(|u| !u.name.is_empty()) {
        buckets.seed(&user.name);
    }

    let directory = UserDirectory::new(users);
    let mut dropped = 0usize;
    for ticket in tickets {
        match directory.resolve(ticket) {
            Some(user) if !user.name.is_empty() => buckets.push(&user.name, ticket),
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "tickets without a named user left off the board");
    }
    buckets.groups
}

fn sort_tickets(tickets: &mut [Ticket], ordering: OrderingMode) {
    match ordering {
        OrderingMode::Priority => tickets.sort_by(|a, b| b.priority.cmp(&a.priority)),
        OrderingMode::Title => tickets.sort_by(|a, b| compare_text(&a.title, &b.title)),
    }
}

/// Sorts columns for display. The sort is stable, so labels with equal
/// weight (unrecognized statuses) keep the order they were discovered in.
fn order_groups(groups: &mut [Group], grouping: GroupingMode) {
    match grouping {
        GroupingMode::Status => groups.sort_by_key(|g| {
            Status::from_label(&g.label).map_or(Status::ALL.len(), |s| s.display_rank())
        }),
        GroupingMode::Priority => groups.sort_by_key(|g| {
            Priority::from_label(&g.label).map_or(u8::MAX, |p| p.display_weight())
        }),
        GroupingMode::User => groups.sort_by(|a, b| compare_text(&a.label, &b.label)),
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
