// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use kb_core::{
    BoardView, GroupingMode, OrderingMode, Priority, SelectionStore, Status, Ticket, User,
};

use crate::colors::Palette;

/// Shown in place of columns until both tickets and users are available.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Column icon for a status.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Backlog => "📋",
        Status::Todo => "◌",
        Status::InProgress => "⏳",
        Status::Done => "✅",
        Status::Canceled => "❌",
    }
}

/// Column and card icon for a priority.
pub fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::NoPriority => "⚫",
        Priority::Urgent => "🔴",
        Priority::High => "🟡",
        Priority::Medium => "🟢",
        Priority::Low => "⚪",
    }
}

/// Icon shown before a column label.
///
/// Labels outside the canonical set (unrecognized statuses) get a generic icon.
pub fn group_icon(grouping: GroupingMode, label: &str) -> &'static str {
    match grouping {
        GroupingMode::Status => Status::from_label(label).map_or("📋", status_icon),
        GroupingMode::Priority => Priority::from_label(label).map_or("📌", priority_icon),
        GroupingMode::User => "👤",
    }
}

/// Presence dot followed by the user's initial, e.g. `🟢A`.
///
/// Unassigned or unknown users render as an offline dot alone.
pub fn format_avatar(user: Option<&User>) -> String {
    let dot = if user.is_some_and(|u| u.available) {
        "🟢"
    } else {
        "⚫"
    };
    let initial = user.and_then(|u| u.name.chars().next());
    match initial {
        Some(c) => format!("{}{}", dot, c),
        None => dot.to_string(),
    }
}

/// Format a single card line: id, priority icon, title, first tag, avatar.
pub fn format_card(ticket: &Ticket, user: Option<&User>, palette: &Palette) -> String {
    let mut line = format!(
        "  {} {} {}",
        palette.context(ticket.id.as_str()),
        priority_icon(ticket.priority_level()),
        ticket.title
    );
    if let Some(tag) = ticket.first_tag() {
        line.push_str(&format!(" [{}]", palette.literal(tag)));
    }
    line.push_str(&format!(" ({})", format_avatar(user)));
    line
}

/// Format a column header: icon, label, ticket count.
pub fn format_group_header(
    grouping: GroupingMode,
    label: &str,
    count: usize,
    palette: &Palette,
) -> String {
    format!(
        "{} {} {}",
        group_icon(grouping, label),
        palette.header(label),
        palette.context(&count.to_string())
    )
}

/// Format the whole board as text columns separated by blank lines.
pub fn format_board<S: SelectionStore>(view: &BoardView<S>, palette: &Palette) -> String {
    if view.is_loading() {
        return LOADING_MESSAGE.to_string();
    }

    let projection = view.current_projection();
    let mut output = Vec::new();
    for group in &projection.groups {
        if !output.is_empty() {
            output.push(String::new());
        }
        output.push(format_group_header(
            projection.grouping,
            &group.label,
            group.len(),
            palette,
        ));
        for ticket in &group.tickets {
            output.push(format_card(ticket, view.resolve_user(ticket), palette));
        }
    }
    output.join("\n")
}

/// JSON representation of a card: the ticket plus its resolved user.
#[derive(Serialize)]
struct CardJson<'a> {
    #[serde(flatten)]
    ticket: &'a Ticket,
    user: Option<&'a User>,
}

/// JSON representation of a column.
#[derive(Serialize)]
struct GroupJson<'a> {
    label: &'a str,
    count: usize,
    tickets: Vec<CardJson<'a>>,
}

/// JSON output structure for the board.
#[derive(Serialize)]
struct BoardJson<'a> {
    grouping: GroupingMode,
    ordering: OrderingMode,
    loading: bool,
    groups: Vec<GroupJson<'a>>,
}

/// Format the board as pretty-printed JSON.
pub fn format_board_json<S: SelectionStore>(view: &BoardView<S>) -> serde_json::Result<String> {
    let projection = view.current_projection();
    let groups = projection
        .groups
        .iter()
        .map(|group| GroupJson {
            label: &group.label,
            count: group.len(),
            tickets: group
                .tickets
                .iter()
                .map(|ticket| CardJson {
                    ticket,
                    user: view.resolve_user(ticket),
                })
                .collect(),
        })
        .collect();
    let output = BoardJson {
        grouping: projection.grouping,
        ordering: projection.ordering,
        loading: view.is_loading(),
        groups,
    };
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
