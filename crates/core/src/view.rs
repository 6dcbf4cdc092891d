// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! View modes and the persisted view selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which ticket attribute partitions the board into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    #[default]
    Status,
    User,
    Priority,
}

impl GroupingMode {
    pub const ALL: [GroupingMode; 3] = [
        GroupingMode::Status,
        GroupingMode::User,
        GroupingMode::Priority,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingMode::Status => "status",
            GroupingMode::User => "user",
            GroupingMode::Priority => "priority",
        }
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GroupingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "status" => Ok(GroupingMode::Status),
            "user" => Ok(GroupingMode::User),
            "priority" => Ok(GroupingMode::Priority),
            _ => Err(Error::InvalidGrouping(s.to_string())),
        }
    }
}

/// Which comparator sorts tickets inside a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingMode {
    #[default]
    Priority,
    Title,
}

impl OrderingMode {
    pub const ALL: [OrderingMode; 2] = [OrderingMode::Priority, OrderingMode::Title];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingMode::Priority => "priority",
            OrderingMode::Title => "title",
        }
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "priority" => Ok(OrderingMode::Priority),
            "title" => Ok(OrderingMode::Title),
            _ => Err(Error::InvalidOrdering(s.to_string())),
        }
    }
}

/// The user's current (grouping, ordering) choice. Defaults to status/priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewSelection {
    pub grouping: GroupingMode,
    pub ordering: OrderingMode,
}

impl ViewSelection {
    pub fn new(grouping: GroupingMode, ordering: OrderingMode) -> Self {
        ViewSelection { grouping, ordering }
    }

    /// Every valid combination; there are no forbidden pairs.
    pub fn all() -> impl Iterator<Item = ViewSelection> {
        GroupingMode::ALL.into_iter().flat_map(|grouping| {
            OrderingMode::ALL
                .into_iter()
                .map(move |ordering| ViewSelection { grouping, ordering })
        })
    }
}

impl fmt::Display for ViewSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grouping={} ordering={}", self.grouping, self.ordering)
    }
}

/// The persisted selection record, read leniently.
///
/// Fields are free-form strings so that a record written by another version
/// (or edited by hand) never blocks startup: a missing or unrecognized field
/// falls back to that field's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

impl ViewRecord {
    pub fn into_selection(self) -> ViewSelection {
        let grouping = match self.grouping.as_deref().map(str::parse::<GroupingMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                tracing::warn!("ignoring saved grouping: {}", e);
                GroupingMode::default()
            }
            None => GroupingMode::default(),
        };
        let ordering = match self.ordering.as_deref().map(str::parse::<OrderingMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                tracing::warn!("ignoring saved ordering: {}", e);
                OrderingMode::default()
            }
            None => OrderingMode::default(),
        };
        ViewSelection { grouping, ordering }
    }
}

impl From<ViewSelection> for ViewRecord {
    fn from(selection: ViewSelection) -> Self {
        ViewRecord {
            grouping: Some(selection.grouping.as_str().to_string()),
            ordering: Some(selection.ordering.as_str().to_string()),
        }
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
