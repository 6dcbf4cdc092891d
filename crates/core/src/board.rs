// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The view controller: board data, the current selection, and the latest
//! projection, kept in step.

use crate::error::Result;
use crate::project::{project_selection, Projection};
use crate::ticket::{BoardData, Ticket, User, UserDirectory};
use crate::view::{GroupingMode, OrderingMode, ViewSelection};

/// Persists the view selection between sessions.
///
/// This allows injecting an in-memory store for testing.
pub trait SelectionStore {
    /// Returns the saved selection, or `None` when nothing was saved yet.
    fn load_selection(&self) -> Result<Option<ViewSelection>>;

    /// Saves the selection, replacing any previous one.
    fn save_selection(&mut self, selection: &ViewSelection) -> Result<()>;
}

impl<S: SelectionStore + ?Sized> SelectionStore for Box<S> {
    fn load_selection(&self) -> Result<Option<ViewSelection>> {
        (**self).load_selection()
    }

    fn save_selection(&mut self, selection: &ViewSelection) -> Result<()> {
        (**self).save_selection(selection)
    }
}

/// Supplies the board data, once, at startup.
pub trait BoardSource {
    /// Fetches every ticket and user; `None` when the data is unavailable.
    fn fetch_board(&self) -> Option<BoardData>;
}

/// Selection store that keeps everything in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySelectionStore {
    saved: Option<ViewSelection>,
    saves: usize,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a selection, as if from a prior session.
    pub fn with_saved(selection: ViewSelection) -> Self {
        MemorySelectionStore {
            saved: Some(selection),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<ViewSelection> {
        self.saved
    }

    /// How many times the selection was saved.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SelectionStore for MemorySelectionStore {
    fn load_selection(&self) -> Result<Option<ViewSelection>> {
        Ok(self.saved)
    }

    fn save_selection(&mut self, selection: &ViewSelection) -> Result<()> {
        self.saved = Some(*selection);
        self.saves += 1;
        Ok(())
    }
}

/// Holds the board snapshot and selection, and re-projects on every change.
///
/// Recomputation is always total: each change rebuilds the projection from
/// the full snapshot.
pub struct BoardView<S: SelectionStore> {
    store: S,
    selection: ViewSelection,
    tickets: Vec<Ticket>,
    users: Vec<User>,
    projection: Projection,
}

impl<S: SelectionStore> BoardView<S> {
    /// Creates an empty board, restoring the saved selection from `store`.
    ///
    /// A store that cannot be read is logged and the defaults apply.
    pub fn new(store: S) -> Self {
        let selection = match store.load_selection() {
            Ok(Some(selection)) => selection,
            Ok(None) => ViewSelection::default(),
            Err(e) => {
                tracing::warn!("failed to load view selection, using defaults: {}", e);
                ViewSelection::default()
            }
        };
        Self::with_selection(store, selection)
    }

    /// Creates an empty board with an explicit selection. Nothing is saved.
    pub fn with_selection(store: S, selection: ViewSelection) -> Self {
        let mut view = BoardView {
            store,
            selection,
            tickets: Vec::new(),
            users: Vec::new(),
            projection: Projection::default(),
        };
        view.refresh();
        view
    }

    pub fn selection(&self) -> ViewSelection {
        self.selection
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The projection for the current data and selection.
    pub fn current_projection(&self) -> &Projection {
        &self.projection
    }

    /// True until both tickets and users are available.
    pub fn is_loading(&self) -> bool {
        self.tickets.is_empty() || self.users.is_empty()
    }

    /// Replaces the whole snapshot and re-projects.
    pub fn replace_data(&mut self, tickets: Vec<Ticket>, users: Vec<User>) {
        self.tickets = tickets;
        self.users = users;
        self.refresh();
    }

    /// Fetches from `source` once. On failure the current snapshot is kept.
    ///
    /// Returns whether data arrived.
    pub fn load<B: BoardSource + ?Sized>(&mut self, source: &B) -> bool {
        match source.fetch_board() {
            Some(board) => {
                tracing::debug!(
                    tickets = board.tickets.len(),
                    users = board.users.len(),
                    "board data loaded"
                );
                self.replace_data(board.tickets, board.users);
                true
            }
            None => {
                tracing::debug!("no board data available");
                false
            }
        }
    }

    pub fn set_grouping_mode(&mut self, grouping: GroupingMode) {
        self.commit(ViewSelection {
            grouping,
            ..self.selection
        });
    }

    pub fn set_ordering_mode(&mut self, ordering: OrderingMode) {
        self.commit(ViewSelection {
            ordering,
            ..self.selection
        });
    }

    /// Parses and applies a grouping mode from user input.
    ///
    /// Invalid input is rejected and the selection is left as it was.
    pub fn select_grouping(&mut self, raw: &str) -> Result<()> {
        let grouping = raw.parse::<GroupingMode>()?;
        self.set_grouping_mode(grouping);
        Ok(())
    }

    /// Parses and applies an ordering mode from user input.
    ///
    /// Invalid input is rejected and the selection is left as it was.
    pub fn select_ordering(&mut self, raw: &str) -> Result<()> {
        let ordering = raw.parse::<OrderingMode>()?;
        self.set_ordering_mode(ordering);
        Ok(())
    }

    /// The user assigned to `ticket`, for card rendering.
    ///
    /// Uses the same lookup as the projection, so duplicate ids resolve alike.
    pub fn resolve_user(&self, ticket: &Ticket) -> Option<&User> {
        UserDirectory::new(&self.users).resolve(ticket)
    }

    /// Applies a new selection: re-project first, then persist.
    fn commit(&mut self, selection: ViewSelection) {
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        self.refresh();
        if let Err(e) = self.store.save_selection(&selection) {
            tracing::warn!("failed to save view selection: {}", e);
        }
    }

    fn refresh(&mut self) {
        self.projection = project_selection(&self.tickets, &self.users, self.selection);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
