// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kb-core: Shared library for the kb ticket board
//!
//! This crate provides the board data types, the view-projection engine
//! that turns a ticket snapshot into ordered columns, and the view
//! controller that keeps the projection in step with the user's selection.

pub mod board;
pub mod collate;
pub mod error;
pub mod project;
pub mod ticket;
pub mod view;

pub use board::{BoardSource, BoardView, MemorySelectionStore, SelectionStore};
pub use error::{Error, Result};
pub use project::{project, project_selection, Group, OrderedGroups, Projection};
pub use ticket::{BoardData, Id, Priority, Status, Ticket, TicketWarning, User, UserDirectory};
pub use view::{GroupingMode, OrderingMode, ViewRecord, ViewSelection};
