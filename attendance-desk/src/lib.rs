//! Attendance Desk - headless controller for the attendance screen
//!
//! Owns the roster, the pending attendance entries and the selected
//! date, and keeps them consistent across operator edits, searches,
//! date changes and batch submission. Rendering is someone else's job:
//! a view layer reads the session snapshot and feeds edits back in.

pub mod controller;
pub mod error;
pub mod search;
pub mod session;

pub use controller::DeskController;
pub use error::{DeskError, DeskResult};
pub use search::SearchDebouncer;
pub use session::{DeskSession, PendingSummary, parse_amount};
