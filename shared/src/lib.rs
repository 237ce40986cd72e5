//! Shared types for the attendance desk
//!
//! Data models and wire DTOs used by both the HTTP gateway and the
//! desk controller.

pub mod client;
pub mod models;

// Re-export the core entities for convenience
pub use models::attendance::{AttendanceEntry, PaymentMethod};
pub use models::member::Member;
