//! Data models

pub mod attendance;
pub mod member;
