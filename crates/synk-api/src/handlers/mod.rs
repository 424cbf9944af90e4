//! Request handlers.

pub mod health;
pub mod jobs;
pub mod renders;
pub mod uploads;
pub mod waitlist;
