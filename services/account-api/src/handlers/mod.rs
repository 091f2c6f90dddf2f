//! HTTP handlers

mod accounts;
mod health;

pub use accounts::{current, login, logout, signup, update_subscription};
pub use health::{health, ready};
