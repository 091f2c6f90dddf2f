//! Gatehouse Types - Shared domain types
//!
//! This crate contains domain types used across the Gatehouse service:
//! - Account identity
//! - Email addresses
//! - Subscription plans

pub mod account;
pub mod email;
pub mod subscription;

pub use account::*;
pub use email::*;
pub use subscription::*;
