//! Subtrack Core
//!
//! Domain types and parsing rules for the subscription tracking service.
//!
//! This crate defines:
//! - **Domain Types**: [`Subscription`], [`NewSubscription`], [`SubscriptionPatch`]
//! - **Month Parsing**: the shared `MM-YYYY` rule used for every date input
//!
//! # Example
//!
//! ```rust
//! use subtrack_core::month;
//!
//! let start = month::parse_month_year("07-2025").unwrap();
//! assert_eq!(start.to_string(), "2025-07-01");
//! ```

#![forbid(unsafe_code)]

pub mod month;
pub mod types;

pub use month::{parse_month_year, ParseMonthError};
pub use types::{NewSubscription, Subscription, SubscriptionPatch};
