//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `webhook` - Stripe signature verification, event envelope and lifecycle decoding

pub mod webhook;
