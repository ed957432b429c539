//! Stripe Webhook Receiver
//!
//! Accepts Stripe webhook deliveries on `POST /stripe`, verifies their
//! signatures and logs customer subscription and payment-source lifecycle
//! events to stdout.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
pub mod telemetry;
