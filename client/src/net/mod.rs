//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the single `POST /send_message` exchange and its error
//! classification, and `types` defines the JSON wire schema.

pub mod api;
pub mod types;
