//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is kept as plain data so the controller and its tests never need a
//! live document. Components wrap these models in `RwSignal` and provide them
//! through Leptos context.

pub mod chat;
