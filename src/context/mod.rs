//! Tree-scoped context layer.
//!
//! DESIGN
//! ======
//! Deeply nested composer widgets read shared state through Leptos context
//! instead of threading props through every intermediate component. Each
//! context module pairs a typed value with a provider and a warning accessor.

pub mod message_input;
