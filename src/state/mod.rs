//! Composer state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs held behind a single `RwSignal`, provided via
//! context by the owning composer component. Descendants read through the
//! context layer and mutate only through the composer's callbacks, so every
//! reader in a render pass observes the same value.

pub mod message_input;
