//! # chat-composer
//!
//! Leptos building blocks for a chat message-composer UI. The crate centers
//! on a typed context layer: the owning [`MessageInput`] component merges its
//! state, behavior callbacks, and configuration into one context value and
//! provides it to its subtree, so nested input widgets read the composer
//! through [`use_message_input_context`] instead of prop threading.
//!
//! Domain shapes (attachments, users, messages, and the rest) are pluggable
//! through the [`ComposerTypes`] trait; [`DefaultComposerTypes`] covers
//! applications that have nothing to substitute.
//!
//! [`MessageInput`]: components::message_input::MessageInput
//! [`use_message_input_context`]: context::message_input::use_message_input_context
//! [`ComposerTypes`]: types::ComposerTypes
//! [`DefaultComposerTypes`]: types::DefaultComposerTypes

pub mod components;
pub mod context;
pub mod state;
pub mod types;
