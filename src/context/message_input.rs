//! Context container for the message composer.
//!
//! The owning [`MessageInput`] component merges its state handle, behavior
//! callbacks, and configuration into one [`MessageInputContextValue`] and
//! provides it to its subtree. Descendants at any depth read it back through
//! [`use_message_input_context`] without intermediate components re-passing
//! it. Nested provisions shadow outer ones for their own descendants only.
//!
//! The accessor logs a warning on reads outside a provider; callers that
//! expect to render without a composer can reach for the silent raw read,
//! `use_context::<MessageInputContextValue<T>>()`, instead.
//!
//! [`MessageInput`]: crate::components::message_input::MessageInput

#[cfg(test)]
#[path = "message_input_test.rs"]
mod message_input_test;

use leptos::prelude::*;

use crate::state::message_input::MessageInputState;
use crate::types::ComposerTypes;

/// Autocomplete trigger characters the composer ships with: mentions,
/// slash commands, emoji shortcodes.
pub const DEFAULT_TRIGGERS: [char; 3] = ['@', '/', ':'];

/// Configuration handed down from the enclosing composer component.
pub struct ComposerConfig<T: ComposerTypes> {
    /// Disables the whole composer (read-only channels, muted users).
    pub disabled: bool,
    /// Maximum draft length enforced by input widgets, if any.
    pub max_length: Option<usize>,
    /// Characters that open an autocomplete popup. Defaults to
    /// [`DEFAULT_TRIGGERS`].
    pub triggers: Vec<char>,
    /// Slash commands offered by the `/` autocomplete.
    pub commands: Vec<T::Command>,
    /// The channel being composed into, when known.
    pub channel: Option<T::Channel>,
    /// Thread parent; drafts submitted under it become replies.
    pub parent_message: Option<T::Message>,
    /// Application-defined trigger payloads beyond the built-in characters.
    pub custom_triggers: Vec<T::Trigger>,
}

impl<T: ComposerTypes> Default for ComposerConfig<T> {
    fn default() -> Self {
        Self {
            disabled: false,
            max_length: None,
            triggers: DEFAULT_TRIGGERS.to_vec(),
            commands: Vec::new(),
            channel: None,
            parent_message: None,
            custom_triggers: Vec::new(),
        }
    }
}

impl<T: ComposerTypes> Clone for ComposerConfig<T> {
    fn clone(&self) -> Self {
        Self {
            disabled: self.disabled,
            max_length: self.max_length,
            triggers: self.triggers.clone(),
            commands: self.commands.clone(),
            channel: self.channel.clone(),
            parent_message: self.parent_message.clone(),
            custom_triggers: self.custom_triggers.clone(),
        }
    }
}

/// The merged composer context value: state handle, behavior callbacks, and
/// configuration.
///
/// Cheap to clone; the signal and callbacks are arena handles, so every clone
/// observes the same underlying state. Descendants treat it as read-only and
/// route mutation through the callbacks.
pub struct MessageInputContextValue<T: ComposerTypes> {
    /// Live composer state. Reading it inside a reactive closure subscribes
    /// the reader to draft updates.
    pub state: RwSignal<MessageInputState<T>>,
    /// Submit the current draft, if submittable.
    pub on_submit: Callback<()>,
    /// Replace the draft text.
    pub on_change: Callback<String>,
    /// Stage an attachment on the draft.
    pub add_attachment: Callback<T::Attachment>,
    /// Remove a staged attachment by id.
    pub remove_attachment: Callback<String>,
    pub config: ComposerConfig<T>,
}

impl<T: ComposerTypes> Clone for MessageInputContextValue<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            on_submit: self.on_submit,
            on_change: self.on_change,
            add_attachment: self.add_attachment,
            remove_attachment: self.remove_attachment,
            config: self.config.clone(),
        }
    }
}

/// Provide a composer context value to the current reactive owner's subtree.
///
/// For callers already inside a component body. Providing again in the same
/// scope replaces the earlier value for subsequent reads.
pub fn provide_message_input_context<T: ComposerTypes>(value: MessageInputContextValue<T>) {
    provide_context(value);
}

/// Provider component: associates `value` with its children for the duration
/// of their render lifetime.
#[component]
pub fn MessageInputContextProvider<T>(
    value: MessageInputContextValue<T>,
    children: Children,
) -> impl IntoView
where
    T: ComposerTypes,
{
    provide_message_input_context(value);
    children()
}

/// Read the nearest enclosing composer context.
///
/// Returns `None` when the caller is not wrapped by a provider, logging one
/// warning per call. Subtrees that legitimately render without a composer
/// (previews, fixtures) should match on the `None` and degrade rather than
/// unwrap.
pub fn use_message_input_context<T: ComposerTypes>() -> Option<MessageInputContextValue<T>> {
    read_or_warn(|| {
        leptos::logging::warn!(
            "MessageInputContext read outside a MessageInputContextProvider; \
             composer state is unavailable here"
        );
    })
}

/// Read the context, invoking `warn` on every absent read. The diagnostic is
/// per call, never deduplicated.
fn read_or_warn<T: ComposerTypes>(warn: impl FnOnce()) -> Option<MessageInputContextValue<T>> {
    let value = use_context::<MessageInputContextValue<T>>();
    if value.is_none() {
        warn();
    }
    value
}
