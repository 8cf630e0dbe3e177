//! Domain type substitution surface for the composer.
//!
//! The composer is agnostic to the concrete shape of chat domain entities.
//! An application picks its shapes once, at the top level, by implementing
//! [`ComposerTypes`]; everything in this crate is generic over that single
//! trait rather than over eight free type parameters.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Structural contract for entities the composer tracks by identity.
///
/// Attachments are removed by id and mention lists are deduplicated by id,
/// so those two slots must expose one. Nothing else is required of them.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// The set of domain types flowing through the composer context.
///
/// Implement this on a marker type and hand it to the composer as its one
/// type parameter. [`DefaultComposerTypes`] is a ready-made starter set;
/// substituting richer types changes only the static shape of the context
/// value, never its propagation behavior.
pub trait ComposerTypes: 'static {
    type Attachment: Identifiable + Clone + Send + Sync + 'static;
    type Channel: Clone + Send + Sync + 'static;
    type Command: Clone + Send + Sync + 'static;
    type Event: Clone + Send + Sync + 'static;
    type Message: Clone + Send + Sync + 'static;
    type Reaction: Clone + Send + Sync + 'static;
    type User: Identifiable + Clone + Send + Sync + 'static;
    /// Payload for application-defined autocomplete triggers, beyond the
    /// built-in mention/command/emoji characters.
    type Trigger: Clone + Send + Sync + 'static;
}

/// Starter domain types for applications that have not substituted their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultComposerTypes;

impl ComposerTypes for DefaultComposerTypes {
    type Attachment = DefaultAttachment;
    type Channel = DefaultChannel;
    type Command = DefaultCommand;
    type Event = DefaultEvent;
    type Message = DefaultMessage;
    type Reaction = DefaultReaction;
    type User = DefaultUser;
    type Trigger = DefaultTrigger;
}

/// A file or media attachment staged on the composer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultAttachment {
    pub id: String,
    pub file_name: String,
    pub mime_type: String,
    pub url: Option<String>,
}

impl Identifiable for DefaultAttachment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The channel a message is composed into.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultChannel {
    pub id: String,
    pub name: String,
}

/// A slash command offered by the `/` autocomplete.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultCommand {
    pub name: String,
    pub description: String,
}

/// A composer-originated event (typing start/stop and the like).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultEvent {
    pub kind: String,
}

/// An existing message, referenced when replying in a thread or editing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultMessage {
    pub id: String,
    pub text: String,
    pub user_id: String,
}

impl Identifiable for DefaultMessage {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A reaction shape, consumed by sibling reaction-picker widgets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultReaction {
    pub kind: String,
}

/// A chat user, as surfaced in mention suggestions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultUser {
    pub id: String,
    pub name: String,
}

impl Identifiable for DefaultUser {
    fn id(&self) -> &str {
        &self.id
    }
}

/// An application-defined autocomplete trigger payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefaultTrigger {
    pub character: char,
    pub description: String,
}

impl Default for DefaultTrigger {
    fn default() -> Self {
        Self {
            character: '@',
            description: String::new(),
        }
    }
}
