#[cfg(test)]
#[path = "message_input_test.rs"]
mod message_input_test;

use crate::types::{ComposerTypes, Identifiable};

/// Mutable state of the message composer: draft text, staged attachments,
/// users mentioned so far, and the send-in-progress flag.
///
/// Held in a single `RwSignal` by the owning [`MessageInput`] component and
/// redistributed to descendants through the composer context. Descendants
/// never mutate it directly; changes flow through the composer's callbacks.
///
/// [`MessageInput`]: crate::components::message_input::MessageInput
pub struct MessageInputState<T: ComposerTypes> {
    pub text: String,
    pub attachments: Vec<T::Attachment>,
    pub mentioned_users: Vec<T::User>,
    pub sending: bool,
}

impl<T: ComposerTypes> Default for MessageInputState<T> {
    fn default() -> Self {
        Self {
            text: String::new(),
            attachments: Vec::new(),
            mentioned_users: Vec::new(),
            sending: false,
        }
    }
}

impl<T: ComposerTypes> Clone for MessageInputState<T> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            attachments: self.attachments.clone(),
            mentioned_users: self.mentioned_users.clone(),
            sending: self.sending,
        }
    }
}

impl<T: ComposerTypes> MessageInputState<T> {
    /// Replace the draft text.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Stage an attachment. Staging the same id twice replaces the earlier
    /// entry rather than duplicating it.
    pub fn add_attachment(&mut self, attachment: T::Attachment) {
        if let Some(existing) = self
            .attachments
            .iter_mut()
            .find(|a| a.id() == attachment.id())
        {
            *existing = attachment;
            return;
        }
        self.attachments.push(attachment);
    }

    /// Remove a staged attachment by id. Returns whether anything was removed.
    pub fn remove_attachment(&mut self, id: &str) -> bool {
        let before = self.attachments.len();
        self.attachments.retain(|a| a.id() != id);
        self.attachments.len() != before
    }

    /// Record a mentioned user, deduplicated by id.
    pub fn add_mention(&mut self, user: T::User) {
        if self.mentioned_users.iter().any(|u| u.id() == user.id()) {
            return;
        }
        self.mentioned_users.push(user);
    }

    /// Whether the draft is submittable: non-blank text or at least one
    /// attachment, and no send already in flight.
    pub fn can_submit(&self) -> bool {
        if self.sending {
            return false;
        }
        !self.text.trim().is_empty() || !self.attachments.is_empty()
    }

    /// Detect an autocomplete trigger in the token under the cursor.
    ///
    /// Looks at the last whitespace-delimited token of the draft text; if it
    /// starts with one of `triggers`, returns that character and the partial
    /// query typed after it. A bare trigger character yields an empty query.
    pub fn active_trigger(&self, triggers: &[char]) -> Option<(char, &str)> {
        let token = self.text.split_whitespace().last()?;
        if !self.text.ends_with(token) {
            // Trailing whitespace closes the token; no trigger is active.
            return None;
        }
        let first = token.chars().next()?;
        if triggers.contains(&first) {
            return Some((first, &token[first.len_utf8()..]));
        }
        None
    }

    /// Snapshot the current draft into a submit payload. Text is trimmed;
    /// the caller mints the id and supplies the thread parent, if any.
    pub fn draft(&self, id: String, parent: Option<T::Message>) -> MessageDraft<T> {
        MessageDraft {
            id,
            text: self.text.trim().to_owned(),
            attachments: self.attachments.clone(),
            mentioned_users: self.mentioned_users.clone(),
            parent,
        }
    }

    /// Clear the draft fields after a submit. The `sending` flag is left
    /// untouched; the owning composer manages it around async delivery.
    pub fn reset(&mut self) {
        self.text.clear();
        self.attachments.clear();
        self.mentioned_users.clear();
    }
}

/// The payload handed to the application when the composer submits.
pub struct MessageDraft<T: ComposerTypes> {
    /// Client-generated id, minted per submit.
    pub id: String,
    pub text: String,
    pub attachments: Vec<T::Attachment>,
    pub mentioned_users: Vec<T::User>,
    /// Set when composing a threaded reply.
    pub parent: Option<T::Message>,
}

impl<T: ComposerTypes> Clone for MessageDraft<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            text: self.text.clone(),
            attachments: self.attachments.clone(),
            mentioned_users: self.mentioned_users.clone(),
            parent: self.parent.clone(),
        }
    }
}
