//! The owning message composer component.
//!
//! Builds the state signal and behavior callbacks, merges them with the
//! caller's configuration into a [`MessageInputContextValue`], provides it,
//! and renders its children inside that scope. The children are the actual
//! input widgets (text box, attachment previews, [`SendButton`]), all of
//! which read the composer through the context accessor.
//!
//! [`SendButton`]: crate::components::send_button::SendButton

use leptos::prelude::*;

use crate::context::message_input::{
    ComposerConfig, MessageInputContextValue, provide_message_input_context,
};
use crate::state::message_input::{MessageDraft, MessageInputState};
use crate::types::ComposerTypes;

/// Message composer root.
///
/// `on_send` receives the finished [`MessageDraft`] when a descendant invokes
/// the submit callback with a submittable draft; delivery (and toggling the
/// `sending` flag around it) is the application's concern.
#[component]
pub fn MessageInput<T>(
    /// Composer configuration; defaults enable the built-in triggers.
    #[prop(optional)]
    config: ComposerConfig<T>,
    on_send: Callback<MessageDraft<T>>,
    children: Children,
) -> impl IntoView
where
    T: ComposerTypes,
{
    let state = RwSignal::new(MessageInputState::<T>::default());

    let disabled = config.disabled;
    let parent_message = config.parent_message.clone();

    let on_change = Callback::new(move |text: String| {
        state.update(|s| s.set_text(text));
    });

    let add_attachment = Callback::new(move |attachment: T::Attachment| {
        state.update(|s| s.add_attachment(attachment));
    });

    let remove_attachment = Callback::new(move |id: String| {
        state.update(|s| {
            s.remove_attachment(&id);
        });
    });

    let on_submit = Callback::new(move |(): ()| {
        if disabled || !state.with_untracked(MessageInputState::can_submit) {
            return;
        }

        let draft = state.with_untracked(|s| {
            s.draft(uuid::Uuid::new_v4().to_string(), parent_message.clone())
        });
        on_send.run(draft);
        state.update(MessageInputState::reset);
    });

    provide_message_input_context(MessageInputContextValue {
        state,
        on_submit,
        on_change,
        add_attachment,
        remove_attachment,
        config,
    });

    view! {
        <div class="message-input" class:message-input--disabled=disabled>
            {children()}
        </div>
    }
}
