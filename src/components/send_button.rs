//! Send button, the smallest context consumer.

#[cfg(test)]
#[path = "send_button_test.rs"]
mod send_button_test;

use leptos::prelude::*;

use crate::context::message_input::MessageInputContextValue;
use crate::types::ComposerTypes;

/// Submit button for the composer.
///
/// Reads the nearest composer context; disabled until the draft is
/// submittable. Rendering outside a [`MessageInput`] is supported (previews,
/// fixtures): the button uses the silent raw read and renders nothing, with
/// no misuse warning.
///
/// [`MessageInput`]: crate::components::message_input::MessageInput
#[component]
pub fn SendButton<T>(
    /// Ties the button to the application's [`ComposerTypes`] marker.
    #[prop(optional)]
    _ty: std::marker::PhantomData<T>,
) -> impl IntoView
where
    T: ComposerTypes,
{
    let Some(composer) = use_context::<MessageInputContextValue<T>>() else {
        return ().into_any();
    };

    let state = composer.state;
    let on_submit = composer.on_submit;
    let can_send = move || state.with(|s| s.can_submit());

    view! {
        <button
            class="message-input__send btn btn--primary"
            on:click=move |_| on_submit.run(())
            disabled=move || !can_send()
        >
            "Send"
        </button>
    }
    .into_any()
}
