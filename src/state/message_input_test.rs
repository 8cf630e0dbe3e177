use super::*;

use crate::types::{DefaultAttachment, DefaultComposerTypes, DefaultUser};

type State = MessageInputState<DefaultComposerTypes>;

fn attachment(id: &str) -> DefaultAttachment {
    DefaultAttachment {
        id: id.to_owned(),
        file_name: format!("{id}.png"),
        mime_type: "image/png".to_owned(),
        url: None,
    }
}

fn user(id: &str, name: &str) -> DefaultUser {
    DefaultUser {
        id: id.to_owned(),
        name: name.to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_draft() {
    let state = State::default();
    assert!(state.text.is_empty());
    assert!(state.attachments.is_empty());
    assert!(state.mentioned_users.is_empty());
    assert!(!state.sending);
}

// =============================================================
// Text
// =============================================================

#[test]
fn set_text_replaces_draft() {
    let mut state = State::default();
    state.set_text("hello".to_owned());
    state.set_text("hello world".to_owned());
    assert_eq!(state.text, "hello world");
}

// =============================================================
// Attachments
// =============================================================

#[test]
fn add_attachment_stages_entry() {
    let mut state = State::default();
    state.add_attachment(attachment("a1"));
    state.add_attachment(attachment("a2"));
    assert_eq!(state.attachments.len(), 2);
}

#[test]
fn add_attachment_same_id_replaces() {
    let mut state = State::default();
    state.add_attachment(attachment("a1"));

    let mut updated = attachment("a1");
    updated.url = Some("https://cdn.example/a1".to_owned());
    state.add_attachment(updated);

    assert_eq!(state.attachments.len(), 1);
    assert_eq!(
        state.attachments[0].url.as_deref(),
        Some("https://cdn.example/a1")
    );
}

#[test]
fn remove_attachment_by_id() {
    let mut state = State::default();
    state.add_attachment(attachment("a1"));
    state.add_attachment(attachment("a2"));

    assert!(state.remove_attachment("a1"));
    assert_eq!(state.attachments.len(), 1);
    assert_eq!(state.attachments[0].id, "a2");
}

#[test]
fn remove_attachment_unknown_id_is_noop() {
    let mut state = State::default();
    state.add_attachment(attachment("a1"));

    assert!(!state.remove_attachment("missing"));
    assert_eq!(state.attachments.len(), 1);
}

// =============================================================
// Mentions
// =============================================================

#[test]
fn add_mention_dedups_by_id() {
    let mut state = State::default();
    state.add_mention(user("u1", "Ada"));
    state.add_mention(user("u1", "Ada L."));
    state.add_mention(user("u2", "Grace"));

    assert_eq!(state.mentioned_users.len(), 2);
    assert_eq!(state.mentioned_users[0].name, "Ada");
}

// =============================================================
// Submit guard
// =============================================================

#[test]
fn can_submit_requires_content() {
    let mut state = State::default();
    assert!(!state.can_submit());

    state.set_text("   ".to_owned());
    assert!(!state.can_submit());

    state.set_text("hi".to_owned());
    assert!(state.can_submit());
}

#[test]
fn can_submit_with_attachment_and_no_text() {
    let mut state = State::default();
    state.add_attachment(attachment("a1"));
    assert!(state.can_submit());
}

#[test]
fn can_submit_false_while_sending() {
    let mut state = State::default();
    state.set_text("hi".to_owned());
    state.sending = true;
    assert!(!state.can_submit());
}

// =============================================================
// Trigger detection
// =============================================================

#[test]
fn active_trigger_on_last_token() {
    let mut state = State::default();
    state.set_text("hello @gra".to_owned());
    assert_eq!(state.active_trigger(&['@', '/']), Some(('@', "gra")));
}

#[test]
fn active_trigger_bare_character_has_empty_query() {
    let mut state = State::default();
    state.set_text("/".to_owned());
    assert_eq!(state.active_trigger(&['@', '/']), Some(('/', "")));
}

#[test]
fn active_trigger_none_after_trailing_space() {
    let mut state = State::default();
    state.set_text("hello @gra ".to_owned());
    assert_eq!(state.active_trigger(&['@', '/']), None);
}

#[test]
fn active_trigger_none_for_plain_text() {
    let mut state = State::default();
    state.set_text("hello there".to_owned());
    assert_eq!(state.active_trigger(&['@', '/']), None);
}

#[test]
fn active_trigger_none_for_empty_text() {
    let state = State::default();
    assert_eq!(state.active_trigger(&['@', '/']), None);
}

// =============================================================
// Draft snapshot
// =============================================================

#[test]
fn draft_trims_text_and_carries_fields() {
    let mut state = State::default();
    state.set_text("  hello @Ada  ".to_owned());
    state.add_attachment(attachment("a1"));
    state.add_mention(user("u1", "Ada"));

    let draft = state.draft("m-1".to_owned(), None);

    assert_eq!(draft.id, "m-1");
    assert_eq!(draft.text, "hello @Ada");
    assert_eq!(draft.attachments.len(), 1);
    assert_eq!(draft.mentioned_users.len(), 1);
    assert!(draft.parent.is_none());

    // Snapshotting leaves the live draft untouched.
    assert_eq!(state.text, "  hello @Ada  ");
}

#[test]
fn draft_carries_thread_parent() {
    let mut state = State::default();
    state.set_text("reply".to_owned());

    let parent = crate::types::DefaultMessage {
        id: "m-0".to_owned(),
        text: "root".to_owned(),
        user_id: "u9".to_owned(),
    };
    let draft = state.draft("m-2".to_owned(), Some(parent));

    assert_eq!(draft.parent.as_ref().map(|m| m.id.as_str()), Some("m-0"));
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_clears_draft_but_keeps_sending() {
    let mut state = State::default();
    state.set_text("hi".to_owned());
    state.add_attachment(attachment("a1"));
    state.add_mention(user("u1", "Ada"));
    state.sending = true;

    state.reset();

    assert!(state.text.is_empty());
    assert!(state.attachments.is_empty());
    assert!(state.mentioned_users.is_empty());
    assert!(state.sending);
}
