//! Composer components: the owning root plus context-consuming widgets.

pub mod message_input;
pub mod send_button;
