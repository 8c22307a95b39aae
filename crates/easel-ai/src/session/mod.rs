//! Conversation session management.
//!
//! A `Session` holds the bounded conversation history and the token
//! tracker. Turns are only ever committed in user/assistant pairs, after a
//! staged result has been applied.

mod manager;

pub use manager::Session;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Message, Role, TokenUsage};

    #[test]
    fn request_messages_append_the_pending_turn() {
        let mut session = Session::new("claude").with_system_prompt("be brief");
        session.record_turn("hello", "hi there");

        let msgs = session.request_messages("draw a cat", None);
        assert_eq!(msgs.len(), 4);
        assert_eq!(msgs[0], Message::system("be brief"));
        assert_eq!(msgs[3], Message::user("draw a cat"));
        // the pending turn is not committed
        assert_eq!(session.message_count(), 2);
    }

    #[test]
    fn system_override_replaces_session_prompt() {
        let session = Session::new("claude").with_system_prompt("chatty");
        let msgs = session.request_messages("x", Some("draw"));
        assert_eq!(msgs[0], Message::system("draw"));
        assert_eq!(msgs.iter().filter(|m| m.role == Role::System).count(), 1);
    }

    #[test]
    fn history_is_bounded_and_starts_with_a_user_turn() {
        let mut session = Session::new("claude").with_max_history(5);
        for i in 0..4 {
            session.record_turn(format!("q{i}"), format!("a{i}"));
        }
        let msgs = session.messages();
        assert!(msgs.len() <= 5);
        assert_eq!(msgs[0].role, Role::User);
        assert_eq!(msgs.last().unwrap(), &Message::assistant("a3"));
    }

    #[test]
    fn clear_keeps_usage() {
        let mut session = Session::new("claude");
        session.record_turn("q", "a");
        session.record_usage(&TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
        });
        session.clear();
        assert_eq!(session.message_count(), 0);
        assert_eq!(session.tracker().total_tokens(), 15);
    }
}
