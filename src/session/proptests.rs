//! Property-based tests for session state

use super::*;
use proptest::prelude::*;

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n\r]{0,12}"
}

fn arb_non_blank() -> impl Strategy<Value = String> {
    "[ ]{0,3}[a-zA-Z0-9?!]{1,20}[ ]{0,3}"
}

fn arb_draft() -> impl Strategy<Value = String> {
    prop_oneof![arb_blank(), arb_non_blank()]
}

proptest! {
    #[test]
    fn last_set_draft_wins(drafts in proptest::collection::vec(arb_draft(), 1..10)) {
        let mut state = SessionState::new();
        for draft in &drafts {
            state.set_draft(draft.clone());
        }
        let last = drafts.last().unwrap();
        prop_assert_eq!(state.draft(), last.as_str());

        let accepted = state.accept_submission();
        if last.trim().is_empty() {
            prop_assert!(accepted.is_none());
        } else {
            prop_assert_eq!(accepted.as_deref(), Some(last.as_str()));
        }
    }

    #[test]
    fn set_draft_is_idempotent(draft in arb_draft()) {
        let mut once = SessionState::new();
        once.set_draft(draft.clone());

        let mut twice = SessionState::new();
        twice.set_draft(draft.clone());
        twice.set_draft(draft);

        prop_assert_eq!(once.draft(), twice.draft());
        prop_assert_eq!(once.transcript().len(), twice.transcript().len());
        prop_assert_eq!(once.is_busy(), twice.is_busy());
    }

    #[test]
    fn blank_submission_changes_nothing(draft in arb_blank(), busy in any::<bool>()) {
        let mut state = SessionState::new();
        state.set_busy(busy);
        state.set_draft(draft.clone());

        prop_assert!(state.accept_submission().is_none());
        prop_assert!(state.transcript().is_empty());
        prop_assert_eq!(state.draft(), draft.as_str());
        prop_assert_eq!(state.is_busy(), busy);
    }

    #[test]
    fn transcript_only_grows(drafts in proptest::collection::vec(arb_draft(), 0..20)) {
        let mut state = SessionState::new();
        let mut previous_len = 0;

        for draft in drafts {
            state.set_draft(draft.clone());
            let accepted = state.accept_submission();
            let len = state.transcript().len();

            prop_assert!(len >= previous_len);
            if let Some(content) = accepted {
                prop_assert_eq!(len, previous_len + 1);
                prop_assert_eq!(state.draft(), "");
                let last = state.last_message().unwrap();
                prop_assert_eq!(last.content(), content.as_str());
                prop_assert_eq!(last.sender(), Sender::User);
            }
            previous_len = len;
        }
    }
}
