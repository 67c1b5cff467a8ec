use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::*;
use crate::error::FormError;
use crate::field::MemoryField;
use crate::session::SessionState;
use crate::test_support::ScriptedTransport;

fn submitter(
    message: &str,
    username: &str,
    transport: &ScriptedTransport,
) -> MessageSubmitter<MemoryField, ScriptedTransport> {
    MessageSubmitter::new(
        Session::default(),
        MemoryField::new(message),
        MemoryField::new(username),
        transport.clone(),
    )
}

// =============================================================
// Guards
// =============================================================

#[test]
fn empty_message_sends_nothing() {
    let transport = ScriptedTransport::responding(200);
    let form = submitter("", "alice", &transport);

    let outcome = block_on(form.submit());

    assert!(matches!(outcome, SubmitOutcome::Skipped(SkipReason::EmptyMessage)));
    assert!(transport.requests().is_empty());
    assert_eq!(form.username_field().value(), "alice");
}

#[test]
fn disconnected_session_sends_nothing() {
    let transport = ScriptedTransport::responding(200);
    let session = Session::new(SessionState { connected: false, ..SessionState::default() });
    let form = MessageSubmitter::new(session, MemoryField::new("hello"), MemoryField::new("alice"), transport.clone());

    let outcome = block_on(form.submit());

    assert!(matches!(outcome, SubmitOutcome::Skipped(SkipReason::Disconnected)));
    assert!(transport.requests().is_empty());
    assert_eq!(form.message_field().value(), "hello");
}

#[test]
fn empty_message_wins_over_disconnected() {
    let transport = ScriptedTransport::responding(200);
    let session = Session::new(SessionState { connected: false, ..SessionState::default() });
    let form = MessageSubmitter::new(session, MemoryField::new(""), MemoryField::new(""), transport);

    assert_eq!(form.prepare(), Err(SkipReason::EmptyMessage));
}

#[test]
fn empty_username_never_trips_the_guard() {
    let transport = ScriptedTransport::responding(200);
    let form = submitter("hello", "", &transport);
    let outgoing = form.prepare().expect("guard passes");
    assert_eq!(outgoing.username, "guest");
}

// =============================================================
// Requests
// =============================================================

#[test]
fn accepted_message_posts_once_and_clears_field() {
    let transport = ScriptedTransport::responding(200);
    let form = submitter("hello", "alice", &transport);

    let outcome = block_on(form.submit());

    assert!(outcome.is_accepted());
    assert_eq!(
        transport.requests(),
        vec![("/message".to_owned(), "room=lobby&username=alice&message=hello".to_owned())]
    );
    assert_eq!(form.message_field().value(), "");
    assert_eq!(form.username_field().value(), "alice");
}

#[test]
fn empty_username_posts_guest() {
    let transport = ScriptedTransport::responding(201);
    let form = submitter("hello", "", &transport);

    block_on(form.submit());

    assert_eq!(transport.requests()[0].1, "room=lobby&username=guest&message=hello");
}

#[test]
fn room_is_read_at_submit_time() {
    let transport = ScriptedTransport::responding(200);
    let session = Session::default();
    let form = MessageSubmitter::new(session.clone(), MemoryField::new("hi"), MemoryField::new("bo"), transport.clone());

    session.join_room("ops");
    block_on(form.submit());

    assert_eq!(transport.requests()[0].1, "room=ops&username=bo&message=hi");
}

#[test]
fn rejected_message_keeps_field() {
    let transport = ScriptedTransport::responding(500);
    let form = submitter("hello", "alice", &transport);

    let outcome = block_on(form.submit());

    assert!(matches!(outcome, SubmitOutcome::Rejected { status: 500 }));
    assert_eq!(transport.requests().len(), 1);
    assert_eq!(form.message_field().value(), "hello");
}

#[test]
fn network_failure_keeps_field() {
    let transport = ScriptedTransport::failing();
    let form = submitter("hello", "alice", &transport);

    let outcome = block_on(form.submit());

    assert!(matches!(outcome, SubmitOutcome::Failed(FormError::Network(_))));
    assert_eq!(transport.requests().len(), 1);
    assert_eq!(form.message_field().value(), "hello");
}

// =============================================================
// Overlapping submissions
// =============================================================

/// Type each message and submit it; every request is in flight before the
/// next message is typed.
fn spawn_messages(
    pool: &mut LocalPool,
    form: &MessageSubmitter<MemoryField, ScriptedTransport>,
    texts: &[&str],
    outcomes: &Rc<RefCell<Vec<(String, SubmitOutcome)>>>,
) {
    for text in texts {
        form.message_field().set_value(text);
        let form = form.clone();
        let outcomes = Rc::clone(outcomes);
        let label = (*text).to_owned();
        pool.spawner()
            .spawn_local(async move {
                let outcome = form.submit().await;
                outcomes.borrow_mut().push((label, outcome));
            })
            .expect("spawn");
        pool.run_until_stalled();
    }
}

#[test]
fn overlapping_messages_settle_in_completion_order() {
    let transport = ScriptedTransport::deferred();
    let form = submitter("", "alice", &transport);
    let outcomes = Rc::new(RefCell::new(Vec::new()));
    let mut pool = LocalPool::new();

    spawn_messages(&mut pool, &form, &["first", "second"], &outcomes);
    assert_eq!(transport.requests()[0].1, "room=lobby&username=alice&message=first");
    assert_eq!(transport.requests()[1].1, "room=lobby&username=alice&message=second");
    assert_eq!(form.message_field().value(), "second");

    transport.resolve(1, 200);
    pool.run_until_stalled();
    assert_eq!(form.message_field().value(), "");

    form.message_field().set_value("draft");
    transport.resolve(0, 200);
    pool.run_until_stalled();

    let outcomes = outcomes.borrow();
    assert_eq!(outcomes[0].0, "second");
    assert_eq!(outcomes[1].0, "first");
    assert!(outcomes.iter().all(|(_, outcome)| outcome.is_accepted()));
    assert_eq!(form.message_field().value(), "");
    assert_eq!(form.username_field().value(), "alice");
}

#[test]
fn latest_only_message_keeps_draft_after_stale_success() {
    let transport = ScriptedTransport::deferred();
    let form = submitter("", "alice", &transport).with_policy(CompletionPolicy::LatestOnly);
    let outcomes = Rc::new(RefCell::new(Vec::new()));
    let mut pool = LocalPool::new();

    spawn_messages(&mut pool, &form, &["first", "second"], &outcomes);

    transport.resolve(1, 200);
    pool.run_until_stalled();
    form.message_field().set_value("draft");
    transport.resolve(0, 200);
    pool.run_until_stalled();

    let outcomes = outcomes.borrow();
    assert!(outcomes[0].1.is_accepted());
    assert!(matches!(outcomes[1].1, SubmitOutcome::Superseded));
    assert_eq!(form.message_field().value(), "draft");
}
