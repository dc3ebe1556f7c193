use super::*;
use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::{ExplainError, ExplainFuture};
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::oneshot;

type Reply = Result<String, ExplainError>;

/// Answers each prompt with whatever the test sends on the channel registered for the
/// prompt's "Highlighted lines" label.
#[derive(Default)]
struct ScriptedService {
    replies: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
}

impl ScriptedService {
    fn expect(&self, range: LineRange) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies
            .lock()
            .unwrap()
            .insert(format!("Highlighted lines {range}:"), rx);
        tx
    }
}

impl ExplainService for ScriptedService {
    fn explain(&self, prompt: String) -> ExplainFuture {
        let reply = {
            let mut replies = self.replies.lock().unwrap();
            let key = replies.keys().find(|key| prompt.contains(key.as_str())).cloned();
            key.and_then(|key| replies.remove(&key))
        };
        Box::pin(async move {
            match reply {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ExplainError::Network("reply dropped".to_string()))),
                None => Err(ExplainError::Network("unexpected prompt".to_string())),
            }
        })
    }
}

struct Fixture {
    service: Arc<ScriptedService>,
    orchestrator: ExplainOrchestrator,
    overlay: OverlayStack,
    document: Document,
    rx: Receiver<AppMessage>,
}

fn fixture() -> Fixture {
    let (tx, rx) = mpsc::channel();
    let service = Arc::new(ScriptedService::default());
    let runtime = AsyncRuntime::new(tx).unwrap();
    let orchestrator = ExplainOrchestrator::new(service.clone(), runtime);
    Fixture {
        service,
        orchestrator,
        overlay: OverlayStack::new(),
        document: Document::from_lines(["a", "b", "c", "d"], LanguageId::PlainText),
        rx,
    }
}

fn next_message(rx: &Receiver<AppMessage>) -> AppMessage {
    rx.recv_timeout(Duration::from_secs(5))
        .expect("explain result was never delivered")
}

fn top_content(overlay: &OverlayStack) -> Option<&ExplainContent> {
    match overlay.top() {
        Some(OverlayView::Explain { content, .. }) => Some(content),
        _ => None,
    }
}

#[test]
fn request_shows_loading_view_immediately() {
    let mut f = fixture();
    let range = LineRange::new(1, 2);
    let _reply = f.service.expect(range);

    let generation = f.orchestrator.request(&f.document, range, &mut f.overlay);

    assert_eq!(generation, 1);
    assert_eq!(f.orchestrator.phase(), ExplainPhase::InFlight);
    assert_eq!(f.overlay.top(), Some(&OverlayView::loading(1, range)));
}

#[test]
fn success_replaces_loading_view() {
    let mut f = fixture();
    let range = LineRange::new(1, 2);
    let reply = f.service.expect(range);
    f.orchestrator.request(&f.document, range, &mut f.overlay);

    reply.send(Ok("It prints b and c.".to_string())).unwrap();
    let phase = f.orchestrator.apply(next_message(&f.rx), &mut f.overlay);

    assert_eq!(phase, ExplainPhase::Delivered);
    assert_eq!(f.orchestrator.phase(), ExplainPhase::Delivered);
    assert_eq!(
        top_content(&f.overlay),
        Some(&ExplainContent::Text("It prints b and c.".to_string()))
    );
    assert_eq!(f.overlay.len(), 1);
}

#[test]
fn last_request_wins_when_older_result_arrives_later() {
    let mut f = fixture();
    let first = LineRange::new(0, 0);
    let second = LineRange::new(1, 2);
    let reply_a = f.service.expect(first);
    let reply_b = f.service.expect(second);

    let a = f.orchestrator.request(&f.document, first, &mut f.overlay);
    let b = f.orchestrator.request(&f.document, second, &mut f.overlay);
    assert!(b > a);
    assert_eq!(f.overlay.len(), 1);

    reply_b.send(Ok("B".to_string())).unwrap();
    let phase = f.orchestrator.apply(next_message(&f.rx), &mut f.overlay);
    assert_eq!(phase, ExplainPhase::Delivered);

    reply_a.send(Ok("A".to_string())).unwrap();
    assert!(f.rx.recv_timeout(Duration::from_millis(300)).is_err());

    assert_eq!(
        top_content(&f.overlay),
        Some(&ExplainContent::Text("B".to_string()))
    );
}

#[test]
fn stale_message_is_dropped_even_if_posted() {
    let mut f = fixture();
    let range = LineRange::new(1, 2);
    let _first = f.service.expect(LineRange::new(0, 0));
    let _second = f.service.expect(range);
    f.orchestrator
        .request(&f.document, LineRange::new(0, 0), &mut f.overlay);
    f.orchestrator.request(&f.document, range, &mut f.overlay);

    let stale = AppMessage::ExplainFinished {
        generation: 1,
        range: LineRange::new(0, 0),
        outcome: ExplainOutcome::Success("A".to_string()),
    };
    assert_eq!(
        f.orchestrator.apply(stale, &mut f.overlay),
        ExplainPhase::Superseded
    );
    assert_eq!(top_content(&f.overlay), Some(&ExplainContent::Loading));
    assert_eq!(f.orchestrator.phase(), ExplainPhase::InFlight);
}

#[test]
fn http_failure_is_shown_and_next_request_still_works() {
    let mut f = fixture();
    let range = LineRange::new(1, 2);

    let reply = f.service.expect(range);
    f.orchestrator.request(&f.document, range, &mut f.overlay);
    reply.send(Err(ExplainError::Status(500))).unwrap();
    let phase = f.orchestrator.apply(next_message(&f.rx), &mut f.overlay);

    assert_eq!(phase, ExplainPhase::Failed);
    assert_eq!(
        top_content(&f.overlay),
        Some(&ExplainContent::Error(
            "The model service returned HTTP status 500".to_string()
        ))
    );

    f.overlay.pop();
    f.orchestrator.dismissed(f.orchestrator.generation());

    let reply = f.service.expect(range);
    f.orchestrator.request(&f.document, range, &mut f.overlay);
    reply.send(Ok("works".to_string())).unwrap();
    let phase = f.orchestrator.apply(next_message(&f.rx), &mut f.overlay);

    assert_eq!(phase, ExplainPhase::Delivered);
    assert_eq!(
        top_content(&f.overlay),
        Some(&ExplainContent::Text("works".to_string()))
    );
}

#[test]
fn abandoned_request_ends_in_failure_not_loading() {
    let mut f = fixture();
    let range = LineRange::new(0, 3);
    let reply = f.service.expect(range);
    f.orchestrator.request(&f.document, range, &mut f.overlay);

    drop(reply);
    let phase = f.orchestrator.apply(next_message(&f.rx), &mut f.overlay);

    assert_eq!(phase, ExplainPhase::Failed);
    assert!(!top_content(&f.overlay).unwrap().is_loading());
}

#[test]
fn result_after_dismissal_does_not_reopen_overlay() {
    let mut f = fixture();
    let range = LineRange::new(2, 2);
    let reply = f.service.expect(range);
    f.orchestrator.request(&f.document, range, &mut f.overlay);

    f.overlay.pop();
    f.orchestrator.dismissed(f.orchestrator.generation());
    assert_eq!(f.orchestrator.phase(), ExplainPhase::Idle);

    reply.send(Ok("late".to_string())).unwrap();
    let phase = f.orchestrator.apply(next_message(&f.rx), &mut f.overlay);

    assert_eq!(phase, ExplainPhase::Superseded);
    assert!(f.overlay.is_empty());
    assert_eq!(f.orchestrator.phase(), ExplainPhase::Idle);
}

#[test]
fn result_reaches_explain_view_under_help() {
    let mut f = fixture();
    let range = LineRange::new(0, 1);
    let reply = f.service.expect(range);
    f.orchestrator.request(&f.document, range, &mut f.overlay);
    f.overlay.push(OverlayView::Help);

    reply.send(Ok("text".to_string())).unwrap();
    let phase = f.orchestrator.apply(next_message(&f.rx), &mut f.overlay);

    assert_eq!(phase, ExplainPhase::Delivered);
    assert_eq!(f.overlay.top(), Some(&OverlayView::Help));
    f.overlay.pop();
    assert_eq!(
        top_content(&f.overlay),
        Some(&ExplainContent::Text("text".to_string()))
    );
}

#[test]
fn rerequest_under_help_leaves_no_waiting_view_behind() {
    let mut f = fixture();
    let first = LineRange::new(0, 0);
    let second = LineRange::new(1, 2);
    let first_reply = f.service.expect(first);
    let second_reply = f.service.expect(second);

    f.orchestrator.request(&f.document, first, &mut f.overlay);
    f.overlay.push(OverlayView::Help);
    let latest = f.orchestrator.request(&f.document, second, &mut f.overlay);

    let generations: Vec<_> = f
        .overlay
        .iter()
        .filter_map(OverlayView::explain_generation)
        .collect();
    assert_eq!(generations, vec![latest]);

    second_reply.send(Ok("B".to_string())).unwrap();
    let phase = f.orchestrator.apply(next_message(&f.rx), &mut f.overlay);
    assert_eq!(phase, ExplainPhase::Delivered);

    first_reply.send(Ok("A".to_string())).unwrap();
    assert!(f.rx.recv_timeout(Duration::from_millis(300)).is_err());

    assert_eq!(
        top_content(&f.overlay),
        Some(&ExplainContent::Text("B".to_string()))
    );
    f.overlay.pop();
    assert_eq!(f.overlay.top(), Some(&OverlayView::Help));
    f.overlay.pop();
    assert!(f.overlay.is_empty());
}

#[test]
fn closing_an_older_view_keeps_latest_request_in_flight() {
    let mut f = fixture();
    let range = LineRange::new(0, 1);
    let _first = f.service.expect(range);
    let old = f.orchestrator.request(&f.document, range, &mut f.overlay);
    let _second = f.service.expect(LineRange::new(2, 3));
    f.orchestrator
        .request(&f.document, LineRange::new(2, 3), &mut f.overlay);

    f.orchestrator.dismissed(old);
    assert_eq!(f.orchestrator.phase(), ExplainPhase::InFlight);
}
