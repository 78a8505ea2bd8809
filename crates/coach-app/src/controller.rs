//! Tutor controller: turns user actions into dispatches and render events.
//!
//! Every failure publishes exactly one `RenderEvent::Error` and is also
//! returned to the caller.

use coach_ai::{AsyncDispatcher, DispatchError};
use coach_common::{EventBus, RenderEvent};
use coach_exercises::ExerciseCatalog;

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    /// No dispatcher was built; the payload explains why.
    #[error("{0}")]
    NotConfigured(String),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("exercise {number} not found in tier {tier:?}")]
    ExerciseNotFound { tier: String, number: usize },
}

pub struct Tutor {
    catalog: ExerciseCatalog,
    dispatcher: Result<AsyncDispatcher, String>,
    events: EventBus,
}

impl Tutor {
    /// `dispatcher` is `Err(reason)` when startup could not build one.
    pub fn new(
        catalog: ExerciseCatalog,
        dispatcher: Result<AsyncDispatcher, String>,
        events: EventBus,
    ) -> Self {
        Self {
            catalog,
            dispatcher,
            events,
        }
    }

    pub fn notice(&self, text: impl Into<String>) {
        self.events.notice(text);
    }

    pub fn is_busy(&self) -> bool {
        self.dispatcher.as_ref().is_ok_and(|d| d.is_busy())
    }

    /// Startup notices, plus a warning when chat is unavailable.
    pub fn greet(&self) {
        self.events.notice("Welcome to coach!");
        self.events.notice("Type /list to browse exercises, /exercise <tier> <n> to load one,");
        self.events.notice("or just ask a question. /help shows all commands.");
        if self.catalog.is_empty() {
            self.events.notice("No exercises are available.");
        }
        if let Err(reason) = &self.dispatcher {
            self.events.notice(format!("Chat is disabled: {reason}"));
        }
    }

    /// Send a user turn. The reply arrives later as an `AssistantTurn` or
    /// `Error` event.
    pub fn send_message(&self, text: &str) -> Result<(), TutorError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(self.fail(DispatchError::EmptyInput.into()));
        }

        let dispatcher = self.ready().map_err(|e| self.fail(e))?;

        self.events.publish(RenderEvent::UserTurn(text.to_string()));
        self.events.notice("Generating a response...");

        let on_reply = self.events.clone();
        let on_error = self.events.clone();
        let result = dispatcher.dispatch(
            text,
            move |reply| {
                on_reply.publish(RenderEvent::AssistantTurn(reply));
            },
            move |description| {
                on_error.error(format!("Error: {description}"));
            },
        );

        match result {
            Ok(id) => {
                tracing::debug!(request = %id, "message dispatched");
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Load exercise `number` (1-based) of `tier` and send its prompt.
    pub fn load_exercise(&self, tier: &str, number: usize) -> Result<(), TutorError> {
        let prompt = number
            .checked_sub(1)
            .and_then(|index| self.catalog.build_prompt(tier, index));

        let Some(prompt) = prompt else {
            return Err(self.fail(TutorError::ExerciseNotFound {
                tier: tier.to_string(),
                number,
            }));
        };

        self.ready().map_err(|e| self.fail(e))?;
        self.events.notice(format!("{tier} - exercise {number} loaded"));
        self.send_message(&prompt)
    }

    pub fn clear_conversation(&self) -> Result<(), TutorError> {
        if let Ok(dispatcher) = &self.dispatcher {
            if let Err(e) = dispatcher.clear_history() {
                return Err(self.fail(e.into()));
            }
        }
        self.events.notice("Conversation cleared.");
        Ok(())
    }

    /// Publish the tier list with numbered exercise titles.
    pub fn list_exercises(&self) {
        if self.catalog.list_tiers().is_empty() {
            self.events.notice("No exercises are available.");
            return;
        }
        for tier in self.catalog.list_tiers() {
            let mut lines = vec![format!("> {tier}")];
            lines.extend(
                self.catalog
                    .list_exercises(tier)
                    .iter()
                    .enumerate()
                    .map(|(i, record)| format!("  {}. {}", i + 1, record.title)),
            );
            self.events.notice(lines.join("\n"));
        }
    }

    /// Publish turn and token counts for the current conversation.
    pub fn show_history(&self) -> Result<(), TutorError> {
        let dispatcher = match &self.dispatcher {
            Ok(d) => d,
            Err(reason) => return Err(self.fail(TutorError::NotConfigured(reason.clone()))),
        };
        let summary = dispatcher.with_session(|s| {
            let tracker = s.tracker();
            format!(
                "{} turns in this conversation, {} tokens used over {} requests",
                s.turn_count(),
                tracker.total_tokens(),
                tracker.call_count()
            )
        });
        match summary {
            Ok(text) => {
                self.events.notice(text);
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// The dispatcher, if one exists and is idle.
    ///
    /// Only this thread dispatches, so an idle gate cannot close before the
    /// caller's dispatch.
    fn ready(&self) -> Result<&AsyncDispatcher, TutorError> {
        let dispatcher = self
            .dispatcher
            .as_ref()
            .map_err(|reason| TutorError::NotConfigured(reason.clone()))?;
        if dispatcher.is_busy() {
            return Err(DispatchError::Busy.into());
        }
        Ok(dispatcher)
    }

    fn fail(&self, err: TutorError) -> TutorError {
        self.events.error(err.to_string());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use crate::test_support::{catalog, recv, settle, tutor_with, EchoClient};

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn send_message_emits_user_notice_then_assistant() {
        let (tutor, mut rx) = tutor_with(Arc::new(EchoClient::default()));

        tutor.send_message("  hi  ").unwrap();

        assert_eq!(recv(&mut rx).await, RenderEvent::UserTurn("hi".into()));
        assert!(matches!(recv(&mut rx).await, RenderEvent::SystemNotice(_)));
        assert_eq!(recv(&mut rx).await, RenderEvent::AssistantTurn("echo: hi".into()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn transport_failure_emits_one_error() {
        let (tutor, mut rx) = tutor_with(Arc::new(EchoClient::failing()));

        tutor.send_message("hi").unwrap();

        recv(&mut rx).await;
        recv(&mut rx).await;
        let RenderEvent::Error(text) = recv(&mut rx).await else {
            panic!("expected error event");
        };
        assert!(text.contains("connection refused"));
        settle(&tutor).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn missing_credential_reports_configuration_error_without_network() {
        let events = EventBus::new(16);
        let mut rx = events.subscribe();
        let tutor = Tutor::new(
            catalog(),
            Err("API key not configured: set CLAUDE_API_KEY".into()),
            events,
        );

        let err = tutor.send_message("hi").unwrap_err();

        assert!(matches!(err, TutorError::NotConfigured(_)));
        let RenderEvent::Error(text) = recv(&mut rx).await else {
            panic!("expected error event");
        };
        assert!(text.contains("API key not configured"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn blank_message_is_rejected_before_dispatch() {
        let client = Arc::new(EchoClient::default());
        let (tutor, mut rx) = tutor_with(client.clone());

        let err = tutor.send_message("   ").unwrap_err();

        assert!(matches!(err, TutorError::Dispatch(DispatchError::EmptyInput)));
        assert!(matches!(recv(&mut rx).await, RenderEvent::Error(_)));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn send_while_busy_is_rejected_and_reply_arrives_first() {
        let (client, gate) = EchoClient::gated();
        let (tutor, mut rx) = tutor_with(Arc::new(client));

        tutor.send_message("first").unwrap();
        recv(&mut rx).await;
        recv(&mut rx).await;

        let err = tutor.send_message("second").unwrap_err();
        assert!(matches!(err, TutorError::Dispatch(DispatchError::Busy)));
        assert!(matches!(recv(&mut rx).await, RenderEvent::Error(_)));

        gate.notify_one();
        assert_eq!(recv(&mut rx).await, RenderEvent::AssistantTurn("echo: first".into()));
        settle(&tutor).await;

        gate.notify_one();
        tutor.send_message("second").unwrap();
        assert_eq!(recv(&mut rx).await, RenderEvent::UserTurn("second".into()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn load_exercise_sends_rendered_prompt() {
        let (tutor, mut rx) = tutor_with(Arc::new(EchoClient::default()));

        tutor.load_exercise("beginner", 1).unwrap();

        assert_eq!(
            recv(&mut rx).await,
            RenderEvent::SystemNotice("beginner - exercise 1 loaded".into())
        );
        let RenderEvent::UserTurn(prompt) = recv(&mut rx).await else {
            panic!("expected user turn");
        };
        assert!(prompt.contains("Pointers"));
        assert!(prompt.contains("beginner"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn load_exercise_out_of_range_is_an_error() {
        let (tutor, mut rx) = tutor_with(Arc::new(EchoClient::default()));

        for (tier, number) in [("beginner", 2), ("beginner", 0), ("advanced", 1)] {
            let err = tutor.load_exercise(tier, number).unwrap_err();
            assert!(matches!(err, TutorError::ExerciseNotFound { .. }));
            assert!(matches!(recv(&mut rx).await, RenderEvent::Error(_)));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn load_exercise_while_busy_reports_only_the_error() {
        let (client, gate) = EchoClient::gated();
        let (tutor, mut rx) = tutor_with(Arc::new(client));
        tutor.send_message("first").unwrap();
        recv(&mut rx).await;
        recv(&mut rx).await;

        let err = tutor.load_exercise("beginner", 1).unwrap_err();

        assert!(matches!(err, TutorError::Dispatch(DispatchError::Busy)));
        assert!(matches!(recv(&mut rx).await, RenderEvent::Error(_)));
        assert!(rx.try_recv().is_err());

        gate.notify_one();
        assert_eq!(recv(&mut rx).await, RenderEvent::AssistantTurn("echo: first".into()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn load_exercise_without_credential_reports_only_the_error() {
        let events = EventBus::new(16);
        let mut rx = events.subscribe();
        let tutor = Tutor::new(catalog(), Err("no key".into()), events);

        let err = tutor.load_exercise("beginner", 1).unwrap_err();

        assert!(matches!(err, TutorError::NotConfigured(_)));
        assert_eq!(recv(&mut rx).await, RenderEvent::Error("no key".into()));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn clear_conversation_empties_history() {
        let (tutor, mut rx) = tutor_with(Arc::new(EchoClient::default()));
        tutor.send_message("hi").unwrap();
        for _ in 0..3 {
            recv(&mut rx).await;
        }
        settle(&tutor).await;

        tutor.clear_conversation().unwrap();

        assert_eq!(
            recv(&mut rx).await,
            RenderEvent::SystemNotice("Conversation cleared.".into())
        );
        tutor.show_history().unwrap();
        let RenderEvent::SystemNotice(summary) = recv(&mut rx).await else {
            panic!("expected summary");
        };
        assert!(summary.starts_with("0 turns"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn show_history_counts_turns_and_requests() {
        let (tutor, mut rx) = tutor_with(Arc::new(EchoClient::default()));
        tutor.send_message("hi").unwrap();
        for _ in 0..3 {
            recv(&mut rx).await;
        }
        settle(&tutor).await;

        tutor.show_history().unwrap();

        assert_eq!(
            recv(&mut rx).await,
            RenderEvent::SystemNotice(
                "2 turns in this conversation, 0 tokens used over 1 requests".into()
            )
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn greet_warns_when_chat_disabled() {
        let events = EventBus::new(16);
        let mut rx = events.subscribe();
        let tutor = Tutor::new(ExerciseCatalog::empty(), Err("no key".into()), events);

        tutor.greet();

        let mut notices = Vec::new();
        while let Ok(event) = rx.try_recv() {
            notices.push(event.text().to_string());
        }
        assert!(notices.iter().any(|n| n == "No exercises are available."));
        assert!(notices.iter().any(|n| n == "Chat is disabled: no key"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_exercises_numbers_titles() {
        let (tutor, mut rx) = tutor_with(Arc::new(EchoClient::default()));

        tutor.list_exercises();

        assert_eq!(
            recv(&mut rx).await,
            RenderEvent::SystemNotice("> beginner\n  1. Pointers".into())
        );
    }
}
