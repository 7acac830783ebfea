//! Session controller - the questionnaire state machine
//!
//! The controller never performs I/O. Operations return [`Effect`]s describing
//! the request to make; the caller runs them with [`perform`] and feeds the
//! resulting [`Outcome`] back through [`SessionController::apply`].

use shared::{
    ApiError, QuestionDescriptor, QuestionnaireApi, RespondRequest, RespondResponse,
    ResponseValue, StartResponse, StatusResponse,
};

use super::error::SessionError;
use super::phase::SessionPhase;
use super::transcript::Transcript;

/// Shown when the session could not be started. The session is unrecoverable.
pub const START_FAILED_MESSAGE: &str = "Sorry, something went wrong. Please refresh and try again.";

/// Shown when a submission fails. The same question is offered again.
pub const SUBMIT_FAILED_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// A request the controller wants made against the questionnaire service.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    StartSession,
    SubmitResponse(RespondRequest),
    FetchStatus { session_id: String },
}

/// The result of performing an [`Effect`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Started(Result<StartResponse, ApiError>),
    Responded {
        session_id: String,
        result: Result<RespondResponse, ApiError>,
    },
    StatusLoaded {
        session_id: String,
        result: Result<StatusResponse, ApiError>,
    },
}

/// Run one effect against the service.
pub async fn perform<A: QuestionnaireApi>(api: &A, effect: Effect) -> Outcome {
    match effect {
        Effect::StartSession => Outcome::Started(api.start_session().await),
        Effect::SubmitResponse(req) => {
            let result = api.respond(&req).await;
            Outcome::Responded {
                session_id: req.session_id,
                result,
            }
        }
        Effect::FetchStatus { session_id } => {
            let result = api.status(&session_id).await;
            Outcome::StatusLoaded { session_id, result }
        }
    }
}

/// Progress bar state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Progress {
    pub visible: bool,
    /// Bar width in percent
    pub percent: f64,
}

/// The question currently accepting input.
///
/// `epoch` changes every time an input is (re)shown, so the renderer can key
/// its widget on it and start from a clean state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveInput<'a> {
    pub question: &'a QuestionDescriptor,
    pub epoch: u64,
}

/// Conversation state for one questionnaire run.
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    phase: SessionPhase,
    session_id: Option<String>,
    pending_question: Option<QuestionDescriptor>,
    answered_count: u32,
    total_questions: Option<u32>,
    progress: Progress,
    transcript: Transcript,
    loading: bool,
    input_epoch: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn pending_question(&self) -> Option<&QuestionDescriptor> {
        self.pending_question.as_ref()
    }

    /// Questions answered, not counting answers that triggered a clarification
    pub fn answered_count(&self) -> u32 {
        self.answered_count
    }

    pub fn total_questions(&self) -> Option<u32> {
        self.total_questions
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether the transient "typing" indicator should be shown
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_input(&self) -> Option<ActiveInput<'_>> {
        if !self.phase.accepts_input() {
            return None;
        }
        self.pending_question.as_ref().map(|question| ActiveInput {
            question,
            epoch: self.input_epoch,
        })
    }

    /// Begin the session. Only valid once per controller.
    pub fn start(&mut self) -> Result<Effect, SessionError> {
        if self.phase != SessionPhase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        self.transition(SessionPhase::Starting);
        self.loading = true;
        log::info!("Starting questionnaire session");
        Ok(Effect::StartSession)
    }

    /// Record the user's answer and request its submission.
    pub fn submit_response(&mut self, value: ResponseValue) -> Result<Effect, SessionError> {
        let clarification = match self.phase {
            SessionPhase::AwaitingResponse { clarification } => clarification,
            SessionPhase::NotStarted | SessionPhase::Starting | SessionPhase::Failed => {
                return Err(SessionError::NotStarted)
            }
            SessionPhase::Submitting { .. } => return Err(SessionError::SubmissionInFlight),
            SessionPhase::Completed => return Err(SessionError::Completed),
            SessionPhase::Stalled => return Err(SessionError::NoPendingQuestion),
        };
        let session_id = self.session_id.clone().ok_or(SessionError::NotStarted)?;
        if self.pending_question.is_none() {
            return Err(SessionError::NoPendingQuestion);
        }

        self.transcript.push_user(value.to_string());
        self.transition(SessionPhase::Submitting { clarification });
        self.loading = true;
        log::debug!("Submitting response for session {}", session_id);
        Ok(Effect::SubmitResponse(RespondRequest { session_id, value }))
    }

    /// Request a status lookup for the progress bar. Best effort.
    pub fn refresh_progress(&self) -> Option<Effect> {
        if self.phase == SessionPhase::Completed {
            return None;
        }
        self.session_id
            .as_ref()
            .map(|session_id| Effect::FetchStatus {
                session_id: session_id.clone(),
            })
    }

    /// Fold a service result into the conversation state.
    pub fn apply(&mut self, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Started(result) => {
                self.on_started(result);
                Vec::new()
            }
            Outcome::Responded { session_id, result } => self.on_responded(&session_id, result),
            Outcome::StatusLoaded { session_id, result } => {
                self.on_status(&session_id, result);
                Vec::new()
            }
        }
    }

    fn on_started(&mut self, result: Result<StartResponse, ApiError>) {
        if self.phase != SessionPhase::Starting {
            log::warn!("Ignoring start result in phase {:?}", self.phase);
            return;
        }
        self.loading = false;

        let StartResponse {
            session_id,
            message,
            question,
            is_complete,
        } = match result {
            Ok(response) => response,
            Err(e) => {
                log::error!("Failed to start session: {}", e);
                self.transcript.push_ai(START_FAILED_MESSAGE);
                self.transition(SessionPhase::Failed);
                return;
            }
        };

        log::info!("Session {} started", session_id);
        self.session_id = Some(session_id);
        self.transcript.push_ai(message);

        match question {
            _ if is_complete => {
                // Nothing to ask; no input and no progress bar
                self.transition(SessionPhase::Completed);
            }
            Some(question) => {
                self.progress.visible = true;
                self.show_input(question, false);
            }
            None => {
                log::warn!("Start response carried neither a question nor completion");
                self.transition(SessionPhase::Stalled);
            }
        }
    }

    fn on_responded(
        &mut self,
        session_id: &str,
        result: Result<RespondResponse, ApiError>,
    ) -> Vec<Effect> {
        if self.session_id.as_deref() != Some(session_id) {
            log::warn!("Dropping response for stale session {}", session_id);
            return Vec::new();
        }
        let SessionPhase::Submitting { clarification } = self.phase else {
            log::warn!("Ignoring response in phase {:?}", self.phase);
            return Vec::new();
        };
        self.loading = false;

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("Failed to submit response: {}", e);
                self.transcript.push_ai(SUBMIT_FAILED_MESSAGE);
                match self.pending_question.take() {
                    Some(question) => self.show_input(question, clarification),
                    None => {
                        self.transition(SessionPhase::Stalled);
                    }
                }
                return Vec::new();
            }
        };

        self.transcript.push_ai(reply.message);

        if reply.is_complete {
            self.complete();
            return Vec::new();
        }

        let Some(question) = reply.question else {
            log::warn!("Response carried neither a question nor completion");
            self.pending_question = None;
            self.transition(SessionPhase::Stalled);
            return Vec::new();
        };

        let mut effects = Vec::new();
        if !reply.needs_clarification {
            self.answered_count += 1;
            effects.extend(self.refresh_progress());
        }
        self.show_input(question, reply.needs_clarification);
        effects
    }

    fn on_status(&mut self, session_id: &str, result: Result<StatusResponse, ApiError>) {
        if self.session_id.as_deref() != Some(session_id) {
            log::debug!("Dropping status for stale session {}", session_id);
            return;
        }
        if self.phase == SessionPhase::Completed {
            return;
        }
        match result {
            Ok(status) if status.total_questions > 0 => {
                self.total_questions = Some(status.total_questions);
                self.progress.percent =
                    100.0 * f64::from(status.response_count) / f64::from(status.total_questions);
            }
            Ok(_) => log::warn!("Status reported zero questions; progress unchanged"),
            Err(e) => log::warn!("Failed to refresh progress: {}", e),
        }
    }

    fn show_input(&mut self, question: QuestionDescriptor, clarification: bool) {
        self.pending_question = Some(question);
        self.input_epoch += 1;
        self.transition(SessionPhase::AwaitingResponse { clarification });
    }

    fn complete(&mut self) {
        self.pending_question = None;
        self.progress.percent = 100.0;
        if self.transition(SessionPhase::Completed) {
            self.transcript.push_completion();
        }
    }

    fn transition(&mut self, target: SessionPhase) -> bool {
        if !self.phase.can_transition_to(&target) {
            log::error!("Refusing transition {:?} -> {:?}", self.phase, target);
            return false;
        }
        log::debug!("Session phase {:?} -> {:?}", self.phase, target);
        self.phase = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::transcript::{Speaker, TranscriptEntry};
    use futures::executor::block_on;
    use shared::QuestionKind;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    fn question(kind: QuestionKind) -> QuestionDescriptor {
        QuestionDescriptor::new(kind)
    }

    fn start_ok(kind: QuestionKind) -> StartResponse {
        StartResponse {
            session_id: "session-1".to_string(),
            message: "Welcome! What's your name?".to_string(),
            question: Some(question(kind)),
            is_complete: false,
        }
    }

    fn reply(kind: Option<QuestionKind>, is_complete: bool, clarify: bool) -> RespondResponse {
        RespondResponse {
            message: "Thanks!".to_string(),
            question: kind.map(question),
            is_complete,
            needs_clarification: clarify,
        }
    }

    fn started_with(kind: QuestionKind) -> SessionController {
        let mut controller = SessionController::new();
        controller.start().unwrap();
        controller.apply(Outcome::Started(Ok(start_ok(kind))));
        controller
    }

    fn respond(
        controller: &mut SessionController,
        result: Result<RespondResponse, ApiError>,
    ) -> Vec<Effect> {
        controller.apply(Outcome::Responded {
            session_id: "session-1".to_string(),
            result,
        })
    }

    fn network_error() -> ApiError {
        ApiError::Network("connection reset".to_string())
    }

    mod start {
        use super::*;

        #[test]
        fn start_emits_request_and_shows_loading() {
            let mut controller = SessionController::new();
            assert_eq!(controller.start(), Ok(Effect::StartSession));
            assert_eq!(controller.phase(), SessionPhase::Starting);
            assert!(controller.is_loading());
            assert!(controller.active_input().is_none());
        }

        #[test]
        fn successful_start_shows_first_question() {
            let controller = started_with(QuestionKind::Text);

            assert_eq!(controller.session_id(), Some("session-1"));
            assert!(!controller.is_loading());
            assert!(controller.progress().visible);
            assert_eq!(
                controller.transcript().messages_from(Speaker::Ai),
                vec!["Welcome! What's your name?"]
            );
            let active = controller.active_input().unwrap();
            assert_eq!(active.question.kind, QuestionKind::Text);
        }

        #[test]
        fn zero_question_questionnaire_finalizes_without_input() {
            let mut controller = SessionController::new();
            controller.start().unwrap();
            controller.apply(Outcome::Started(Ok(StartResponse {
                session_id: "session-1".to_string(),
                message: "No questions configured.".to_string(),
                question: None,
                is_complete: true,
            })));

            assert_eq!(controller.phase(), SessionPhase::Completed);
            assert!(controller.active_input().is_none());
            assert!(!controller.progress().visible);
            assert_eq!(controller.transcript().len(), 1);
        }

        #[test]
        fn complete_flag_wins_over_question() {
            let mut controller = SessionController::new();
            controller.start().unwrap();
            let mut response = start_ok(QuestionKind::Text);
            response.is_complete = true;
            controller.apply(Outcome::Started(Ok(response)));

            assert_eq!(controller.phase(), SessionPhase::Completed);
            assert!(controller.active_input().is_none());
        }

        #[test]
        fn start_failure_is_fatal_to_session() {
            let mut controller = SessionController::new();
            controller.start().unwrap();
            controller.apply(Outcome::Started(Err(ApiError::Parse("bad json".into()))));

            assert_eq!(controller.phase(), SessionPhase::Failed);
            assert!(!controller.is_loading());
            assert!(controller.active_input().is_none());
            assert_eq!(
                controller.transcript().messages_from(Speaker::Ai),
                vec![START_FAILED_MESSAGE]
            );
            assert_eq!(
                controller.submit_response(ResponseValue::Text("x".into())),
                Err(SessionError::NotStarted)
            );
        }

        #[test]
        fn second_start_is_refused() {
            let mut controller = started_with(QuestionKind::Text);
            assert_eq!(controller.start(), Err(SessionError::AlreadyStarted));
            assert_eq!(controller.session_id(), Some("session-1"));
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn submit_before_start_is_refused() {
            let mut controller = SessionController::new();
            assert_eq!(
                controller.submit_response(ResponseValue::Boolean(true)),
                Err(SessionError::NotStarted)
            );
            assert!(controller.transcript().is_empty());
        }

        #[test]
        fn submit_enters_submitting_and_hides_input() {
            let mut controller = started_with(QuestionKind::YesNo);
            let effect = controller
                .submit_response(ResponseValue::Boolean(true))
                .unwrap();

            assert_eq!(
                effect,
                Effect::SubmitResponse(RespondRequest {
                    session_id: "session-1".to_string(),
                    value: ResponseValue::Boolean(true),
                })
            );
            assert_eq!(
                controller.phase(),
                SessionPhase::Submitting {
                    clarification: false
                }
            );
            assert!(controller.is_loading());
            assert!(controller.active_input().is_none());
            assert_eq!(controller.transcript().messages_from(Speaker::User), vec!["Yes"]);
        }

        #[test]
        fn second_submit_while_in_flight_is_refused() {
            let mut controller = started_with(QuestionKind::Text);
            controller
                .submit_response(ResponseValue::Text("a".into()))
                .unwrap();
            assert_eq!(
                controller.submit_response(ResponseValue::Text("b".into())),
                Err(SessionError::SubmissionInFlight)
            );
            assert_eq!(controller.transcript().messages_from(Speaker::User), vec!["a"]);
        }

        #[test]
        fn user_message_uses_human_readable_rendering() {
            let mut controller = started_with(QuestionKind::MultiChoice {
                options: vec!["Red".into(), "Blue".into()],
                allow_other: false,
            });
            controller
                .submit_response(ResponseValue::Choices(vec!["Red".into(), "Blue".into()]))
                .unwrap();
            assert_eq!(
                controller.transcript().messages_from(Speaker::User),
                vec!["Red, Blue"]
            );
        }

        #[test]
        fn accepted_answer_advances_and_requests_status() {
            let mut controller = started_with(QuestionKind::Text);
            controller
                .submit_response(ResponseValue::Text("Ada".into()))
                .unwrap();
            let effects = respond(
                &mut controller,
                Ok(reply(
                    Some(QuestionKind::Numeric {
                        min: None,
                        max: None,
                    }),
                    false,
                    false,
                )),
            );

            assert_eq!(controller.answered_count(), 1);
            assert_eq!(
                effects,
                vec![Effect::FetchStatus {
                    session_id: "session-1".to_string()
                }]
            );
            assert!(!controller.is_loading());
            assert_eq!(
                controller.phase(),
                SessionPhase::AwaitingResponse {
                    clarification: false
                }
            );
        }

        #[test]
        fn clarification_does_not_advance_count() {
            let mut controller = started_with(QuestionKind::Numeric {
                min: Some(0.0),
                max: Some(120.0),
            });
            controller
                .submit_response(ResponseValue::Number(f64::NAN))
                .unwrap();
            let effects = respond(
                &mut controller,
                Ok(reply(
                    Some(QuestionKind::Numeric {
                        min: Some(0.0),
                        max: Some(120.0),
                    }),
                    false,
                    true,
                )),
            );

            assert_eq!(controller.answered_count(), 0);
            assert!(effects.is_empty());
            assert_eq!(
                controller.phase(),
                SessionPhase::AwaitingResponse {
                    clarification: true
                }
            );
            assert_eq!(
                controller.transcript().messages_from(Speaker::User),
                vec!["NaN"]
            );
        }

        #[test]
        fn new_question_gets_new_input_epoch() {
            let mut controller = started_with(QuestionKind::Text);
            let first_epoch = controller.active_input().unwrap().epoch;
            controller
                .submit_response(ResponseValue::Text("x".into()))
                .unwrap();
            respond(
                &mut controller,
                Ok(reply(Some(QuestionKind::Text), false, true)),
            );
            let second_epoch = controller.active_input().unwrap().epoch;
            assert_ne!(first_epoch, second_epoch);
        }

        #[test]
        fn reply_without_question_or_completion_stalls() {
            let mut controller = started_with(QuestionKind::Text);
            controller
                .submit_response(ResponseValue::Text("x".into()))
                .unwrap();
            let effects = respond(&mut controller, Ok(reply(None, false, false)));

            assert!(effects.is_empty());
            assert_eq!(controller.phase(), SessionPhase::Stalled);
            assert!(controller.active_input().is_none());
            assert!(!controller.is_loading());
            assert_eq!(controller.answered_count(), 0);
        }

        #[test]
        fn failed_clarification_submit_restores_clarification_flag() {
            let mut controller = started_with(QuestionKind::Text);
            controller
                .submit_response(ResponseValue::Text("?".into()))
                .unwrap();
            respond(
                &mut controller,
                Ok(reply(Some(QuestionKind::Text), false, true)),
            );
            controller
                .submit_response(ResponseValue::Text("still ?".into()))
                .unwrap();
            respond(&mut controller, Err(network_error()));

            assert_eq!(
                controller.phase(),
                SessionPhase::AwaitingResponse {
                    clarification: true
                }
            );
        }

        #[test]
        fn stale_session_response_is_dropped() {
            let mut controller = started_with(QuestionKind::Text);
            controller
                .submit_response(ResponseValue::Text("x".into()))
                .unwrap();
            let effects = controller.apply(Outcome::Responded {
                session_id: "some-other-session".to_string(),
                result: Ok(reply(None, true, false)),
            });

            assert!(effects.is_empty());
            assert!(controller.is_loading());
            assert_eq!(
                controller.phase(),
                SessionPhase::Submitting {
                    clarification: false
                }
            );
        }
    }

    mod completion {
        use super::*;

        #[test]
        fn completion_hides_input_and_fills_progress() {
            let mut controller = started_with(QuestionKind::Date);
            controller
                .submit_response(ResponseValue::Text("2024-05-01".into()))
                .unwrap();
            let effects = respond(&mut controller, Ok(reply(None, true, false)));

            assert!(effects.is_empty());
            assert_eq!(controller.phase(), SessionPhase::Completed);
            assert!(controller.active_input().is_none());
            assert_eq!(controller.progress().percent, 100.0);
            assert_eq!(controller.transcript().completion_count(), 1);
            assert_eq!(
                controller.transcript().entries().last(),
                Some(&TranscriptEntry::Completion)
            );
        }

        #[test]
        fn submit_after_completion_is_refused() {
            let mut controller = started_with(QuestionKind::Text);
            controller
                .submit_response(ResponseValue::Text("x".into()))
                .unwrap();
            respond(&mut controller, Ok(reply(None, true, false)));

            assert_eq!(
                controller.submit_response(ResponseValue::Text("again".into())),
                Err(SessionError::Completed)
            );
            assert!(controller.refresh_progress().is_none());
        }

        #[test]
        fn late_status_cannot_lower_completed_progress() {
            let mut controller = started_with(QuestionKind::Text);
            controller
                .submit_response(ResponseValue::Text("x".into()))
                .unwrap();
            respond(&mut controller, Ok(reply(None, true, false)));
            controller.apply(Outcome::StatusLoaded {
                session_id: "session-1".to_string(),
                result: Ok(StatusResponse {
                    response_count: 1,
                    total_questions: 4,
                }),
            });

            assert_eq!(controller.progress().percent, 100.0);
        }

        #[test]
        fn duplicate_completion_reply_is_ignored() {
            let mut controller = started_with(QuestionKind::Text);
            controller
                .submit_response(ResponseValue::Text("x".into()))
                .unwrap();
            respond(&mut controller, Ok(reply(None, true, false)));
            respond(&mut controller, Ok(reply(None, true, false)));

            assert_eq!(controller.transcript().completion_count(), 1);
        }
    }

    mod progress {
        use super::*;

        fn status(
            controller: &mut SessionController,
            result: Result<StatusResponse, ApiError>,
        ) {
            controller.apply(Outcome::StatusLoaded {
                session_id: "session-1".to_string(),
                result,
            });
        }

        #[test]
        fn status_sets_exact_percentage() {
            let mut controller = started_with(QuestionKind::Text);
            status(
                &mut controller,
                Ok(StatusResponse {
                    response_count: 1,
                    total_questions: 3,
                }),
            );
            assert_eq!(controller.progress().percent, 100.0 * 1.0 / 3.0);
            assert_eq!(controller.total_questions(), Some(3));

            status(
                &mut controller,
                Ok(StatusResponse {
                    response_count: 2,
                    total_questions: 8,
                }),
            );
            assert_eq!(controller.progress().percent, 25.0);
        }

        #[test]
        fn status_failure_leaves_progress_and_transcript_alone() {
            let mut controller = started_with(QuestionKind::Text);
            status(
                &mut controller,
                Ok(StatusResponse {
                    response_count: 1,
                    total_questions: 2,
                }),
            );
            let transcript_len = controller.transcript().len();
            status(&mut controller, Err(network_error()));

            assert_eq!(controller.progress().percent, 50.0);
            assert_eq!(controller.transcript().len(), transcript_len);
        }

        #[test]
        fn zero_total_is_ignored() {
            let mut controller = started_with(QuestionKind::Text);
            status(
                &mut controller,
                Ok(StatusResponse {
                    response_count: 0,
                    total_questions: 0,
                }),
            );
            assert_eq!(controller.progress().percent, 0.0);
            assert_eq!(controller.total_questions(), None);
        }

        #[test]
        fn refresh_requires_a_session() {
            let controller = SessionController::new();
            assert!(controller.refresh_progress().is_none());

            let controller = started_with(QuestionKind::Text);
            assert_eq!(
                controller.refresh_progress(),
                Some(Effect::FetchStatus {
                    session_id: "session-1".to_string()
                })
            );
        }
    }

    /// In-memory service that replays queued results and records requests.
    #[derive(Default)]
    struct ScriptedApi {
        starts: RefCell<VecDeque<Result<StartResponse, ApiError>>>,
        replies: RefCell<VecDeque<Result<RespondResponse, ApiError>>>,
        statuses: RefCell<VecDeque<Result<StatusResponse, ApiError>>>,
        submitted: RefCell<Vec<RespondRequest>>,
        status_calls: RefCell<Vec<String>>,
    }

    impl QuestionnaireApi for ScriptedApi {
        async fn start_session(&self) -> Result<StartResponse, ApiError> {
            self.starts
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("unscripted start".into())))
        }

        async fn respond(&self, req: &RespondRequest) -> Result<RespondResponse, ApiError> {
            self.submitted.borrow_mut().push(req.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("unscripted respond".into())))
        }

        async fn status(&self, session_id: &str) -> Result<StatusResponse, ApiError> {
            self.status_calls.borrow_mut().push(session_id.to_string());
            self.statuses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("unscripted status".into())))
        }
    }

    /// Perform effects until the controller stops asking for more.
    fn drive(controller: &mut SessionController, api: &ScriptedApi, effect: Effect) {
        let mut queue = VecDeque::from([effect]);
        while let Some(effect) = queue.pop_front() {
            let outcome = block_on(perform(api, effect));
            queue.extend(controller.apply(outcome));
        }
    }

    mod scenarios {
        use super::*;

        #[test]
        fn text_then_numeric() {
            let api = ScriptedApi::default();
            api.starts.borrow_mut().push_back(Ok(start_ok(QuestionKind::Text)));
            api.replies.borrow_mut().push_back(Ok(reply(
                Some(QuestionKind::Numeric {
                    min: None,
                    max: None,
                }),
                false,
                false,
            )));
            api.statuses.borrow_mut().push_back(Ok(StatusResponse {
                response_count: 1,
                total_questions: 5,
            }));

            let mut controller = SessionController::new();
            let effect = controller.start().unwrap();
            drive(&mut controller, &api, effect);
            let effect = controller
                .submit_response(ResponseValue::Text("42".into()))
                .unwrap();
            drive(&mut controller, &api, effect);

            let transcript = controller.transcript();
            assert_eq!(transcript.messages_from(Speaker::Ai).len(), 2);
            assert_eq!(transcript.messages_from(Speaker::User), vec!["42"]);
            assert_eq!(controller.answered_count(), 1);
            assert_eq!(controller.progress().percent, 20.0);
            assert_eq!(*api.status_calls.borrow(), vec!["session-1".to_string()]);
            assert!(matches!(
                controller.active_input().unwrap().question.kind,
                QuestionKind::Numeric { .. }
            ));
        }

        #[test]
        fn submission_failure_on_date_question_reshows_input() {
            let api = ScriptedApi::default();
            api.starts.borrow_mut().push_back(Ok(start_ok(QuestionKind::Date)));
            api.replies.borrow_mut().push_back(Err(network_error()));

            let mut controller = SessionController::new();
            let effect = controller.start().unwrap();
            drive(&mut controller, &api, effect);
            let epoch_before = controller.active_input().unwrap().epoch;
            let ai_before = controller.transcript().messages_from(Speaker::Ai).len();

            let effect = controller
                .submit_response(ResponseValue::Text("2024-02-30".into()))
                .unwrap();
            drive(&mut controller, &api, effect);

            let ai_after = controller.transcript().messages_from(Speaker::Ai);
            assert_eq!(ai_after.len(), ai_before + 1);
            assert_eq!(ai_after.last(), Some(&SUBMIT_FAILED_MESSAGE));
            let active = controller.active_input().unwrap();
            assert_eq!(active.question.kind, QuestionKind::Date);
            assert_ne!(active.epoch, epoch_before);
            assert_eq!(controller.answered_count(), 0);
            assert!(!controller.is_loading());
            assert_eq!(api.submitted.borrow().len(), 1);
        }

        #[test]
        fn completion_on_respond() {
            let api = ScriptedApi::default();
            api.starts.borrow_mut().push_back(Ok(start_ok(QuestionKind::YesNo)));
            api.replies
                .borrow_mut()
                .push_back(Ok(reply(None, true, false)));

            let mut controller = SessionController::new();
            let effect = controller.start().unwrap();
            drive(&mut controller, &api, effect);
            let effect = controller
                .submit_response(ResponseValue::Boolean(false))
                .unwrap();
            drive(&mut controller, &api, effect);

            assert!(controller.active_input().is_none());
            assert_eq!(controller.progress().percent, 100.0);
            assert_eq!(controller.transcript().completion_count(), 1);
            assert!(api.status_calls.borrow().is_empty());
            assert_eq!(
                api.submitted.borrow()[0].value,
                ResponseValue::Boolean(false)
            );
        }
    }
}
