//! Challenge quiz runs
//!
//! Each run is a [`QuizRunner`] keyed by a UUID. Timed runs get a countdown
//! task that ticks the runner once per second; the task ends when the run
//! completes and is aborted when the run is abandoned or the registry is
//! dropped.
//!
//! Completed runs leave the active table. The last [`FINISHED_RUN_LIMIT`] of
//! them stay readable so clients can fetch the final result.

pub mod questions;
mod runner;

pub use runner::{AnswerOutcome, Completion, QuizRunner, RunState, Tick};

use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use tradarts_common::events::{EventBus, TradartsEvent};
use tradarts_common::models::Challenge;
use tradarts_common::time;
use uuid::Uuid;

use questions::{QuestionView, QUESTION_COUNT};

/// Countdown resolution
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Completed runs kept for status lookups
pub const FINISHED_RUN_LIMIT: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum ChallengeError {
    #[error("Challenge not found: {0}")]
    ChallengeNotFound(String),

    #[error("Run not found: {0}")]
    RunNotFound(Uuid),

    #[error("Challenge has not been started")]
    NotStarted,

    #[error("Challenge already started")]
    AlreadyStarted,

    #[error("Challenge already complete")]
    AlreadyComplete,

    #[error("Time is up")]
    TimeExpired,

    #[error("Invalid option {0}")]
    InvalidOption(usize),
}

/// Point-in-time view of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSnapshot {
    pub run_id: Uuid,
    pub challenge_id: String,
    #[serde(flatten)]
    pub state: RunState,
    pub question: Option<QuestionView>,
    pub total_questions: usize,
    pub score: u32,
    pub correct_answers: usize,
    pub time_limit: Option<u32>,
    pub time_left: Option<u32>,
    /// `m:ss`
    pub time_left_display: Option<String>,
}

impl RunSnapshot {
    fn of(run_id: Uuid, runner: &QuizRunner) -> Self {
        Self {
            run_id,
            challenge_id: runner.challenge_id().to_string(),
            state: runner.state(),
            question: runner.current_question(),
            total_questions: QUESTION_COUNT,
            score: runner.score(),
            correct_answers: runner.correct_answers(),
            time_limit: runner.time_limit(),
            time_left: runner.time_left(),
            time_left_display: runner.time_left_display(),
        }
    }
}

/// Answer verdict plus the run after the answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub correct: bool,
    pub run: RunSnapshot,
}

struct RunEntry {
    runner: Arc<Mutex<QuizRunner>>,
    timer: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct Registry {
    active: HashMap<Uuid, RunEntry>,
    finished: VecDeque<(Uuid, Arc<Mutex<QuizRunner>>)>,
}

impl Registry {
    fn runner(&self, run_id: Uuid) -> Option<Arc<Mutex<QuizRunner>>> {
        self.active
            .get(&run_id)
            .map(|entry| Arc::clone(&entry.runner))
            .or_else(|| {
                self.finished
                    .iter()
                    .find(|(id, _)| *id == run_id)
                    .map(|(_, runner)| Arc::clone(runner))
            })
    }

    /// Move a completed run out of the active table, handing back its timer
    fn retire(&mut self, run_id: Uuid) -> Option<JoinHandle<()>> {
        let entry = self.active.remove(&run_id)?;
        self.finished.push_back((run_id, entry.runner));
        while self.finished.len() > FINISHED_RUN_LIMIT {
            self.finished.pop_front();
        }
        entry.timer
    }

    fn forget_finished(&mut self, run_id: Uuid) -> bool {
        let before = self.finished.len();
        self.finished.retain(|(id, _)| *id != run_id);
        self.finished.len() != before
    }
}

/// Registry of quiz runs and completed challenge ids
pub struct ChallengeRuns {
    runs: Arc<Mutex<Registry>>,
    completed: Arc<RwLock<Vec<String>>>,
    events: EventBus,
}

impl ChallengeRuns {
    pub fn new(events: EventBus) -> Self {
        Self {
            runs: Arc::new(Mutex::new(Registry::default())),
            completed: Arc::new(RwLock::new(Vec::new())),
            events,
        }
    }

    /// Open a new run in the `NotStarted` state
    pub async fn create(&self, challenge: &Challenge) -> RunSnapshot {
        let run_id = Uuid::new_v4();
        let runner = QuizRunner::new(challenge);
        let snapshot = RunSnapshot::of(run_id, &runner);

        self.runs.lock().await.active.insert(
            run_id,
            RunEntry {
                runner: Arc::new(Mutex::new(runner)),
                timer: None,
            },
        );
        debug!("Created run {} for challenge {}", run_id, challenge.id);
        snapshot
    }

    pub async fn get(&self, run_id: Uuid) -> Result<RunSnapshot, ChallengeError> {
        let runner = self.runner(run_id).await?;
        let runner = runner.lock().await;
        Ok(RunSnapshot::of(run_id, &runner))
    }

    pub async fn start(&self, run_id: Uuid) -> Result<RunSnapshot, ChallengeError> {
        let mut runs = self.runs.lock().await;
        if !runs.active.contains_key(&run_id) {
            return Err(match runs.runner(run_id) {
                Some(_) => ChallengeError::AlreadyComplete,
                None => ChallengeError::RunNotFound(run_id),
            });
        }
        let entry = runs
            .active
            .get_mut(&run_id)
            .ok_or(ChallengeError::RunNotFound(run_id))?;

        let (snapshot, timed) = {
            let mut runner = entry.runner.lock().await;
            runner.start()?;
            (RunSnapshot::of(run_id, &runner), runner.is_timed())
        };

        if timed {
            entry.timer = Some(self.spawn_timer(run_id, Arc::clone(&entry.runner)));
        }

        info!("Run {} started ({})", run_id, snapshot.challenge_id);
        self.events.emit_lossy(TradartsEvent::ChallengeStarted {
            run_id,
            challenge_id: snapshot.challenge_id.clone(),
            time_limit: snapshot.time_limit,
            timestamp: time::now(),
        });
        Ok(snapshot)
    }

    pub async fn answer(&self, run_id: Uuid, option: usize) -> Result<AnswerResult, ChallengeError> {
        let runner = self.runner(run_id).await?;
        let (outcome, snapshot) = {
            let mut runner = runner.lock().await;
            let outcome = runner.answer(option)?;
            (outcome, RunSnapshot::of(run_id, &runner))
        };

        self.events.emit_lossy(TradartsEvent::ChallengeAnswered {
            run_id,
            question_index: outcome.question_index,
            correct: outcome.correct,
            score: outcome.score,
            timestamp: time::now(),
        });

        if let Some(completion) = outcome.completion {
            if let Some(timer) = self.runs.lock().await.retire(run_id) {
                timer.abort();
            }
            record_completion(&self.completed, &self.events, run_id, completion).await;
        }

        Ok(AnswerResult {
            correct: outcome.correct,
            run: snapshot,
        })
    }

    /// Tear down a run, stopping its countdown
    ///
    /// A completed run is simply forgotten.
    pub async fn abandon(&self, run_id: Uuid) -> Result<(), ChallengeError> {
        let entry = {
            let mut runs = self.runs.lock().await;
            match runs.active.remove(&run_id) {
                Some(entry) => entry,
                None if runs.forget_finished(run_id) => {
                    debug!("Run {} dropped after completion", run_id);
                    return Ok(());
                }
                None => return Err(ChallengeError::RunNotFound(run_id)),
            }
        };

        if let Some(timer) = entry.timer {
            timer.abort();
        }

        info!("Run {} abandoned", run_id);
        self.events.emit_lossy(TradartsEvent::ChallengeAbandoned {
            run_id,
            timestamp: time::now(),
        });
        Ok(())
    }

    /// Ids of challenges with at least one completed run, in completion order
    pub async fn completed_challenges(&self) -> Vec<String> {
        self.completed.read().await.clone()
    }

    /// Runs not yet completed
    pub async fn run_count(&self) -> usize {
        self.runs.lock().await.active.len()
    }

    /// Completed runs still readable
    pub async fn finished_count(&self) -> usize {
        self.runs.lock().await.finished.len()
    }

    async fn runner(&self, run_id: Uuid) -> Result<Arc<Mutex<QuizRunner>>, ChallengeError> {
        self.runs
            .lock()
            .await
            .runner(run_id)
            .ok_or(ChallengeError::RunNotFound(run_id))
    }

    fn spawn_timer(&self, run_id: Uuid, runner: Arc<Mutex<QuizRunner>>) -> JoinHandle<()> {
        let runs = Arc::clone(&self.runs);
        let completed = Arc::clone(&self.completed);
        let events = self.events.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // First tick fires immediately
            interval.tick().await;

            loop {
                interval.tick().await;
                let tick = runner.lock().await.tick();
                match tick {
                    Tick::Running(time_left) => {
                        events.emit_lossy(TradartsEvent::ChallengeTimerTick {
                            run_id,
                            time_left,
                            timestamp: time::now(),
                        });
                    }
                    Tick::Expired(completion) => {
                        events.emit_lossy(TradartsEvent::ChallengeTimerTick {
                            run_id,
                            time_left: 0,
                            timestamp: time::now(),
                        });
                        events.emit_lossy(TradartsEvent::ChallengeTimeExpired {
                            run_id,
                            timestamp: time::now(),
                        });
                        record_completion(&completed, &events, run_id, completion).await;
                        // Own handle; dropping it detaches
                        drop(runs.lock().await.retire(run_id));
                        break;
                    }
                    Tick::Idle => break,
                }
            }
            debug!("Countdown for run {} finished", run_id);
        })
    }
}

impl Drop for ChallengeRuns {
    fn drop(&mut self) {
        // Timer tasks share the registry, so it may be locked by one of them
        if let Ok(mut runs) = self.runs.try_lock() {
            for entry in runs.active.values_mut() {
                if let Some(timer) = entry.timer.take() {
                    timer.abort();
                }
            }
        }
    }
}

async fn record_completion(
    completed: &RwLock<Vec<String>>,
    events: &EventBus,
    run_id: Uuid,
    completion: Completion,
) {
    info!(
        "Run {} complete: {} correct, score {}{}",
        run_id,
        completion.correct_answers,
        completion.score,
        if completion.timed_out { " (time expired)" } else { "" }
    );

    {
        let mut completed = completed.write().await;
        if !completed.contains(&completion.challenge_id) {
            completed.push(completion.challenge_id.clone());
        }
    }

    events.emit_lossy(TradartsEvent::ChallengeCompleted {
        run_id,
        challenge_id: completion.challenge_id,
        score: completion.score,
        correct_answers: completion.correct_answers,
        timestamp: time::now(),
    });
}
