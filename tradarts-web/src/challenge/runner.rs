//! Quiz state machine
//!
//! `NotStarted → InProgress { index } → Complete`. The runner itself has no
//! clock: the owner calls [`QuizRunner::tick`] once per second while a timed
//! run is in progress.

use serde::Serialize;
use tradarts_common::models::Challenge;
use tradarts_common::time::format_countdown;

use super::questions::{QuestionView, OPTION_COUNT, QUESTIONS, QUESTION_COUNT};
use super::ChallengeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RunState {
    NotStarted,
    InProgress { index: usize },
    Complete {
        #[serde(rename = "timedOut")]
        timed_out: bool,
    },
}

/// Final result, produced exactly once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub challenge_id: String,
    pub score: u32,
    pub correct_answers: usize,
    pub timed_out: bool,
}

/// Result of one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub score: u32,
    pub question_index: usize,
    pub completion: Option<Completion>,
}

/// Result of one countdown tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Countdown moved; seconds remaining
    Running(u32),
    /// Countdown hit zero and closed the run
    Expired(Completion),
    /// Nothing to count (not started, untimed, or already complete)
    Idle,
}

#[derive(Debug, Clone)]
pub struct QuizRunner {
    challenge_id: String,
    points: u32,
    time_limit: Option<u32>,
    state: RunState,
    time_left: Option<u32>,
    correct_answers: usize,
}

impl QuizRunner {
    pub fn new(challenge: &Challenge) -> Self {
        Self {
            challenge_id: challenge.id.clone(),
            points: challenge.points,
            time_limit: challenge.time_limit,
            state: RunState::NotStarted,
            time_left: challenge.time_limit,
            correct_answers: 0,
        }
    }

    pub fn challenge_id(&self) -> &str {
        &self.challenge_id
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit
    }

    pub fn time_left(&self) -> Option<u32> {
        self.time_left
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    /// Points awarded per correct answer
    pub fn points_per_question(&self) -> u32 {
        self.points / QUESTION_COUNT as u32
    }

    pub fn score(&self) -> u32 {
        self.correct_answers as u32 * self.points_per_question()
    }

    /// Needs a countdown task once started; a zero limit never counts
    pub fn is_timed(&self) -> bool {
        self.time_limit.is_some_and(|limit| limit > 0)
    }

    pub fn current_question(&self) -> Option<QuestionView> {
        match self.state {
            RunState::InProgress { index } => QuestionView::at(index),
            _ => None,
        }
    }

    pub fn start(&mut self) -> Result<(), ChallengeError> {
        match self.state {
            RunState::NotStarted => {
                self.state = RunState::InProgress { index: 0 };
                Ok(())
            }
            RunState::InProgress { .. } => Err(ChallengeError::AlreadyStarted),
            RunState::Complete { .. } => Err(ChallengeError::AlreadyComplete),
        }
    }

    pub fn answer(&mut self, option: usize) -> Result<AnswerOutcome, ChallengeError> {
        let index = match self.state {
            RunState::InProgress { index } => index,
            RunState::NotStarted => return Err(ChallengeError::NotStarted),
            RunState::Complete { timed_out: true } => return Err(ChallengeError::TimeExpired),
            RunState::Complete { timed_out: false } => return Err(ChallengeError::AlreadyComplete),
        };
        if option >= OPTION_COUNT {
            return Err(ChallengeError::InvalidOption(option));
        }

        let correct = QUESTIONS[index].is_correct(option);
        if correct {
            self.correct_answers += 1;
        }

        let completion = if index + 1 >= QUESTION_COUNT {
            Some(self.complete(false))
        } else {
            self.state = RunState::InProgress { index: index + 1 };
            None
        };

        Ok(AnswerOutcome {
            correct,
            score: self.score(),
            question_index: index,
            completion,
        })
    }

    /// Advance the countdown by one second
    ///
    /// The countdown never goes below zero; reaching zero completes the run
    /// with the score earned so far.
    pub fn tick(&mut self) -> Tick {
        if !matches!(self.state, RunState::InProgress { .. }) {
            return Tick::Idle;
        }
        let left = match self.time_left {
            Some(left) if left > 0 => left,
            _ => return Tick::Idle,
        };

        let left = left - 1;
        self.time_left = Some(left);
        if left == 0 {
            Tick::Expired(self.complete(true))
        } else {
            Tick::Running(left)
        }
    }

    fn complete(&mut self, timed_out: bool) -> Completion {
        self.state = RunState::Complete { timed_out };
        Completion {
            challenge_id: self.challenge_id.clone(),
            score: self.score(),
            correct_answers: self.correct_answers,
            timed_out,
        }
    }

    /// Remaining time as `m:ss`
    pub fn time_left_display(&self) -> Option<String> {
        self.time_left.map(format_countdown)
    }
}
