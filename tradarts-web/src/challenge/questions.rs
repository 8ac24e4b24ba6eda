//! Quiz questions
//!
//! Every challenge run asks the same five questions.

use serde::Serialize;

/// Number of options per question
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    /// Index into `options`
    pub correct: usize,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        prompt: "What is the main material used in traditional gamelan instruments?",
        options: ["Bronze", "Wood", "Bamboo", "Steel"],
        correct: 0,
    },
    Question {
        prompt: "Which region is the angklung originally from?",
        options: ["Bali", "West Java", "East Java", "Central Java"],
        correct: 1,
    },
    Question {
        prompt: "What type of instrument is the sasando?",
        options: ["Percussion", "Wind", "String", "Hybrid"],
        correct: 2,
    },
    Question {
        prompt: "How many strings does a traditional rebab typically have?",
        options: ["One", "Two", "Three", "Four"],
        correct: 1,
    },
    Question {
        prompt: "Which Indonesian island is known for the kolintang?",
        options: ["Java", "Sumatra", "Sulawesi", "Kalimantan"],
        correct: 2,
    },
];

pub const QUESTION_COUNT: usize = QUESTIONS.len();

/// A question as shown to the player, without the answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub prompt: &'static str,
    pub options: [&'static str; OPTION_COUNT],
}

impl QuestionView {
    pub fn at(index: usize) -> Option<Self> {
        QUESTIONS.get(index).map(|q| Self {
            index,
            prompt: q.prompt,
            options: q.options,
        })
    }
}
