use crate::models::{Challenge, ChallengeDifficulty, ChallengeType};

fn challenge(
    id: &str,
    title: &str,
    description: &str,
    kind: ChallengeType,
    difficulty: ChallengeDifficulty,
    points: u32,
    time_limit: Option<u32>,
) -> Challenge {
    Challenge {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        difficulty,
        points,
        time_limit,
    }
}

pub(super) fn table() -> Vec<Challenge> {
    vec![
        challenge(
            "gamelan-basics",
            "Master Gamelan Basics",
            "Complete a series of basic gamelan exercises and earn your first achievement.",
            ChallengeType::Performance,
            ChallengeDifficulty::Beginner,
            100,
            Some(600),
        ),
        challenge(
            "angklung-quiz",
            "Angklung History Quiz",
            "Test your knowledge about the history and cultural significance of the Angklung.",
            ChallengeType::Quiz,
            ChallengeDifficulty::Intermediate,
            150,
            None,
        ),
        challenge(
            "identify-instruments",
            "Instrument Sound Recognition",
            "Listen to different traditional instruments and identify them correctly.",
            ChallengeType::Listening,
            ChallengeDifficulty::Intermediate,
            200,
            Some(300),
        ),
        challenge(
            "advanced-gamelan",
            "Advanced Gamelan Techniques",
            "Show your mastery of complex gamelan patterns and rhythms.",
            ChallengeType::Performance,
            ChallengeDifficulty::Advanced,
            300,
            Some(900),
        ),
    ]
}
