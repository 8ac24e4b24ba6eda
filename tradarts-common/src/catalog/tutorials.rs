use crate::models::Tutorial;

#[allow(clippy::too_many_arguments)]
fn tutorial(
    id: &str,
    title: &str,
    description: &str,
    thumbnail: &str,
    duration: &str,
    views: u64,
    category: &str,
    related_instruments: &[&str],
) -> Tutorial {
    Tutorial {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        thumbnail_url: format!(
            "https://images.pexels.com/photos/{thumbnail}.jpeg?auto=compress&cs=tinysrgb&w=600"
        ),
        video_url: format!("https://example.com/videos/{id}"),
        duration: duration.to_string(),
        views,
        category: category.to_string(),
        related_instruments: related_instruments.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn table() -> Vec<Tutorial> {
    vec![
        tutorial(
            "gamelan-basics",
            "Introduction to Gamelan: Basic Techniques",
            "Learn the fundamental techniques of playing gamelan instruments in this beginner-friendly tutorial.",
            "7857717/pexels-photo-7857717",
            "15:30",
            12540,
            "Beginner",
            &["gamelan"],
        ),
        tutorial(
            "angklung-intro",
            "Getting Started with Angklung",
            "A step-by-step guide to playing your first melodies on the angklung for complete beginners.",
            "13278440/pexels-photo-13278440",
            "12:45",
            8932,
            "Beginner",
            &["angklung"],
        ),
        tutorial(
            "sasando-technique",
            "Advanced Sasando Techniques",
            "Master advanced plucking patterns and learn traditional Rotinese melodies on the sasando.",
            "15908930/pexels-photo-15908930",
            "24:10",
            5674,
            "Advanced",
            &["sasando"],
        ),
        tutorial(
            "gamelan-ensemble",
            "Playing in a Gamelan Ensemble",
            "Learn how different gamelan instruments interact and how to coordinate with other players in an ensemble.",
            "207519/pexels-photo-207519",
            "28:15",
            7650,
            "Intermediate",
            &["gamelan"],
        ),
        tutorial(
            "tifa-rhythms",
            "Essential Tifa Rhythms from Papua",
            "Explore the fundamental rhythms of the Tifa drum and its cultural significance in Papuan traditions.",
            "8154468/pexels-photo-8154468",
            "18:20",
            4890,
            "Beginner",
            &["tifa"],
        ),
        tutorial(
            "kolintang-melody",
            "Kolintang Melody Playing",
            "Learn how to play melody lines on the kolintang and combine with other players for full ensemble sound.",
            "2321536/pexels-photo-2321536",
            "22:45",
            3560,
            "Intermediate",
            &["kolintang"],
        ),
        tutorial(
            "rebab-technique",
            "Rebab Bowing Techniques",
            "Master the nuanced bowing techniques that give rebab its distinctive expressive sound in gamelan music.",
            "6647119/pexels-photo-6647119",
            "32:10",
            2845,
            "Advanced",
            &["rebab"],
        ),
        tutorial(
            "angklung-ensemble",
            "Creating Music with Angklung Ensembles",
            "Learn how to arrange and coordinate multiple angklung players to create beautiful harmonies and melodies.",
            "3994827/pexels-photo-3994827",
            "26:30",
            6230,
            "Intermediate",
            &["angklung"],
        ),
    ]
}
