use crate::models::{Difficulty, Instrument};

fn instrument(
    id: &str,
    name: &str,
    description: &str,
    region: &str,
    difficulty: Difficulty,
    image_url: &str,
    sound_samples: &[&str],
) -> Instrument {
    Instrument {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        region: region.to_string(),
        difficulty,
        image_url: image_url.to_string(),
        sound_samples: sound_samples.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn table() -> Vec<Instrument> {
    vec![
        instrument(
            "gamelan",
            "Gamelan",
            "A traditional ensemble of percussion instruments from Java and Bali, featuring metallophones, xylophones, gongs, and drums.",
            "Java",
            Difficulty::Medium,
            "https://images.pexels.com/photos/7857717/pexels-photo-7857717.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["bonang", "kenong", "gong"],
        ),
        instrument(
            "angklung",
            "Angklung",
            "A musical instrument made of bamboo tubes attached to a bamboo frame, producing sounds when shaken or tapped.",
            "West Java",
            Difficulty::Easy,
            "https://images.pexels.com/photos/13278440/pexels-photo-13278440.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["angklung-c", "angklung-d", "angklung-e"],
        ),
        instrument(
            "sasando",
            "Sasando",
            "A stringed instrument from Rote Island with strings stretched around a bamboo tube and a fan-like resonator made of palm leaves.",
            "East Nusa Tenggara",
            Difficulty::Hard,
            "https://images.pexels.com/photos/15908930/pexels-photo-15908930.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["sasando-1", "sasando-2", "sasando-3"],
        ),
        instrument(
            "kolintang",
            "Kolintang",
            "A wooden percussion instrument from North Sulawesi consisting of wooden bars arranged in a row and struck with mallets.",
            "North Sulawesi",
            Difficulty::Medium,
            "https://images.pexels.com/photos/2321536/pexels-photo-2321536.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["kolintang-low", "kolintang-mid", "kolintang-high"],
        ),
        instrument(
            "rebab",
            "Rebab",
            "A bowed string instrument with two or three strings, commonly used in gamelan ensembles and traditional music.",
            "Java",
            Difficulty::Hard,
            "https://images.pexels.com/photos/6647119/pexels-photo-6647119.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["rebab-low", "rebab-mid", "rebab-high"],
        ),
        instrument(
            "tifa",
            "Tifa",
            "A traditional drum from eastern Indonesia, carved from a single piece of wood with lizard or goat skin stretched over one end.",
            "Papua",
            Difficulty::Easy,
            "https://images.pexels.com/photos/8154468/pexels-photo-8154468.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["tifa-slow", "tifa-medium", "tifa-fast"],
        ),
        instrument(
            "gendang",
            "Gendang",
            "A double-headed drum popular throughout Indonesia, played with hands or sticks in various musical styles.",
            "Multiple Regions",
            Difficulty::Medium,
            "https://images.pexels.com/photos/2156311/pexels-photo-2156311.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["gendang-tak", "gendang-dung", "gendang-pattern"],
        ),
        instrument(
            "saluang",
            "Saluang",
            "A wind instrument from West Sumatra made from bamboo with four finger holes, often used to accompany traditional singing.",
            "West Sumatra",
            Difficulty::Hard,
            "https://images.pexels.com/photos/2381463/pexels-photo-2381463.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["saluang-1", "saluang-2", "saluang-melody"],
        ),
    ]
}
