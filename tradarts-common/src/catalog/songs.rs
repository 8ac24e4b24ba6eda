use crate::models::Song;

fn song(
    id: &str,
    title: &str,
    description: &str,
    region: &str,
    photo: &str,
    instruments: &[&str],
    lyrics: &str,
) -> Song {
    Song {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        region: region.to_string(),
        image_url: format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg"),
        instruments: instruments.iter().map(|s| s.to_string()).collect(),
        audio_url: None,
        lyrics: Some(lyrics.to_string()),
        sheet_music: None,
    }
}

pub(super) fn table() -> Vec<Song> {
    vec![
        song(
            "rasa-sayange",
            "Rasa Sayange",
            "A traditional folk song from Maluku that expresses feelings of love and affection.",
            "Maluku",
            "2156311",
            &["tifa", "suling"],
            "Rasa sayange, rasa sayang sayange...",
        ),
        song(
            "yamko-rambe",
            "Yamko Rambe Yamko",
            "A traditional song from Papua that tells the story of tribal warfare and reconciliation.",
            "Papua",
            "8154468",
            &["tifa", "gong"],
            "Yamko rambe yamko aronawa kombe...",
        ),
        song(
            "bubuy-bulan",
            "Bubuy Bulan",
            "A Sundanese folk song about the moon and its beauty.",
            "West Java",
            "13278440",
            &["angklung", "suling"],
            "Bubuy bulan bubuy bulan sangray bentang...",
        ),
        song(
            "gundul-pacul",
            "Gundul Pacul",
            "A Javanese children's song that teaches about humility and responsibility.",
            "Central Java",
            "7857717",
            &["gamelan"],
            "Gundul gundul pacul cul, gembelengan...",
        ),
        song(
            "soleram",
            "Soleram",
            "A traditional Malay song from Riau about young love.",
            "Riau",
            "2381463",
            &["accordion", "violin"],
            "Soleram soleram, soleram anak yang manis...",
        ),
        song(
            "ampar-ampar-pisang",
            "Ampar Ampar Pisang",
            "A folk song from South Kalimantan about preparing banana-based dishes.",
            "South Kalimantan",
            "2321536",
            &["panting", "babun"],
            "Ampar ampar pisang, pisangku belum masak...",
        ),
    ]
}
