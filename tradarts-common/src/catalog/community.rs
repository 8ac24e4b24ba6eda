use chrono::{DateTime, NaiveDate, Utc};

use crate::models::CommunityPost;

fn avatar(photo: &str) -> Option<String> {
    Some(format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=150"
    ))
}

fn posted_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

pub(super) fn table() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "post-1".to_string(),
            user_id: "u-maria".to_string(),
            user_name: "Maria Putri".to_string(),
            user_avatar: avatar("1239291"),
            content: "Finally played my first full melody on the angklung with our practice group!".to_string(),
            media_urls: vec![
                "https://images.pexels.com/photos/13278440/pexels-photo-13278440.jpeg".to_string(),
            ],
            likes: 42,
            comments: 7,
            created_at: posted_at(2024, 3, 18, 9, 30),
        },
        CommunityPost {
            id: "post-2".to_string(),
            user_id: "u-budi".to_string(),
            user_name: "Budi Santoso".to_string(),
            user_avatar: avatar("2379004"),
            content: "Tip for rebab beginners: keep the bow pressure light and let the strings ring.".to_string(),
            media_urls: Vec::new(),
            likes: 28,
            comments: 4,
            created_at: posted_at(2024, 3, 16, 14, 5),
        },
        CommunityPost {
            id: "post-3".to_string(),
            user_id: "u-sarah".to_string(),
            user_name: "Dr. Sarah Johnson".to_string(),
            user_avatar: avatar("415829"),
            content: "Recorded our gamelan ensemble rehearsal in Yogyakarta. Listen for the kenong patterns.".to_string(),
            media_urls: vec![
                "https://images.pexels.com/photos/7857717/pexels-photo-7857717.jpeg".to_string(),
            ],
            likes: 65,
            comments: 12,
            created_at: posted_at(2024, 3, 12, 19, 45),
        },
        CommunityPost {
            id: "post-4".to_string(),
            user_id: "u-ketut".to_string(),
            user_name: "Ketut Arya".to_string(),
            user_avatar: None,
            content: "Does anyone know a good sasando teacher near Kupang?".to_string(),
            media_urls: Vec::new(),
            likes: 9,
            comments: 3,
            created_at: posted_at(2024, 3, 10, 8, 0),
        },
    ]
}
