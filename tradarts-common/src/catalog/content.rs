//! Blog, events, FAQs and achievements

use crate::models::{Achievement, Author, BlogPost, Event, Faq};

const PHOTOS: &str = "https://images.pexels.com/photos";

#[allow(clippy::too_many_arguments)]
fn blog_post(
    id: &str,
    title: &str,
    excerpt: &str,
    (author, avatar_photo): (&str, &str),
    date: &str,
    category: &str,
    photo: &str,
    read_time: u32,
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: "...".to_string(),
        author: Author {
            name: author.to_string(),
            avatar: format!(
                "{PHOTOS}/{avatar_photo}/pexels-photo-{avatar_photo}.jpeg?auto=compress&cs=tinysrgb&w=150"
            ),
        },
        date: date.to_string(),
        category: category.to_string(),
        image_url: format!("{PHOTOS}/{photo}/pexels-photo-{photo}.jpeg"),
        read_time,
    }
}

pub(super) fn blog_posts() -> Vec<BlogPost> {
    vec![
        blog_post(
            "1",
            "The Evolution of Gamelan Music in Modern Indonesia",
            "Explore how traditional gamelan music is adapting to contemporary cultural landscapes while maintaining its rich heritage.",
            ("Dr. Sarah Johnson", "415829"),
            "2024-03-15",
            "History",
            "7857717",
            5,
        ),
        blog_post(
            "2",
            "Learning Angklung: A Beginner's Guide",
            "Everything you need to know about getting started with this beautiful bamboo instrument from West Java.",
            ("Maria Putri", "1239291"),
            "2024-03-10",
            "Tutorial",
            "13278440",
            8,
        ),
        blog_post(
            "3",
            "The Sacred Sounds of Indonesian Ritual Music",
            "Discover the spiritual significance of traditional instruments in Indonesian ceremonies and rituals.",
            ("Budi Santoso", "2379004"),
            "2024-03-05",
            "Culture",
            "2156311",
            6,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    date: &str,
    time: &str,
    location: &str,
    photo: &str,
    attendees: u32,
    category: &str,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        image_url: format!("{PHOTOS}/{photo}/pexels-photo-{photo}.jpeg"),
        attendees,
        category: category.to_string(),
    }
}

pub(super) fn events() -> Vec<Event> {
    vec![
        event(
            "1",
            "Gamelan Workshop",
            "Learn the basics of gamelan music in this hands-on workshop led by master musicians.",
            "2024-04-15",
            "14:00",
            "Jakarta Cultural Center",
            "7857717",
            25,
            "Workshop",
        ),
        event(
            "2",
            "Traditional Music Festival",
            "A three-day festival celebrating Indonesia's diverse musical heritage.",
            "2024-05-01",
            "10:00",
            "Bandung City Square",
            "2156311",
            500,
            "Festival",
        ),
        event(
            "3",
            "Angklung Performance",
            "Experience the beautiful sounds of a full angklung orchestra.",
            "2024-04-20",
            "19:30",
            "Surabaya Concert Hall",
            "13278440",
            200,
            "Performance",
        ),
    ]
}

fn faq(question: &str, answer: &str, category: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
    }
}

pub(super) fn faqs() -> Vec<Faq> {
    vec![
        faq(
            "How do I get started with learning traditional instruments?",
            "Start by exploring our instrument catalog and selecting an instrument that interests you. Each instrument has beginner-friendly tutorials and interactive lessons to help you learn the basics. We recommend starting with easier instruments like the angklung before progressing to more complex ones.",
            "Getting Started",
        ),
        faq(
            "Are the tutorials suitable for complete beginners?",
            "Yes! Our tutorials are designed for learners of all levels. We provide step-by-step guidance, starting from the very basics. Each tutorial includes clear instructions, practice exercises, and progress tracking to help you learn at your own pace.",
            "Tutorials",
        ),
        faq(
            "Can I track my progress as I learn?",
            "Absolutely! Our platform includes a comprehensive progress tracking system. You can monitor your advancement through tutorials, view completed lessons, track practice time, and earn achievements as you progress in your learning journey.",
            "Progress Tracking",
        ),
        faq(
            "How often is new content added?",
            "We regularly update our content library with new tutorials, instruments, and cultural information. New content is typically added weekly, including instrument tutorials, performance videos, and cultural articles.",
            "Content",
        ),
        faq(
            "Can I interact with other learners?",
            "Yes! Our community features allow you to connect with fellow learners, share experiences, and participate in discussions. You can join practice groups, share progress, and even collaborate on virtual performances.",
            "Community",
        ),
        faq(
            "What technical requirements do I need?",
            "Our platform works on most modern web browsers. For the best experience, we recommend using an updated version of Chrome, Firefox, or Safari. A stable internet connection is required for streaming tutorials and interactive features.",
            "Technical",
        ),
        faq(
            "Are there offline learning options?",
            "While most of our content requires an internet connection, some tutorials and resources can be downloaded for offline viewing. Premium members can access additional offline learning materials.",
            "Technical",
        ),
        faq(
            "How can I contribute to the platform?",
            "We welcome contributions from the community! You can share your knowledge by creating tutorials, writing articles, or participating in community discussions. Contact us if you're interested in becoming a contributor.",
            "Community",
        ),
    ]
}

pub(super) fn achievements() -> Vec<Achievement> {
    let achievement = |id: &str, title: &str, description: &str, points, progress, unlocked| {
        Achievement {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            points,
            progress,
            unlocked,
        }
    };

    vec![
        achievement(
            "1",
            "Gamelan Master",
            "Complete all gamelan tutorials and challenges",
            1000,
            75,
            true,
        ),
        achievement(
            "2",
            "Cultural Explorer",
            "Learn about instruments from 5 different regions",
            500,
            60,
            true,
        ),
        achievement(
            "3",
            "Performance Pro",
            "Successfully complete 10 performance challenges",
            750,
            30,
            false,
        ),
    ]
}
