//! Static catalog tables
//!
//! The catalog is built once on first access and shared read-only for the life
//! of the process. Table order is the display order; search results preserve it.

mod challenges;
mod community;
mod content;
mod instruments;
mod songs;
mod tutorials;

use once_cell::sync::Lazy;

use crate::models::{
    Achievement, BlogPost, Challenge, CommunityPost, Event, Faq, Instrument, Song, Tutorial,
};

/// Maximum number of related tutorials shown next to a tutorial
pub const RELATED_TUTORIAL_LIMIT: usize = 3;

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::build);

/// All content tables
#[derive(Debug, Clone)]
pub struct Catalog {
    pub instruments: Vec<Instrument>,
    pub tutorials: Vec<Tutorial>,
    pub songs: Vec<Song>,
    pub challenges: Vec<Challenge>,
    pub community_posts: Vec<CommunityPost>,
    pub blog_posts: Vec<BlogPost>,
    pub events: Vec<Event>,
    pub faqs: Vec<Faq>,
    pub achievements: Vec<Achievement>,
}

impl Catalog {
    /// The shared built-in catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    fn build() -> Self {
        let catalog = Self {
            instruments: instruments::table(),
            tutorials: tutorials::table(),
            songs: songs::table(),
            challenges: challenges::table(),
            community_posts: community::table(),
            blog_posts: content::blog_posts(),
            events: content::events(),
            faqs: content::faqs(),
            achievements: content::achievements(),
        };
        tracing::debug!(
            instruments = catalog.instruments.len(),
            tutorials = catalog.tutorials.len(),
            songs = catalog.songs.len(),
            challenges = catalog.challenges.len(),
            "Catalog built"
        );
        catalog
    }

    pub fn instrument(&self, id: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.id == id)
    }

    pub fn tutorial(&self, id: &str) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| t.id == id)
    }

    pub fn song(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn challenge(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Tutorials that list `instrument_id` among their related instruments
    pub fn tutorials_for_instrument(&self, instrument_id: &str) -> Vec<&Tutorial> {
        self.tutorials
            .iter()
            .filter(|t| t.covers_instrument(instrument_id))
            .collect()
    }

    /// Other tutorials in the same category, at most [`RELATED_TUTORIAL_LIMIT`]
    pub fn related_tutorials(&self, tutorial: &Tutorial) -> Vec<&Tutorial> {
        self.tutorials
            .iter()
            .filter(|t| t.id != tutorial.id && t.category == tutorial.category)
            .take(RELATED_TUTORIAL_LIMIT)
            .collect()
    }

    /// Sum of points over unlocked achievements
    pub fn unlocked_points(&self) -> u32 {
        self.achievements
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.points)
            .sum()
    }
}
