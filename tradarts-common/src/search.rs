//! Linear search and filtering over the catalog tables
//!
//! Every routine is a direct scan: a record matches when any of its searched
//! text fields contains the query as a case-insensitive substring AND every
//! active categorical filter equals the record's value. Results keep the
//! source table order. There is no index and no ranking.
//!
//! The cross-entity [`search_catalog`] backs the site-wide search bar: it scans
//! instruments, tutorials and songs in that order and keeps the first
//! [`SEARCH_RESULT_LIMIT`] hits.

use serde::Serialize;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::models::{
    BlogPost, Challenge, ChallengeDifficulty, ChallengeType, CommunityPost, Difficulty, Event, Faq,
    Instrument, Song, Tutorial,
};

/// Queries shorter than this return no search-bar results
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of search-bar results
pub const SEARCH_RESULT_LIMIT: usize = 8;

/// Spelling of the "no filter" choice
pub const FILTER_ALL: &str = "all";

/// Lower-cased query text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    raw: String,
    lowered: String,
}

impl TextQuery {
    /// Whitespace-only text is the empty query
    pub fn new(query: &str) -> Self {
        if query.trim().is_empty() {
            return Self::default();
        }
        Self {
            raw: query.to_string(),
            lowered: query.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// True when `field` contains the query, ignoring case
    ///
    /// The empty query is contained in every field.
    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.lowered)
    }

    pub fn matches_any(&self, fields: &[&str]) -> bool {
        fields.iter().any(|f| self.matches(f))
    }
}

/// Categorical filter: everything, or records whose field equals one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl Filter<String> {
    pub fn matches_str(&self, value: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> Filter<T> {
    /// Parse a filter parameter; absent, blank or `all` means no filter
    pub fn parse(raw: Option<&str>) -> Result<Self, T::Err> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Filter::All),
            Some(v) if v.eq_ignore_ascii_case(FILTER_ALL) => Ok(Filter::All),
            Some(v) => v.parse().map(Filter::Only),
        }
    }
}

/// Records that take part in free-text search
pub trait Searchable {
    /// Text fields scanned by the catalog pages
    fn search_fields(&self) -> Vec<&str>;

    fn matches_text(&self, query: &TextQuery) -> bool {
        query.is_empty() || query.matches_any(&self.search_fields())
    }
}

/// Records carrying a free-form category
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Searchable for Instrument {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.region.as_str()]
    }
}

impl Searchable for Tutorial {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Categorized for Tutorial {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for Song {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.region.as_str()]
    }
}

impl Searchable for Challenge {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str()]
    }
}

impl Categorized for BlogPost {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Categorized for Event {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for Faq {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.answer.as_str()]
    }
}

impl Categorized for Faq {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for CommunityPost {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.content.as_str(), self.user_name.as_str()]
    }
}

/// Free-text search over any searchable table
pub fn filter_by_text<'a, T: Searchable>(items: &'a [T], query: &TextQuery) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches_text(query)).collect()
}

/// Instrument page: text + region + difficulty
#[derive(Debug, Clone, Default)]
pub struct InstrumentFilter {
    pub query: TextQuery,
    pub region: Filter<String>,
    pub difficulty: Filter<Difficulty>,
}

impl InstrumentFilter {
    pub fn apply<'a>(&self, instruments: &'a [Instrument]) -> Vec<&'a Instrument> {
        instruments
            .iter()
            .filter(|i| {
                i.matches_text(&self.query)
                    && self.region.matches_str(&i.region)
                    && self.difficulty.matches(&i.difficulty)
            })
            .collect()
    }
}

/// Song listing: text + region
#[derive(Debug, Clone, Default)]
pub struct SongFilter {
    pub query: TextQuery,
    pub region: Filter<String>,
}

impl SongFilter {
    pub fn apply<'a>(&self, songs: &'a [Song]) -> Vec<&'a Song> {
        songs
            .iter()
            .filter(|s| s.matches_text(&self.query) && self.region.matches_str(&s.region))
            .collect()
    }
}

/// Challenge page: text + difficulty + type
#[derive(Debug, Clone, Default)]
pub struct ChallengeFilter {
    pub query: TextQuery,
    pub difficulty: Filter<ChallengeDifficulty>,
    pub kind: Filter<ChallengeType>,
}

impl ChallengeFilter {
    pub fn apply<'a>(&self, challenges: &'a [Challenge]) -> Vec<&'a Challenge> {
        challenges
            .iter()
            .filter(|c| {
                c.matches_text(&self.query)
                    && self.difficulty.matches(&c.difficulty)
                    && self.kind.matches(&c.kind)
            })
            .collect()
    }
}

/// Text + category, shared by tutorials, blog posts, events and FAQs
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub query: TextQuery,
    pub category: Filter<String>,
}

impl CategoryFilter {
    pub fn apply<'a, T: Searchable + Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| item.matches_text(&self.query) && self.category.matches_str(item.category()))
            .collect()
    }
}

/// Distinct values in first-seen order (filter dropdown options)
pub fn distinct_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Which table a search hit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Instrument,
    Tutorial,
    Song,
}

impl HitKind {
    pub fn label(&self) -> &'static str {
        match self {
            HitKind::Instrument => "Instrument",
            HitKind::Tutorial => "Tutorial",
            HitKind::Song => "Song",
        }
    }
}

/// One search-bar result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: HitKind,
    /// Short summary line shown under the title
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SearchHit {
    fn instrument(i: &Instrument) -> Self {
        Self {
            id: i.id.clone(),
            title: i.name.clone(),
            kind: HitKind::Instrument,
            description: format!("{} • {}", i.region, i.difficulty),
            url: format!("/instruments/{}", i.id),
            image_url: Some(i.image_url.clone()),
        }
    }

    fn tutorial(t: &Tutorial) -> Self {
        Self {
            id: t.id.clone(),
            title: t.title.clone(),
            kind: HitKind::Tutorial,
            description: format!("{} • {}", t.category, t.duration),
            url: format!("/tutorials/{}", t.id),
            image_url: Some(t.thumbnail_url.clone()),
        }
    }

    fn song(s: &Song) -> Self {
        Self {
            id: s.id.clone(),
            title: s.title.clone(),
            kind: HitKind::Song,
            description: format!("{} • Traditional Song", s.region),
            url: format!("/songs/{}", s.id),
            image_url: Some(s.image_url.clone()),
        }
    }
}

/// Site-wide search across instruments, tutorials and songs
///
/// Returns nothing for queries shorter than [`MIN_QUERY_LEN`] characters and
/// at most [`SEARCH_RESULT_LIMIT`] hits otherwise.
pub fn search_catalog(catalog: &Catalog, query: &str) -> Vec<SearchHit> {
    let query = TextQuery::new(query);
    if query.len() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let instruments = catalog
        .instruments
        .iter()
        .filter(|i| {
            query.matches_any(&[
                i.name.as_str(),
                i.description.as_str(),
                i.region.as_str(),
            ])
        })
        .map(SearchHit::instrument);

    let tutorials = catalog
        .tutorials
        .iter()
        .filter(|t| {
            query.matches_any(&[
                t.title.as_str(),
                t.description.as_str(),
                t.category.as_str(),
            ])
        })
        .map(SearchHit::tutorial);

    let songs = catalog
        .songs
        .iter()
        .filter(|s| {
            query.matches_any(&[
                s.title.as_str(),
                s.description.as_str(),
                s.region.as_str(),
            ])
        })
        .map(SearchHit::song);

    instruments
        .chain(tutorials)
        .chain(songs)
        .take(SEARCH_RESULT_LIMIT)
        .collect()
}
