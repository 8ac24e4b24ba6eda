//! Catalog listing and detail endpoints
//!
//! Listings accept `q` (free text) plus the table's categorical filters; a
//! filter value of `all` (or an absent parameter) disables that filter.
//! Results keep catalog order.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tradarts_common::models::{
    Achievement, BlogPost, Challenge, ChallengeDifficulty, ChallengeType, CommunityPost,
    Difficulty, Event, Faq, Instrument, Song, Tutorial,
};
use tradarts_common::search::{
    distinct_values, filter_by_text, CategoryFilter, ChallengeFilter, Filter, InstrumentFilter,
    SongFilter, TextQuery,
};

use crate::error::ApiError;
use crate::AppState;

/// Filtered listing
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub count: usize,
    pub items: Vec<T>,
}

impl<T: Serialize + Clone> ListResponse<T> {
    fn from_refs(items: Vec<&T>) -> Self {
        Self {
            count: items.len(),
            items: items.into_iter().cloned().collect(),
        }
    }
}

/// Distinct values for a filter dropdown
#[derive(Debug, Serialize)]
pub struct FacetResponse {
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct InstrumentQuery {
    #[serde(default)]
    pub q: String,
    pub region: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SongQuery {
    #[serde(default)]
    pub q: String,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChallengeQuery {
    #[serde(default)]
    pub q: String,
    pub difficulty: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TextOnlyQuery {
    #[serde(default)]
    pub q: String,
}

impl CategoryQuery {
    fn filter(&self) -> CategoryFilter {
        CategoryFilter {
            query: TextQuery::new(&self.q),
            category: string_filter(self.category.as_deref()),
        }
    }
}

fn string_filter(raw: Option<&str>) -> Filter<String> {
    Filter::parse(raw).unwrap_or_default()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDetail {
    pub instrument: Instrument,
    /// Tutorials covering this instrument
    pub tutorials: Vec<Tutorial>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialDetail {
    pub tutorial: Tutorial,
    /// Same category, at most three
    pub related: Vec<Tutorial>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementsResponse {
    pub achievements: Vec<Achievement>,
    pub unlocked_points: u32,
}

/// GET /api/instruments
pub async fn list_instruments(
    State(state): State<AppState>,
    Query(query): Query<InstrumentQuery>,
) -> Result<Json<ListResponse<Instrument>>, ApiError> {
    let filter = InstrumentFilter {
        query: TextQuery::new(&query.q),
        region: string_filter(query.region.as_deref()),
        difficulty: Filter::<Difficulty>::parse(query.difficulty.as_deref())?,
    };
    Ok(Json(ListResponse::from_refs(
        filter.apply(&state.catalog.instruments),
    )))
}

/// GET /api/instruments/regions
pub async fn instrument_regions(State(state): State<AppState>) -> Json<FacetResponse> {
    Json(FacetResponse {
        values: distinct_values(state.catalog.instruments.iter().map(|i| i.region.as_str())),
    })
}

/// GET /api/instruments/:id
pub async fn get_instrument(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = state
        .catalog
        .instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Instrument not found: {}", id)))?;

    Ok(Json(InstrumentDetail {
        instrument: instrument.clone(),
        tutorials: state
            .catalog
            .tutorials_for_instrument(&id)
            .into_iter()
            .cloned()
            .collect(),
    }))
}

/// GET /api/tutorials
pub async fn list_tutorials(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Json<ListResponse<Tutorial>> {
    Json(ListResponse::from_refs(
        query.filter().apply(&state.catalog.tutorials),
    ))
}

/// GET /api/tutorials/categories
pub async fn tutorial_categories(State(state): State<AppState>) -> Json<FacetResponse> {
    Json(FacetResponse {
        values: distinct_values(state.catalog.tutorials.iter().map(|t| t.category.as_str())),
    })
}

/// GET /api/tutorials/:id
pub async fn get_tutorial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TutorialDetail>, ApiError> {
    let tutorial = state
        .catalog
        .tutorial(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Tutorial not found: {}", id)))?;

    Ok(Json(TutorialDetail {
        tutorial: tutorial.clone(),
        related: state
            .catalog
            .related_tutorials(tutorial)
            .into_iter()
            .cloned()
            .collect(),
    }))
}

/// GET /api/songs
pub async fn list_songs(
    State(state): State<AppState>,
    Query(query): Query<SongQuery>,
) -> Json<ListResponse<Song>> {
    let filter = SongFilter {
        query: TextQuery::new(&query.q),
        region: string_filter(query.region.as_deref()),
    };
    Json(ListResponse::from_refs(filter.apply(&state.catalog.songs)))
}

/// GET /api/songs/:id
pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Song>, ApiError> {
    state
        .catalog
        .song(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Song not found: {}", id)))
}

/// GET /api/challenges
pub async fn list_challenges(
    State(state): State<AppState>,
    Query(query): Query<ChallengeQuery>,
) -> Result<Json<ListResponse<Challenge>>, ApiError> {
    let filter = ChallengeFilter {
        query: TextQuery::new(&query.q),
        difficulty: Filter::<ChallengeDifficulty>::parse(query.difficulty.as_deref())?,
        kind: Filter::<ChallengeType>::parse(query.kind.as_deref())?,
    };
    Ok(Json(ListResponse::from_refs(
        filter.apply(&state.catalog.challenges),
    )))
}

/// GET /api/challenges/:id
pub async fn get_challenge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Challenge>, ApiError> {
    state
        .catalog
        .challenge(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Challenge not found: {}", id)))
}

/// GET /api/blog
pub async fn list_blog_posts(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Json<ListResponse<BlogPost>> {
    Json(ListResponse::from_refs(
        query.filter().apply(&state.catalog.blog_posts),
    ))
}

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Json<ListResponse<Event>> {
    Json(ListResponse::from_refs(
        query.filter().apply(&state.catalog.events),
    ))
}

/// GET /api/faqs
pub async fn list_faqs(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Json<ListResponse<Faq>> {
    Json(ListResponse::from_refs(query.filter().apply(&state.catalog.faqs)))
}

/// GET /api/community
pub async fn list_community_posts(
    State(state): State<AppState>,
    Query(query): Query<TextOnlyQuery>,
) -> Json<ListResponse<CommunityPost>> {
    Json(ListResponse::from_refs(filter_by_text(
        &state.catalog.community_posts,
        &TextQuery::new(&query.q),
    )))
}

/// GET /api/achievements
pub async fn list_achievements(State(state): State<AppState>) -> Json<AchievementsResponse> {
    Json(AchievementsResponse {
        achievements: state.catalog.achievements.clone(),
        unlocked_points: state.catalog.unlocked_points(),
    })
}
