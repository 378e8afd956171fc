//! Series catalog model.

use serde::Serialize;
use sqlx::FromRow;

use reelbite_core::types::Id;

/// Full series row. Catalog data is read-only from the API's point of
/// view; its lifecycle is owned by content-management tooling.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: Id,
    pub title: String,
    pub synopsis: String,
    pub poster_url: String,
    pub is_coming_soon: bool,
    pub release_date: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<f32>,
    pub year: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub rank: Option<i32>,
    pub is_new: bool,
}
