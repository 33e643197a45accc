use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::features::store::RowId;

#[derive(Debug, Clone, Deserialize)]
pub struct MenteeRecord {
    pub id: RowId,
    pub name: String,
    pub discord_id: String,
    #[serde(default)]
    pub house_role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseRecord {
    pub id: i64,
    pub week_number: i64,
    #[serde(default)]
    pub text_response: Option<String>,
    #[serde(default)]
    pub voice_response_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HouseRoleRow {
    #[serde(default)]
    pub house_role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct IdRow {
    pub id: RowId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenteeFilter {
    pub house: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMenteesQuery {
    pub house: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenteeSummaryDto {
    pub name: String,
    pub discord_id: String,
    pub house_role: Option<String>,
    pub response_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDetailDto {
    pub id: i64,
    pub week_number: i64,
    pub text_response: Option<String>,
    pub voice_response_url: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}
