use axum::Json;
use axum::extract::{Path, Query, State};

use crate::core::error::AppError;
use crate::features::mentees::dto::{ListMenteesQuery, MenteeSummaryDto, ResponseDetailDto};
use crate::features::mentees::helpers::MenteeListOptions;
use crate::server::AppState;

pub async fn handle_list_houses(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    state.mentees.list_houses().await.map(Json)
}

pub async fn handle_list_mentees(
    State(state): State<AppState>,
    Query(query): Query<ListMenteesQuery>,
) -> Result<Json<Vec<MenteeSummaryDto>>, AppError> {
    state
        .mentees
        .list_mentees(MenteeListOptions::from(query))
        .await
        .map(Json)
}

pub async fn handle_mentee_responses(
    State(state): State<AppState>,
    Path(discord_id): Path<String>,
) -> Result<Json<Vec<ResponseDetailDto>>, AppError> {
    state.mentees.mentee_responses(&discord_id).await.map(Json)
}
