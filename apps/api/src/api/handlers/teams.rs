use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::application::{CreateTeamCommand, FormPairCommand, TeamDto};

/// Request body for forming a pair
#[derive(Debug, Deserialize)]
pub struct FormPairRequest {
    pub pair_name: String,
    pub member_ids: Vec<String>,
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamCommand>,
) -> Result<(StatusCode, Json<TeamDto>), ApiError> {
    let team = state.create_team().execute(req).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// List all teams
///
/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamDto>>, ApiError> {
    let teams = state.get_teams().execute().await?;

    Ok(Json(teams))
}

/// Form a pair within a team
///
/// POST /api/teams/:id/pairs
pub async fn form_pair(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(req): Json<FormPairRequest>,
) -> Result<Json<TeamDto>, ApiError> {
    let team = state
        .form_pair()
        .execute(FormPairCommand {
            team_id,
            pair_name: req.pair_name,
            member_ids: req.member_ids,
        })
        .await?;

    Ok(Json(team))
}
