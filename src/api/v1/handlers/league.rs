/*
 * Responsibility
 * - GET /league/standings: current league table
 * - Proof-of-concept: serves canned data until a real store is wired in
 */
use axum::{Json, body::Body, http::Request, response::IntoResponse};
use chrono::Utc;

use crate::api::v1::dto::league::{StandingRow, StandingsResponse};
use crate::middleware::HandlerResult;

pub async fn standings(_req: Request<Body>) -> HandlerResult {
    let rows = vec![
        StandingRow {
            rank: 1,
            team: "Mud Ducks".to_string(),
            wins: 9,
            losses: 2,
            points_for: 1204.5,
        },
        StandingRow {
            rank: 2,
            team: "Couch Potatoes".to_string(),
            wins: 8,
            losses: 3,
            points_for: 1150.0,
        },
        StandingRow {
            rank: 3,
            team: "Blitzkrieg".to_string(),
            wins: 6,
            losses: 5,
            points_for: 1081.25,
        },
    ];

    Ok(Json(StandingsResponse {
        week: 11,
        updated_at: Utc::now(),
        rows,
    })
    .into_response())
}
