use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StandingRow {
    pub rank: u32,
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: f64,
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub week: u32,
    pub updated_at: DateTime<Utc>,
    pub rows: Vec<StandingRow>,
}
