//! Combined trend + viral planning models.

use serde::{Deserialize, Serialize};

use crate::trends::model::TrendsRequest;
use crate::viral::model::ViralRequest;

/// Body of `POST /api/v1/reports/combined-plan`. The response is a
/// [`PlanningResult`](crate::planning::model::PlanningResult).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedPlanRequest {
    pub trends_request: TrendsRequest,
    pub viral_request: ViralRequest,
    pub channel_genre: String,
    pub channel_name: Option<String>,
}
