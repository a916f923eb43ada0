use serde::{Deserialize, Serialize};

/// One archived day, immutable once appended to the history log.
///
/// Field names follow the persisted `dailyHistory` schema, so this type
/// serializes directly into the stored JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: String,
    pub liters_logged: f64,
    pub creatine_servings: u32,
}

#[derive(Debug, Deserialize)]
pub struct LogHydrationRequest {
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct SetGoalRequest {
    pub goal: f64,
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: String,
    pub liters_logged: f64,
    pub goal_liters: f64,
    pub percentage: u32,
    pub creatine_servings: u32,
    pub creatine_grams: u32,
    pub creatine_at_max: bool,
}

#[derive(Debug, Serialize)]
pub struct CreatineStatusResponse {
    pub servings: u32,
    pub total_grams: u32,
    pub at_max: bool,
}

#[derive(Debug, Serialize)]
pub struct HistoryStatsResponse {
    pub avg_liters: f64,
    pub consistency_percent: u32,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub recent: Vec<DailyRecord>,
    pub stats: Option<HistoryStatsResponse>,
    pub total_days: usize,
}
