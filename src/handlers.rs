use crate::errors::AppError;
use crate::models::{
    CreatineStatusResponse, HistoryResponse, LogHydrationRequest, SetGoalRequest, TodayResponse,
};
use crate::state::AppState;
use crate::stats::{history_stats, recent_history, RECENT_DAYS};
use crate::store::{local_day_string, DailyTrackerStore, StoreData};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut store = state.store.lock().await;
    if store.check_and_auto_reset() {
        persist_data(&state.data_path, store.backend()).await?;
    }
    Ok(Html(render_index(&to_today(&store))))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let mut store = state.store.lock().await;
    if store.check_and_auto_reset() {
        persist_data(&state.data_path, store.backend()).await?;
    }
    Ok(Json(to_today(&store)))
}

pub async fn log_hydration(
    State(state): State<AppState>,
    Json(payload): Json<LogHydrationRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    if !payload.amount.is_finite() || payload.amount <= 0.0 {
        return Err(AppError::bad_request(
            "amount must be a positive number of liters",
        ));
    }

    let mut store = state.store.lock().await;
    store.check_and_auto_reset();
    store.log_hydration(payload.amount);
    persist_data(&state.data_path, store.backend()).await?;

    Ok(Json(to_today(&store)))
}

pub async fn set_goal(
    State(state): State<AppState>,
    Json(payload): Json<SetGoalRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    let mut store = state.store.lock().await;
    store.check_and_auto_reset();
    if !store.set_goal(payload.goal) {
        // The store keeps the prior goal; surface the rejection here.
        return Err(AppError::bad_request("goal must be a positive number of liters"));
    }
    persist_data(&state.data_path, store.backend()).await?;

    Ok(Json(to_today(&store)))
}

pub async fn log_creatine(
    State(state): State<AppState>,
) -> Result<Json<CreatineStatusResponse>, AppError> {
    let mut store = state.store.lock().await;
    store.check_and_auto_reset();
    store.log_creatine_serving();
    persist_data(&state.data_path, store.backend()).await?;

    let status = store.creatine_status();
    Ok(Json(CreatineStatusResponse {
        servings: status.servings,
        total_grams: status.total_grams,
        at_max: status.at_max,
    }))
}

pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let mut store = state.store.lock().await;
    if store.check_and_auto_reset() {
        persist_data(&state.data_path, store.backend()).await?;
    }

    let history = store.history();
    Ok(Json(HistoryResponse {
        recent: recent_history(&history, RECENT_DAYS),
        stats: history_stats(&history),
        total_days: history.len(),
    }))
}

fn to_today(store: &DailyTrackerStore<StoreData>) -> TodayResponse {
    let progress = store.hydration_progress();
    let creatine = store.creatine_status();
    TodayResponse {
        date: local_day_string(),
        liters_logged: progress.liters_logged,
        goal_liters: progress.goal,
        percentage: progress.percentage,
        creatine_servings: creatine.servings,
        creatine_grams: creatine.total_grams,
        creatine_at_max: creatine.at_max,
    }
}
