use crate::models::DailyRecord;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info};

pub const DEFAULT_GOAL_LITERS: f64 = 2.0;
pub const MAX_CREATINE_SERVINGS: u32 = 4;
pub const CREATINE_GRAMS_PER_SERVING: u32 = 5;

const KEY_LITERS: &str = "liters";
const KEY_CREATINE_SERVINGS: &str = "creatineServings";
const KEY_GOAL: &str = "hydrationGoalLiters";
const KEY_LAST_VISIT: &str = "lastVisitDate";
const KEY_HISTORY: &str = "dailyHistory";

/// Contract the tracker needs from its persistence layer. Values are
/// string-encoded; all typed encode/decode stays inside [`DailyTrackerStore`].
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// The persisted entry map. Production state is one of these snapshotted to
/// disk by `storage`; tests use a fresh default as an in-memory backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreData {
    pub entries: BTreeMap<String, String>,
}

impl KeyValue for StoreData {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HydrationProgress {
    pub liters_logged: f64,
    pub goal: f64,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct CreatineStatus {
    pub servings: u32,
    pub total_grams: u32,
    pub at_max: bool,
}

/// Owns today's counters, the goal setting, and the archived history, all
/// behind a string key-value backend. Operations never fail; malformed
/// persisted values decode to defaults.
pub struct DailyTrackerStore<B = StoreData> {
    backend: B,
}

impl<B: KeyValue> DailyTrackerStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Detects a calendar-day change since the last visit. On a change the
    /// previous day's counters are archived as a [`DailyRecord`] and reset;
    /// either way `lastVisitDate` becomes today, so a second call on the
    /// same day archives nothing. Returns whether a record was archived.
    pub fn check_and_auto_reset(&mut self) -> bool {
        self.check_and_auto_reset_on(&local_day_string())
    }

    pub fn check_and_auto_reset_on(&mut self, today: &str) -> bool {
        let last_visit = self.backend.get(KEY_LAST_VISIT).map(str::to_owned);
        let archived = match last_visit {
            Some(last_visit) if last_visit != today => {
                let record = DailyRecord {
                    date: last_visit,
                    liters_logged: self.liters_logged(),
                    creatine_servings: self.creatine_servings(),
                };
                info!(date = %record.date, "day changed, archiving previous day");
                let mut history = self.history();
                history.push(record);
                self.write_history(&history);
                self.backend.remove(KEY_LITERS);
                self.backend.remove(KEY_CREATINE_SERVINGS);
                true
            }
            // First-ever session, or still the same day.
            _ => false,
        };
        self.backend.set(KEY_LAST_VISIT, today.to_string());
        archived
    }

    /// Writes the default goal back if the stored one is absent or invalid,
    /// so later reads always see a positive value.
    pub fn load_goal_settings(&mut self) {
        let goal = self.goal_liters();
        self.backend.set(KEY_GOAL, goal.to_string());
    }

    pub fn log_hydration(&mut self, amount: f64) {
        let total = self.liters_logged() + amount;
        self.backend.set(KEY_LITERS, total.to_string());
    }

    /// Accepts only a finite positive goal; anything else keeps the prior
    /// value. Returns whether the goal changed.
    pub fn set_goal(&mut self, new_goal: f64) -> bool {
        if !new_goal.is_finite() || new_goal <= 0.0 {
            return false;
        }
        self.backend.set(KEY_GOAL, new_goal.to_string());
        true
    }

    /// Increments today's servings unless the cap is already reached.
    /// Returns whether a serving was logged.
    pub fn log_creatine_serving(&mut self) -> bool {
        let servings = self.creatine_servings();
        if servings >= MAX_CREATINE_SERVINGS {
            return false;
        }
        self.backend
            .set(KEY_CREATINE_SERVINGS, (servings + 1).to_string());
        true
    }

    pub fn hydration_progress(&self) -> HydrationProgress {
        let liters_logged = self.liters_logged();
        let goal = self.goal_liters();
        let percentage = (liters_logged / goal * 100.0).min(100.0).round() as u32;
        HydrationProgress {
            liters_logged,
            goal,
            percentage,
        }
    }

    pub fn creatine_status(&self) -> CreatineStatus {
        let servings = self.creatine_servings();
        CreatineStatus {
            servings,
            total_grams: servings * CREATINE_GRAMS_PER_SERVING,
            at_max: servings >= MAX_CREATINE_SERVINGS,
        }
    }

    pub fn liters_logged(&self) -> f64 {
        match self.backend.get(KEY_LITERS).map(str::parse::<f64>) {
            Some(Ok(value)) if value.is_finite() && value >= 0.0 => value,
            _ => 0.0,
        }
    }

    pub fn creatine_servings(&self) -> u32 {
        self.backend
            .get(KEY_CREATINE_SERVINGS)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    /// The goal is "present and valid" only when it parses as a finite
    /// positive number; a stored zero or negative falls back to the default.
    pub fn goal_liters(&self) -> f64 {
        match self.backend.get(KEY_GOAL).map(str::parse::<f64>) {
            Some(Ok(goal)) if goal.is_finite() && goal > 0.0 => goal,
            _ => DEFAULT_GOAL_LITERS,
        }
    }

    /// The archived log, oldest first. A corrupt entry recovers to empty
    /// rather than failing.
    pub fn history(&self) -> Vec<DailyRecord> {
        let Some(raw) = self.backend.get(KEY_HISTORY) else {
            return Vec::new();
        };
        match serde_json::from_str(raw) {
            Ok(history) => history,
            Err(err) => {
                error!("corrupt history entry, starting over empty: {err}");
                Vec::new()
            }
        }
    }

    fn write_history(&mut self, history: &[DailyRecord]) {
        match serde_json::to_string(history) {
            Ok(raw) => self.backend.set(KEY_HISTORY, raw),
            Err(err) => error!("failed to encode history: {err}"),
        }
    }
}

pub fn local_day_string() -> String {
    day_string(Local::now().date_naive())
}

/// Calendar-day identifier in the persisted `lastVisitDate` layout,
/// e.g. `Sat Aug 30 2026`.
pub fn day_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn store() -> DailyTrackerStore {
        DailyTrackerStore::new(StoreData::default())
    }

    fn day(offset: i64) -> String {
        let base = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        day_string(base + Duration::days(offset))
    }

    #[test]
    fn first_session_initializes_without_archiving() {
        let mut store = store();
        assert!(!store.check_and_auto_reset_on(&day(0)));
        assert!(store.history().is_empty());
    }

    #[test]
    fn rollover_is_idempotent_within_a_day() {
        let mut store = store();
        store.check_and_auto_reset_on(&day(0));
        store.log_hydration(1.5);

        assert!(store.check_and_auto_reset_on(&day(1)));
        assert!(!store.check_and_auto_reset_on(&day(1)));
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn rollover_archives_and_resets_counters() {
        let mut store = store();
        store.check_and_auto_reset_on(&day(0));
        store.log_hydration(2.25);
        store.log_creatine_serving();

        store.check_and_auto_reset_on(&day(1));

        let history = store.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].date, day(0));
        assert_eq!(history[0].liters_logged, 2.25);
        assert_eq!(history[0].creatine_servings, 1);
        assert_eq!(store.liters_logged(), 0.0);
        assert_eq!(store.creatine_servings(), 0);
    }

    #[test]
    fn repeated_rollovers_never_duplicate_dates() {
        let mut store = store();
        for offset in 0..10 {
            store.check_and_auto_reset_on(&day(offset));
            store.check_and_auto_reset_on(&day(offset));
            store.log_hydration(1.0);
        }

        let history = store.history();
        assert_eq!(history.len(), 9);
        let mut dates: Vec<_> = history.iter().map(|record| record.date.clone()).collect();
        dates.dedup();
        assert_eq!(dates.len(), history.len());
    }

    #[test]
    fn rollover_preserves_goal() {
        let mut store = store();
        store.check_and_auto_reset_on(&day(0));
        assert!(store.set_goal(3.0));
        store.check_and_auto_reset_on(&day(1));
        assert_eq!(store.goal_liters(), 3.0);
    }

    #[test]
    fn creatine_servings_never_exceed_cap() {
        let mut store = store();
        for _ in 0..10 {
            store.log_creatine_serving();
        }
        assert_eq!(store.creatine_servings(), MAX_CREATINE_SERVINGS);
        assert!(!store.log_creatine_serving());

        let status = store.creatine_status();
        assert_eq!(status.servings, 4);
        assert_eq!(status.total_grams, 20);
        assert!(status.at_max);
    }

    #[test]
    fn non_positive_goals_are_rejected() {
        let mut store = store();
        assert!(store.set_goal(2.5));
        assert!(!store.set_goal(0.0));
        assert!(!store.set_goal(-1.0));
        assert_eq!(store.goal_liters(), 2.5);
    }

    #[test]
    fn progress_clamps_at_one_hundred() {
        let mut store = store();
        store.set_goal(2.0);
        store.log_hydration(10.0);

        let progress = store.hydration_progress();
        assert_eq!(progress.percentage, 100);
        assert_eq!(progress.liters_logged, 10.0);
    }

    #[test]
    fn progress_rounds_partial_goal() {
        let mut store = store();
        store.set_goal(2.0);
        store.log_hydration(0.5);
        assert_eq!(store.hydration_progress().percentage, 25);
    }

    #[test]
    fn malformed_counters_decode_to_zero() {
        let mut data = StoreData::default();
        data.set(KEY_LITERS, "not a number".to_string());
        data.set(KEY_CREATINE_SERVINGS, "-3".to_string());

        let store = DailyTrackerStore::new(data);
        assert_eq!(store.liters_logged(), 0.0);
        assert_eq!(store.creatine_servings(), 0);
    }

    #[test]
    fn invalid_stored_goal_falls_back_to_default() {
        let mut data = StoreData::default();
        data.set(KEY_GOAL, "0".to_string());

        let mut store = DailyTrackerStore::new(data);
        assert_eq!(store.goal_liters(), DEFAULT_GOAL_LITERS);
        store.load_goal_settings();
        assert_eq!(store.backend().get(KEY_GOAL), Some("2"));
    }

    #[test]
    fn corrupt_history_recovers_to_empty() {
        let mut data = StoreData::default();
        data.set(KEY_HISTORY, "{not json".to_string());

        let store = DailyTrackerStore::new(data);
        assert!(store.history().is_empty());
    }

    #[test]
    fn history_round_trips_through_the_backend() {
        let mut store = store();
        store.check_and_auto_reset_on(&day(0));
        store.log_hydration(1.75);
        store.check_and_auto_reset_on(&day(1));

        // Re-open the same backend, as a restart would.
        let reopened = DailyTrackerStore::new(store.backend().clone());
        let history = reopened.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].liters_logged, 1.75);
    }
}
