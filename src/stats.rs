use crate::models::{DailyRecord, HistoryStatsResponse};

/// How many archived days the history view shows.
pub const RECENT_DAYS: usize = 7;

/// Aggregates over the *entire* archived history. Returns `None` for an
/// empty log so "no data" stays distinguishable from a logged zero.
pub fn history_stats(history: &[DailyRecord]) -> Option<HistoryStatsResponse> {
    if history.is_empty() {
        return None;
    }

    let total = history.len() as f64;
    let liters_sum: f64 = history.iter().map(|record| record.liters_logged).sum();
    let days_with_creatine = history
        .iter()
        .filter(|record| record.creatine_servings >= 1)
        .count() as f64;

    Some(HistoryStatsResponse {
        avg_liters: (liters_sum / total * 10.0).round() / 10.0,
        consistency_percent: (days_with_creatine / total * 100.0).round() as u32,
    })
}

/// The display window: the last `n` records, newest first. Independent of
/// the whole-history aggregates above and does not touch the log itself.
pub fn recent_history(history: &[DailyRecord], n: usize) -> Vec<DailyRecord> {
    history.iter().rev().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, liters: f64, servings: u32) -> DailyRecord {
        DailyRecord {
            date: date.to_string(),
            liters_logged: liters,
            creatine_servings: servings,
        }
    }

    #[test]
    fn stats_over_empty_history_is_none() {
        assert!(history_stats(&[]).is_none());
    }

    #[test]
    fn stats_average_and_consistency() {
        let history = vec![
            record("Mon Aug 24 2026", 2.0, 1),
            record("Tue Aug 25 2026", 4.0, 0),
        ];

        let stats = history_stats(&history).expect("stats");
        assert_eq!(stats.avg_liters, 3.0);
        assert_eq!(stats.consistency_percent, 50);
    }

    #[test]
    fn stats_average_rounds_to_one_decimal() {
        let history = vec![
            record("Mon Aug 24 2026", 1.0, 1),
            record("Tue Aug 25 2026", 1.0, 1),
            record("Wed Aug 26 2026", 2.0, 1),
        ];

        let stats = history_stats(&history).expect("stats");
        assert_eq!(stats.avg_liters, 1.3);
        assert_eq!(stats.consistency_percent, 100);
    }

    #[test]
    fn recent_window_is_newest_first_and_bounded() {
        let history: Vec<_> = (1..=10)
            .map(|index| record(&format!("day {index}"), index as f64, 0))
            .collect();

        let recent = recent_history(&history, RECENT_DAYS);
        assert_eq!(recent.len(), 7);
        assert_eq!(recent[0].date, "day 10");
        assert_eq!(recent[6].date, "day 4");
    }

    #[test]
    fn recent_window_shorter_than_history() {
        let history = vec![record("Mon Aug 24 2026", 2.0, 1)];
        let recent = recent_history(&history, RECENT_DAYS);
        assert_eq!(recent.len(), 1);
    }
}
