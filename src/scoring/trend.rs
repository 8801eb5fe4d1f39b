use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::constants::{TREND_THRESHOLD, TREND_WINDOW};

/// Direction of recent daily scores relative to the window before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Classify the trend of chronologically ordered daily scores.
///
/// Compares the mean of the last `TREND_WINDOW` scores with the mean of the
/// (up to) `TREND_WINDOW` scores before them.
pub fn analyze_trend(ordered_scores: &[f64]) -> Trend {
    if ordered_scores.len() < 2 {
        return Trend::Stable;
    }

    let recent_start = ordered_scores.len().saturating_sub(TREND_WINDOW);
    let prior_start = recent_start.saturating_sub(TREND_WINDOW);

    let recent = &ordered_scores[recent_start..];
    let prior = &ordered_scores[prior_start..recent_start];

    if recent.is_empty() || prior.is_empty() {
        return Trend::Stable;
    }

    let diff = mean(recent) - mean(prior);
    if diff > TREND_THRESHOLD {
        Trend::Improving
    } else if diff < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Aggregate statistics over a score history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub average_score: f64,
    pub best_score: f64,
    pub total_days: usize,
    pub trend: Trend,
}

/// Summarize chronologically ordered daily scores. Empty history is all zeros.
pub fn score_stats(ordered_scores: &[f64]) -> ScoreStats {
    if ordered_scores.is_empty() {
        return ScoreStats {
            average_score: 0.0,
            best_score: 0.0,
            total_days: 0,
            trend: Trend::Stable,
        };
    }

    ScoreStats {
        average_score: mean(ordered_scores),
        best_score: ordered_scores.iter().copied().fold(f64::MIN, f64::max),
        total_days: ordered_scores.len(),
        trend: analyze_trend(ordered_scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_is_stable() {
        assert_eq!(analyze_trend(&[]), Trend::Stable);
        assert_eq!(analyze_trend(&[42.0]), Trend::Stable);
    }

    #[test]
    fn test_fewer_than_eight_has_no_prior_window() {
        // All entries land in the recent window.
        assert_eq!(analyze_trend(&[20.0, 90.0]), Trend::Stable);
    }

    #[test]
    fn test_eight_entries_single_prior() {
        let mut scores = vec![60.0];
        scores.extend(vec![70.0; 7]);
        assert_eq!(analyze_trend(&scores), Trend::Improving);

        let mut scores = vec![80.0];
        scores.extend(vec![70.0; 7]);
        assert_eq!(analyze_trend(&scores), Trend::Declining);
    }

    #[test]
    fn test_only_last_fourteen_count() {
        let mut scores = vec![0.0; 10];
        scores.extend(vec![78.0; 7]);
        scores.extend(vec![85.0; 7]);
        assert_eq!(analyze_trend(&scores), Trend::Improving);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut scores = vec![70.0; 7];
        scores.extend(vec![75.0; 7]);
        assert_eq!(analyze_trend(&scores), Trend::Stable);
    }

    #[test]
    fn test_short_prior_window() {
        // 9 entries: recent = last 7, prior = first 2
        let scores = [90.0, 90.0, 60.0, 60.0, 60.0, 60.0, 60.0, 60.0, 60.0];
        assert_eq!(analyze_trend(&scores), Trend::Declining);
    }

    #[test]
    fn test_exactly_one_window_is_stable() {
        let scores = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 90.0];
        assert_eq!(analyze_trend(&scores), Trend::Stable);
    }

    #[test]
    fn test_score_stats() {
        let stats = score_stats(&[60.0, 80.0, 70.0]);
        assert!((stats.average_score - 70.0).abs() < 1e-9);
        assert_eq!(stats.best_score, 80.0);
        assert_eq!(stats.total_days, 3);

        let empty = score_stats(&[]);
        assert_eq!(empty.total_days, 0);
        assert_eq!(empty.best_score, 0.0);
        assert_eq!(empty.trend, Trend::Stable);
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Trend::Improving).unwrap(), "\"improving\"");
    }
}
