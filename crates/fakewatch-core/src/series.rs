//! Rolling score series for the live chart
//!
//! A fixed-capacity FIFO of (timestamp label, score) pairs. The chart
//! widget consumes the value sequence directly; the label sequence stays in
//! lockstep so the axis can show the time range of the retained window.

use std::collections::VecDeque;

/// Maximum number of (label, score) pairs retained for the chart.
pub const SCORE_SERIES_CAPACITY: usize = 50;

/// Fixed-capacity rolling series of (timestamp label, score) pairs.
///
/// Pushing beyond capacity evicts the oldest pair. Labels and values are
/// stored together, so the two sequences always have equal length.
#[derive(Debug, Clone)]
pub struct ScoreSeries {
    points: VecDeque<(String, f64)>,
    capacity: usize,
}

impl Default for ScoreSeries {
    fn default() -> Self {
        Self::new(SCORE_SERIES_CAPACITY)
    }
}

impl ScoreSeries {
    /// Create a series with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a (label, score) pair, evicting the oldest pair if full.
    pub fn push(&mut self, label: impl Into<String>, score: f64) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back((label.into(), score));
    }

    /// Number of pairs currently stored.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over pairs from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &(String, f64)> {
        self.points.iter()
    }

    /// Score values from oldest to newest.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    /// Label of the oldest retained pair.
    pub fn oldest_label(&self) -> Option<&str> {
        self.points.front().map(|(l, _)| l.as_str())
    }

    /// Label of the newest retained pair.
    pub fn latest_label(&self) -> Option<&str> {
        self.points.back().map(|(l, _)| l.as_str())
    }

    /// Most recently pushed score.
    pub fn latest_score(&self) -> Option<f64> {
        self.points.back().map(|(_, v)| *v)
    }

    /// Largest score in the retained window.
    pub fn max_score(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|(_, v)| *v)
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_order() {
        let mut series = ScoreSeries::new(3);
        series.push("10:00:00", 1.0);
        series.push("10:00:01", 2.0);
        assert_eq!(series.len(), 2);
        assert_eq!(series.values(), vec![1.0, 2.0]);
        assert_eq!(series.oldest_label(), Some("10:00:00"));
        assert_eq!(series.latest_label(), Some("10:00:01"));
    }

    #[test]
    fn test_eviction_at_capacity() {
        let mut series = ScoreSeries::new(3);
        for i in 0..4 {
            series.push(format!("t{i}"), i as f64);
        }
        assert_eq!(series.len(), 3);
        assert_eq!(series.values(), vec![1.0, 2.0, 3.0]); // 0.0 evicted
        assert_eq!(series.oldest_label(), Some("t1"));
    }

    #[test]
    fn test_sixty_pushes_retain_last_fifty() {
        let mut series = ScoreSeries::default();
        for i in 0..60 {
            series.push(format!("t{i}"), i as f64);
        }
        assert_eq!(series.len(), 50);
        // Oldest retained is the 11th push, newest is the 60th.
        assert_eq!(series.oldest_label(), Some("t10"));
        assert_eq!(series.latest_label(), Some("t59"));
        let values = series.values();
        assert_eq!(values.first(), Some(&10.0));
        assert_eq!(values.last(), Some(&59.0));
        // Arrival order preserved among retained pairs.
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_labels_and_values_stay_in_lockstep() {
        let mut series = ScoreSeries::new(5);
        for i in 0..23 {
            series.push(format!("t{i}"), i as f64);
            assert_eq!(series.iter().count(), series.values().len());
            assert!(series.len() <= 5);
        }
    }

    #[test]
    fn test_max_score() {
        let mut series = ScoreSeries::new(10);
        assert_eq!(series.max_score(), None);
        series.push("a", 3.0);
        series.push("b", 9.0);
        series.push("c", 5.0);
        assert_eq!(series.max_score(), Some(9.0));
        assert_eq!(series.latest_score(), Some(5.0));
    }
}
