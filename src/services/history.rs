use chrono::{DateTime, Utc};

use crate::dto::{MoodCount, MoodStats, RangeSummary, TrendSummary};
use crate::models::history::{MoodHistoryEntry, TimeRange, Trend};
use crate::models::mood::MoodId;

pub const DEFAULT_TREND_WINDOW: usize = 5;

/// Read-only statistics over an ordered (oldest first) mood history.
#[derive(Debug, Clone, Default)]
pub struct MoodHistory {
    entries: Vec<MoodHistoryEntry>,
    selected: Option<String>,
}

/// Mood counts in the order each mood first appears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    counts: Vec<(MoodId, usize)>,
}

impl Distribution {
    pub fn get(&self, mood: MoodId) -> usize {
        self.counts
            .iter()
            .find(|(m, _)| *m == mood)
            .map_or(0, |(_, c)| *c)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoodId, usize)> + '_ {
        self.counts.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn bump(&mut self, mood: MoodId) {
        match self.counts.iter_mut().find(|(m, _)| *m == mood) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((mood, 1)),
        }
    }
}

impl MoodHistory {
    pub fn new(entries: Vec<MoodHistoryEntry>) -> Self {
        Self {
            entries,
            selected: None,
        }
    }

    pub fn entries(&self) -> &[MoodHistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn distribution(&self) -> Distribution {
        let mut dist = Distribution::default();
        for entry in &self.entries {
            dist.bump(entry.mood);
        }
        dist
    }

    /// Mean intensity rounded to one decimal place; 0 when empty.
    pub fn average_intensity(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.entries.iter().map(|e| u32::from(e.intensity)).sum();
        let mean = f64::from(sum) / self.entries.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// The most logged mood. Ties go to whichever mood appeared first.
    pub fn most_frequent(&self) -> Option<(MoodId, usize)> {
        self.distribution()
            .iter()
            .fold(None, |best: Option<(MoodId, usize)>, (mood, count)| match best {
                Some((_, top)) if top >= count => best,
                _ => Some((mood, count)),
            })
    }

    /// Compares the first and last intensity within the most recent
    /// `window` entries.
    pub fn trend(&self, window: usize) -> Trend {
        let start = self.entries.len().saturating_sub(window);
        let recent = &self.entries[start..];
        let (Some(first), Some(last)) = (recent.first(), recent.last()) else {
            return Trend::Stable;
        };

        let delta = i16::from(last.intensity) - i16::from(first.intensity);
        if delta > 1 {
            Trend::Improving
        } else if delta < -1 {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }

    /// The last `n` entries, newest first.
    pub fn recent(&self, n: usize) -> Vec<&MoodHistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Entries logged within `range` of `now`, oldest first.
    pub fn within(&self, range: TimeRange, now: DateTime<Utc>) -> MoodHistory {
        let since = now - range.span();
        MoodHistory::new(
            self.entries
                .iter()
                .filter(|e| e.timestamp >= since && e.timestamp <= now)
                .cloned()
                .collect(),
        )
    }

    pub fn range_summary(&self, range: TimeRange, now: DateTime<Utc>) -> RangeSummary {
        RangeSummary {
            range,
            label: range.label(),
            entries: self.within(range, now).len(),
        }
    }

    /// Opens the entry with `id` for detail; picking the open entry again
    /// closes it. Unknown ids leave the selection as it was.
    pub fn toggle_selected(&mut self, id: &str) -> Option<&MoodHistoryEntry> {
        if !self.entries.iter().any(|e| e.id == id) {
            tracing::debug!(entry_id = %id, "History selection ignored, entry not found");
            return self.selected();
        }
        self.selected = if self.selected.as_deref() == Some(id) {
            None
        } else {
            Some(id.to_string())
        };
        self.selected()
    }

    pub fn selected(&self) -> Option<&MoodHistoryEntry> {
        let id = self.selected.as_deref()?;
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn stats(&self, window: usize) -> MoodStats {
        let distribution = self.distribution();
        let total = self.entries.len();
        let trend = self.trend(window);

        MoodStats {
            total_entries: total,
            average_intensity: self.average_intensity(),
            most_frequent: self
                .most_frequent()
                .map(|(mood, count)| MoodCount::new(mood, count, total)),
            distribution: distribution
                .iter()
                .map(|(mood, count)| MoodCount::new(mood, count, total))
                .collect(),
            trend: TrendSummary {
                direction: trend,
                message: trend.message(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use pretty_assertions::assert_eq;

    fn sample() -> MoodHistory {
        MoodHistory::new(demo::seed_mood_history())
    }

    fn with_intensities(values: &[u8]) -> MoodHistory {
        let base = DateTime::parse_from_rfc3339("2024-01-15T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        MoodHistory::new(
            values
                .iter()
                .enumerate()
                .map(|(i, &intensity)| MoodHistoryEntry {
                    id: (i + 1).to_string(),
                    mood: MoodId::Calm,
                    timestamp: base + chrono::Duration::hours(i as i64),
                    intensity,
                    notes: None,
                })
                .collect(),
        )
    }

    #[test]
    fn test_sample_distribution() {
        let dist = sample().distribution();
        assert_eq!(dist.get(MoodId::Happy), 3);
        assert_eq!(dist.get(MoodId::Calm), 2);
        assert_eq!(dist.get(MoodId::Sad), 2);
        assert_eq!(dist.get(MoodId::Anxious), 2);
        assert_eq!(dist.get(MoodId::Energized), 1);
        assert_eq!(dist.total(), 10);

        let order: Vec<MoodId> = dist.iter().map(|(m, _)| m).collect();
        assert_eq!(
            order,
            vec![MoodId::Happy, MoodId::Calm, MoodId::Anxious, MoodId::Sad, MoodId::Energized]
        );
    }

    #[test]
    fn test_sample_average_intensity() {
        assert_eq!(sample().average_intensity(), 6.3);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        assert_eq!(with_intensities(&[7, 8, 8]).average_intensity(), 7.7);
    }

    #[test]
    fn test_sample_most_frequent() {
        assert_eq!(sample().most_frequent(), Some((MoodId::Happy, 3)));
    }

    #[test]
    fn test_most_frequent_tie_goes_to_first_seen() {
        let base = sample().entries()[0].timestamp;
        let history = MoodHistory::new(
            [MoodId::Sad, MoodId::Happy, MoodId::Happy, MoodId::Sad]
                .into_iter()
                .enumerate()
                .map(|(i, mood)| MoodHistoryEntry {
                    id: i.to_string(),
                    mood,
                    timestamp: base,
                    intensity: 5,
                    notes: None,
                })
                .collect(),
        );
        assert_eq!(history.most_frequent(), Some((MoodId::Sad, 2)));
    }

    #[test]
    fn test_trend_directions() {
        assert_eq!(with_intensities(&[3, 4, 5, 5, 6]).trend(5), Trend::Improving);
        assert_eq!(with_intensities(&[8, 7, 6, 9, 9]).trend(5), Trend::Stable);
        assert_eq!(with_intensities(&[9, 7, 6, 5, 4]).trend(5), Trend::Declining);
    }

    #[test]
    fn test_trend_only_looks_at_recent_window() {
        // Old entries would read as declining; the last five are rising
        let history = with_intensities(&[10, 10, 2, 3, 4, 5, 6]);
        assert_eq!(history.trend(DEFAULT_TREND_WINDOW), Trend::Improving);
        // Sample's last five: 9, 7, 8, 3, 6
        assert_eq!(sample().trend(DEFAULT_TREND_WINDOW), Trend::Declining);
    }

    #[test]
    fn test_empty_history_is_neutral() {
        let history = MoodHistory::default();
        assert!(history.distribution().is_empty());
        assert_eq!(history.distribution().get(MoodId::Happy), 0);
        assert_eq!(history.average_intensity(), 0.0);
        assert_eq!(history.most_frequent(), None);
        assert_eq!(history.trend(DEFAULT_TREND_WINDOW), Trend::Stable);

        let stats = history.stats(DEFAULT_TREND_WINDOW);
        assert_eq!(stats.total_entries, 0);
        assert!(stats.distribution.is_empty());
    }

    #[test]
    fn test_single_entry_is_stable() {
        assert_eq!(with_intensities(&[9]).trend(5), Trend::Stable);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let history = sample();
        let ids: Vec<&str> = history.recent(5).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "9", "8", "7", "6"]);
    }

    #[test]
    fn test_within_filters_by_range() {
        let history = sample();
        let now = DateTime::parse_from_rfc3339("2024-01-20T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(history.within(TimeRange::Week, now).len(), 10);

        let later = now + chrono::Duration::days(4);
        let week = history.within(TimeRange::Week, later);
        // Only entries from 2024-01-17 onward
        assert_eq!(week.len(), 5);
        assert_eq!(history.within(TimeRange::Month, later).len(), 10);
    }

    #[test]
    fn test_stats_shares() {
        let stats = sample().stats(DEFAULT_TREND_WINDOW);
        assert_eq!(stats.total_entries, 10);
        let happy = stats.most_frequent.unwrap();
        assert_eq!(happy.mood, MoodId::Happy);
        assert_eq!(happy.share, 0.3);
        assert_eq!(stats.trend.direction, Trend::Declining);
    }

    #[test]
    fn test_toggle_selected_opens_and_closes() {
        let mut history = sample();
        assert!(history.selected().is_none());

        let entry = history.toggle_selected("6").unwrap();
        assert_eq!(entry.mood, MoodId::Energized);

        assert_eq!(history.toggle_selected("8").map(|e| e.id.as_str()), Some("8"));
        assert!(history.toggle_selected("8").is_none(), "Same entry again closes it");
        assert!(history.selected().is_none());
    }

    #[test]
    fn test_toggle_selected_ignores_unknown_ids() {
        let mut history = sample();
        history.toggle_selected("3");
        assert_eq!(history.toggle_selected("42").map(|e| e.id.as_str()), Some("3"));
    }

    #[test]
    fn test_range_summary_labels_and_counts() {
        let history = sample();
        let later = DateTime::parse_from_rfc3339("2024-01-24T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let week = history.range_summary(TimeRange::Week, later);
        assert_eq!(week.label, "Last 7 days");
        assert_eq!(week.entries, 5);
        let quarter = history.range_summary(TimeRange::Quarter, later);
        assert_eq!(quarter.label, "Last 3 months");
        assert_eq!(quarter.entries, 10);
    }
}
