//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::ScheduleOverview;

/// Newtype wrapper for displaying a list of schedule overviews.
///
/// # Examples
///
/// ```rust
/// use syllabus_core::display::ScheduleOverviews;
///
/// let empty = ScheduleOverviews(vec![]);
/// assert_eq!(empty.to_string(), "No schedules found.\n");
/// ```
pub struct ScheduleOverviews(pub Vec<ScheduleOverview>);

impl ScheduleOverviews {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of overviews in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the overview at the given index.
    pub fn get(&self, index: usize) -> Option<&ScheduleOverview> {
        self.0.get(index)
    }

    /// Get an iterator over the overviews.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleOverview> {
        self.0.iter()
    }
}

impl Index<usize> for ScheduleOverviews {
    type Output = ScheduleOverview;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ScheduleOverviews {
    type Item = ScheduleOverview;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScheduleOverviews {
    type Item = &'a ScheduleOverview;
    type IntoIter = std::slice::Iter<'a, ScheduleOverview>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ScheduleOverviews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No schedules found.")
        } else {
            for overview in &self.0 {
                write!(f, "{overview}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{duration::VideoDuration, models::ScheduleStatus};

    fn overview(id: u64, title: &str) -> ScheduleOverview {
        ScheduleOverview {
            id,
            title: title.to_string(),
            playlist: "course.json".to_string(),
            status: ScheduleStatus::Active,
            created_at: Timestamp::from_second(1_640_995_200).unwrap(),
            total_days: 3,
            total_videos: 9,
            completed_videos: 2,
            total_duration: VideoDuration::from_secs(5400),
        }
    }

    #[test]
    fn test_overviews_display() {
        let overviews = ScheduleOverviews(vec![overview(1, "First"), overview(2, "Second")]);
        let output = overviews.to_string();

        assert!(output.contains("## First (ID: 1) (2/9)"));
        assert!(output.contains("## Second (ID: 2)"));
        assert!(!output.starts_with("# "));
        assert_eq!(overviews.len(), 2);
        assert_eq!(overviews[1].title, "Second");
    }
}
