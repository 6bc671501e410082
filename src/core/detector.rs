use crate::domain::model::{Birthday, DAYS_IN_YEAR};
use crate::domain::ports::CollisionDetector;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// All-pairs comparison. Returns the first repeated birthday in nested-loop order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseDetector;

impl CollisionDetector for PairwiseDetector {
    fn find_match(&self, group: &[Birthday]) -> Option<Birthday> {
        let distinct: HashSet<Birthday> = group.iter().copied().collect();
        if distinct.len() == group.len() {
            return None;
        }

        for (i, a) in group.iter().enumerate() {
            if group[i + 1..].contains(a) {
                return Some(*a);
            }
        }
        None
    }

    fn has_collision(&self, group: &[Birthday]) -> bool {
        group
            .iter()
            .enumerate()
            .any(|(i, a)| group[i + 1..].contains(a))
    }
}

/// Single pass over a day-indexed seen table. Returns the birthday whose second
/// occurrence comes first.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashSetDetector;

impl CollisionDetector for HashSetDetector {
    fn find_match(&self, group: &[Birthday]) -> Option<Birthday> {
        let mut seen = [false; DAYS_IN_YEAR as usize];
        for &birthday in group {
            let slot = &mut seen[birthday.day_of_year() as usize];
            if *slot {
                return Some(birthday);
            }
            *slot = true;
        }
        None
    }
}

/// Sorts a copy of the group. Returns the smallest repeated birthday.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortDetector;

impl CollisionDetector for SortDetector {
    fn find_match(&self, group: &[Birthday]) -> Option<Birthday> {
        let mut sorted = group.to_vec();
        sorted.sort_unstable();
        sorted.windows(2).find(|w| w[0] == w[1]).map(|w| w[0])
    }
}

/// Detector selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    #[default]
    Hash,
    Sort,
    Pairwise,
}

impl CollisionDetector for DetectorKind {
    fn find_match(&self, group: &[Birthday]) -> Option<Birthday> {
        match self {
            DetectorKind::Hash => HashSetDetector.find_match(group),
            DetectorKind::Sort => SortDetector.find_match(group),
            DetectorKind::Pairwise => PairwiseDetector.find_match(group),
        }
    }

    fn has_collision(&self, group: &[Birthday]) -> bool {
        match self {
            DetectorKind::Hash => HashSetDetector.has_collision(group),
            DetectorKind::Sort => SortDetector.has_collision(group),
            DetectorKind::Pairwise => PairwiseDetector.has_collision(group),
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectorKind::Hash => "hash",
            DetectorKind::Sort => "sort",
            DetectorKind::Pairwise => "pairwise",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DetectorKind; 3] = [DetectorKind::Hash, DetectorKind::Sort, DetectorKind::Pairwise];

    fn group(days: &[u16]) -> Vec<Birthday> {
        days.iter().map(|&d| Birthday::new(d).unwrap()).collect()
    }

    #[test]
    fn test_empty_and_single_have_no_match() {
        for kind in ALL {
            assert_eq!(kind.find_match(&[]), None);
            assert_eq!(kind.find_match(&group(&[100])), None);
            assert!(!kind.has_collision(&group(&[364])));
        }
    }

    #[test]
    fn test_distinct_group_has_no_match() {
        let days = group(&[0, 1, 2, 100, 200, 364]);
        for kind in ALL {
            assert_eq!(kind.find_match(&days), None);
        }
    }

    #[test]
    fn test_non_adjacent_duplicate_is_found() {
        let days = group(&[5, 17, 300, 42, 17, 9]);
        for kind in ALL {
            assert_eq!(kind.find_match(&days), Some(Birthday::new(17).unwrap()));
            assert!(kind.has_collision(&days));
        }
    }

    #[test]
    fn test_choice_among_multiple_repeats() {
        // 200 先出現，但 50 的第二次出現較早
        let days = group(&[200, 50, 50, 200]);
        assert_eq!(PairwiseDetector.find_match(&days), Birthday::new(200));
        assert_eq!(HashSetDetector.find_match(&days), Birthday::new(50));
        assert_eq!(SortDetector.find_match(&days), Birthday::new(50));
    }

    #[test]
    fn test_full_year_plus_one_collides() {
        let mut days: Vec<u16> = (0..DAYS_IN_YEAR).collect();
        days.push(123);
        let days = group(&days);
        for kind in ALL {
            assert_eq!(kind.find_match(&days), Birthday::new(123));
        }
    }

    #[test]
    fn test_detector_kind_parses_lowercase() {
        let kind: DetectorKind = serde_json::from_str("\"pairwise\"").unwrap();
        assert_eq!(kind, DetectorKind::Pairwise);
        assert_eq!(DetectorKind::default().to_string(), "hash");
    }
}
