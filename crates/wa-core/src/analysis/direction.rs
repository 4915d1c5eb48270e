//! Frequency distribution of the categorical direction field.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wa_common::{Direction, Sample};
use wa_math::{round2, share_pct};

/// Count and share of one observed direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DirectionBucket {
    #[schemars(with = "String")]
    pub direction: Direction,
    pub count: usize,
    /// Share of all samples, in percent.
    pub percentage: f64,
}

/// The dominant direction and every observed direction by descending count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DirectionSummary {
    #[schemars(with = "String")]
    pub dominant: Direction,
    pub buckets: Vec<DirectionBucket>,
}

/// Tabulate directions. Returns `None` for an empty sequence.
///
/// Counts are kept in first-seen order. The dominant direction is the first
/// one to reach the highest count, and buckets with equal counts keep their
/// first-seen order.
pub fn direction_distribution(samples: &[Sample]) -> Option<DirectionSummary> {
    let mut counts: Vec<(Direction, usize)> = Vec::new();
    for sample in samples {
        match counts.iter_mut().find(|(d, _)| *d == sample.direction) {
            Some((_, n)) => *n += 1,
            None => counts.push((sample.direction, 1)),
        }
    }

    let (mut dominant, mut best) = *counts.first()?;
    for &(direction, count) in &counts[1..] {
        if count > best {
            dominant = direction;
            best = count;
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let total = samples.len();
    let buckets = counts
        .into_iter()
        .map(|(direction, count)| DirectionBucket {
            direction,
            count,
            percentage: round2(share_pct(count, total)),
        })
        .collect();

    Some(DirectionSummary { dominant, buckets })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(dirs: &[&str]) -> Vec<Sample> {
        dirs.iter()
            .enumerate()
            .map(|(i, d)| Sample::hourly(i as u8, 10.0, *d, 5.0))
            .collect()
    }

    #[test]
    fn fixture_distribution() {
        let dist = direction_distribution(&series(&[
            "GGD", "GGD", "GGD", "GD", "GD", "GD", "GGD", "GGD", "G",
        ]))
        .unwrap();
        assert_eq!(dist.dominant, Direction::SouthSouthEast);
        let got: Vec<(&str, usize, f64)> = dist
            .buckets
            .iter()
            .map(|b| (b.direction.code(), b.count, b.percentage))
            .collect();
        assert_eq!(
            got,
            vec![("GGD", 5, 55.56), ("GD", 3, 33.33), ("G", 1, 11.11)]
        );
    }

    #[test]
    fn ties_go_to_first_seen() {
        let dist = direction_distribution(&series(&["B", "K", "K", "B"])).unwrap();
        assert_eq!(dist.dominant, Direction::West);
        assert_eq!(dist.buckets[0].direction, Direction::West);
        assert_eq!(dist.buckets[1].direction, Direction::North);
    }

    #[test]
    fn unknown_codes_share_one_bucket() {
        let dist = direction_distribution(&series(&["XX", "??", "K"])).unwrap();
        assert_eq!(dist.dominant, Direction::Unknown);
        assert_eq!(dist.buckets[0].count, 2);
    }

    #[test]
    fn empty_has_no_distribution() {
        assert!(direction_distribution(&[]).is_none());
    }
}
