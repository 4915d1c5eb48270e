//! Time-order validation for the strict ordering policy.

use wa_common::Sample;

use super::AnalysisError;

/// Check that time of day never goes backwards.
///
/// Hourly forecasts routinely run past midnight, so one decrease is accepted
/// as the day rollover. After the rollover every sample must stay before the
/// first sample's time of day, keeping the window under 24 hours. Anything
/// else fails at the sample that broke the order.
pub fn check_ordering(samples: &[Sample]) -> Result<(), AnalysisError> {
    let Some(first) = samples.first() else {
        return Ok(());
    };
    let window_start = first.minute_of_day();
    let mut rolled_over = false;
    for (i, pair) in samples.windows(2).enumerate() {
        let (prev, cur) = (&pair[0], &pair[1]);
        let minute = cur.minute_of_day();
        let backwards = minute < prev.minute_of_day();
        let in_order = match (rolled_over, backwards) {
            (false, false) => true,
            (false, true) | (true, false) => minute < window_start,
            (true, true) => false,
        };
        if !in_order {
            return Err(AnalysisError::UnorderedInput {
                index: i + 1,
                previous: prev.time_label.clone(),
                current: cur.time_label.clone(),
            });
        }
        rolled_over |= backwards;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hours: &[u8]) -> Vec<Sample> {
        hours
            .iter()
            .map(|h| Sample::hourly(*h, 5.0, "K", 1.0))
            .collect()
    }

    #[test]
    fn ascending_and_repeated_hours_pass() {
        assert!(check_ordering(&at(&[10, 11, 11, 12])).is_ok());
        assert!(check_ordering(&[]).is_ok());
    }

    #[test]
    fn single_midnight_rollover_passes() {
        assert!(check_ordering(&at(&[22, 23, 0, 1])).is_ok());
    }

    #[test]
    fn second_decrease_fails() {
        let err = check_ordering(&at(&[22, 23, 0, 1, 0])).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnorderedInput {
                index: 4,
                previous: "01:00".into(),
                current: "00:00".into(),
            }
        );
    }

    #[test]
    fn mid_day_jump_back_fails() {
        let err = check_ordering(&at(&[10, 11, 12, 10, 11])).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnorderedInput {
                index: 3,
                previous: "12:00".into(),
                current: "10:00".into(),
            }
        );
    }

    #[test]
    fn window_may_not_run_past_a_full_day() {
        assert!(check_ordering(&at(&[20, 23, 2, 19])).is_ok());
        assert!(matches!(
            check_ordering(&at(&[20, 23, 2, 20])),
            Err(AnalysisError::UnorderedInput { index: 3, .. })
        ));
        assert!(check_ordering(&at(&[0, 12, 0])).is_err());
    }

    #[test]
    fn minutes_are_compared() {
        let samples = vec![
            Sample::new("10:30", 10, 30, 1.0, "K", 1.0),
            Sample::new("10:15", 10, 15, 1.0, "K", 1.0),
            Sample::new("10:05", 10, 5, 1.0, "K", 1.0),
        ];
        assert!(matches!(
            check_ordering(&samples),
            Err(AnalysisError::UnorderedInput { index: 2, .. })
        ));
    }
}
