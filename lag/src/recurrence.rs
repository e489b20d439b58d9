//! The lag recurrence
//!
//! Lag is positive after moving east and negative after moving west, one
//! unit per zone crossed. Every full day spent without changing zone works
//! one unit off, never past zero. The day of a zone change only counts once
//! the team has stayed put for a day after it.

use crate::domain::ZoneOffset;

/// Compute the new lag for a team moving from `zone_prev` to `zone_new`
///
/// `days_delta` is the number of calendar days since the team's previous
/// game: 0 within a double header, 1 for consecutive days. Any integers are
/// accepted, including lags no real schedule could produce; arithmetic
/// saturates at the `i64` bounds instead of overflowing.
pub fn compute_lag(lag_prev: i64, days_delta: i64, zone_prev: i64, zone_new: i64) -> i64 {
    let lag_new = lag_prev.saturating_add(zone_prev).saturating_sub(zone_new);

    let decay_days = if zone_prev == zone_new {
        days_delta.max(0)
    } else {
        days_delta.saturating_sub(1).max(0)
    };

    if lag_new == 0 || decay_days.unsigned_abs() >= lag_new.unsigned_abs() {
        0
    } else if lag_new > 0 {
        lag_new - decay_days
    } else {
        lag_new + decay_days
    }
}

/// [`compute_lag`] over typed zones
pub fn lag_between(lag_prev: i64, days_delta: i64, zone_prev: ZoneOffset, zone_new: ZoneOffset) -> i64 {
    compute_lag(lag_prev, days_delta, zone_prev.ordinal(), zone_new.ordinal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // rows = from, columns = to
    //
    //                 ET  CT  MT  PT
    const ZONE_DIFF: [[i64; 4]; 4] = [
        [0, -1, -2, -3],
        [1, 0, -1, -2],
        [2, 1, 0, -1],
        [3, 2, 1, 0],
    ];

    #[test]
    fn test_one_day_between_zones() {
        for zone_prev in 0..4 {
            for zone_new in 0..4 {
                let expected = if zone_prev == zone_new {
                    0
                } else {
                    ZONE_DIFF[zone_prev as usize][zone_new as usize]
                };
                assert_eq!(
                    compute_lag(0, 1, zone_prev, zone_new),
                    expected,
                    "{} -> {}",
                    zone_prev,
                    zone_new
                );
            }
        }
    }

    #[test]
    fn test_vary_lag_prev() {
        // ET -> PT
        assert_eq!(compute_lag(0, 1, 0, 3), -3);
        assert_eq!(compute_lag(1, 1, 0, 3), -2);
        assert_eq!(compute_lag(-1, 1, 0, 3), -4);

        // PT -> CT
        assert_eq!(compute_lag(0, 1, 3, 1), 2);
        assert_eq!(compute_lag(1, 1, 3, 1), 3);
        assert_eq!(compute_lag(-1, 1, 3, 1), 1);
    }

    #[test]
    fn test_unrealistic_lag_prev_accepted() {
        assert_eq!(compute_lag(100, 1, 0, 3), 97);
        assert_eq!(compute_lag(-100, 1, 0, 3), -103);
        assert_eq!(compute_lag(100, 1, 3, 1), 102);
        assert_eq!(compute_lag(-100, 1, 3, 1), -98);
    }

    #[test]
    fn test_vary_days_delta() {
        assert_eq!(compute_lag(3, 3, 0, 0), 0);
        assert_eq!(compute_lag(3, 2, 0, 0), 1);
        assert_eq!(compute_lag(-3, 2, 0, 0), -1);

        assert_eq!(compute_lag(0, 3, 1, 1), 0);
        assert_eq!(compute_lag(2, 5, 1, 1), 0);
    }

    #[test]
    fn test_travel_day_does_not_decay() {
        assert_eq!(compute_lag(0, 0, 0, 3), -3);
        assert_eq!(compute_lag(0, 0, 3, 1), 2);
        assert_eq!(compute_lag(0, 1, 0, 3), -3);
        assert_eq!(compute_lag(0, 1, 3, 1), 2);

        // Days off after the travel day do.
        assert_eq!(compute_lag(0, 2, 0, 3), -2);
        assert_eq!(compute_lag(0, 2, 3, 1), 1);
    }

    #[test]
    fn test_negative_days_delta_does_not_grow_lag() {
        assert_eq!(compute_lag(2, -4, 0, 0), 2);
        assert_eq!(compute_lag(0, -4, 0, 3), -3);
    }

    #[test]
    fn test_extremes_saturate() {
        assert_eq!(compute_lag(i64::MAX, 0, 3, 0), i64::MAX);
        assert_eq!(compute_lag(i64::MIN, 0, 0, 3), i64::MIN);
        assert_eq!(compute_lag(i64::MIN + 1, i64::MAX, 0, 0), 0);
    }

    #[test]
    fn test_lag_between_other_zone() {
        assert_eq!(lag_between(0, 1, ZoneOffset::Pacific, ZoneOffset::Other), -3);
        assert_eq!(lag_between(0, 1, ZoneOffset::Other, ZoneOffset::Eastern), 6);
    }

    proptest! {
        #[test]
        fn test_rest_in_same_zone_is_zero(days in 0i64..400, zone in 0i64..7) {
            prop_assert_eq!(compute_lag(0, days, zone, zone), 0);
        }

        #[test]
        fn test_one_day_move_has_no_decay(zone_prev in 0i64..4, zone_new in 0i64..4) {
            prop_assume!(zone_prev != zone_new);
            prop_assert_eq!(compute_lag(0, 1, zone_prev, zone_new), zone_prev - zone_new);
        }

        #[test]
        fn test_decay_never_overshoots(
            lag_prev in -1000i64..1000,
            days in 0i64..400,
            zone_prev in 0i64..7,
            zone_new in 0i64..7,
        ) {
            let lag_new = lag_prev + zone_prev - zone_new;
            let result = compute_lag(lag_prev, days, zone_prev, zone_new);

            prop_assert!(result == 0 || result.signum() == lag_new.signum());
            prop_assert!(result.abs() <= lag_new.abs());
        }

        #[test]
        fn test_more_rest_never_increases_lag(
            lag_prev in -50i64..50,
            days in 0i64..60,
            zone_prev in 0i64..4,
            zone_new in 0i64..4,
        ) {
            let rested = compute_lag(lag_prev, days + 1, zone_prev, zone_new);
            let tired = compute_lag(lag_prev, days, zone_prev, zone_new);
            prop_assert!(rested.abs() <= tired.abs());
        }
    }
}
