mod helpers;

use helpers::*;
use redress_sla::SlaError;

// ========================================
// Degenerate and invalid spans
// ========================================

#[test]
fn test_zero_width_span_is_zero() {
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    let at = dt(2025, 6, 16, 11, 0);
    assert_eq!(calc.elapsed_business_hours(at, at).unwrap(), 0.0);
}

#[test]
fn test_inverted_span_is_rejected() {
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    let start = dt(2025, 6, 16, 11, 0);
    let end = dt(2025, 6, 16, 10, 0);
    assert!(matches!(
        calc.elapsed_business_hours(start, end),
        Err(SlaError::InvalidRange { .. })
    ));
}

// ========================================
// Single-day arithmetic
// ========================================

#[test]
fn test_same_day_inside_window_is_exact() {
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    // Monday 10:15 to 13:45 is exactly 3.5 working hours
    let elapsed = calc
        .elapsed_business_hours(dt(2025, 6, 16, 10, 15), dt(2025, 6, 16, 13, 45))
        .unwrap();
    assert_close(elapsed, 3.5);
}

#[test]
fn test_clips_to_window_start() {
    // Scenario: Mon-Sat 09:00-17:00, created Monday 08:00, resolved 10:00
    let cal = calendar(mon_sat_policy(), vec![]);
    let calc = calculator(&cal);
    let elapsed = calc
        .elapsed_business_hours(dt(2025, 6, 16, 8, 0), dt(2025, 6, 16, 10, 0))
        .unwrap();
    assert_close(elapsed, 1.0);
}

#[test]
fn test_clips_to_window_end() {
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    let elapsed = calc
        .elapsed_business_hours(dt(2025, 6, 16, 16, 0), dt(2025, 6, 16, 22, 30))
        .unwrap();
    assert_close(elapsed, 1.0);
}

#[test]
fn test_span_entirely_outside_window_is_zero() {
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    // Monday evening, after the window closed
    let elapsed = calc
        .elapsed_business_hours(dt(2025, 6, 16, 18, 0), dt(2025, 6, 16, 23, 0))
        .unwrap();
    assert_close(elapsed, 0.0);
}

// ========================================
// Non-working spans
// ========================================

#[test]
fn test_pure_weekend_span_is_zero() {
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    // 2025-06-14/15 are Saturday and Sunday
    let elapsed = calc
        .elapsed_business_hours(dt(2025, 6, 14, 8, 0), dt(2025, 6, 15, 20, 0))
        .unwrap();
    assert_close(elapsed, 0.0);
}

#[test]
fn test_holiday_day_contributes_nothing() {
    // Scenario: created on a declared holiday at 10:00, resolved 14:00
    let monday = date(2025, 6, 16);
    let cal = calendar(weekday_policy(), vec![holiday("Founders Day", monday)]);
    let calc = calculator(&cal);
    let elapsed = calc
        .elapsed_business_hours(dt(2025, 6, 16, 10, 0), dt(2025, 6, 16, 14, 0))
        .unwrap();
    assert_close(elapsed, 0.0);
}

// ========================================
// Multi-day spans
// ========================================

#[test]
fn test_weekend_gap_bridged() {
    // Friday 16:00 to Monday 10:00 with Mon-Fri working days:
    // 1h Friday (16:00-17:00) + 1h Monday (09:00-10:00)
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    let elapsed = calc
        .elapsed_business_hours(dt(2025, 6, 13, 16, 0), dt(2025, 6, 16, 10, 0))
        .unwrap();
    assert_close(elapsed, 2.0);
}

#[test]
fn test_interior_saturday_counts_under_mon_sat_policy() {
    // Same span under Mon-Sat: the interior Saturday contributes its
    // full 8-hour window
    let cal = calendar(mon_sat_policy(), vec![]);
    let calc = calculator(&cal);
    let elapsed = calc
        .elapsed_business_hours(dt(2025, 6, 13, 16, 0), dt(2025, 6, 16, 10, 0))
        .unwrap();
    assert_close(elapsed, 10.0);
}

#[test]
fn test_full_week_span() {
    // Monday 09:00 to Friday 17:00, five full working days
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    let elapsed = calc
        .elapsed_business_hours(dt(2025, 6, 16, 9, 0), dt(2025, 6, 20, 17, 0))
        .unwrap();
    assert_close(elapsed, 40.0);
}

#[test]
fn test_holiday_mid_span_excluded() {
    let wednesday = date(2025, 6, 18);
    let cal = calendar(weekday_policy(), vec![holiday("Mid-week holiday", wednesday)]);
    let calc = calculator(&cal);
    let elapsed = calc
        .elapsed_business_hours(dt(2025, 6, 16, 9, 0), dt(2025, 6, 20, 17, 0))
        .unwrap();
    assert_close(elapsed, 32.0);
}

// ========================================
// Result guarantees
// ========================================

#[test]
fn test_monotonic_in_end() {
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    let start = dt(2025, 6, 13, 16, 0);

    let mut previous = 0.0;
    // Walk the end forward in 6-hour steps across a week
    for step in 0..28 {
        let end = start + chrono::Duration::hours(6 * step);
        let elapsed = calc.elapsed_business_hours(start, end).unwrap();
        assert!(
            elapsed >= previous,
            "extending end decreased the result: {} -> {}",
            previous,
            elapsed
        );
        previous = elapsed;
    }
}

#[test]
fn test_monotonic_in_start() {
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    let end = dt(2025, 6, 20, 12, 0);

    let mut previous = f64::MAX;
    // Walk the start forward; moving start later never increases the result
    for step in 0..28 {
        let start = dt(2025, 6, 13, 12, 0) + chrono::Duration::hours(6 * step);
        if start > end {
            break;
        }
        let elapsed = calc.elapsed_business_hours(start, end).unwrap();
        assert!(elapsed <= previous);
        previous = elapsed;
    }
}

#[test]
fn test_bounded_by_days_times_daily_hours() {
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    let start = dt(2025, 6, 10, 0, 0);
    let end = dt(2025, 6, 19, 23, 59);
    let elapsed = calc.elapsed_business_hours(start, end).unwrap();
    let days_spanned = 10.0;
    assert!(elapsed <= days_spanned * cal.daily_working_hours());
}

#[test]
fn test_calendar_hours_independent_of_calendar() {
    let cal = calendar(weekday_policy(), vec![]);
    let calc = calculator(&cal);
    // A pure weekend span still has real wall-clock width
    let elapsed = calc
        .elapsed_calendar_hours(dt(2025, 6, 14, 8, 0), dt(2025, 6, 15, 8, 0))
        .unwrap();
    assert_close(elapsed, 24.0);
}
