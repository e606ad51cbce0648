//! Behavior of the occurrence iterator: bounds, calendar edge cases,
//! laziness, and integration with std::iter combinators.

use cronrule::CronExpression;
use jiff::civil::{date, DateTime};

fn dt(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> DateTime {
    date(year, month, day).at(hour, minute, 0, 0)
}

fn expr(s: &str) -> CronExpression {
    CronExpression::parse(s).expect("valid cron expression")
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn mondays_at_half_past_ten() {
    let results: Vec<_> = expr("30 10 * * 1")
        .between(dt(2024, 1, 1, 0, 0), dt(2024, 1, 15, 23, 59))
        .collect();

    assert_eq!(
        results,
        vec![
            dt(2024, 1, 1, 10, 30),
            dt(2024, 1, 8, 10, 30),
            dt(2024, 1, 15, 10, 30),
        ]
    );
}

#[test]
fn business_hour_quarters_on_a_weekday() {
    // 2024-01-03 is a Wednesday
    let results: Vec<_> = expr("*/15 9-17 * * 1-5")
        .between(dt(2024, 1, 3, 0, 0), dt(2024, 1, 3, 23, 59))
        .collect();

    assert_eq!(results.len(), 9 * 4);
    assert_eq!(results.first(), Some(&dt(2024, 1, 3, 9, 0)));
    assert_eq!(results.last(), Some(&dt(2024, 1, 3, 17, 45)));
}

#[test]
fn business_hour_quarters_skip_the_weekend() {
    // Saturday 2024-01-06 through Sunday 2024-01-07
    let count = expr("*/15 9-17 * * 1-5")
        .between(dt(2024, 1, 6, 0, 0), dt(2024, 1, 7, 23, 59))
        .count();
    assert_eq!(count, 0);

    let next = expr("*/15 9-17 * * 1-5").next_after(dt(2024, 1, 6, 0, 0));
    assert_eq!(next, Some(dt(2024, 1, 8, 9, 0)));
}

// =============================================================================
// Calendar edge cases
// =============================================================================

#[test]
fn day_31_only_fires_in_long_months() {
    let results: Vec<_> = expr("0 0 31 * *")
        .between(dt(2024, 1, 1, 0, 0), dt(2024, 12, 31, 23, 59))
        .collect();

    assert_eq!(
        results,
        vec![
            dt(2024, 1, 31, 0, 0),
            dt(2024, 3, 31, 0, 0),
            dt(2024, 5, 31, 0, 0),
            dt(2024, 7, 31, 0, 0),
            dt(2024, 8, 31, 0, 0),
            dt(2024, 10, 31, 0, 0),
            dt(2024, 12, 31, 0, 0),
        ]
    );
}

#[test]
fn february_29_only_in_leap_years() {
    let results: Vec<_> = expr("0 0 29 2 *")
        .between(dt(2023, 1, 1, 0, 0), dt(2030, 12, 31, 23, 59))
        .collect();

    assert_eq!(results, vec![dt(2024, 2, 29, 0, 0), dt(2028, 2, 29, 0, 0)]);
}

#[test]
fn century_rule_for_leap_years() {
    // 2100 is not a leap year, 2000 is
    let results: Vec<_> = expr("0 0 29 2 *")
        .between(dt(2096, 3, 1, 0, 0), dt(2104, 3, 1, 0, 0))
        .collect();
    assert_eq!(results, vec![dt(2104, 2, 29, 0, 0)]);

    let y2k = expr("0 0 29 2 *").next_after(dt(1999, 6, 1, 0, 0));
    assert_eq!(y2k, Some(dt(2000, 2, 29, 0, 0)));
}

#[test]
fn day_of_month_and_weekday_are_conjunctive() {
    // Friday the 13th
    let results: Vec<_> = expr("0 0 13 * fri")
        .between(dt(2024, 1, 1, 0, 0), dt(2024, 12, 31, 23, 59))
        .collect();

    assert_eq!(results, vec![dt(2024, 9, 13, 0, 0), dt(2024, 12, 13, 0, 0)]);
}

#[test]
fn month_steps_jump_between_quarters() {
    let results: Vec<_> = expr("0 0 1 */3 *")
        .between(dt(2024, 1, 1, 0, 0), dt(2024, 12, 31, 23, 59))
        .collect();

    assert_eq!(
        results,
        vec![
            dt(2024, 1, 1, 0, 0),
            dt(2024, 4, 1, 0, 0),
            dt(2024, 7, 1, 0, 0),
            dt(2024, 10, 1, 0, 0),
        ]
    );
}

#[test]
fn yearly_rule_over_a_decade() {
    let results: Vec<_> = expr("0 0 1 1 *")
        .between(dt(2024, 1, 1, 0, 0), dt(2033, 12, 31, 23, 59))
        .collect();

    assert_eq!(results.len(), 10);
    assert!(results
        .iter()
        .zip(2024..)
        .all(|(occ, year)| *occ == dt(year, 1, 1, 0, 0)));
}

#[test]
fn unsatisfiable_expression_ends_instead_of_hanging() {
    assert_eq!(expr("0 0 30 2 *").occurrences(dt(2024, 1, 1, 0, 0)).next(), None);
    assert_eq!(expr("0 0 31 4,6,9,11 *").next_after(dt(2024, 1, 1, 0, 0)), None);
}

#[test]
fn end_of_supported_calendar_ends_the_sequence() {
    let results: Vec<_> = expr("* * * * *")
        .occurrences(dt(9999, 12, 31, 23, 58))
        .collect();
    assert_eq!(
        results,
        vec![dt(9999, 12, 31, 23, 58), dt(9999, 12, 31, 23, 59)]
    );
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn end_before_first_occurrence_is_empty() {
    let count = expr("0 12 * * *")
        .between(dt(2024, 1, 1, 0, 0), dt(2024, 1, 1, 11, 59))
        .count();
    assert_eq!(count, 0);
}

#[test]
fn end_equal_to_an_occurrence_includes_it() {
    let results: Vec<_> = expr("0 12 * * *")
        .between(dt(2024, 1, 1, 0, 0), dt(2024, 1, 1, 12, 0))
        .collect();
    assert_eq!(results, vec![dt(2024, 1, 1, 12, 0)]);
}

#[test]
fn start_is_inclusive_after_truncation() {
    let e = expr("0 12 * * *");
    let start = date(2024, 1, 1).at(12, 0, 30, 500);
    assert_eq!(e.occurrences(start).next(), Some(dt(2024, 1, 1, 12, 0)));
}

#[test]
fn end_before_start_is_empty() {
    let count = expr("* * * * *")
        .between(dt(2024, 1, 2, 0, 0), dt(2024, 1, 1, 0, 0))
        .count();
    assert_eq!(count, 0);
}

#[test]
fn every_minute_over_an_hour() {
    let results: Vec<_> = expr("* * * * *")
        .between(dt(2024, 1, 1, 10, 0), dt(2024, 1, 1, 11, 0))
        .collect();
    assert_eq!(results.len(), 61);
}

// =============================================================================
// Laziness, restartability, combinators
// =============================================================================

#[test]
fn unbounded_sequence_is_lazy() {
    let first: Vec<_> = expr("* * * * *")
        .occurrences(dt(2024, 1, 1, 0, 0))
        .take(3)
        .collect();
    assert_eq!(
        first,
        vec![dt(2024, 1, 1, 0, 0), dt(2024, 1, 1, 0, 1), dt(2024, 1, 1, 0, 2)]
    );
}

#[test]
fn each_call_yields_an_independent_sequence() {
    let e = expr("0 */6 * * *");
    let start = dt(2024, 1, 1, 0, 0);

    let mut first = e.occurrences(start);
    first.next();
    first.next();

    let fresh: Vec<_> = e.occurrences(start).take(2).collect();
    assert_eq!(fresh, vec![dt(2024, 1, 1, 0, 0), dt(2024, 1, 1, 6, 0)]);

    // A clone continues from the same position as the original
    let snapshot = first.clone();
    assert_eq!(first.next(), Some(dt(2024, 1, 1, 12, 0)));
    assert_eq!(snapshot.take(1).next(), Some(dt(2024, 1, 1, 12, 0)));
}

#[test]
fn iterator_is_fused() {
    let mut iter =
        expr("0 12 * * *").between(dt(2024, 1, 1, 0, 0), dt(2024, 1, 1, 23, 59));
    assert_eq!(iter.next(), Some(dt(2024, 1, 1, 12, 0)));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn works_with_skip_and_take() {
    let days: Vec<i8> = expr("0 9 * * *")
        .occurrences(dt(2024, 2, 1, 0, 0))
        .skip(5)
        .take(3)
        .map(|occ| occ.day())
        .collect();
    assert_eq!(days, vec![6, 7, 8]);
}

#[test]
fn works_with_take_while_for_pagination() {
    let cutoff = dt(2024, 2, 5, 0, 0);
    let count = expr("0 9 * * *")
        .occurrences(dt(2024, 2, 1, 0, 0))
        .take_while(|occ| *occ < cutoff)
        .count();
    assert_eq!(count, 4);
}

#[test]
fn works_with_last() {
    let last = expr("0 9 * * *")
        .between(dt(2024, 2, 1, 0, 0), dt(2024, 2, 29, 23, 59))
        .last();
    assert_eq!(last, Some(dt(2024, 2, 29, 9, 0)));
}

// =============================================================================
// next_after / matches
// =============================================================================

#[test]
fn next_after_is_strictly_after() {
    let e = expr("0 9 * * *");
    assert_eq!(e.next_after(dt(2024, 1, 1, 9, 0)), Some(dt(2024, 1, 2, 9, 0)));
    assert_eq!(
        e.next_after(date(2024, 1, 1).at(8, 59, 59, 0)),
        Some(dt(2024, 1, 1, 9, 0))
    );
}

#[test]
fn next_n_after_pages_forward() {
    let page = expr("0 0 1 * *").next_n_after(dt(2024, 1, 15, 0, 0), 3);
    assert_eq!(
        page,
        vec![dt(2024, 2, 1, 0, 0), dt(2024, 3, 1, 0, 0), dt(2024, 4, 1, 0, 0)]
    );
    let next_page = expr("0 0 1 * *").next_n_after(page[2], 1);
    assert_eq!(next_page, vec![dt(2024, 5, 1, 0, 0)]);
}

#[test]
fn matches_ignores_seconds() {
    let e = expr("30 10 * * mon");
    assert!(e.matches(date(2024, 1, 1).at(10, 30, 45, 0)));
    assert!(!e.matches(dt(2024, 1, 2, 10, 30)));
}
