use chrono::NaiveDate;
use currencyfreaks_client::utils::date::expand_date_range;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn inclusive_three_day_range() {
    let days = expand_date_range(day(2024, 1, 1), day(2024, 1, 3));
    assert_eq!(
        days,
        vec![day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 3)]
    );
}

#[test]
fn single_day_range() {
    let days = expand_date_range(day(2024, 1, 1), day(2024, 1, 1));
    assert_eq!(days, vec![day(2024, 1, 1)]);
}

#[test]
fn reversed_range_is_empty() {
    let days = expand_date_range(day(2024, 1, 3), day(2024, 1, 1));
    assert!(days.is_empty());
}

#[test]
fn range_crosses_month_boundary() {
    let days = expand_date_range(day(2024, 2, 28), day(2024, 3, 1));
    // 2024 is a leap year
    assert_eq!(
        days,
        vec![day(2024, 2, 28), day(2024, 2, 29), day(2024, 3, 1)]
    );
}
