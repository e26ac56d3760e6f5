use chrono::NaiveDate;
use rust_tipps::dates::{
    diff_between_dates, to_full_german_string, to_full_us_string, to_iso_string,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn local_date_to_iso_string() {
    assert_eq!(to_iso_string(date(2025, 12, 31)), "2025-12-31");
}

#[test]
fn local_date_to_full_german_string() {
    assert_eq!(
        to_full_german_string(date(2019, 1, 22)),
        "Dienstag, 22. Januar 2019"
    );
}

#[test]
fn local_date_to_full_us_string() {
    assert_eq!(
        to_full_us_string(date(2022, 1, 5)),
        "Wednesday, January 5, 2022"
    );
}

#[test]
fn diff_between_equal_dates_is_zero() {
    let d = date(2020, 1, 1);
    assert_eq!(diff_between_dates(d, d), 0);
}

#[test]
fn diff_between_dates_counts_days() {
    assert_eq!(diff_between_dates(date(2020, 1, 1), date(2020, 1, 3)), 2);
}

#[test]
fn diff_between_dates_is_symmetric() {
    let a = date(2020, 1, 1);
    let b = date(2022, 1, 1);
    assert_eq!(diff_between_dates(a, b), 731);
    assert_eq!(diff_between_dates(b, a), 731);
}
