use crate::repositories::profile_repository::next_updated_at;

use chrono::{TimeDelta, TimeZone, Utc};

#[test]
fn given_clock_ahead_of_previous_when_stamping_then_uses_now() {
    let previous = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
    let now = previous + TimeDelta::seconds(5);

    assert_eq!(next_updated_at(Some(previous), now), now);
}

#[test]
fn given_clock_not_advanced_when_stamping_then_one_microsecond_later() {
    let previous = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();

    let stamped = next_updated_at(Some(previous), previous);

    assert_eq!(stamped, previous + TimeDelta::microseconds(1));
}

#[test]
fn given_clock_behind_previous_when_stamping_then_still_strictly_later() {
    let previous = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
    let now = previous - TimeDelta::seconds(30);

    assert!(next_updated_at(Some(previous), now) > previous);
}

#[test]
fn given_no_previous_when_stamping_then_uses_now() {
    let now = Utc::now();

    assert_eq!(next_updated_at(None, now), now);
}
