//! Monthly trend over a six-month window.

use chrono::Datelike;
use serde::Serialize;

use crate::clock::Clock;
use crate::models::ExamRecord;

/// Number of calendar months in the trend window.
pub const TREND_WINDOW_MONTHS: usize = 6;

/// One month bucket of the trend chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    /// `M/YYYY`, month not zero-padded
    pub month: String,
    /// Every in-window record
    pub total: u32,
    /// `location` mentions PRONTO SOCORRO
    pub emergency: u32,
    /// `location` mentions SUS
    pub sus: u32,
    /// `location` mentions PARTICULAR
    pub private: u32,
}

/// Build the trend for the six calendar months ending at the clock's current
/// month, oldest first.
///
/// A record increments `total` plus at most one of the three category
/// counters, tested in `emergency` → `sus` → `private` order; categories
/// outside those three (INTERNADO, ALTA, ...) count toward `total` only.
/// Records dated outside the window, or whose date does not split into
/// `DD/MM/YYYY`, are silently dropped.
pub fn monthly_trend(records: &[ExamRecord], clock: &dyn Clock) -> Vec<MonthBucket> {
    let today = clock.today();
    let current = today.year() * 12 + today.month0() as i32;

    let mut buckets: Vec<MonthBucket> = Vec::with_capacity(TREND_WINDOW_MONTHS);
    for offset in (0..TREND_WINDOW_MONTHS as i32).rev() {
        let months = current - offset;
        let year = months.div_euclid(12);
        let month = months.rem_euclid(12) + 1;
        buckets.push(MonthBucket {
            month: format!("{month}/{year}"),
            ..MonthBucket::default()
        });
    }

    for record in records {
        let key = match month_key(&record.date) {
            Some(key) => key,
            None => continue,
        };
        let bucket = match buckets.iter_mut().find(|b| b.month == key) {
            Some(bucket) => bucket,
            None => continue,
        };
        bucket.total += 1;
        if record.location.contains("PRONTO SOCORRO") {
            bucket.emergency += 1;
        } else if record.location.contains("SUS") {
            bucket.sus += 1;
        } else if record.location.contains("PARTICULAR") {
            bucket.private += 1;
        }
    }

    buckets
}

/// `M/YYYY` key of a `DD/MM/YYYY` date string; the day is irrelevant here.
fn month_key(date: &str) -> Option<String> {
    let mut parts = date.split('/');
    let _day = parts.next()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year = parts.next()?;
    Some(format!("{month}/{year}"))
}
