//! Date selection for date-family columns.

use chrono::{Days, NaiveDate};
use rand::Rng;

use seedgen_model::DateRange;

/// Date at proportion `proportion` of the way from `start` to `end`.
///
/// The bounds are placed on a linear day scale and the result is
/// `start + proportion * (end - start)`, truncated to a whole day.
/// Proportions outside `[0, 1)` are clamped; `start == end` always
/// yields `start`.
pub fn date_at_proportion(start: NaiveDate, end: NaiveDate, proportion: f64) -> NaiveDate {
    let span = end.signed_duration_since(start).num_days();
    if span <= 0 {
        return start;
    }
    let proportion = if proportion.is_nan() {
        0.0
    } else {
        proportion.clamp(0.0, 1.0)
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = (proportion * span as f64).floor() as u64;
    start.checked_add_days(Days::new(offset)).unwrap_or(end).min(end)
}

/// Draw a date from `range` at a uniform proportion.
pub fn random_date<R: Rng + ?Sized>(rng: &mut R, range: &DateRange) -> NaiveDate {
    let proportion: f64 = rng.r#gen();
    date_at_proportion(range.start(), range.end(), proportion)
}
