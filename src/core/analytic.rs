use crate::domain::model::DAYS_IN_YEAR;

/// Exact probability that at least two of `group_size` uniform birthdays match.
pub fn exact_collision_probability(group_size: usize) -> f64 {
    let days = usize::from(DAYS_IN_YEAR);
    if group_size <= 1 {
        return 0.0;
    }
    if group_size > days {
        return 1.0;
    }

    let all_distinct: f64 = (0..group_size)
        .map(|i| (days - i) as f64 / days as f64)
        .product();
    1.0 - all_distinct
}
