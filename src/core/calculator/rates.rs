use chrono::NaiveDate;

/// Quantity per head. Zero or missing head count → `None`.
pub fn production_rate(quantity: Option<f64>, head_count: Option<u32>) -> Option<f64> {
    match (quantity, head_count) {
        (Some(q), Some(h)) if h > 0 => Some(q / h as f64),
        _ => None,
    }
}

/// Weight gained per day over `from..sale_date`.
///
/// Only defined when the sale date lies strictly after `from`.
pub fn weight_gain_rate(
    weight_gain: Option<f64>,
    from: NaiveDate,
    sale_date: Option<NaiveDate>,
) -> Option<f64> {
    let gain = weight_gain?;
    let days = (sale_date? - from).num_days();
    if days <= 0 {
        return None;
    }
    Some(gain / days as f64)
}
