/// Sale price minus market price; `None` when either side is missing.
pub fn profit(sale_price: Option<f64>, market_price: Option<f64>) -> Option<f64> {
    match (sale_price, market_price) {
        (Some(sale), Some(market)) if sale.is_finite() && market.is_finite() => Some(sale - market),
        _ => None,
    }
}
