//! Delivery-cost calculation endpoint

use axum::Json;
use tracing::info;

use crate::api::dto::{ChargeBatchResponse, PriceBatchRequest};
use crate::application::pricing;

/// Calculate delivery costs for all provided pharmacies
///
/// Prices every entry of the batch independently. Unknown vendor keys
/// and invalid prices come back as `null` for that key only; the rest
/// of the batch is unaffected, so the endpoint itself never fails on
/// bad entries.
#[utoipa::path(
    post,
    path = "/cost",
    tag = "Charges",
    request_body = PriceBatchRequest,
    responses(
        (status = 200, description = "Delivery charge per requested vendor", body = ChargeBatchResponse),
        (status = 422, description = "Malformed request body")
    )
)]
pub async fn calculate_costs(Json(req): Json<PriceBatchRequest>) -> Json<ChargeBatchResponse> {
    info!(
        "Path /cost: processing delivery costs for {} pharmacy entries",
        req.prices.len()
    );

    let delivery_costs = pricing::compute_batch(&req.prices);

    Json(ChargeBatchResponse { delivery_costs })
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    async fn call(prices: HashMap<String, f64>) -> ChargeBatchResponse {
        let Json(resp) = calculate_costs(Json(PriceBatchRequest { prices })).await;
        resp
    }

    #[tokio::test]
    async fn response_mirrors_request_keys() {
        let mut prices = HashMap::new();
        prices.insert("apollopharmacy".to_string(), 100.0);
        prices.insert("nosuchvendor".to_string(), 100.0);

        let resp = call(prices).await;
        assert_eq!(resp.delivery_costs.len(), 2);
        assert_eq!(resp.delivery_costs["apollopharmacy"], 109.0);
        assert!(resp.delivery_costs["nosuchvendor"].is_nan());
    }

    #[tokio::test]
    async fn empty_batch_is_accepted() {
        let resp = call(HashMap::new()).await;
        assert!(resp.delivery_costs.is_empty());
    }
}
