//! Charge calculation DTOs

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Request body for `POST /cost`
///
/// Keys are vendor registry keys (case-sensitive); values are listed
/// prices (MRP). Unknown keys are accepted and answered with `null`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PriceBatchRequest {
    /// Listed price per pharmacy vendor, e.g. `{"apollopharmacy": 240.0}`
    pub prices: HashMap<String, f64>,
}

/// Response body for `POST /cost`
///
/// Carries exactly one entry per requested vendor key.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChargeBatchResponse {
    /// Computed charge per vendor; `null` where the entry could not be priced
    #[serde(serialize_with = "charges_nan_as_null")]
    #[schema(value_type = HashMap<String, Option<f64>>)]
    pub delivery_costs: HashMap<String, f64>,
}

/// JSON has no NaN literal: the "unavailable" sentinel must encode as
/// `null` while real charges stay plain numbers. Done here explicitly
/// instead of relying on what the encoder happens to do with
/// non-finite floats.
fn charges_nan_as_null<S>(charges: &HashMap<String, f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(charges.len()))?;
    for (vendor, charge) in charges {
        if charge.is_nan() {
            map.serialize_entry(vendor, &None::<f64>)?;
        } else {
            map.serialize_entry(vendor, charge)?;
        }
    }
    map.end()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn nan_charge_serializes_as_null() {
        let mut delivery_costs = HashMap::new();
        delivery_costs.insert("truemeds".to_string(), 39.0);
        delivery_costs.insert("unknownvendor".to_string(), f64::NAN);

        let value = serde_json::to_value(ChargeBatchResponse { delivery_costs }).unwrap();
        assert_eq!(value["delivery_costs"]["truemeds"], json!(39.0));
        assert_eq!(value["delivery_costs"]["unknownvendor"], Value::Null);
    }

    #[test]
    fn zero_charge_is_a_number_not_null() {
        // a legitimate zero charge is distinct from the sentinel
        let mut delivery_costs = HashMap::new();
        delivery_costs.insert("wellnessforever".to_string(), 0.0);

        let value = serde_json::to_value(ChargeBatchResponse { delivery_costs }).unwrap();
        assert_eq!(value["delivery_costs"]["wellnessforever"], json!(0.0));
    }

    #[test]
    fn request_deserializes_arbitrary_keys() {
        let req: PriceBatchRequest =
            serde_json::from_value(json!({"prices": {"mrmed": 1500.0, "somebody": -4.0}})).unwrap();
        assert_eq!(req.prices.len(), 2);
        assert_eq!(req.prices["mrmed"], 1500.0);
        assert_eq!(req.prices["somebody"], -4.0);
    }

    #[test]
    fn request_with_empty_prices_is_valid() {
        let req: PriceBatchRequest = serde_json::from_value(json!({"prices": {}})).unwrap();
        assert!(req.prices.is_empty());
    }
}
