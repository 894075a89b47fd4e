//! Batch pricing dispatcher
//!
//! Maps a whole vendor→price batch to vendor→charge. Each entry is
//! priced independently: a bad price or an unrecognized vendor turns
//! into the NaN sentinel for that entry and a diagnostic log line,
//! never into a failure of the batch.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{TariffError, TariffResult, Vendor};

/// Price a single vendor entry.
///
/// Resolves the vendor key in the fixed registry and applies its tier
/// schedule to the listed price.
pub fn charge_for(vendor: &str, price: f64) -> TariffResult<f64> {
    let vendor = Vendor::from_key(vendor)
        .ok_or_else(|| TariffError::UnknownVendor(vendor.to_string()))?;
    vendor.delivery_charge(price)
}

/// Compute delivery charges for an entire batch.
///
/// Total function: the returned map has exactly one entry per input
/// key, and this never fails as a whole. Entries that cannot be priced
/// come back as `f64::NAN`; the failure reason is only visible in the
/// logs. Entries are independent, so processing order does not matter.
pub fn compute_batch(prices: &HashMap<String, f64>) -> HashMap<String, f64> {
    prices
        .iter()
        .map(|(vendor, &price)| {
            let charge = match charge_for(vendor, price) {
                Ok(charge) => charge,
                Err(err) => {
                    warn!("Could not price entry '{}': {}", vendor, err);
                    f64::NAN
                }
            };
            (vendor.clone(), charge)
        })
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|(vendor, price)| (vendor.to_string(), *price))
            .collect()
    }

    #[test]
    fn apollo_low_band_includes_fixed_fees() {
        let costs = compute_batch(&batch(&[("apollopharmacy", 100.0)]));
        assert_eq!(costs["apollopharmacy"], 109.0); // 99 + 4 + 6
    }

    #[test]
    fn apollo_free_band_still_pays_fixed_fees() {
        let costs = compute_batch(&batch(&[("apollopharmacy", 260.0)]));
        assert_eq!(costs["apollopharmacy"], 10.0);
    }

    #[test]
    fn mrmed_inclusive_boundary() {
        let costs = compute_batch(&batch(&[("mrmed", 1500.0)]));
        assert_eq!(costs["mrmed"], 89.0);
        let costs = compute_batch(&batch(&[("mrmed", 1501.0)]));
        assert_eq!(costs["mrmed"], 59.0);
    }

    #[test]
    fn unknown_vendor_yields_nan() {
        let costs = compute_batch(&batch(&[("unknownvendor", 500.0)]));
        assert!(costs["unknownvendor"].is_nan());
    }

    #[test]
    fn invalid_price_yields_nan() {
        let costs = compute_batch(&batch(&[("medkart", 0.0)]));
        assert!(costs["medkart"].is_nan());
    }

    #[test]
    fn mixed_batch_entries_are_independent() {
        let costs = compute_batch(&batch(&[("truemeds", 399.0), ("truemeds2", 50.0)]));
        assert_eq!(costs["truemeds"], 39.0);
        assert!(costs["truemeds2"].is_nan());
    }

    #[test]
    fn empty_batch_yields_empty_result() {
        let costs = compute_batch(&HashMap::new());
        assert!(costs.is_empty());
    }

    #[test]
    fn output_keys_always_mirror_input_keys() {
        let prices = batch(&[
            ("apollopharmacy", 100.0),
            ("kauverymeds", 50.0),
            ("medkart", -3.0),
            ("mrmed", f64::NAN),
            ("netmeds", 0.0),
            ("pharmeasy", 1.0),
            ("tata1mg", 1e12),
            ("truemeds", 450.0),
            ("wellnessforever", 2.5),
            ("Apollopharmacy", 100.0), // wrong case: unknown
            ("", 10.0),
        ]);
        let costs = compute_batch(&prices);
        assert_eq!(costs.len(), prices.len());
        for key in prices.keys() {
            assert!(costs.contains_key(key), "missing output entry for '{key}'");
        }
    }

    #[test]
    fn nan_price_yields_sentinel_for_known_vendor() {
        let costs = compute_batch(&batch(&[("netmeds", f64::NAN)]));
        assert!(costs["netmeds"].is_nan());
    }

    #[test]
    fn charge_for_reports_failure_reason() {
        assert_eq!(
            charge_for("chemist-direct", 100.0),
            Err(TariffError::UnknownVendor("chemist-direct".into()))
        );
        assert_eq!(
            charge_for("netmeds", 0.5),
            Err(TariffError::InvalidPrice { price: 0.5 })
        );
    }

    #[test]
    fn every_registry_vendor_is_priceable_in_one_batch() {
        let prices: HashMap<String, f64> = Vendor::ALL
            .iter()
            .map(|v| (v.key().to_string(), 200.0))
            .collect();
        let costs = compute_batch(&prices);
        assert_eq!(costs.len(), 9);
        for (vendor, charge) in &costs {
            assert!(
                charge.is_finite() && *charge >= 0.0,
                "{vendor} did not produce a finite non-negative charge"
            );
        }
    }
}
