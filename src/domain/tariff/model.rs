//! Tariff domain entity
//!
//! One fixed tier schedule per pharmacy vendor. Schedules are business
//! constants: they are not configurable at runtime and never consult
//! anything beyond the listed price handed to them.

use std::fmt;

use crate::domain::error::{TariffError, TariffResult};

/// Minimum listed price (MRP) for which any tier schedule applies.
pub const MIN_PRICE: f64 = 1.0;

/// The fixed set of supported pharmacy vendors.
///
/// Each vendor is identified by the case-sensitive key used in request
/// batches (`"apollopharmacy"`, `"mrmed"`, ...) and carries its own
/// tier schedule. The set is closed: adding a vendor means adding a
/// variant here plus its arms in `base_charge` and `fixed_fees`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    ApolloPharmacy,
    KauveryMeds,
    Medkart,
    MrMed,
    Netmeds,
    PharmEasy,
    Tata1mg,
    Truemeds,
    WellnessForever,
}

impl Vendor {
    /// Every supported vendor, in registry-key order.
    pub const ALL: [Vendor; 9] = [
        Vendor::ApolloPharmacy,
        Vendor::KauveryMeds,
        Vendor::Medkart,
        Vendor::MrMed,
        Vendor::Netmeds,
        Vendor::PharmEasy,
        Vendor::Tata1mg,
        Vendor::Truemeds,
        Vendor::WellnessForever,
    ];

    /// Look up a vendor by its registry key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Vendor> {
        match key {
            "apollopharmacy" => Some(Vendor::ApolloPharmacy),
            "kauverymeds" => Some(Vendor::KauveryMeds),
            "medkart" => Some(Vendor::Medkart),
            "mrmed" => Some(Vendor::MrMed),
            "netmeds" => Some(Vendor::Netmeds),
            "pharmeasy" => Some(Vendor::PharmEasy),
            "tata1mg" => Some(Vendor::Tata1mg),
            "truemeds" => Some(Vendor::Truemeds),
            "wellnessforever" => Some(Vendor::WellnessForever),
            _ => None,
        }
    }

    /// The registry key for this vendor.
    pub fn key(&self) -> &'static str {
        match self {
            Vendor::ApolloPharmacy => "apollopharmacy",
            Vendor::KauveryMeds => "kauverymeds",
            Vendor::Medkart => "medkart",
            Vendor::MrMed => "mrmed",
            Vendor::Netmeds => "netmeds",
            Vendor::PharmEasy => "pharmeasy",
            Vendor::Tata1mg => "tata1mg",
            Vendor::Truemeds => "truemeds",
            Vendor::WellnessForever => "wellnessforever",
        }
    }

    /// Total hidden/delivery charge for a listed price.
    ///
    /// # Arguments
    /// * `price` - listed product price (MRP), must be ≥ 1
    ///
    /// # Returns
    /// Base tier charge plus the vendor's fixed fees, or
    /// [`TariffError::InvalidPrice`] for prices below the minimum.
    pub fn delivery_charge(&self, price: f64) -> TariffResult<f64> {
        // `!(>=)` instead of `<` so that a NaN price is rejected too
        if !(price >= MIN_PRICE) {
            return Err(TariffError::InvalidPrice { price });
        }
        Ok(self.base_charge(price) + self.fixed_fees())
    }

    /// Base hidden cost from the vendor's tier schedule.
    ///
    /// Bands are disjoint and cover all of `[1, ∞)`, so exactly one
    /// arm matches for any valid price. Whether a boundary price falls
    /// in the lower or upper band (`<` vs `<=`) differs per vendor and
    /// is part of each schedule.
    fn base_charge(&self, price: f64) -> f64 {
        match self {
            Vendor::ApolloPharmacy => {
                if price < 150.0 {
                    99.0
                } else if price < 250.0 {
                    79.0
                } else if price < 300.0 {
                    29.0
                } else {
                    0.0
                }
            }
            // Flat schedules: one band regardless of price.
            Vendor::KauveryMeds => 75.0,
            Vendor::Medkart => 59.0,
            Vendor::MrMed => {
                if price <= 1500.0 {
                    89.0
                } else if price < 1700.0 {
                    59.0
                } else if price < 2000.0 {
                    39.0
                } else {
                    0.0
                }
            }
            Vendor::Netmeds => {
                if price <= 250.0 {
                    69.0
                } else if price <= 350.0 {
                    49.0
                } else {
                    0.0
                }
            }
            Vendor::PharmEasy => {
                if price < 300.0 {
                    99.0
                } else if price < 350.0 {
                    75.0
                } else {
                    0.0
                }
            }
            Vendor::Tata1mg => {
                if price < 100.0 {
                    79.0
                } else if price < 200.0 {
                    75.0
                } else {
                    0.0
                }
            }
            Vendor::Truemeds => {
                if price < 400.0 {
                    39.0
                } else if price < 500.0 {
                    29.0
                } else {
                    0.0
                }
            }
            Vendor::WellnessForever => {
                if price < 1000.0 {
                    50.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Fixed per-order fees charged on top of every band, including the
    /// free-delivery band.
    fn fixed_fees(&self) -> f64 {
        match self {
            Vendor::ApolloPharmacy => 4.0 + 6.0, // platform + handling
            Vendor::PharmEasy => 7.0,            // platform
            Vendor::Tata1mg => 4.0,              // platform
            _ => 0.0,
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ── Tests ──────────────────────────────────────────────────────
