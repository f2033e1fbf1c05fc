use super::CostBreakdown;
use serde::{Deserialize, Serialize};

/// Tariff for a flat-rate package: fixed base amounts per category plus
/// linear floor-area scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BundleTariff {
    pub labor_base: f64,
    pub material_base: f64,
    pub other_base: f64,
    pub labor_per_m2: f64,
    pub material_per_m2: f64,
    pub other_per_m2: f64,
}

impl BundleTariff {
    pub(crate) fn totals(&self, floor_area: f64) -> CostBreakdown {
        CostBreakdown {
            labor: self.labor_base + floor_area * self.labor_per_m2,
            material: self.material_base + floor_area * self.material_per_m2,
            other: self.other_base + floor_area * self.other_per_m2,
        }
    }
}

/// Pricing policy shared by all three strategies: the flat per-category
/// discount, the labor tax-deduction formula, and the two bundle
/// tariffs. The structured cost rules themselves are not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub discount_per_category: f64,
    pub tax_deduction_rate: f64,
    pub tax_deduction_cap: f64,
    pub simple_renovation: BundleTariff,
    pub heated_floor_upgrade: BundleTariff,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            discount_per_category: 1_000.0,
            tax_deduction_rate: 0.30,
            tax_deduction_cap: 50_000.0,
            simple_renovation: BundleTariff {
                labor_base: 24_500.0,
                material_base: 20_000.0,
                other_base: 4_000.0,
                labor_per_m2: 800.0,
                material_per_m2: 1_500.0,
                other_per_m2: 150.0,
            },
            heated_floor_upgrade: BundleTariff {
                labor_base: 38_500.0,
                material_base: 30_000.0,
                other_base: 6_000.0,
                labor_per_m2: 1_200.0,
                material_per_m2: 2_500.0,
                other_per_m2: 250.0,
            },
        }
    }
}
