use super::config::PricingConfig;
use super::CostBreakdown;
use serde::{Deserialize, Serialize};

/// One of the three independently priced packages offered on a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStrategy {
    Main,
    Option1,
    Option2,
}

impl QuoteStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Main => "Fully itemized renovation",
            Self::Option1 => "Total renovation, simpler form",
            Self::Option2 => "Total renovation with water-heated floor",
        }
    }
}

/// Priced outcome for one strategy. Amounts are plain SEK numbers; any
/// currency formatting happens in the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub strategy: QuoteStrategy,
    pub labor_before_discount: f64,
    pub material_before_discount: f64,
    pub other_before_discount: f64,
    pub discount_per_category: f64,
    pub labor_after_discount: f64,
    pub material_after_discount: f64,
    pub other_after_discount: f64,
    pub tax_deduction: f64,
    pub labor_payable: f64,
    pub material_payable: f64,
    pub other_payable: f64,
    pub total_payable: f64,
}

impl QuoteRecord {
    /// Applies the discount and tax-deduction formula shared by every
    /// strategy. All three records are built here so the packages cannot
    /// drift apart.
    ///
    /// The flat discount is applied unconditionally and may push a
    /// category negative; nothing downstream clamps it. The deduction is
    /// 30% of labor after discount, capped, never below zero.
    pub(crate) fn from_totals(
        strategy: QuoteStrategy,
        totals: CostBreakdown,
        config: &PricingConfig,
    ) -> Self {
        let labor_after_discount = totals.labor - config.discount_per_category;
        let material_after_discount = totals.material - config.discount_per_category;
        let other_after_discount = totals.other - config.discount_per_category;

        let tax_deduction = (labor_after_discount * config.tax_deduction_rate)
            .min(config.tax_deduction_cap)
            .max(0.0);

        let labor_payable = labor_after_discount - tax_deduction;
        let material_payable = material_after_discount;
        let other_payable = other_after_discount;

        Self {
            strategy,
            labor_before_discount: totals.labor,
            material_before_discount: totals.material,
            other_before_discount: totals.other,
            discount_per_category: config.discount_per_category,
            labor_after_discount,
            material_after_discount,
            other_after_discount,
            tax_deduction,
            labor_payable,
            material_payable,
            other_payable,
            total_payable: labor_payable + material_payable + other_payable,
        }
    }
}

/// The three records produced by a single pricing run. Superseded
/// wholesale by the next run; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSet {
    pub main: QuoteRecord,
    pub option1: QuoteRecord,
    pub option2: QuoteRecord,
}

impl QuoteSet {
    pub fn records(&self) -> [&QuoteRecord; 3] {
        [&self.main, &self.option1, &self.option2]
    }
}
