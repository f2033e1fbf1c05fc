mod config;
mod domain;
mod extras;
mod quote;
mod rules;

pub use config::{BundleTariff, PricingConfig};
pub use domain::{
    Appliances, BathroomDetails, CostCategory, DwellingType, ElevatorSize, ExtraItem,
    FuseboxDistance, InteriorFittings, JunctionBoxDistance, ParkingDistance, PersonalDetails,
    ProjectInput, Season, ShowerDrain, TilesAndPainting, TransportPossibility,
};
pub use extras::{classify, ExtrasCsvImporter, ExtrasImportError};
pub use quote::{QuoteRecord, QuoteSet, QuoteStrategy};

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Partial cost contribution from a single rule, split by category.
/// Categories a rule does not touch stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub labor: f64,
    pub material: f64,
    pub other: f64,
}

impl Add for CostBreakdown {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            labor: self.labor + rhs.labor,
            material: self.material + rhs.material,
            other: self.other + rhs.other,
        }
    }
}

impl AddAssign for CostBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Stateless pricing engine. Holds only the policy configuration; every
/// call prices one immutable input snapshot to completion.
///
/// The computation is pure and infallible: pricing the same snapshot
/// twice yields identical records, and malformed input is impossible by
/// construction (absent fields already degraded to the baseline during
/// deserialization).
pub struct QuoteEngine {
    config: PricingConfig,
}

impl QuoteEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Prices the snapshot under all three strategies.
    pub fn quote(&self, input: &ProjectInput) -> QuoteSet {
        let extras = extras::extra_items_cost(&input.extra_items);

        let itemized = rules::season(input)
            + rules::general_conditions(input)
            + rules::accessibility(input)
            + rules::floor_protection(input)
            + rules::base_dimensions(input)
            + rules::layout_modification(input)
            + rules::plumbing(input)
            + rules::electrical(input)
            + rules::fixtures(input)
            + rules::tiling_and_painting(input)
            + rules::waste_and_cleanup(input)
            + extras;

        let floor_area = input.bathroom_details.floor_area();
        let option1 = self.config.simple_renovation.totals(floor_area) + extras;
        let option2 = self.config.heated_floor_upgrade.totals(floor_area) + extras;

        QuoteSet {
            main: QuoteRecord::from_totals(QuoteStrategy::Main, itemized, &self.config),
            option1: QuoteRecord::from_totals(QuoteStrategy::Option1, option1, &self.config),
            option2: QuoteRecord::from_totals(QuoteStrategy::Option2, option2, &self.config),
        }
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
