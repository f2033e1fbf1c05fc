use super::domain::{CostCategory, ExtraItem};
use super::CostBreakdown;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::io::Read;
use std::path::Path;

// Keyword lists mirror the bilingual vocabulary customers actually type
// into the form. They are best-effort, not exhaustive; unmatched items
// fall back to material.
const LABOR_KEYWORDS: [&str; 5] = ["arbete", "labor", "montering", "installation", "service"];
const MATERIAL_KEYWORDS: [&str; 5] = ["material", "utrustning", "equipment", "supplies", "parts"];
const OTHER_KEYWORDS: [&str; 7] = [
    "avfall",
    "waste",
    "transport",
    "frakt",
    "freight",
    "avgift",
    "fee",
];

/// Buckets one extra line item. Returns `None` when the item carries no
/// chargeable cost. An explicit category tag always wins; otherwise the
/// keyword lists are tried in labor, material, other order.
pub fn classify(item: &ExtraItem) -> Option<CostCategory> {
    if !item.cost.is_finite() || item.cost <= 0.0 {
        return None;
    }

    if let Some(category) = item.category {
        return Some(category);
    }

    let description = item.description.to_lowercase();
    if LABOR_KEYWORDS.iter().any(|kw| description.contains(kw)) {
        Some(CostCategory::Labor)
    } else if MATERIAL_KEYWORDS.iter().any(|kw| description.contains(kw)) {
        Some(CostCategory::Material)
    } else if OTHER_KEYWORDS.iter().any(|kw| description.contains(kw)) {
        Some(CostCategory::Other)
    } else {
        Some(CostCategory::Material)
    }
}

/// Sums every chargeable extra item into its bucket. Order-independent
/// and purely additive.
pub(crate) fn extra_items_cost(items: &[ExtraItem]) -> CostBreakdown {
    let mut costs = CostBreakdown::default();
    for item in items {
        match classify(item) {
            Some(CostCategory::Labor) => costs.labor += item.cost,
            Some(CostCategory::Material) => costs.material += item.cost,
            Some(CostCategory::Other) => costs.other += item.cost,
            None => {}
        }
    }
    costs
}

#[derive(Debug)]
pub enum ExtrasImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for ExtrasImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtrasImportError::Io(err) => write!(f, "failed to read extras file: {}", err),
            ExtrasImportError::Csv(err) => write!(f, "invalid extras CSV data: {}", err),
        }
    }
}

impl std::error::Error for ExtrasImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtrasImportError::Io(err) => Some(err),
            ExtrasImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExtrasImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExtrasImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads extra line items from a CSV export with `description,cost` and
/// an optional `category` column. Unparseable cost cells degrade to 0
/// (and the row then contributes nothing) rather than failing the whole
/// import.
pub struct ExtrasCsvImporter;

impl ExtrasCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ExtraItem>, ExtrasImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ExtraItem>, ExtrasImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut items = Vec::new();

        for record in csv_reader.deserialize::<ExtrasRow>() {
            let row = record?;
            items.push(ExtraItem {
                cost: row.cost(),
                category: row.category(),
                description: row.description,
            });
        }

        Ok(items)
    }
}

#[derive(Debug, Deserialize)]
struct ExtrasRow {
    #[serde(alias = "item")]
    description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    cost: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
}

impl ExtrasRow {
    fn cost(&self) -> f64 {
        self.cost
            .as_deref()
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    fn category(&self) -> Option<CostCategory> {
        match self.category.as_deref()?.to_ascii_lowercase().as_str() {
            "labor" => Some(CostCategory::Labor),
            "material" => Some(CostCategory::Material),
            "other" => Some(CostCategory::Other),
            _ => None,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, cost: f64) -> ExtraItem {
        ExtraItem {
            description: description.to_string(),
            cost,
            category: None,
        }
    }

    #[test]
    fn labor_keywords_win_over_material_keywords() {
        let classified = classify(&item("montering av material", 800.0));
        assert_eq!(classified, Some(CostCategory::Labor));
    }

    #[test]
    fn unmatched_descriptions_default_to_material() {
        assert_eq!(
            classify(&item("okänd post", 300.0)),
            Some(CostCategory::Material)
        );
        assert_eq!(classify(&item("", 300.0)), Some(CostCategory::Material));
    }

    #[test]
    fn waste_terms_route_to_other() {
        assert_eq!(
            classify(&item("frakt av byggsäck", 450.0)),
            Some(CostCategory::Other)
        );
    }

    #[test]
    fn non_positive_costs_are_skipped() {
        assert_eq!(classify(&item("arbete", 0.0)), None);
        assert_eq!(classify(&item("arbete", -100.0)), None);
        assert_eq!(classify(&item("arbete", f64::NAN)), None);
    }

    #[test]
    fn explicit_tag_overrides_keywords() {
        let mut tagged = item("material kakel", 500.0);
        tagged.category = Some(CostCategory::Other);
        assert_eq!(classify(&tagged), Some(CostCategory::Other));
    }

    #[test]
    fn summation_matches_reference_breakdown() {
        let items = [
            item("arbete extra", 2_000.0),
            item("material kakel", 1_500.0),
            item("okänd post", 300.0),
        ];
        let costs = extra_items_cost(&items);
        assert_eq!(costs.labor, 2_000.0);
        assert_eq!(costs.material, 1_800.0);
        assert_eq!(costs.other, 0.0);
    }
}
