use renoquote::pricing::{
    CostCategory, ExtraItem, PricingConfig, ProjectInput, QuoteEngine, QuoteStrategy,
};

/// Snapshot with every field at its zero-contribution value. The
/// negative-logic booleans (elevator, stairwell, workspace, RCD) must be
/// set explicitly: their unchecked state is what costs money.
fn baseline() -> ProjectInput {
    let mut input = ProjectInput::default();
    input.personal_details.has_elevator = true;
    input.personal_details.good_stairwell_access = true;
    input.personal_details.indoor_workspace = true;
    input.appliances.rcd = true;
    input
}

fn reference_room() -> ProjectInput {
    let mut input = baseline();
    input.bathroom_details.width = 200.0;
    input.bathroom_details.length = 150.0;
    input.bathroom_details.height = 240.0;
    input
}

fn extra(description: &str, cost: f64) -> ExtraItem {
    ExtraItem {
        description: description.to_string(),
        cost,
        category: None,
    }
}

fn assert_sek(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected} SEK, got {actual}"
    );
}

#[test]
fn reference_room_prices_like_the_billing_system() {
    let input = reference_room();
    let quotes = QuoteEngine::default().quote(&input);
    let main = &quotes.main;

    assert_eq!(input.bathroom_details.floor_area(), 3.0);

    // Labor: base tariff over the 590 cm span, nothing else.
    assert_sek(main.labor_before_discount, 40_000.0 + 590.0 * 160.0);
    assert_sek(main.labor_after_discount, 133_400.0);
    assert_sek(main.tax_deduction, 40_020.0);
    assert_sek(main.labor_payable, 93_380.0);

    // Material: base tariff plus floor protection sheeting over 3 m².
    assert_sek(main.material_before_discount, 25_900.0 + 3.0 * 50.0);
    assert_sek(main.material_payable, 25_050.0);

    // Other: waste base fee plus area-scaled haulage.
    assert_sek(main.other_before_discount, 5_000.0 + 3.0 * 200.0);
    assert_sek(main.other_payable, 4_600.0);

    assert_sek(
        main.total_payable,
        main.labor_payable + main.material_payable + main.other_payable,
    );
    assert_sek(main.total_payable, 123_030.0);
}

#[test]
fn total_payable_is_the_sum_of_payables_for_every_strategy() {
    let mut input = reference_room();
    input.personal_details.floor_count = 3;
    input.appliances.washing_machine = true;
    input.appliances.floor_heating = true;
    input.interior_fittings.bathtub_built_in = true;
    input.tiles_and_painting.construction_bag_count = 2;
    input.extra_items.push(extra("frakt", 450.0));

    let quotes = QuoteEngine::default().quote(&input);
    for record in quotes.records() {
        assert_eq!(
            record.total_payable,
            record.labor_payable + record.material_payable + record.other_payable,
            "identity broken for {:?}",
            record.strategy
        );
    }
}

#[test]
fn discount_is_flat_and_applied_exactly_once_per_category() {
    let quotes = QuoteEngine::default().quote(&reference_room());
    for record in quotes.records() {
        assert_eq!(record.discount_per_category, 1_000.0);
        assert_sek(
            record.labor_after_discount,
            record.labor_before_discount - 1_000.0,
        );
        assert_sek(
            record.material_after_discount,
            record.material_before_discount - 1_000.0,
        );
        assert_sek(
            record.other_after_discount,
            record.other_before_discount - 1_000.0,
        );
    }
}

#[test]
fn tax_deduction_caps_regardless_of_labor_magnitude() {
    let mut input = baseline();
    input.bathroom_details.width = 2_000.0;
    input.bathroom_details.length = 2_000.0;
    input.bathroom_details.height = 300.0;

    let quotes = QuoteEngine::default().quote(&input);
    assert_eq!(quotes.main.tax_deduction, 50_000.0);
    assert_sek(
        quotes.main.labor_payable,
        quotes.main.labor_after_discount - 50_000.0,
    );
}

#[test]
fn tiered_fields_apply_exactly_one_tier() {
    let engine = QuoteEngine::default();
    let plain = engine.quote(&baseline());

    let mut input = baseline();
    input.bathroom_details.relocation_count = 2;
    let two = engine.quote(&input);
    assert_sek(
        two.main.labor_before_discount - plain.main.labor_before_discount,
        6_000.0,
    );
    assert_sek(
        two.main.material_before_discount - plain.main.material_before_discount,
        1_000.0,
    );

    input.bathroom_details.relocation_count = 4;
    let four = engine.quote(&input);
    assert_sek(
        four.main.labor_before_discount,
        plain.main.labor_before_discount,
    );
}

#[test]
fn extra_items_split_by_keyword_with_material_fallback() {
    let engine = QuoteEngine::default();
    let without = engine.quote(&baseline());

    let mut input = baseline();
    input.extra_items = vec![
        extra("arbete extra", 2_000.0),
        extra("material kakel", 1_500.0),
        extra("okänd post", 300.0),
    ];
    let with = engine.quote(&input);

    // The bundle options carry the extras verbatim on top of the tariff.
    assert_sek(
        with.option1.labor_before_discount - without.option1.labor_before_discount,
        2_000.0,
    );
    assert_sek(
        with.option1.material_before_discount - without.option1.material_before_discount,
        1_800.0,
    );
    assert_sek(
        with.option1.other_before_discount - without.option1.other_before_discount,
        0.0,
    );
}

#[test]
fn explicit_category_tags_override_the_heuristic() {
    let engine = QuoteEngine::default();
    let without = engine.quote(&baseline());

    let mut input = baseline();
    input.extra_items = vec![ExtraItem {
        description: "material kakel".to_string(),
        cost: 1_500.0,
        category: Some(CostCategory::Other),
    }];
    let with = engine.quote(&input);

    assert_sek(
        with.main.other_before_discount - without.main.other_before_discount,
        1_500.0,
    );
    assert_sek(
        with.main.material_before_discount,
        without.main.material_before_discount,
    );
}

#[test]
fn extra_item_order_does_not_change_totals() {
    let engine = QuoteEngine::default();

    let mut forward = reference_room();
    forward.extra_items = vec![
        extra("arbete extra", 2_000.0),
        extra("material kakel", 1_500.0),
        extra("frakt", 450.0),
        extra("okänd post", 300.0),
    ];

    let mut reversed = reference_room();
    reversed.extra_items = forward.extra_items.iter().cloned().rev().collect();

    assert_eq!(engine.quote(&forward), engine.quote(&reversed));
}

#[test]
fn repeated_runs_on_the_same_snapshot_are_identical() {
    let mut input = reference_room();
    input.personal_details.floor_count = 2;
    input.interior_fittings.shower_wall = true;
    input.extra_items.push(extra("service", 900.0));

    let engine = QuoteEngine::default();
    assert_eq!(engine.quote(&input), engine.quote(&input));
}

#[test]
fn bundle_options_scale_linearly_with_floor_area() {
    let quotes = QuoteEngine::default().quote(&reference_room());

    assert_eq!(quotes.option1.strategy, QuoteStrategy::Option1);
    assert_sek(quotes.option1.labor_before_discount, 24_500.0 + 3.0 * 800.0);
    assert_sek(
        quotes.option1.material_before_discount,
        20_000.0 + 3.0 * 1_500.0,
    );
    assert_sek(quotes.option1.other_before_discount, 4_000.0 + 3.0 * 150.0);

    assert_sek(
        quotes.option2.labor_before_discount,
        38_500.0 + 3.0 * 1_200.0,
    );
    assert_sek(
        quotes.option2.material_before_discount,
        30_000.0 + 3.0 * 2_500.0,
    );
    assert_sek(quotes.option2.other_before_discount, 6_000.0 + 3.0 * 250.0);
}

#[test]
fn discount_can_push_categories_negative() {
    let config = PricingConfig {
        discount_per_category: 30_000.0,
        ..PricingConfig::default()
    };
    let quotes = QuoteEngine::new(config).quote(&baseline());

    // Option 1 labor base is 24 500; the oversized discount drives it
    // below zero and the deduction floors at zero instead of refunding.
    assert_sek(quotes.option1.labor_after_discount, -5_500.0);
    assert_eq!(quotes.option1.tax_deduction, 0.0);
    assert_sek(quotes.option1.labor_payable, -5_500.0);
}

#[test]
fn winter_schedule_adds_flat_labor_cost() {
    let engine = QuoteEngine::default();
    let summer = engine.quote(&reference_room());

    let mut input = reference_room();
    input.personal_details.season = renoquote::pricing::Season::Winter;
    let winter = engine.quote(&input);

    assert_sek(
        winter.main.labor_before_discount - summer.main.labor_before_discount,
        3_000.0,
    );
    // Bundles ignore the structured rules entirely.
    assert_eq!(winter.option1, summer.option1);
}
