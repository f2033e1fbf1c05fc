use super::domain::{
    DwellingType, ElevatorSize, FuseboxDistance, JunctionBoxDistance, ParkingDistance,
    ProjectInput, Season, ShowerDrain, TransportPossibility,
};
use super::CostBreakdown;

/// Discrete tier lookup for count-like fields. Only the buckets 1..=3
/// are priced; anything else contributes nothing. Tiers are never
/// cumulative.
fn tier(count: u32, tiers: [(f64, f64); 3]) -> (f64, f64) {
    match count {
        1 => tiers[0],
        2 => tiers[1],
        3 => tiers[2],
        _ => (0.0, 0.0),
    }
}

pub(crate) fn season(input: &ProjectInput) -> CostBreakdown {
    let mut costs = CostBreakdown::default();
    if input.personal_details.season == Season::Winter {
        costs.labor += 3_000.0;
    }
    costs
}

pub(crate) fn general_conditions(input: &ProjectInput) -> CostBreakdown {
    let personal = &input.personal_details;
    let mut costs = CostBreakdown::default();

    costs.labor += f64::from(personal.floor_count) * 100.0;

    if matches!(
        personal.dwelling_type,
        DwellingType::Apartment | DwellingType::Rental | DwellingType::Commercial
    ) {
        costs.labor += 2_000.0;
    }

    if input.appliances.bring_in_materials {
        costs.labor += 500.0;
    }

    costs
}

pub(crate) fn accessibility(input: &ProjectInput) -> CostBreakdown {
    let personal = &input.personal_details;
    let mut costs = CostBreakdown::default();

    costs.labor += match personal.parking_distance {
        ParkingDistance::Bad => 1_000.0,
        ParkingDistance::Ok => 500.0,
        ParkingDistance::Good => 0.0,
    };

    costs.labor += match personal.transport_possibility {
        TransportPossibility::Poor => 2_000.0,
        TransportPossibility::Ok => 500.0,
        TransportPossibility::Good => 0.0,
    };

    costs.other += personal.parking_fee
        + personal.service_car_price * f64::from(personal.service_car_days)
        + personal.congestion_charge;

    if !personal.has_elevator {
        costs.labor += 2_000.0;
    }
    costs.labor += match personal.elevator_size {
        ElevatorSize::Small => 2_000.0,
        ElevatorSize::Medium => 500.0,
        ElevatorSize::None | ElevatorSize::Large => 0.0,
    };

    if !personal.good_stairwell_access {
        costs.labor += 2_000.0;
    }

    // Carry distance is only billed when there is no indoor workspace;
    // the walk from the entrance is billed regardless.
    if !personal.indoor_workspace {
        costs.labor += 2_000.0 + personal.workspace_distance * 480.0;
    }
    costs.labor += personal.entrance_distance * 480.0;

    costs
}

pub(crate) fn floor_protection(input: &ProjectInput) -> CostBreakdown {
    CostBreakdown {
        labor: input.appliances.floor_covering_hours * 680.0,
        material: input.bathroom_details.floor_area() * 50.0,
        other: 0.0,
    }
}

pub(crate) fn base_dimensions(input: &ProjectInput) -> CostBreakdown {
    let bathroom = &input.bathroom_details;
    let span = bathroom.width + bathroom.length + bathroom.height;
    CostBreakdown {
        labor: 40_000.0 + span * 160.0,
        material: 20_000.0 + span * 10.0,
        other: 0.0,
    }
}

pub(crate) fn layout_modification(input: &ProjectInput) -> CostBreakdown {
    let bathroom = &input.bathroom_details;
    let mut costs = CostBreakdown::default();

    if bathroom.has_sketch {
        costs.labor += 500.0;
    }

    let (labor, material) = tier(
        bathroom.relocation_count,
        [(3_000.0, 500.0), (6_000.0, 1_000.0), (8_000.0, 1_500.0)],
    );
    costs.labor += labor;
    costs.material += material;

    let fixture_relocations = [
        (bathroom.toilet_relocation, 500.0),
        (bathroom.sink_relocation, 500.0),
        (bathroom.shower_relocation, 500.0),
        (bathroom.bathtub_relocation, 1_000.0),
        (bathroom.towel_warmer_relocation, 400.0),
    ];
    for (count, material) in fixture_relocations {
        if count > 0 {
            costs.labor += 1_000.0;
            costs.material += material;
        }
    }

    costs
}

pub(crate) fn plumbing(input: &ProjectInput) -> CostBreakdown {
    let bathroom = &input.bathroom_details;
    let fittings = &input.interior_fittings;
    let mut costs = CostBreakdown::default();

    let (labor, material) = tier(
        bathroom.floor_drain_replacements,
        [(2_500.0, 500.0), (4_500.0, 1_000.0), (6_000.0, 1_200.0)],
    );
    costs.labor += labor;
    costs.material += material;

    let (labor, material) = tier(
        bathroom.floor_drain_relocation,
        [(1_000.0, 500.0), (2_000.0, 1_000.0), (2_500.0, 1_500.0)],
    );
    costs.labor += labor;
    costs.material += material;

    if bathroom.extra_floor_drain {
        costs.labor += 2_500.0;
        costs.material += 1_000.0;
    }

    if bathroom.cut_channels {
        costs.labor += 100.0;
    }

    let (labor, material) = tier(
        bathroom.floor_penetrations,
        [(500.0, 500.0), (1_000.0, 1_000.0), (1_500.0, 1_500.0)],
    );
    costs.labor += labor;
    costs.material += material;

    let (labor, material) = tier(
        bathroom.wall_penetrations,
        [(2_500.0, 1_500.0), (5_000.0, 2_500.0), (7_000.0, 4_000.0)],
    );
    costs.labor += labor;
    costs.material += material;

    if bathroom.move_drain_pipes {
        costs.labor += 2_500.0;
        costs.material += 1_000.0;
    }

    // Shutoff valves owned by the housing association sit outside the
    // customer's unit and take extra coordination.
    if input
        .appliances
        .water_shutoff
        .to_lowercase()
        .contains("association")
    {
        costs.labor += 1_000.0;
    }

    if fittings.hidden_pipelines {
        costs.labor += 9_000.0;
        costs.material += 3_000.0;
    }

    if fittings.hidden_ceiling_shower {
        costs.labor += 8_000.0;
        costs.material += 2_500.0;
    }

    if fittings.concealed_mixers_count > 0 {
        costs.labor += f64::from(fittings.concealed_mixers_count) * fittings.concealed_mixers_price;
        // Material is a flat charge, not per mixer.
        costs.material += 2_500.0;
    }

    if fittings.save_waterheated_floor {
        costs.labor += 5_000.0;
        costs.material += 1_000.0;
    }

    if fittings.new_waterheated_floor {
        costs.labor += 5_000.0 + bathroom.floor_area() * 2_000.0;
        costs.material += 10_000.0;
    }

    costs
}

pub(crate) fn electrical(input: &ProjectInput) -> CostBreakdown {
    let appliances = &input.appliances;
    let mut costs = CostBreakdown::default();

    if !appliances.rcd {
        costs.labor += 2_000.0;
        costs.material += 500.0;
    }

    match appliances.fusebox_distance {
        FuseboxDistance::UpTo10m => {
            costs.labor += 1_000.0;
            costs.material += 500.0;
        }
        FuseboxDistance::AnotherFloor => {
            costs.labor += 2_000.0;
            costs.material += 1_000.0;
        }
        FuseboxDistance::UpTo5m => {}
    }

    if appliances.junction_box_distance == JunctionBoxDistance::Far {
        costs.labor += 1_000.0;
        costs.material += 500.0;
    }

    if appliances.electric_towel_warmer {
        costs.labor += 1_500.0;
        costs.material += 500.0;
    }

    if appliances.floor_heating {
        costs.labor += 7_000.0;
        costs.material += input.bathroom_details.floor_area() * 1_000.0;
    }

    if appliances.washing_machine {
        costs.labor += 4_400.0;
        costs.material += 1_000.0;
    }

    if appliances.dryer {
        costs.labor += 2_000.0;
        costs.material += 500.0;
    }

    if appliances.sink_outlet {
        costs.labor += 500.0;
        costs.material += 500.0;
    }

    if appliances.iron_outlet {
        costs.labor += 500.0;
        costs.material += 500.0;
    }

    if appliances.spotlights_count > 0 {
        let unit_price = if appliances.spotlights_price_per_unit > 0.0 {
            appliances.spotlights_price_per_unit
        } else {
            500.0
        };
        costs.labor += f64::from(appliances.spotlights_count) * unit_price;
        costs.material += f64::from(appliances.spotlights_count) * 300.0;
    }

    costs
}

pub(crate) fn fixtures(input: &ProjectInput) -> CostBreakdown {
    let bathroom = &input.bathroom_details;
    let fittings = &input.interior_fittings;
    let mut costs = CostBreakdown::default();

    if input.appliances.ceiling_lowering {
        costs.labor += 2_800.0 + bathroom.width * bathroom.length * 0.02;
        costs.material += 1_200.0;
    }

    if fittings.built_in_mirror {
        costs.labor += 2_500.0;
    }

    if fittings.shower_wall {
        costs.labor += 12_000.0;
        costs.material += 2_500.0;
    }

    if fittings.glass_block_wall {
        costs.labor += 12_000.0;
        costs.material += 4_000.0;
    }

    if fittings.glass_shower_wall {
        costs.labor += 500.0;
    }

    if fittings.shower_doors {
        costs.labor += 1_000.0;
    }

    if fittings.shower_drain == ShowerDrain::Elongated {
        costs.labor += 2_000.0;
    }

    if fittings.bathtub_built_in {
        costs.labor += 15_000.0;
        costs.material += 2_000.0;
    }

    if fittings.toilet_wall_mounted {
        costs.labor += 6_500.0;
        costs.material += 2_000.0;
    }

    if fittings.interior_door_casing {
        costs.labor += 500.0;
        costs.material += 250.0;
    }

    if fittings.exterior_door_casing {
        costs.labor += 500.0;
        costs.material += 250.0;
    }

    if fittings.doorframe_replacement {
        costs.labor += 1_000.0;
        costs.material += 1_000.0;
    }

    if fittings.window_repainting {
        costs.labor += 500.0;
        costs.material += 250.0;
    }

    if fittings.niches_count > 0 {
        costs.labor += f64::from(fittings.niches_count) * fittings.niches_price;
    }

    costs
}

pub(crate) fn tiling_and_painting(input: &ProjectInput) -> CostBreakdown {
    let tiles = &input.tiles_and_painting;
    let mut costs = CostBreakdown::default();

    if tiles.floor_tile_deviation {
        costs.labor += 500.0;
        costs.material += 500.0;
    }

    if tiles.wall_tile_deviation {
        costs.labor += 500.0;
        costs.material += 500.0;
    }

    // The first grout color is included in the base price.
    if tiles.grout_colors > 1 {
        let extra = f64::from(tiles.grout_colors - 1) * tiles.grout_colors_price;
        costs.labor += extra;
        costs.material += extra;
    }

    if tiles.ceiling_painting_hours > 0.0 {
        costs.labor += tiles.ceiling_painting_hours * tiles.ceiling_painting_price;
    }

    if tiles.wall_painting_hours > 0.0 {
        costs.labor += tiles.wall_painting_hours * tiles.wall_painting_price;
    }

    if tiles.wall_area > 0.0 {
        costs.material += tiles.wall_area * tiles.wall_area_price;
    }

    if tiles.paint_ceiling {
        costs.material += tiles.ceiling_area * tiles.ceiling_area_price;
    }

    costs
}

pub(crate) fn waste_and_cleanup(input: &ProjectInput) -> CostBreakdown {
    let bags = f64::from(input.tiles_and_painting.construction_bag_count) * 1_500.0;
    CostBreakdown {
        labor: 0.0,
        material: 0.0,
        other: bags + 5_000.0 + input.bathroom_details.floor_area() * 200.0,
    }
}
