use serde::{Deserialize, Serialize};

/// Season the work is scheduled in. Winter carries a labor surcharge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    #[default]
    Summer,
    Winter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DwellingType {
    Apartment,
    #[default]
    House,
    VacationHome,
    Rental,
    Commercial,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParkingDistance {
    #[default]
    Good,
    Ok,
    Bad,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportPossibility {
    #[default]
    Good,
    Ok,
    Poor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevatorSize {
    #[default]
    None,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuseboxDistance {
    #[default]
    UpTo5m,
    UpTo10m,
    AnotherFloor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JunctionBoxDistance {
    #[default]
    Close,
    Far,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowerDrain {
    #[default]
    Normal,
    Elongated,
}

/// Cost bucket an amount lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Labor,
    Material,
    Other,
}

/// Room geometry and wet-room construction details. Dimensions are in
/// centimeters; count-like fields bucket into tiers 1..=3.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BathroomDetails {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub has_sketch: bool,
    pub relocation_count: u32,
    pub toilet_relocation: u32,
    pub sink_relocation: u32,
    pub shower_relocation: u32,
    pub bathtub_relocation: u32,
    pub towel_warmer_relocation: u32,
    pub floor_drain_replacements: u32,
    pub floor_drain_relocation: u32,
    pub extra_floor_drain: bool,
    pub cut_channels: bool,
    pub floor_penetrations: u32,
    pub wall_penetrations: u32,
    pub move_drain_pipes: bool,
}

impl BathroomDetails {
    /// Floor area in m², derived from width and length (cm) and rounded
    /// to two decimals. Always recomputed; height plays no part.
    pub fn floor_area(&self) -> f64 {
        ((self.width * self.length) / 10_000.0 * 100.0).round() / 100.0
    }
}

/// Site conditions and logistics around the property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetails {
    pub season: Season,
    pub floor_count: u32,
    pub dwelling_type: DwellingType,
    pub parking_distance: ParkingDistance,
    pub transport_possibility: TransportPossibility,
    pub parking_fee: f64,
    pub service_car_price: f64,
    pub service_car_days: u32,
    pub congestion_charge: f64,
    pub has_elevator: bool,
    pub elevator_size: ElevatorSize,
    pub good_stairwell_access: bool,
    pub indoor_workspace: bool,
    pub workspace_distance: f64,
    pub entrance_distance: f64,
}

/// Electrical and installation work requested for the room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appliances {
    pub bring_in_materials: bool,
    pub floor_covering_hours: f64,
    pub rcd: bool,
    pub fusebox_distance: FuseboxDistance,
    pub junction_box_distance: JunctionBoxDistance,
    pub electric_towel_warmer: bool,
    pub floor_heating: bool,
    pub washing_machine: bool,
    pub dryer: bool,
    pub sink_outlet: bool,
    pub iron_outlet: bool,
    pub spotlights_count: u32,
    pub spotlights_price_per_unit: f64,
    pub ceiling_lowering: bool,
    pub water_shutoff: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteriorFittings {
    pub hidden_pipelines: bool,
    pub hidden_ceiling_shower: bool,
    pub concealed_mixers_count: u32,
    pub concealed_mixers_price: f64,
    pub save_waterheated_floor: bool,
    pub new_waterheated_floor: bool,
    pub built_in_mirror: bool,
    pub shower_wall: bool,
    pub glass_block_wall: bool,
    pub glass_shower_wall: bool,
    pub shower_doors: bool,
    pub shower_drain: ShowerDrain,
    pub bathtub_built_in: bool,
    pub toilet_wall_mounted: bool,
    pub interior_door_casing: bool,
    pub exterior_door_casing: bool,
    pub doorframe_replacement: bool,
    pub window_repainting: bool,
    pub niches_count: u32,
    pub niches_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilesAndPainting {
    pub floor_tile_deviation: bool,
    pub wall_tile_deviation: bool,
    pub grout_colors: u32,
    pub grout_colors_price: f64,
    pub paint_ceiling: bool,
    pub ceiling_painting_hours: f64,
    pub ceiling_painting_price: f64,
    pub ceiling_area: f64,
    pub ceiling_area_price: f64,
    pub paint_walls: bool,
    pub wall_painting_hours: f64,
    pub wall_painting_price: f64,
    pub wall_area: f64,
    pub wall_area_price: f64,
    pub construction_bag_count: u32,
}

/// Free-form line item entered outside the structured rule set. The
/// optional `category` tag overrides the keyword heuristic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraItem {
    pub description: String,
    pub cost: f64,
    pub category: Option<CostCategory>,
}

/// Immutable snapshot of the whole estimation form, assembled by the
/// caller once per computation. Missing fields deserialize to the
/// zero-contribution baseline rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInput {
    pub bathroom_details: BathroomDetails,
    pub personal_details: PersonalDetails,
    pub appliances: Appliances,
    pub interior_fittings: InteriorFittings,
    pub tiles_and_painting: TilesAndPainting,
    pub extra_items: Vec<ExtraItem>,
}
