use super::{CargoRequirement, CargoType, WagonType, CARGO_TYPE_COUNT};

/// Static lookups the router needs about cargo.
///
/// Recipes must form an acyclic graph over cargo types; the solver only
/// terminates on its own when every chain ends in raw materials.
pub trait SupplyChainRules {
    /// Wagon type that carries `cargo`.
    fn wagon_type(&self, cargo: CargoType) -> WagonType;

    /// Production capacity of an industry producing `cargo`.
    fn max_production(&self, cargo: CargoType) -> f64;

    /// Inputs consumed per unit of `cargo` produced. Empty for raw materials.
    fn requirements(&self, cargo: CargoType) -> &[CargoRequirement];

    /// Display name of the industry producing `cargo`.
    fn industry_name(&self, cargo: CargoType) -> &str;
}

/// The built-in cargo tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

const WAGON_TYPES: [WagonType; CARGO_TYPE_COUNT] = [
    WagonType::Gondola,
    WagonType::TankCar,
    WagonType::Gondola,
    WagonType::Gondola,
    WagonType::FlatcarWithSideStakes,
    WagonType::Gondola,
    WagonType::FlatcarWithSideStakes,
    WagonType::TankCar,
    WagonType::FlatcarWithSideStakes,
    WagonType::FlatcarWithSideStakes,
    WagonType::Boxcar,
    WagonType::TankCar,
    WagonType::Boxcar,
    WagonType::Boxcar,
    WagonType::Boxcar,
    WagonType::Boxcar,
];

const INDUSTRY_NAMES: [&str; CARGO_TYPE_COUNT] = [
    "Quarry",
    "Oil Well",
    "Ore Mine",
    "Coal Mine",
    "Forest",
    "Farm",
    "Brickworks",
    "Oil Refinery",
    "Steel Mill",
    "Sawmill",
    "Food Processing Plant",
    "Fuel Refinery",
    "Plastic Factory",
    "Tool Factory",
    "Goods Factory",
    "Machine Factory",
];

const RAW: &[CargoRequirement] = &[];

const REQUIREMENTS: [&[CargoRequirement]; CARGO_TYPE_COUNT] = [
    RAW,
    RAW,
    RAW,
    RAW,
    RAW,
    RAW,
    &[CargoRequirement::new(CargoType::Stone, 1.0)],
    &[CargoRequirement::new(CargoType::CrudeOil, 2.0)],
    &[
        CargoRequirement::new(CargoType::IronOre, 2.0),
        CargoRequirement::new(CargoType::Coal, 2.0),
    ],
    &[CargoRequirement::new(CargoType::Logs, 2.0)],
    &[CargoRequirement::new(CargoType::Grain, 2.0)],
    &[CargoRequirement::new(CargoType::Oil, 1.0)],
    &[CargoRequirement::new(CargoType::Oil, 1.0)],
    &[CargoRequirement::new(CargoType::Planks, 1.0)],
    &[
        CargoRequirement::new(CargoType::Steel, 1.0),
        CargoRequirement::new(CargoType::Plastic, 1.0),
    ],
    &[
        CargoRequirement::new(CargoType::Steel, 1.0),
        CargoRequirement::new(CargoType::Planks, 1.0),
    ],
];

impl SupplyChainRules for StandardRules {
    fn wagon_type(&self, cargo: CargoType) -> WagonType {
        WAGON_TYPES[cargo.index()]
    }

    fn max_production(&self, cargo: CargoType) -> f64 {
        match cargo {
            CargoType::Grain => 200.0,
            _ => 400.0,
        }
    }

    fn requirements(&self, cargo: CargoType) -> &[CargoRequirement] {
        REQUIREMENTS[cargo.index()]
    }

    fn industry_name(&self, cargo: CargoType) -> &str {
        INDUSTRY_NAMES[cargo.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Depth-first walk over recipes; panics on a cycle.
    fn visit(rules: &StandardRules, cargo: CargoType, stack: &mut Vec<CargoType>) {
        assert!(!stack.contains(&cargo), "recipe cycle through {cargo:?}");
        stack.push(cargo);
        for req in rules.requirements(cargo) {
            visit(rules, req.cargo, stack);
        }
        stack.pop();
    }

    #[test]
    fn recipes_are_acyclic() {
        let rules = StandardRules;
        for cargo in CargoType::ALL {
            visit(&rules, cargo, &mut Vec::new());
        }
    }

    #[test]
    fn raw_materials_have_no_inputs() {
        let rules = StandardRules;
        for cargo in &CargoType::ALL[..6] {
            assert!(rules.requirements(*cargo).is_empty(), "{cargo:?}");
        }
        assert_eq!(rules.requirements(CargoType::Steel).len(), 2);
    }

    #[test]
    fn lookups() {
        let rules = StandardRules;
        assert_eq!(rules.wagon_type(CargoType::CrudeOil), WagonType::TankCar);
        assert_eq!(rules.wagon_type(CargoType::Goods), WagonType::Boxcar);
        assert!((rules.max_production(CargoType::Grain) - 200.0).abs() < f64::EPSILON);
        assert!((rules.max_production(CargoType::Coal) - 400.0).abs() < f64::EPSILON);
        assert_eq!(rules.industry_name(CargoType::Planks), "Sawmill");
    }
}
