//! Cargo and wagon types, and the production rules that link them.

mod rules;

pub use rules::{StandardRules, SupplyChainRules};

/// Cargo that industries produce and towns or other industries consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CargoType {
    Stone,
    CrudeOil,
    IronOre,
    Coal,
    Logs,
    Grain,
    ConstructionMaterials,
    Oil,
    Steel,
    Planks,
    Food,
    Fuel,
    Plastic,
    Tools,
    Goods,
    Machines,
}

/// Number of cargo types.
pub const CARGO_TYPE_COUNT: usize = 16;

impl CargoType {
    /// Every cargo type, in index order.
    pub const ALL: [CargoType; CARGO_TYPE_COUNT] = [
        CargoType::Stone,
        CargoType::CrudeOil,
        CargoType::IronOre,
        CargoType::Coal,
        CargoType::Logs,
        CargoType::Grain,
        CargoType::ConstructionMaterials,
        CargoType::Oil,
        CargoType::Steel,
        CargoType::Planks,
        CargoType::Food,
        CargoType::Fuel,
        CargoType::Plastic,
        CargoType::Tools,
        CargoType::Goods,
        CargoType::Machines,
    ];

    /// Stable numeric id used in tables and reports.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Wagon category; each cargo type travels in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WagonType {
    Gondola,
    TankCar,
    FlatcarWithSideStakes,
    Boxcar,
}

/// Number of wagon types, and the length of every per-edge flow vector.
pub const WAGON_TYPE_COUNT: usize = 4;

impl WagonType {
    /// Every wagon type, in index order.
    pub const ALL: [WagonType; WAGON_TYPE_COUNT] = [
        WagonType::Gondola,
        WagonType::TankCar,
        WagonType::FlatcarWithSideStakes,
        WagonType::Boxcar,
    ];

    /// Slot of this wagon type in a flow vector.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Quantity of an input cargo consumed per unit of output produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CargoRequirement {
    pub cargo: CargoType,
    pub quantity: f64,
}

impl CargoRequirement {
    #[must_use]
    pub const fn new(cargo: CargoType, quantity: f64) -> Self {
        Self { cargo, quantity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, cargo) in CargoType::ALL.iter().enumerate() {
            assert_eq!(cargo.index(), i);
        }
        for (i, wagon) in WagonType::ALL.iter().enumerate() {
            assert_eq!(wagon.index(), i);
        }
        assert_eq!(CargoType::Machines.index(), CARGO_TYPE_COUNT - 1);
        assert_eq!(WagonType::Boxcar.index(), WAGON_TYPE_COUNT - 1);
    }
}
