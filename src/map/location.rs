use crate::cargo::CargoType;
use crate::math::Point2;

/// A producer of one cargo type.
#[derive(Debug, Clone, PartialEq)]
pub struct Industry {
    pub location: Point2,
    pub output: CargoType,
}

impl Industry {
    #[must_use]
    pub fn new(location: Point2, output: CargoType) -> Self {
        Self { location, output }
    }
}

/// A named consumer of two cargo types.
#[derive(Debug, Clone, PartialEq)]
pub struct Town {
    pub location: Point2,
    pub name: String,
    pub requires: [CargoType; 2],
}

impl Town {
    #[must_use]
    pub fn new(location: Point2, name: impl Into<String>, requires: [CargoType; 2]) -> Self {
        Self {
            location,
            name: name.into(),
            requires,
        }
    }
}
