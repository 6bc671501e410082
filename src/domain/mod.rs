// Domain layer: birthday models and ports (interfaces). No dependencies beyond std/serde/rand.

pub mod model;
pub mod ports;
