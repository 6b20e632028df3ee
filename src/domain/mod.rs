// Domain layer: plain data types and the clock port. No dependencies beyond chrono/serde.

pub mod model;
pub mod ports;
