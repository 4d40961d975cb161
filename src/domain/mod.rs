// Domain layer: value types and ports. Only std, serde, chrono and regex here.

pub mod model;
pub mod ports;
