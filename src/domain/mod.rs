// Domain layer: plain models and the ports the core logic depends on.

pub mod model;
pub mod ports;
