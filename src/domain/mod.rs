// Domain layer: models, ports and the pure card logic. No network or filesystem access here.

pub mod model;
pub mod ports;

pub mod services;
