// Domain layer: calculation models and the formula port.

pub mod model;
pub mod ports;
