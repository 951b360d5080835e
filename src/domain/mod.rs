// Domain layer: the portfolio document model and the ports the build runs through.

pub mod model;
pub mod ports;
