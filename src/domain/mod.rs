// Domain layer: the lookup result and the port the driver depends on.

pub mod model;
pub mod ports;
