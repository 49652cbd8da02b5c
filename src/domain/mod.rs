// Domain layer: records, ports, and the pure date logic. No I/O here.

pub mod model;
pub mod ports;

pub mod services;
