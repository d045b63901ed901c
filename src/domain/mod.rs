// Domain layer: match and workflow value types plus the gateway port.

pub mod model;
pub mod ports;
