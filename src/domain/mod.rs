// Domain layer: technician model, query key and the fetch seam.

pub mod model;
pub mod ports;
