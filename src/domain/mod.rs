// Domain layer: request/response models and ports. No HTTP or runtime dependencies here.

pub mod model;
pub mod ports;
