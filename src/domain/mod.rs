// Domain layer: request/response types and the model port. No HTTP or runtime types here.

pub mod model;
pub mod ports;
