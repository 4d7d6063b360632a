// Domain layer: entities, their record form, and the ports the core talks through.

pub mod model;
pub mod ports;
pub mod record;
