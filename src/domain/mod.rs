// Domain layer: form values, the inquiry payload and the ports the form talks through.

pub mod model;
pub mod ports;
