// Domain layer: widget models and the ports a host CMS talks through.
// No dependencies beyond std/serde.

pub mod model;
pub mod ports;
