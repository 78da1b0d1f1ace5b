mod verifier;
mod verify_distribution;
mod verify_drained;
mod verify_no_overlap;

pub use verifier::Verifier;
pub use verify_distribution::*;
pub use verify_drained::*;
pub use verify_no_overlap::*;
