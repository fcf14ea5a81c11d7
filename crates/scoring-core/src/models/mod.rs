pub mod annotation;
pub mod attestation;
pub mod policy;
pub mod score;
pub mod weight;

pub use annotation::Annotation;
pub use attestation::{AttestationOptions, AttestationOptionsRecord};
pub use policy::{Policy, PolicyRecord};
pub use score::Score;
pub use weight::{clamp, Weight};
