mod clock;
mod policy_provider;
mod score_engine;

pub use clock::{Clock, FixedClock, SystemClock};
pub use policy_provider::IPolicyProvider;
pub use score_engine::IScoreEngine;
