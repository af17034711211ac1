pub mod domain;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod validation;

pub use domain::{builtin_domains, DomainConfig, IndicatorWeight, Polarity, WEIGHT_TOLERANCE};
pub use engine::{compute_domain_score, IndicatorContribution, ScoreTable, ScoredDistrict};
pub use error::ScoreError;
pub use validation::validate_domains;
