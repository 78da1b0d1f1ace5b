use thiserror::Error;

use crate::input::Config;
use crate::verifier::Verifier;

/// Verifies that the percentages of every project add up to 100.
///
/// This is not enforced, the hours are distributed as configured.
pub struct VerifyDistribution;

#[derive(Debug, Clone, Error, PartialEq)]
#[error("the percentages of project `{project}` add up to {total}% instead of 100%")]
pub struct IncompleteDistribution {
    project: String,
    total: f64,
}

impl VerifyDistribution {
    const TOLERANCE: f64 = 1e-6;
}

impl Verifier<Config> for VerifyDistribution {
    type Error = IncompleteDistribution;
    type Errors = Vec<Self::Error>;

    fn verify(&self, config: &Config) -> Result<(), Self::Errors> {
        let errors = config
            .projects()
            .filter(|project| (project.total_percentage() - 100.0).abs() > Self::TOLERANCE)
            .map(|project| IncompleteDistribution {
                project: project.name().to_string(),
                total: project.total_percentage(),
            })
            .collect::<Vec<_>>();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
