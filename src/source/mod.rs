//! Phase-change source terms.
//!
//! Source terms add the liquid → vapor mass transfer and its latent heat to
//! the host's conservation equations as explicit right-hand-side values:
//! - Nucleate boiling (pressure/superheat correlation or reference density)
//! - Interfacial area (∇α_v · ∇T), multi-pass with cached intermediates
//!
//! # Submodules
//!
//! - [`traits`]: Source term interface ([`PhaseChangeSource`], [`SourceContext`])
//! - [`router`]: Signed routing of a rate to each equation

mod interfacial_area;
mod nucleate_boiling;
pub mod router;
pub mod traits;

pub use interfacial_area::InterfacialAreaSource;
pub use nucleate_boiling::NucleateBoilingSource;
pub use router::SourceTermRouter;
pub use traits::{CellSources, Equation, PhaseChangeSource, SourceContext, SourceContribution};

use crate::closure::ClosureStrategy;
use crate::equations::ClosureParameters;
use crate::error::ClosureError;

/// Build the source for a closure strategy.
///
/// # Example
///
/// ```
/// use boil_rs::closure::ClosureStrategy;
/// use boil_rs::equations::ClosureParameters;
/// use boil_rs::source::build_source;
///
/// let source = build_source(ClosureStrategy::Gradient, ClosureParameters::water()).unwrap();
/// assert_eq!(source.name(), "interfacial_area");
/// ```
pub fn build_source(
    strategy: ClosureStrategy,
    params: ClosureParameters,
) -> Result<Box<dyn PhaseChangeSource>, ClosureError> {
    let source: Box<dyn PhaseChangeSource> = match strategy {
        ClosureStrategy::Correlation => Box::new(NucleateBoilingSource::new(params)?),
        ClosureStrategy::ReferenceDensity => {
            Box::new(NucleateBoilingSource::reference_density(params)?)
        }
        ClosureStrategy::Gradient => Box::new(InterfacialAreaSource::new(params)?),
    };
    log::debug!("selected phase-change source `{}`", source.name());
    Ok(source)
}
