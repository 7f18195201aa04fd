//! Gradient availability check.
//!
//! Whether reconstructed gradients exist depends on the host solver, its
//! discretisation order and whether temporary solver memory is retained.
//! The gradient closure cannot run without them, so hosts can scan their
//! cell states once before selecting it.

use crate::closure::ClosureStrategy;
use crate::error::ClosureError;
use crate::solver::CellState;
use crate::types::CellIndex;

/// Which gradient fields are present on every scanned cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientAvailability {
    /// Number of cells scanned
    pub n_cells: usize,
    /// First cell lacking ∇α_v, if any
    pub missing_volume_fraction: Option<CellIndex>,
    /// First cell lacking ∇T, if any
    pub missing_temperature: Option<CellIndex>,
}

impl GradientAvailability {
    /// Scan cell states and log one line per gradient field.
    pub fn scan(states: &[CellState]) -> Self {
        let first_missing = |has: fn(&CellState) -> bool| {
            states
                .iter()
                .position(|s| !has(s))
                .map(CellIndex::new)
        };

        let availability = Self {
            n_cells: states.len(),
            missing_volume_fraction: first_missing(|s| s.grad_alpha_v.is_some()),
            missing_temperature: first_missing(|s| s.grad_t.is_some()),
        };

        for (field, missing) in [
            ("volume fraction", availability.missing_volume_fraction),
            ("temperature", availability.missing_temperature),
        ] {
            match missing {
                None => log::info!("gradient of {field} is available on {} cells", states.len()),
                Some(cell) => log::warn!("gradient of {field} is missing (first at {cell})"),
            }
        }

        availability
    }

    /// Whether ∇α_v is present everywhere.
    pub fn has_volume_fraction(&self) -> bool {
        self.missing_volume_fraction.is_none()
    }

    /// Whether ∇T is present everywhere.
    pub fn has_temperature(&self) -> bool {
        self.missing_temperature.is_none()
    }

    /// Check that the given strategy can run on the scanned cells.
    pub fn require(&self, strategy: ClosureStrategy) -> Result<(), ClosureError> {
        if !strategy.requires_interface_metric() {
            return Ok(());
        }
        if let Some(cell) = self.missing_volume_fraction {
            return Err(ClosureError::MissingGradient {
                cell,
                field: "volume fraction",
            });
        }
        if let Some(cell) = self.missing_temperature {
            return Err(ClosureError::MissingGradient {
                cell,
                field: "temperature",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_gradients() -> CellState {
        CellState::new(0.5, 0.5, 380.0, 0.0).with_gradients([1.0, 0.0, 0.0], [2.0, 0.0, 0.0])
    }

    #[test]
    fn test_all_available() {
        let states = vec![with_gradients(); 5];
        let avail = GradientAvailability::scan(&states);
        assert_eq!(avail.n_cells, 5);
        assert!(avail.has_volume_fraction());
        assert!(avail.has_temperature());
        assert!(avail.require(ClosureStrategy::Gradient).is_ok());
    }

    #[test]
    fn test_missing_temperature_gradient() {
        let mut states = vec![with_gradients(); 4];
        states[2].grad_t = None;

        let avail = GradientAvailability::scan(&states);
        assert!(avail.has_volume_fraction());
        assert_eq!(avail.missing_temperature, Some(CellIndex::new(2)));

        let err = avail.require(ClosureStrategy::Gradient).unwrap_err();
        assert_eq!(
            err,
            ClosureError::MissingGradient {
                cell: CellIndex::new(2),
                field: "temperature"
            }
        );
    }

    #[test]
    fn test_correlation_needs_no_gradients() {
        let states = vec![CellState::new(0.5, 0.5, 380.0, 0.0); 3];
        let avail = GradientAvailability::scan(&states);
        assert!(!avail.has_volume_fraction());
        assert!(avail.require(ClosureStrategy::Correlation).is_ok());
        assert!(avail.require(ClosureStrategy::ReferenceDensity).is_ok());
        assert!(avail.require(ClosureStrategy::Gradient).is_err());
    }

    #[test]
    fn test_empty_scan() {
        let avail = GradientAvailability::scan(&[]);
        assert_eq!(avail.n_cells, 0);
        assert!(avail.require(ClosureStrategy::Gradient).is_ok());
    }
}
