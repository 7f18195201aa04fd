//! Batch evaluation of phase-change sources over host cells.
//!
//! Two calling styles are supported:
//!
//! - Whole cell: [`evaluate_cells`] runs every pass of every cell and
//!   returns all three contributions per cell.
//! - Per equation: [`prepare_cells`] followed by [`evaluate_equation`] for
//!   the vapor-mass, then liquid-mass and energy equations, for hosts that
//!   assemble one equation at a time.
//!
//! Each cell depends only on its own state, so the work is a pure map. The
//! only shared result is the [`TransferAggregator`]; the parallel driver
//! folds one partial aggregator per worker and merges them before
//! returning.

use crate::error::ClosureError;
use crate::memory::AuxiliaryCellMemory;
use crate::source::{CellSources, Equation, PhaseChangeSource, SourceContext, SourceContribution};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{CellState, TransferAggregator};

fn check_lengths(memory: &AuxiliaryCellMemory, states: &[CellState]) -> Result<(), ClosureError> {
    if memory.n_cells() != states.len() {
        return Err(ClosureError::LengthMismatch {
            expected: memory.n_cells(),
            actual: states.len(),
        });
    }
    Ok(())
}

/// Evaluate all equations of all cells for one solver iteration.
///
/// Starts a new iteration of `memory` and records every transferring cell
/// in `aggregator`. If any cell fails, `aggregator` is left unchanged.
///
/// # Example
///
/// ```
/// use boil_rs::equations::ClosureParameters;
/// use boil_rs::memory::AuxiliaryCellMemory;
/// use boil_rs::solver::{CellState, TransferAggregator, evaluate_cells};
/// use boil_rs::source::{NucleateBoilingSource, SourceContext};
///
/// let source = NucleateBoilingSource::new(ClosureParameters::water()).unwrap();
/// let ctx = SourceContext::default().with_operating_pressure(101_325.0);
/// let states = vec![
///     CellState::new(0.3, 0.7, 375.0, 0.0),
///     CellState::new(0.3, 0.7, 370.0, 0.0),
/// ];
///
/// let mut memory = AuxiliaryCellMemory::new(states.len());
/// let mut agg = TransferAggregator::new();
/// let sources = evaluate_cells(&source, &ctx, &states, &mut memory, &mut agg).unwrap();
///
/// assert!(sources[0].vapor.explicit > 0.0);
/// assert_eq!(sources[1].vapor.explicit, 0.0);
/// assert_eq!(agg.count(), 1);
/// ```
pub fn evaluate_cells<S: PhaseChangeSource + ?Sized>(
    source: &S,
    ctx: &SourceContext,
    states: &[CellState],
    memory: &mut AuxiliaryCellMemory,
    aggregator: &mut TransferAggregator,
) -> Result<Vec<CellSources>, ClosureError> {
    check_lengths(memory, states)?;
    memory.begin_iteration();

    let mut partial = TransferAggregator::new();
    let sources = memory
        .cells_mut()
        .zip(states)
        .map(|(mut cache, state)| source.cell_sources(ctx, state, &mut cache, &mut partial))
        .collect::<Result<Vec<_>, _>>()?;

    aggregator.merge(&partial);
    Ok(sources)
}

/// Evaluate all equations of all cells in parallel using rayon.
///
/// Same contract as [`evaluate_cells`]. Enable with the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn evaluate_cells_parallel<S: PhaseChangeSource + ?Sized>(
    source: &S,
    ctx: &SourceContext,
    states: &[CellState],
    memory: &mut AuxiliaryCellMemory,
    aggregator: &mut TransferAggregator,
) -> Result<Vec<CellSources>, ClosureError> {
    check_lengths(memory, states)?;
    memory.begin_iteration();

    let mut sources = vec![CellSources::ZERO; states.len()];
    let partial = memory
        .par_cells_mut()
        .zip(states.par_iter())
        .zip(sources.par_iter_mut())
        .try_fold(TransferAggregator::new, |mut agg, ((mut cache, state), out)| {
            *out = source.cell_sources(ctx, state, &mut cache, &mut agg)?;
            Ok::<_, ClosureError>(agg)
        })
        .try_reduce(TransferAggregator::new, |a, b| Ok(a.merged(b)))?;

    aggregator.merge(&partial);
    Ok(sources)
}

/// Start a new iteration and run the interfacial pass on every cell.
///
/// Must precede [`evaluate_equation`] in each iteration.
pub fn prepare_cells<S: PhaseChangeSource + ?Sized>(
    source: &S,
    ctx: &SourceContext,
    states: &[CellState],
    memory: &mut AuxiliaryCellMemory,
) -> Result<(), ClosureError> {
    check_lengths(memory, states)?;
    memory.begin_iteration();

    for (mut cache, state) in memory.cells_mut().zip(states) {
        source.prepare(ctx, state, &mut cache)?;
    }
    Ok(())
}

/// Evaluate one equation on every cell of the current iteration.
///
/// Call order within an iteration: [`prepare_cells`], then
/// [`Equation::VaporMass`], then [`Equation::LiquidMass`] and
/// [`Equation::Energy`] in any order.
///
/// Transferring cells are added to `aggregator` only if every cell succeeds.
pub fn evaluate_equation<S: PhaseChangeSource + ?Sized>(
    source: &S,
    ctx: &SourceContext,
    states: &[CellState],
    equation: Equation,
    memory: &mut AuxiliaryCellMemory,
    aggregator: &mut TransferAggregator,
) -> Result<Vec<SourceContribution>, ClosureError> {
    check_lengths(memory, states)?;

    let mut partial = TransferAggregator::new();
    let contributions = memory
        .cells_mut()
        .zip(states)
        .map(|(mut cache, state)| source.evaluate(ctx, state, equation, &mut cache, &mut partial))
        .collect::<Result<Vec<_>, _>>()?;

    aggregator.merge(&partial);
    Ok(contributions)
}
