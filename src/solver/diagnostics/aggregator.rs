//! End-of-step phase-change diagnostics.
//!
//! Tracks how much mass the closure moved from liquid to vapor during a
//! reporting interval and how many cells took part.
//!
//! # Example
//!
//! ```
//! use boil_rs::solver::{TransferAggregator, TransferReport};
//!
//! let mut agg = TransferAggregator::new();
//! agg.record(2.0e-7);
//! agg.record(4.0e-7);
//! agg.record(0.0); // not counted
//!
//! match agg.end_of_step() {
//!     TransferReport::Average { mean_rate, cell_count } => {
//!         assert_eq!(cell_count, 2);
//!         assert!((mean_rate - 3.0e-7).abs() < 1e-20);
//!     }
//!     TransferReport::NoEvaporation => unreachable!(),
//! }
//!
//! // Reset after reporting
//! assert_eq!(agg.end_of_step(), TransferReport::NoEvaporation);
//! ```

use std::fmt;

/// Summary of one reporting interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransferReport {
    /// At least one cell transferred mass.
    Average {
        /// Mean ṁ over transferring cells (kg/(m³·s))
        mean_rate: f64,
        /// Number of transferring cell evaluations
        cell_count: usize,
    },
    /// No cell transferred mass during the interval.
    NoEvaporation,
}

impl TransferReport {
    /// Whether any mass was transferred.
    pub fn has_transfer(&self) -> bool {
        matches!(self, TransferReport::Average { .. })
    }
}

impl fmt::Display for TransferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferReport::Average {
                mean_rate,
                cell_count,
            } => write!(
                f,
                "Average mass transferred to vapor: {mean_rate:.6e} kg/(m³·s) over {cell_count} cells"
            ),
            TransferReport::NoEvaporation => write!(f, "No evaporation in this step"),
        }
    }
}

/// Running sum of transfer rates and count of transferring cells.
///
/// An explicit value owned by the iteration driver. Parallel drivers keep
/// one partial aggregator per worker and [`merge`](Self::merge) them before
/// calling [`end_of_step`](Self::end_of_step).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransferAggregator {
    sum: f64,
    count: usize,
}

impl TransferAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one cell evaluation. Zero rates are ignored.
    #[inline]
    pub fn record(&mut self, m_dot: f64) {
        if m_dot != 0.0 {
            self.sum += m_dot;
            self.count += 1;
        }
    }

    /// Fold another partial aggregator into this one.
    pub fn merge(&mut self, other: &TransferAggregator) {
        self.sum += other.sum;
        self.count += other.count;
    }

    /// By-value merge for reductions.
    pub fn merged(mut self, other: TransferAggregator) -> Self {
        self.merge(&other);
        self
    }

    /// Accumulated ṁ.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Number of transferring evaluations.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether nothing has been recorded since the last report.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Close the reporting interval.
    ///
    /// With transferring cells the mean rate is reported and the state is
    /// reset. Without any, `NoEvaporation` is reported and the state is left
    /// as is. The report is also written to the `log` facade.
    pub fn end_of_step(&mut self) -> TransferReport {
        if self.count == 0 {
            let report = TransferReport::NoEvaporation;
            log::info!("{report}");
            return report;
        }

        let report = TransferReport::Average {
            mean_rate: self.sum / self.count as f64,
            cell_count: self.count,
        };
        log::info!("{report}");

        self.sum = 0.0;
        self.count = 0;
        report
    }

    /// One-line view of the running state without closing the interval.
    pub fn summary_line(&self) -> String {
        if self.count == 0 {
            return "Transferring cells: 0".to_string();
        }
        format!(
            "Transferring cells: {}, total {:.6e}, mean {:.6e} kg/(m³·s)",
            self.count,
            self.sum,
            self.sum / self.count as f64
        )
    }

    /// Print the running state to stdout.
    ///
    /// Console helper for drivers and interactive runs. Library code reports
    /// through [`end_of_step`](Self::end_of_step), which goes to `log`.
    pub fn print_summary(&self) {
        println!("=== Phase Change Summary ===");
        println!("{}", self.summary_line());
    }
}
