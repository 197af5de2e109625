//! Fixed dependency graph of the explorer's cells.
//!
//! Seven cells with declared dependencies. Updating a source cell marks it
//! and everything downstream dirty; [`Notebook::evaluate`] recomputes the
//! dirty cells in topological order, each exactly once.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::constants::{DEFAULT_SEED, PREVIEW_ROWS};
use crate::dataset::{generate_seeded, Dataset};
use crate::error::CorrError;
use crate::metric::correlation;
use crate::observer::{CellEvent, CellObserver, CellSubject};
use crate::params::{ParamId, Params};
use crate::plot::ScatterPlot;
use crate::preview::{preview, PreviewRow};
use crate::summary::render_summary;

/// A node of the dependency graph.
///
/// Variant order is a valid topological order, so `Ord` and iteration over a
/// `BTreeSet<CellId>` both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellId {
    Seed,
    Parameters,
    Dataset,
    Correlation,
    Summary,
    Plot,
    Preview,
}

impl CellId {
    pub const TOPOLOGICAL_ORDER: [CellId; 7] = [
        CellId::Seed,
        CellId::Parameters,
        CellId::Dataset,
        CellId::Correlation,
        CellId::Summary,
        CellId::Plot,
        CellId::Preview,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Parameters => "parameters",
            Self::Dataset => "dataset",
            Self::Correlation => "correlation",
            Self::Summary => "summary",
            Self::Plot => "plot",
            Self::Preview => "preview",
        }
    }

    /// Direct inputs of this cell.
    #[must_use]
    pub fn dependencies(self) -> &'static [CellId] {
        match self {
            Self::Seed | Self::Parameters => &[],
            Self::Dataset => &[Self::Seed, Self::Parameters],
            Self::Correlation | Self::Plot | Self::Preview => &[Self::Dataset],
            Self::Summary => &[Self::Parameters, Self::Correlation],
        }
    }

    /// Cells that read this cell directly.
    #[must_use]
    pub fn dependents(self) -> Vec<CellId> {
        Self::TOPOLOGICAL_ORDER
            .into_iter()
            .filter(|cell| cell.dependencies().contains(&self))
            .collect()
    }

    /// Transitive dependents, excluding the cell itself.
    #[must_use]
    pub fn downstream(self) -> BTreeSet<CellId> {
        let mut seen = BTreeSet::new();
        let mut stack = self.dependents();
        while let Some(cell) = stack.pop() {
            if seen.insert(cell) {
                stack.extend(cell.dependents());
            }
        }
        seen
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cell values plus the dirty set.
///
/// Each derived cell is `None` until its first evaluation.
pub struct Notebook {
    seed: u64,
    params: Params,
    dataset: Option<Dataset>,
    correlation: Option<Result<f64, CorrError>>,
    summary: Option<String>,
    plot: Option<ScatterPlot>,
    preview: Option<Vec<PreviewRow>>,
    dirty: BTreeSet<CellId>,
    generation: u64,
    subject: CellSubject,
}

impl Notebook {
    /// A notebook with every cell dirty.
    #[must_use]
    pub fn new(params: Params, seed: u64) -> Self {
        Self {
            seed,
            params,
            dataset: None,
            correlation: None,
            summary: None,
            plot: None,
            preview: None,
            dirty: CellId::TOPOLOGICAL_ORDER.into_iter().collect(),
            generation: 0,
            subject: CellSubject::new(),
        }
    }

    /// Default parameters with seed 42.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Params::default(), DEFAULT_SEED)
    }

    /// Register an observer for cell events.
    pub fn register(&self, observer: Arc<dyn CellObserver>) {
        self.subject.register(observer);
    }

    /// Set one parameter. Returns `Ok(false)` when the value is unchanged.
    pub fn set_param(&mut self, id: ParamId, value: f64) -> Result<bool, CorrError> {
        let next = self.params.with(id, value)?;
        Ok(self.set_params(next))
    }

    /// Replace the parameter snapshot. Returns `false` when nothing changed.
    pub fn set_params(&mut self, params: Params) -> bool {
        if params == self.params {
            return false;
        }
        self.params = params;
        self.invalidate(CellId::Parameters);
        true
    }

    /// Move one parameter a single step, saturating at its bounds.
    pub fn step_param(&mut self, id: ParamId, up: bool) -> bool {
        self.set_params(self.params.stepped(id, up))
    }

    /// Replace the seed. Returns `false` when unchanged.
    pub fn set_seed(&mut self, seed: u64) -> bool {
        if seed == self.seed {
            return false;
        }
        self.seed = seed;
        self.invalidate(CellId::Seed);
        true
    }

    /// Mark a cell and its downstream dirty.
    pub fn invalidate(&mut self, cell: CellId) {
        self.dirty.insert(cell);
        self.dirty.extend(cell.downstream());
    }

    /// Recompute every dirty cell in topological order.
    ///
    /// Returns the recomputed cells; empty when nothing was dirty.
    pub fn evaluate(&mut self) -> Vec<CellId> {
        if self.dirty.is_empty() {
            return Vec::new();
        }
        self.generation += 1;
        let dirty = std::mem::take(&mut self.dirty);
        let mut recomputed = Vec::with_capacity(dirty.len());

        for cell in dirty {
            let start = Instant::now();
            self.compute(cell);
            self.subject.notify(&CellEvent {
                cell,
                generation: self.generation,
                duration: start.elapsed(),
            });
            recomputed.push(cell);
        }
        recomputed
    }

    fn compute(&mut self, cell: CellId) {
        match cell {
            // Sources hold their value directly.
            CellId::Seed | CellId::Parameters => {}
            CellId::Dataset => {
                self.dataset = Some(generate_seeded(&self.params, self.seed));
            }
            CellId::Correlation => {
                self.correlation = self.dataset.as_ref().map(correlation);
            }
            CellId::Summary => {
                self.summary = self
                    .correlation
                    .as_ref()
                    .map(|r| render_summary(&self.params, r.as_ref().copied()));
            }
            CellId::Plot => {
                self.plot = self.dataset.as_ref().map(ScatterPlot::from_dataset);
            }
            CellId::Preview => {
                self.preview = self.dataset.as_ref().map(|ds| preview(ds, PREVIEW_ROWS));
            }
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn params(&self) -> Params {
        self.params
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    #[must_use]
    pub fn correlation(&self) -> Option<Result<f64, &CorrError>> {
        self.correlation.as_ref().map(|r| r.as_ref().copied())
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub fn plot(&self) -> Option<&ScatterPlot> {
        self.plot.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&[PreviewRow]> {
        self.preview.as_deref()
    }

    /// Number of evaluation passes that recomputed at least one cell.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_dirty(&self, cell: CellId) -> bool {
        self.dirty.contains(&cell)
    }

    #[must_use]
    pub fn dirty_cells(&self) -> Vec<CellId> {
        self.dirty.iter().copied().collect()
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::with_defaults()
    }
}
