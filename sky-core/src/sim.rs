//! The simulation loop and convergence detection.
//!
//! A run advances every point in lock-step, one whole-second step at a
//! time, and measures the field's [`BoundingBox`] after each step. The
//! heuristic area of that box shrinks while the points fly towards their
//! alignment and grows again once they pass it; the step just before the
//! first growth is reported as the converged configuration.

use log::debug;

use crate::bounds::BoundingBox;
use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::point::{Point, PointField};
use crate::types::Step;

/// Final state of a converged run.
///
/// ### Fields
/// - `seconds` - Number of steps taken to reach the minimal-area
///   configuration.
/// - `bounds` - Bounding box of the field at that configuration.
/// - `points` - The points at that configuration (velocities unchanged).
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub seconds: Step,
    pub bounds: BoundingBox,
    pub points: Vec<Point>,
}

/// Owns a [`PointField`] and drives it to its minimal-area step.
#[derive(Debug)]
pub struct Simulator {
    field: PointField,
    cfg: SimConfig,
}

impl Simulator {
    /// Creates a simulator over a non-empty field.
    ///
    /// ### Errors
    /// [`Error::EmptyInput`] if the field contains no points; this is
    /// checked up front so a bad input fails before any stepping happens.
    pub fn new(field: PointField, cfg: SimConfig) -> Result<Self> {
        if field.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self { field, cfg })
    }

    /// Runs the field to its minimal-heuristic-area step.
    ///
    /// Each iteration advances every point once, measures the bounding box
    /// and computes [`BoundingBox::heuristic_area`]. The first time a
    /// positive previously recorded area is exceeded, the field has started
    /// expanding: the last move is undone and the state one step earlier is
    /// returned, with `seconds` equal to the number of moves kept.
    ///
    /// There is no initial-area seed; the very first step's area is always
    /// accepted as the baseline.
    ///
    /// The minimum found is a minimum of the heuristic quantity, not
    /// necessarily of the true geometric area. A field whose heuristic area
    /// never exceeds a positive baseline — a single stationary point is the
    /// simplest example — never triggers the stop rule and ends with
    /// [`Error::NonConvergent`] once `cfg.max_steps` iterations have run.
    ///
    /// ### Errors
    /// [`Error::NonConvergent`] if no expansion is detected within
    /// `cfg.max_steps` steps.
    pub fn run(mut self) -> Result<SimulationResult> {
        let mut prev_area: Option<i64> = None;
        let mut steps: Step = 0;

        while steps < self.cfg.max_steps {
            steps += 1;
            self.field.advance_all();

            // `new` rejects empty fields; keep the guard instead of unwrapping.
            let Some(bounds) = BoundingBox::from_points(&self.field.points) else {
                return Err(Error::EmptyInput);
            };
            let area = bounds.heuristic_area();
            debug!("step {steps}: heuristic area {area}");

            match prev_area {
                Some(prev) if prev > 0 && area > prev => {
                    // The field is expanding again; the previous step was
                    // the minimal configuration.
                    self.field.rewind_all();
                    let seconds = steps - 1;
                    let Some(bounds) = BoundingBox::from_points(&self.field.points) else {
                        return Err(Error::EmptyInput);
                    };
                    debug!(
                        "converged after {seconds} steps, heuristic area {}",
                        bounds.heuristic_area()
                    );
                    return Ok(SimulationResult {
                        seconds,
                        bounds,
                        points: self.field.points,
                    });
                }
                _ => prev_area = Some(area),
            }
        }

        Err(Error::NonConvergent {
            steps: self.cfg.max_steps,
        })
    }
}
