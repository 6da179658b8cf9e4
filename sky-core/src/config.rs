use crate::types::Step;

/// Simulation configuration.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Upper bound on simulated steps. Exceeding it aborts the run with
    /// [`crate::error::Error::NonConvergent`] instead of looping forever
    /// on an input whose field never starts expanding.
    pub max_steps: Step,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { max_steps: 1_000_000 }
    }
}
