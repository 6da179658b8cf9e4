/// Elapsed whole-second step count of a simulation run.
///
/// One step advances every point by its velocity exactly once, so the
/// step count reported by [`crate::sim::Simulator::run`] is also the
/// number of "seconds" in the puzzle's terms.
pub type Step = u64;
