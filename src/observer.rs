//! Step observer trait for monitoring rope simulation progress.

/// Hooks into the phases of `Rope::step`.
///
/// All methods default to no-ops; implement only what you need (debug
/// overlays, profiling, tests).
pub trait StepObserver {
    /// Called after every particle has been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each full constraint sweep.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called after particles have been clamped into the bounds.
    fn on_bounds(&mut self) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts hook invocations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepCounter {
    pub integrations: usize,
    pub constraint_iterations: usize,
    pub bounds_passes: usize,
    pub steps: usize,
}

impl StepObserver for StepCounter {
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }

    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.constraint_iterations += 1;
    }

    fn on_bounds(&mut self) {
        self.bounds_passes += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
