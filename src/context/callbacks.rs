/*!
Callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.
*/

use crate::{oracle::SatOracle, structures::bounds::Bounds};

use super::GenericContext;

/// Terminates a solve, if true.
///
/// Called between iterations of a refinement loop.
pub type CallbackTerminate = dyn FnMut() -> bool;

/// Called with the bounds of a context each time the bounds are raised.
pub type CallbackBounds = dyn FnMut(&Bounds);

/// The callbacks of a context.
#[derive(Default)]
pub struct Callbacks {
    pub(crate) terminate: Option<Box<CallbackTerminate>>,
    pub(crate) bounds: Option<Box<CallbackBounds>>,
}

impl<O: SatOracle + Default> GenericContext<O> {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callbacks.terminate = Some(callback);
    }

    pub fn set_callback_bounds(&mut self, callback: Box<CallbackBounds>) {
        self.callbacks.bounds = Some(callback);
    }

    /// Whether the solve should stop, either from the terminate callback or the time limit.
    pub fn check_callback_terminate(&mut self) -> bool {
        let limit = self.config.time_limit.value;
        if !limit.is_zero() {
            if let Some(start) = self.counters.start {
                if start.elapsed() > limit {
                    return true;
                }
            }
        }

        match &mut self.callbacks.terminate {
            Some(callback) => callback(),
            None => false,
        }
    }

    pub(crate) fn dispatch_bounds(&mut self) {
        if let Some(callback) = &mut self.callbacks.bounds {
            callback(&self.bounds)
        }
    }

    /// Raises the unsatisfying mass of the bounds, and dispatches the bounds if raised.
    pub(crate) fn raise_unsat(&mut self, probability: f64) {
        if self.bounds.raise_unsat(probability) {
            self.dispatch_bounds();
        }
    }

    /// Raises the satisfying mass of the bounds, and dispatches the bounds if raised.
    pub(crate) fn raise_sat(&mut self, probability: f64) {
        if self.bounds.raise_sat(probability) {
            self.dispatch_bounds();
        }
    }
}
