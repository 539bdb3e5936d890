//! Time-integrator configuration handed to the external engine.

use crate::error::ModelError;

use super::Model;

/// Configuration of the generalized-alpha time integrator.
///
/// The builder does not integrate anything; it only records the values
/// the engine's time-step and iteration managers consume.
#[derive(Debug, Clone, Copy)]
pub struct TimeIntegration {
    pub initial_time: f64,
    /// Step size the integrator starts with.
    pub initial_step: f64,
    /// Upper bound the adaptive stepping may grow to.
    pub max_step: f64,
    pub final_time: f64,
    /// Number of intermediate states archived between initial and
    /// final time.
    pub archive_count: u32,
    /// Tolerance on the mechanical residual of the Newton iterations.
    pub residual_tolerance: f64,
}

impl TimeIntegration {
    fn validate(&self) -> Result<(), ModelError> {
        if self.final_time <= self.initial_time {
            return Err(ModelError::InvalidTimeIntegration(format!(
                "final time {} must exceed initial time {}",
                self.final_time, self.initial_time
            )));
        }
        if self.initial_step <= 0.0 || self.max_step <= 0.0 {
            return Err(ModelError::InvalidTimeIntegration(
                "time steps must be strictly positive".into(),
            ));
        }
        if self.residual_tolerance <= 0.0 {
            return Err(ModelError::InvalidTimeIntegration(
                "residual tolerance must be strictly positive".into(),
            ));
        }
        Ok(())
    }
}

impl Model {
    /// Records the time-integrator configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the time window or step sizes are
    /// inconsistent.
    pub fn set_time_integration(&mut self, config: TimeIntegration) -> Result<(), ModelError> {
        config.validate()?;
        self.time_integration = Some(config);
        Ok(())
    }

    /// Returns the recorded time-integrator configuration, if any.
    #[must_use]
    pub fn time_integration(&self) -> Option<&TimeIntegration> {
        self.time_integration.as_ref()
    }
}
