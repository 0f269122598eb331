use log::{info, warn};
use uuid::Uuid;

use crate::{
    calculate_expression,
    error::{ServiceError, service_error::ServiceResult},
    service::{Calculation, Repository},
};

/// Default number of calculations returned by
/// [`CalculationService::last_calculations`].
pub const HISTORY_LIMIT: usize = 10;

/// Tunables of the calculation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// How many calculations a history listing returns at most.
    pub history_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { history_limit: HISTORY_LIMIT }
    }
}

/// Evaluates submitted expressions and keeps them in a [`Repository`].
///
/// Every stored calculation carries the result of its current expression;
/// an expression that cannot be computed is never stored.
///
/// ## Usage
///
/// ```
/// use calculable::service::{CalculationService, MemoryRepository};
///
/// let mut service = CalculationService::new(MemoryRepository::new());
/// let calc = service.create("2+3*4").unwrap();
/// assert_eq!(calc.result, "20");
///
/// let calc = service.update(&calc.id, "2+3").unwrap();
/// assert_eq!(calc.result, "5");
/// ```
pub struct CalculationService<R> {
    repository: R,
    config:     ServiceConfig,
}

impl<R: Repository> CalculationService<R> {
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, ServiceConfig::default())
    }

    /// Creates a service with an explicit configuration.
    #[must_use]
    pub const fn with_config(repository: R, config: ServiceConfig) -> Self {
        Self { repository, config }
    }

    /// The underlying repository.
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the most recently stored calculations, newest first.
    ///
    /// # Errors
    /// [`ServiceError::EmptyHistory`] if nothing is stored.
    pub fn last_calculations(&self) -> ServiceResult<Vec<Calculation>> {
        let calcs = self.repository.calculations(self.config.history_limit)?;
        if calcs.is_empty() {
            return Err(ServiceError::EmptyHistory);
        }
        Ok(calcs)
    }

    /// Returns the calculation stored under `id`.
    pub fn calculation(&self, id: &str) -> ServiceResult<Calculation> {
        let id = normalize_id(id)?;
        self.repository.calculation(&id)
    }

    /// Evaluates `expression` and stores it under a fresh id.
    ///
    /// # Errors
    /// [`ServiceError::Validation`] carrying the exact evaluation error if the
    /// expression cannot be computed. Nothing is stored in that case.
    pub fn create(&mut self, expression: &str) -> ServiceResult<Calculation> {
        let mut calc = Calculation::new(Uuid::new_v4().to_string(), expression);
        evaluate(&mut calc)?;

        let calc = self.repository.save(calc)?;
        info!("stored calculation {}: {calc}", calc.id);
        Ok(calc)
    }

    /// Replaces the expression of an existing calculation and re-evaluates it.
    ///
    /// # Errors
    /// [`ServiceError::Validation`] if the new expression cannot be computed,
    /// in which case the stored calculation is left as it was;
    /// [`ServiceError::NotFound`] if nothing is stored under `id`.
    pub fn update(&mut self, id: &str, expression: &str) -> ServiceResult<Calculation> {
        let id = normalize_id(id)?;
        let mut calc = Calculation::new(id, expression);
        evaluate(&mut calc)?;

        let calc = self.repository.update(calc)?;
        info!("updated calculation {}: {calc}", calc.id);
        Ok(calc)
    }

    /// Removes the calculation stored under `id`.
    pub fn delete(&mut self, id: &str) -> ServiceResult<()> {
        let id = normalize_id(id)?;
        self.repository.delete(&id)?;
        info!("deleted calculation {id}");
        Ok(())
    }
}

fn evaluate(calc: &mut Calculation) -> ServiceResult<()> {
    calculate_expression(&mut *calc).map_err(|e| {
                                        warn!("rejected expression {:?}: {e}", calc.expression);
                                        ServiceError::Validation(e)
                                    })
}

/// Parses any accepted UUID spelling into the lowercase hyphenated form ids
/// are stored under.
fn normalize_id(id: &str) -> ServiceResult<String> {
    Uuid::parse_str(id).map(|uuid| uuid.to_string())
                       .map_err(|_| ServiceError::InvalidId { id: id.to_string() })
}
