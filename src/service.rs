/// The stored calculation record.
pub mod calculation;
/// The storage seam and its in-memory implementation.
///
/// The service only talks to storage through the [`Repository`] trait, so a
/// persistent store can replace [`MemoryRepository`] without touching the
/// service.
pub mod repository;
/// List, get, create, update and delete operations over calculations.
pub mod core;

pub use calculation::Calculation;
pub use self::core::{CalculationService, ServiceConfig};
pub use repository::{MemoryRepository, Repository};
