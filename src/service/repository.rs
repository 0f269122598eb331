use crate::{
    error::{ServiceError, service_error::ServiceResult},
    service::Calculation,
};

/// Storage for calculations.
pub trait Repository {
    /// Returns up to `limit` calculations, most recently stored first.
    fn calculations(&self, limit: usize) -> ServiceResult<Vec<Calculation>>;

    /// Returns the calculation stored under `id`.
    fn calculation(&self, id: &str) -> ServiceResult<Calculation>;

    /// Removes the calculation stored under `id`.
    fn delete(&mut self, id: &str) -> ServiceResult<()>;

    /// Stores a new calculation and returns it as stored.
    fn save(&mut self, calc: Calculation) -> ServiceResult<Calculation>;

    /// Replaces the expression and result of an existing calculation.
    fn update(&mut self, calc: Calculation) -> ServiceResult<Calculation>;
}

/// A [`Repository`] kept in memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    calculations: Vec<Calculation>,
}

impl MemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored calculations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }

    fn position(&self, id: &str) -> ServiceResult<usize> {
        self.calculations
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ServiceError::NotFound { id: id.to_string() })
    }
}

impl Repository for MemoryRepository {
    fn calculations(&self, limit: usize) -> ServiceResult<Vec<Calculation>> {
        Ok(self.calculations.iter().rev().take(limit).cloned().collect())
    }

    fn calculation(&self, id: &str) -> ServiceResult<Calculation> {
        let index = self.position(id)?;
        Ok(self.calculations[index].clone())
    }

    fn delete(&mut self, id: &str) -> ServiceResult<()> {
        let index = self.position(id)?;
        self.calculations.remove(index);
        Ok(())
    }

    fn save(&mut self, calc: Calculation) -> ServiceResult<Calculation> {
        self.calculations.push(calc.clone());
        Ok(calc)
    }

    fn update(&mut self, calc: Calculation) -> ServiceResult<Calculation> {
        let index = self.position(&calc.id)?;
        let stored = &mut self.calculations[index];
        stored.expression.clone_from(&calc.expression);
        stored.result.clone_from(&calc.result);
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: &str, expression: &str, result: &str) -> Calculation {
        Calculation { id:         id.to_string(),
                      expression: expression.to_string(),
                      result:     result.to_string(), }
    }

    fn repository() -> MemoryRepository {
        let mut repo = MemoryRepository::new();
        repo.save(stored("a", "1+1", "2")).unwrap();
        repo.save(stored("b", "2+2", "4")).unwrap();
        repo.save(stored("c", "3+3", "6")).unwrap();
        repo
    }

    #[test]
    fn lists_newest_first_up_to_limit() {
        let repo = repository();
        let ids: Vec<_> = repo.calculations(2).unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["c", "b"]);
        assert_eq!(repo.calculations(10).unwrap().len(), 3);
    }

    #[test]
    fn get_and_delete_by_id() {
        let mut repo = repository();
        assert_eq!(repo.calculation("b").unwrap().result, "4");
        repo.delete("b").unwrap();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.calculation("b"),
                   Err(ServiceError::NotFound { id: "b".to_string() }));
        assert_eq!(repo.delete("b"), Err(ServiceError::NotFound { id: "b".to_string() }));
    }

    #[test]
    fn update_keeps_position() {
        let mut repo = repository();
        let updated = repo.update(stored("a", "5*5", "25")).unwrap();
        assert_eq!(updated, stored("a", "5*5", "25"));
        assert_eq!(repo.calculations(10).unwrap().last(), Some(&updated));
    }

    #[test]
    fn update_of_missing_id_fails() {
        let mut repo = MemoryRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.update(stored("z", "1", "1")),
                   Err(ServiceError::NotFound { id: "z".to_string() }));
    }
}
