use serde::{Deserialize, Serialize};

use crate::{Calculable, util::num::format_result};

/// A stored expression together with its rendered result.
///
/// `result` is empty until the expression has been evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Calculation {
    /// UUID assigned when the calculation is first stored.
    pub id:         String,
    /// The expression as submitted.
    pub expression: String,
    /// The result, rendered with [`format_result`].
    pub result:     String,
}

impl Calculation {
    /// Creates an unevaluated calculation.
    #[must_use]
    pub fn new(id: impl Into<String>, expression: impl Into<String>) -> Self {
        Self { id:         id.into(),
               expression: expression.into(),
               result:     String::new(), }
    }
}

impl Calculable for Calculation {
    fn expression(&self) -> &str {
        &self.expression
    }

    fn set_result(&mut self, result: f64) {
        self.result = format_result(result);
    }
}

impl std::fmt::Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}
