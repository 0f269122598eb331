/// Something that holds an expression and can receive its computed value.
///
/// The engine only reads the expression text and writes the result back; it
/// never constructs or owns the surrounding record.
///
/// # Example
/// ```
/// use calculable::{Calculable, calculate_expression};
///
/// struct Cell {
///     formula: String,
///     value:   Option<f64>,
/// }
///
/// impl Calculable for Cell {
///     fn expression(&self) -> &str {
///         &self.formula
///     }
///
///     fn set_result(&mut self, result: f64) {
///         self.value = Some(result);
///     }
/// }
///
/// let mut cell = Cell { formula: "6/3".into(),
///                       value:   None, };
/// calculate_expression(&mut cell).unwrap();
/// assert_eq!(cell.value, Some(2.0));
/// ```
pub trait Calculable {
    /// The raw expression text.
    fn expression(&self) -> &str;

    /// Receives the computed value. Only called when evaluation succeeds.
    fn set_result(&mut self, result: f64);
}
