use std::fmt::{self, Display, Formatter};

/// A number tagged with a (possibly empty) unit, such as `5px`, `-2vh`
/// or the dimensionless `3`.
///
/// A zero quantity never carries a unit, since `0px`, `0vh` and `0`
/// are all the same length. The constructor enforces this, so every
/// `Quantity` in existence satisfies it.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
  value: f64,
  unit: String,
}

impl Quantity {
  pub fn new(value: f64, unit: impl Into<String>) -> Self {
    if value == 0.0 {
      Self::zero()
    } else {
      Self { value, unit: unit.into() }
    }
  }

  pub fn unitless(value: f64) -> Self {
    Self::new(value, "")
  }

  pub fn zero() -> Self {
    Self { value: 0.0, unit: String::new() }
  }

  pub fn value(&self) -> f64 {
    self.value
  }

  pub fn unit(&self) -> &str {
    &self.unit
  }

  pub fn is_zero(&self) -> bool {
    self.value == 0.0
  }

  pub fn is_negative(&self) -> bool {
    self.value < 0.0
  }

  pub fn has_no_unit(&self) -> bool {
    self.unit.is_empty()
  }

  pub fn has_unit(&self) -> bool {
    !self.has_no_unit()
  }

  pub fn same_unit(&self, other: &Quantity) -> bool {
    self.unit == other.unit
  }

  /// A new quantity with the same unit and the given value.
  pub fn with_value(&self, value: f64) -> Self {
    Self::new(value, self.unit.clone())
  }

  /// Additive inverse.
  pub fn opposite(&self) -> Self {
    self.with_value(- self.value)
  }

  /// Multiplicative inverse. The unit is kept as-is; this is only
  /// meaningful for rewriting division by a dimensionless number as
  /// multiplication.
  pub fn inverse(&self) -> Self {
    self.with_value(self.value.recip())
  }

  /// The non-negative quantity with the same unit.
  pub fn abs(&self) -> Self {
    self.with_value(self.value.abs())
  }
}

impl Default for Quantity {
  fn default() -> Self {
    Self::zero()
  }
}

impl Display for Quantity {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    // Adding zero turns a stray -0.0 into 0.0.
    write!(f, "{}{}", self.value + 0.0, self.unit)
  }
}
