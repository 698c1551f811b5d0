//! Configuration for a reduction request.

use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};

/// Units accepted when no explicit list is configured.
pub const DEFAULT_UNITS: [&str; 6] = ["px", "vh", "vw", "em", "rem", "%"];

static DEFAULT_UNIT_LIST: Lazy<Vec<String>> = Lazy::new(|| {
  DEFAULT_UNITS.iter().map(|u| u.to_string()).collect()
});

/// Which units the tokenizer accepts.
///
/// Serialized as `true` ([`UnitsOption::Default`]), `false`
/// ([`UnitsOption::Disabled`]), or an explicit array of unit names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawUnitsOption", into = "RawUnitsOption")]
pub enum UnitsOption {
  #[default]
  Default,
  Disabled,
  List(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawUnitsOption {
  Flag(bool),
  List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
  pub units: UnitsOption,
  /// If false, failures are logged and reported as an absent result
  /// rather than as an error.
  pub throws: bool,
}

impl UnitsOption {
  /// The allow-list this option resolves to, or `None` if unit
  /// checking is disabled.
  pub fn unit_list(&self) -> Option<&[String]> {
    match self {
      UnitsOption::Default => Some(DEFAULT_UNIT_LIST.as_slice()),
      UnitsOption::Disabled => None,
      UnitsOption::List(units) => Some(units.as_slice()),
    }
  }
}

impl Options {
  pub fn unit_list(&self) -> Option<&[String]> {
    self.units.unit_list()
  }

  pub fn with_units(mut self, units: UnitsOption) -> Self {
    self.units = units;
    self
  }

  pub fn with_throws(mut self, throws: bool) -> Self {
    self.throws = throws;
    self
  }
}

impl Default for Options {
  fn default() -> Self {
    Self {
      units: UnitsOption::Default,
      throws: true,
    }
  }
}

impl From<RawUnitsOption> for UnitsOption {
  fn from(raw: RawUnitsOption) -> Self {
    match raw {
      RawUnitsOption::Flag(true) => UnitsOption::Default,
      RawUnitsOption::Flag(false) => UnitsOption::Disabled,
      RawUnitsOption::List(units) => UnitsOption::List(units),
    }
  }
}

impl From<UnitsOption> for RawUnitsOption {
  fn from(units: UnitsOption) -> Self {
    match units {
      UnitsOption::Default => RawUnitsOption::Flag(true),
      UnitsOption::Disabled => RawUnitsOption::Flag(false),
      UnitsOption::List(units) => RawUnitsOption::List(units),
    }
  }
}

impl From<Vec<String>> for UnitsOption {
  fn from(units: Vec<String>) -> Self {
    UnitsOption::List(units)
  }
}
