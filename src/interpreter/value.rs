use serde::Serialize;

/// The result of evaluating a node.
///
/// Which variant comes back depends on the node that was evaluated:
/// - programs produce a [`Value::Sequence`] with one entry per statement,
/// - empty statements produce [`Value::Null`],
/// - everything else produces a [`Value::Number`].
///
/// Serializes untagged, as `null`, a number, or an array of numbers and
/// nulls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// The value of an empty statement.
    Null,
    /// A numeric result.
    Number(f64),
    /// Per-statement results of a program, in body order.
    Sequence(Vec<Option<f64>>),
}

impl Value {
    /// Returns the number held by `self`, if it is a [`Value::Number`].
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for Value {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Null, Self::Number)
    }
}

impl From<Vec<Option<f64>>> for Value {
    fn from(value: Vec<Option<f64>>) -> Self {
        Self::Sequence(value)
    }
}

/// Formats a single statement result, `null` for an empty statement.
///
/// ## Example
/// ```
/// use tally::interpreter::value::format_result;
///
/// assert_eq!(format_result(Some(8.0)), "8");
/// assert_eq!(format_result(Some(2.5)), "2.5");
/// assert_eq!(format_result(None), "null");
/// ```
#[must_use]
pub fn format_result(result: Option<f64>) -> String {
    result.map_or_else(|| "null".to_string(), |n| n.to_string())
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Sequence(results) => {
                let items = results.iter()
                                   .map(|result| format_result(*result))
                                   .collect::<Vec<_>>()
                                   .join(", ");
                write!(f, "[{items}]")
            },
        }
    }
}
