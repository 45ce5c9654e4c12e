use std::fmt;

/// A single table value. Empty input fields read as `Missing`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    /// Build a cell from a raw CSV field.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            Cell::Missing
        } else {
            Cell::Text(field.to_string())
        }
    }

    pub fn number(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => Cell::Number(v),
            _ => Cell::Missing,
        }
    }

    /// Coerce to a number; anything unparseable becomes `Missing`.
    pub fn to_numeric(&self) -> Cell {
        match self {
            Cell::Text(s) => Cell::number(parse_number(s)),
            other => other.clone(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view of the cell. Numbers are rendered; missing is `None`.
    pub fn as_text(&self) -> Option<String> {
        (!self.is_missing()).then(|| self.to_string())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn is_integral(&self) -> bool {
        match self {
            Cell::Number(v) => v.fract() == 0.0 && v.abs() < 9.007_199_254_740_992e15,
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(v) => f.write_str(&format_float(*v)),
            Cell::Missing => Ok(()),
        }
    }
}

/// Parse a trimmed decimal number. `NaN` counts as unparseable.
pub fn parse_number(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// Shortest round-trip float with a mandatory fractional part (`2019.0`, `97.5`).
/// Exponents carry a sign and at least two digits (`1e+16`, `1.5e-05`).
pub fn format_float(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Integral value without a fractional part (`2019`).
pub fn format_integer(value: f64) -> String {
    format!("{}", value as i64)
}
