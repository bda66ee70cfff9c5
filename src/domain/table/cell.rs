// ============================================================
// CELL VALUES
// ============================================================
// Decoded cell content before and after text coercion

/// Rectangular grid of text cells, the final import output
pub type Grid = Vec<Vec<String>>;

/// Grid as produced by a decoder, before text coercion
pub type RawGrid = Vec<Vec<CellValue>>;

/// A single decoded cell, typed as the source format delivered it
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Coerce to the stored text form.
    ///
    /// Null and `false` become empty text and `true` becomes `"1"`, the same
    /// cast the table storage has always applied to imported cells.
    pub fn into_text(self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(true) => "1".to_string(),
            CellValue::Bool(false) => String::new(),
            CellValue::Int(value) => value.to_string(),
            CellValue::Float(value) => float_text(value),
            CellValue::Text(value) => value,
        }
    }
}

/// Float as the storage cast writes it: shortest round-trip digits, with
/// exponent form (`1.0E+300`, `1.0E-5`) outside `[1e-4, 1e15)`.
fn float_text(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e15).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{:E}", value);
    let Some((mantissa, exponent)) = formatted.split_once('E') else {
        return formatted;
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.to_string()
    } else {
        format!("{}.0", mantissa)
    };
    let sign = if exponent.starts_with('-') { "" } else { "+" };
    format!("{}E{}{}", mantissa, sign, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_coercion() {
        assert_eq!(CellValue::Null.into_text(), "");
        assert_eq!(CellValue::Bool(true).into_text(), "1");
        assert_eq!(CellValue::Bool(false).into_text(), "");
        assert_eq!(CellValue::Int(-42).into_text(), "-42");
        assert_eq!(CellValue::Float(1.5).into_text(), "1.5");
        assert_eq!(CellValue::Float(2.0).into_text(), "2");
        assert_eq!(CellValue::text("abc").into_text(), "abc");
    }

    #[test]
    fn test_extreme_floats_use_exponent_form() {
        assert_eq!(CellValue::Float(1e300).into_text(), "1.0E+300");
        assert_eq!(CellValue::Float(-2.5e20).into_text(), "-2.5E+20");
        assert_eq!(CellValue::Float(1e15).into_text(), "1.0E+15");
        assert_eq!(CellValue::Float(1e-5).into_text(), "1.0E-5");
        assert_eq!(CellValue::Float(123456789012345.0).into_text(), "123456789012345");
        assert_eq!(CellValue::Float(0.0001).into_text(), "0.0001");
        assert_eq!(CellValue::Float(0.0).into_text(), "0");
        assert_eq!(CellValue::Float(f64::INFINITY).into_text(), "INF");
    }
}
