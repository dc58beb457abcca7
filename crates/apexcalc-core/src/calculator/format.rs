//! Conversion between operand strings and `f64`.

/// Display text shown for any invalid operation.
pub const ERROR_DISPLAY: &str = "Error";

/// Decimal places kept when formatting a result.
pub const DEFAULT_DECIMAL_PLACES: u32 = 8;

/// Scaled magnitudes below this round exactly with `floor(x + 0.5)`.
const EXACT_SCALED_LIMIT: f64 = (1u64 << 50) as f64;

/// Upper bound for configurable precision. Beyond this `f64` has no
/// meaningful digits left for typical results.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Formats computed values for the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    decimal_places: u32,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl Formatter {
    /// Precision is clamped to [`MAX_DECIMAL_PLACES`].
    pub fn new(decimal_places: u32) -> Self {
        Self {
            decimal_places: decimal_places.min(MAX_DECIMAL_PLACES),
        }
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Format a value, or `"Error"` when it is NaN or infinite.
    ///
    /// The value is rounded once to the configured number of decimal
    /// places and printed as the shortest decimal that parses back to the
    /// rounded `f64`. Whole numbers print without a fractional part and
    /// trailing zeros never appear, so formatting a parsed result again
    /// yields the same text.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return ERROR_DISPLAY.to_string();
        }
        let rounded = self.round(value);
        // -0 displays as 0
        if rounded == 0.0 {
            "0".to_string()
        } else {
            format!("{rounded}")
        }
    }

    /// Round to the configured precision.
    ///
    /// Half toward positive infinity while the scaled value is exact in
    /// an `f64`; beyond that, nearest via fixed-point formatting.
    fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimal_places as i32);
        let scaled = value * scale;
        if scaled.abs() < EXACT_SCALED_LIMIT {
            return (scaled + 0.5).floor() / scale;
        }
        format!("{:.*}", self.decimal_places as usize, value)
            .parse()
            .unwrap_or(value)
    }
}

/// Format with the default eight decimal places.
pub fn format_result(value: f64) -> String {
    Formatter::default().format(value)
}

/// Parse an operand string. Unparseable text becomes NaN, which every
/// computation then reports as a non-finite result.
pub fn parse_operand(operand: &str) -> f64 {
    operand.parse::<f64>().unwrap_or(f64::NAN)
}
