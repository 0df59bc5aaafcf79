// ============================================================================
// Format Configuration
// Text-rendering options for decimal values
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest precision accepted by [`FormatOptions::validate`].
pub const MAX_FORMAT_PRECISION: usize = 1 << 24;

// ============================================================================
// Float Style
// ============================================================================

/// Notation used when rendering a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloatStyle {
    /// Shortest of positional/scientific, trailing zeros suppressed
    /// - `precision` counts significant digits
    /// - `precision == 0` renders every stored digit
    #[default]
    General,

    /// Positional notation
    /// - `precision` counts digits after the decimal point
    Fixed,

    /// One leading digit, fraction, `e±NN` exponent
    /// - `precision` counts digits after the decimal point
    Scientific,
}

// ============================================================================
// Format Options
// ============================================================================

/// Options controlling how a value is rendered to text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Digit count, interpreted per [`FloatStyle`]
    pub precision: usize,

    /// Notation
    pub style: FloatStyle,

    /// Always emit a decimal point, keeping trailing zeros in general style
    pub show_point: bool,

    /// Emit `+` in front of non-negative values
    pub show_pos: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::round_trip()
    }
}

impl FormatOptions {
    /// Create options with the given precision and style
    pub fn new(precision: usize, style: FloatStyle) -> Self {
        Self {
            precision,
            style,
            show_point: false,
            show_pos: false,
        }
    }

    /// Builder method: Set the digit count
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set the notation
    pub fn with_style(mut self, style: FloatStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder method: Force a decimal point
    pub fn with_show_point(mut self, show_point: bool) -> Self {
        self.show_point = show_point;
        self
    }

    /// Builder method: Emit `+` for non-negative values
    pub fn with_show_pos(mut self, show_pos: bool) -> Self {
        self.show_pos = show_pos;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.precision > MAX_FORMAT_PRECISION {
            return Err(format!(
                "Precision {} exceeds the maximum of {}",
                self.precision, MAX_FORMAT_PRECISION
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FormatOptions {
    /// General notation with `significant_digits` digits
    pub fn general(significant_digits: usize) -> Self {
        Self::new(significant_digits, FloatStyle::General)
    }

    /// Positional notation with `fraction_digits` digits after the point
    pub fn fixed(fraction_digits: usize) -> Self {
        Self::new(fraction_digits, FloatStyle::Fixed)
    }

    /// Scientific notation with `fraction_digits` digits after the point
    pub fn scientific(fraction_digits: usize) -> Self {
        Self::new(fraction_digits, FloatStyle::Scientific)
    }

    /// Every stored digit, so that parsing the output restores the value exactly
    pub fn round_trip() -> Self {
        Self::general(0)
    }
}
