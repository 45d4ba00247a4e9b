//! Hardware stock records.
//!
//! A [`HardwareRecord`] is one stock-keeping unit: a hardware type, a model
//! name that identifies it, the quantity on hand and the unit price.
//!
//! # Examples
//!
//! ```
//! use hwstock::domain::HardwareRecord;
//! use hwstock::error::Error;
//!
//! let gpu = HardwareRecord::new("GPU", "RTX 3070", 20, 299.99);
//! assert!(gpu.validate().is_ok());
//!
//! let broken = HardwareRecord::new("GPU", "RTX 3070", -1, 299.99);
//! assert!(matches!(
//!     broken.validate(),
//!     Err(Error::InvalidField { field: "quantity", .. })
//! ));
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Characters that cannot appear in text fields.
///
/// The flat-file format separates fields with commas and records with
/// newlines and has no escaping, so these are rejected for every backend.
/// Text fields also may not start or end with whitespace, which the
/// flat-file reader trims.
pub const FORBIDDEN_TEXT_CHARS: [char; 3] = [',', '\n', '\r'];

/// One stock-keeping unit of computer hardware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareRecord {
    /// Short descriptive category such as "GPU" or "CPU".
    #[serde(rename = "type")]
    pub kind: String,
    /// Unique identifier and natural sort key.
    pub model: String,
    /// Units on hand.
    pub quantity: i32,
    /// Unit price.
    pub price: f64,
}

impl HardwareRecord {
    /// Build a record without checking it. [`validate`](Self::validate) runs on insertion.
    pub fn new(kind: impl Into<String>, model: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            kind: kind.into(),
            model: model.into(),
            quantity,
            price,
        }
    }

    /// Check the field rules every stored record must satisfy.
    ///
    /// # Errors
    /// Returns [`Error::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        check_text("type", &self.kind)?;
        check_text("model", &self.model)?;

        if self.quantity < 0 {
            return Err(Error::InvalidField {
                field: "quantity",
                reason: format!("must be non-negative, got {}", self.quantity),
            });
        }
        if !self.price.is_finite() {
            return Err(Error::InvalidField {
                field: "price",
                reason: format!("must be a finite number, got {}", self.price),
            });
        }
        if self.price < 0.0 {
            return Err(Error::InvalidField {
                field: "price",
                reason: format!("must be non-negative, got {}", self.price),
            });
        }
        Ok(())
    }

    /// Whether `query` names this record's model, ignoring ASCII case.
    #[must_use]
    pub fn matches_model(&self, query: &str) -> bool {
        self.model.eq_ignore_ascii_case(query)
    }

    /// Byte-wise ordering by model, the listing order for every backend.
    #[must_use]
    pub fn cmp_by_model(&self, other: &Self) -> Ordering {
        self.model.cmp(&other.model)
    }
}

fn check_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidField {
            field,
            reason: "cannot be empty".into(),
        });
    }
    if value.trim() != value {
        return Err(Error::InvalidField {
            field,
            reason: "cannot start or end with whitespace".into(),
        });
    }
    if let Some(c) = value.chars().find(|c| FORBIDDEN_TEXT_CHARS.contains(c)) {
        return Err(Error::InvalidField {
            field,
            reason: format!("cannot contain {c:?}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_field(record: &HardwareRecord) -> &'static str {
        match record.validate() {
            Err(Error::InvalidField { field, .. }) => field,
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn accepts_zero_quantity_and_price() {
        assert!(HardwareRecord::new("RAM", "DDR4 8GB", 0, 0.0).validate().is_ok());
    }

    #[test]
    fn rejects_negative_numbers() {
        assert_eq!(invalid_field(&HardwareRecord::new("GPU", "RTX 3070", -5, 1.0)), "quantity");
        assert_eq!(invalid_field(&HardwareRecord::new("GPU", "RTX 3070", 5, -0.01)), "price");
    }

    #[test]
    fn rejects_non_finite_price() {
        assert_eq!(invalid_field(&HardwareRecord::new("GPU", "RTX 3070", 1, f64::NAN)), "price");
        assert_eq!(
            invalid_field(&HardwareRecord::new("GPU", "RTX 3070", 1, f64::INFINITY)),
            "price"
        );
    }

    #[test]
    fn rejects_blank_text_fields() {
        assert_eq!(invalid_field(&HardwareRecord::new("", "RTX 3070", 1, 1.0)), "type");
        assert_eq!(invalid_field(&HardwareRecord::new("GPU", "   ", 1, 1.0)), "model");
    }

    #[test]
    fn rejects_surrounding_whitespace_in_text_fields() {
        assert_eq!(invalid_field(&HardwareRecord::new(" GPU", "RTX 3070", 1, 1.0)), "type");
        assert_eq!(invalid_field(&HardwareRecord::new("GPU", "RTX 3070\t", 1, 1.0)), "model");
        assert!(HardwareRecord::new("GPU", "RTX 3070 Ti", 1, 1.0).validate().is_ok());
    }

    #[test]
    fn rejects_delimiters_in_text_fields() {
        assert_eq!(invalid_field(&HardwareRecord::new("GPU", "RTX 3070, Ti", 1, 1.0)), "model");
        assert_eq!(invalid_field(&HardwareRecord::new("G\nPU", "RTX 3070", 1, 1.0)), "type");
    }

    #[test]
    fn model_match_ignores_ascii_case_only() {
        let record = HardwareRecord::new("GPU", "RTX 3070", 1, 1.0);
        assert!(record.matches_model("rtx 3070"));
        assert!(record.matches_model("RTX 3070"));
        assert!(!record.matches_model("rtx3070"));
    }

    #[test]
    fn ordering_is_byte_wise() {
        let rtx = HardwareRecord::new("GPU", "RTX 3070", 1, 1.0);
        let ryzen = HardwareRecord::new("CPU", "Ryzen 5", 1, 1.0);
        assert_eq!(rtx.cmp_by_model(&ryzen), Ordering::Less);
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(HardwareRecord::new("GPU", "RTX 3070", 20, 299.99)).unwrap();
        assert_eq!(json["type"], "GPU");
        assert_eq!(json["quantity"], 20);
    }
}
