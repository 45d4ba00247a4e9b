//! Line codec for the flat-file format.
//!
//! One record per line, fields in order `type,model,quantity,price`,
//! comma-separated, no quoting or escaping.

use crate::domain::HardwareRecord;

const FIELD_COUNT: usize = 4;

/// Why a line was not turned into a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    FieldCount(usize),
    Quantity,
    Price,
}

/// Format a record as one line, without the trailing newline.
///
/// `f64` Display prints the shortest representation that parses back to the
/// same value, so a written price always reloads exactly.
pub fn format_line(record: &HardwareRecord) -> String {
    format!(
        "{},{},{},{}",
        record.kind, record.model, record.quantity, record.price
    )
}

/// Parse one line, trimming every field. The record is not validated here.
pub fn parse_line(line: &str) -> Result<HardwareRecord, SkipReason> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SkipReason::Blank);
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(SkipReason::FieldCount(fields.len()));
    }

    let quantity = fields[2]
        .trim()
        .parse::<i32>()
        .map_err(|_| SkipReason::Quantity)?;
    let price = fields[3]
        .trim()
        .parse::<f64>()
        .map_err(|_| SkipReason::Price)?;

    Ok(HardwareRecord::new(
        fields[0].trim(),
        fields[1].trim(),
        quantity,
        price,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fields_in_order() {
        let line = format_line(&HardwareRecord::new("GPU", "RTX 3070", 20, 299.99));
        assert_eq!(line, "GPU,RTX 3070,20,299.99");
    }

    #[test]
    fn whole_prices_have_no_fraction() {
        let line = format_line(&HardwareRecord::new("SSD", "990 Pro", 3, 89.0));
        assert_eq!(line, "SSD,990 Pro,3,89");
        assert_eq!(parse_line(&line).unwrap().price, 89.0);
    }

    #[test]
    fn parses_a_written_line() {
        let record = parse_line("CPU,Ryzen 5,25,149.99\r").unwrap();
        assert_eq!(record, HardwareRecord::new("CPU", "Ryzen 5", 25, 149.99));
    }

    #[test]
    fn tolerates_spaces_around_numbers() {
        let record = parse_line("CPU,Ryzen 5, 25 , 149.99").unwrap();
        assert_eq!(record.quantity, 25);
        assert_eq!(record.price, 149.99);
    }

    #[test]
    fn trims_text_fields() {
        let record = parse_line("GPU , RTX 3070,20,299.99").unwrap();
        assert_eq!(record.kind, "GPU");
        assert_eq!(record.model, "RTX 3070");
    }

    #[test]
    fn reports_why_a_line_is_skipped() {
        assert_eq!(parse_line("   "), Err(SkipReason::Blank));
        assert_eq!(parse_line("GPU,RTX 3070,20"), Err(SkipReason::FieldCount(3)));
        assert_eq!(
            parse_line("GPU,RTX 3070, Ti,20,299.99"),
            Err(SkipReason::FieldCount(5))
        );
        assert_eq!(parse_line("GPU,RTX 3070,twenty,299.99"), Err(SkipReason::Quantity));
        assert_eq!(parse_line("GPU,RTX 3070,2.5,299.99"), Err(SkipReason::Quantity));
        assert_eq!(parse_line("GPU,RTX 3070,20,cheap"), Err(SkipReason::Price));
    }
}
