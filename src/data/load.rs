// SPDX-License-Identifier: PMPL-1.0-or-later

//! CSV ingestion and validation.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use super::columns::{self, ColumnKind};
use super::{derived_columns, Column, DataError, Dataset, Frame};

/// Read, validate and derive the ward dataset at `path`.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let bytes = fs::read(path).map_err(|err| DataError::from_io(path, err))?;
    let fingerprint = blake3::hash(&bytes).to_hex().to_string();

    let frame = derived_columns(parse_csv(bytes.as_slice())?)?;
    info!(
        path = %path.display(),
        rows = frame.len(),
        fingerprint = %&fingerprint[..12],
        "loaded ward dataset"
    );

    Ok(Dataset {
        frame,
        source: Some(path.to_path_buf()),
        fingerprint: Some(fingerprint),
    })
}

/// Parse ward CSV into a [`Frame`].
///
/// Every column in [`columns::REQUIRED`] must be present and its values must
/// satisfy the column's [`ColumnKind`]. Other columns are kept, as numbers
/// when every value parses as one and as text otherwise.
pub fn parse_csv<R: io::Read>(reader: R) -> Result<Frame, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    for (name, _) in columns::REQUIRED {
        if !headers.iter().any(|h| h == name) {
            return Err(DataError::MissingColumn(name.to_string()));
        }
    }

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in rdr.records() {
        let record = record?;
        for (values, field) in raw.iter_mut().zip(record.iter()) {
            values.push(field.to_string());
        }
    }

    let mut frame = Frame::new();
    for (name, values) in headers.iter().zip(raw) {
        let column = match columns::kind_of(name) {
            Some(ColumnKind::Label) => label_column(values)?,
            Some(kind) => numeric_column(name, kind, &values)?,
            None => extra_column(values),
        };
        frame = frame.with_column(name.clone(), column)?;
    }

    Ok(frame)
}

fn label_column(values: Vec<String>) -> Result<Column, DataError> {
    for (i, value) in values.iter().enumerate() {
        if values[..i].contains(value) {
            return Err(DataError::DuplicateWard(value.clone()));
        }
    }
    Ok(Column::Text(values))
}

fn numeric_column(name: &str, kind: ColumnKind, values: &[String]) -> Result<Column, DataError> {
    values
        .iter()
        .enumerate()
        .map(|(row, raw)| {
            parse_value(kind, raw).map_err(|reason| DataError::InvalidValue {
                row: row + 1,
                column: name.to_string(),
                value: raw.clone(),
                reason,
            })
        })
        .collect::<Result<Vec<f64>, DataError>>()
        .map(Column::Number)
}

fn extra_column(values: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = values.iter().map(|v| v.parse::<f64>().ok()).collect();
    match parsed {
        Some(numbers) if !numbers.is_empty() => Column::Number(numbers),
        _ => Column::Text(values),
    }
}

fn parse_value(kind: ColumnKind, raw: &str) -> Result<f64, &'static str> {
    let value: f64 = raw.parse().map_err(|_| "expected a number")?;
    if !value.is_finite() {
        return Err("expected a finite number");
    }
    match kind {
        ColumnKind::Count if value < 0.0 || value.fract() != 0.0 => {
            Err("expected a whole number ≥ 0")
        }
        ColumnKind::NonNegative if value < 0.0 => Err("must not be negative"),
        ColumnKind::Percent if !(0.0..=100.0).contains(&value) => {
            Err("must be between 0 and 100")
        }
        ColumnKind::Positive if value <= 0.0 => Err("must be greater than 0"),
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Ward,Population,Diabetes_Cases,Hypertension_Cases,Flu_Cases,Access_to_Sanitation_Pct,Avg_Income_USD,Num_Clinics,Avg_Age";

    fn csv_with(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn parses_required_columns() {
        let src = csv_with(&["Ward 1,1200,60,150,30,82.5,410,2,34.1", "Ward 2, 800 ,10,90,12,64,355.5,1,29"]);
        let frame = parse_csv(src.as_bytes()).unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.text("Ward").unwrap(), &["Ward 1".to_string(), "Ward 2".to_string()]);
        assert_eq!(frame.numbers("Population").unwrap(), &[1200.0, 800.0]);
        assert_eq!(frame.numbers("Avg_Income_USD").unwrap(), &[410.0, 355.5]);
    }

    #[test]
    fn missing_required_column_is_reported() {
        let src = "Ward,Population\nA,10\n";
        let err = parse_csv(src.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(ref c) if c == "Diabetes_Cases"));
    }

    #[test]
    fn invalid_values_are_reported_with_row_and_column() {
        let src = csv_with(&["A,10,1,1,1,50,100,1,30", "B,ten,1,1,1,50,100,1,30"]);
        match parse_csv(src.as_bytes()).unwrap_err() {
            DataError::InvalidValue { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Population");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn range_constraints() {
        assert!(parse_value(ColumnKind::Count, "-1").is_err());
        assert!(parse_value(ColumnKind::Count, "1.5").is_err());
        assert_eq!(parse_value(ColumnKind::Count, "12").unwrap(), 12.0);
        assert!(parse_value(ColumnKind::Percent, "100.1").is_err());
        assert_eq!(parse_value(ColumnKind::Percent, "100").unwrap(), 100.0);
        assert!(parse_value(ColumnKind::Positive, "0").is_err());
        assert!(parse_value(ColumnKind::NonNegative, "NaN").is_err());
    }

    #[test]
    fn duplicate_wards_are_rejected() {
        let src = csv_with(&["A,10,1,1,1,50,100,1,30", "A,20,1,1,1,50,100,1,30"]);
        assert!(matches!(parse_csv(src.as_bytes()), Err(DataError::DuplicateWard(ref w)) if w == "A"));
    }

    #[test]
    fn extra_columns_are_kept() {
        let src = format!("{HEADER},Zone,Households\nA,10,1,1,1,50,100,1,30,North,4\n");
        let frame = parse_csv(src.as_bytes()).unwrap();
        assert!(matches!(frame.column("Zone"), Some(Column::Text(_))));
        assert_eq!(frame.numbers("Households").unwrap(), &[4.0]);
    }

    #[test]
    fn ragged_rows_are_a_csv_error() {
        let src = csv_with(&["A,10,1,1,1,50,100,1"]);
        assert!(matches!(parse_csv(src.as_bytes()), Err(DataError::Csv(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_dataset(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
