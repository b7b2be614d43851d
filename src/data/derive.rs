// SPDX-License-Identifier: PMPL-1.0-or-later

//! Derived per-1000 prevalence columns.

use tracing::debug;

use super::columns::{DERIVED, POPULATION};
use super::{Column, DataError, Frame};

/// Cases per 1000 population. A ward with no population has a rate of 0.
pub fn prevalence_per_1000(cases: f64, population: f64) -> f64 {
    if population <= 0.0 {
        0.0
    } else {
        cases * 1000.0 / population
    }
}

/// Append the three prevalence-per-1000 columns to `frame`.
///
/// Fails with [`DataError::MissingColumn`] if `Population` or a case-count
/// column is absent.
pub fn derived_columns(frame: Frame) -> Result<Frame, DataError> {
    let derived = {
        let population = frame.numbers(POPULATION)?;
        DERIVED
            .iter()
            .map(|&(name, cases_column)| {
                let cases = frame.numbers(cases_column)?;
                let rates = cases
                    .iter()
                    .zip(population)
                    .map(|(&c, &p)| prevalence_per_1000(c, p))
                    .collect();
                Ok((name, Column::Number(rates)))
            })
            .collect::<Result<Vec<_>, DataError>>()?
    };

    let mut frame = frame;
    for (name, column) in derived {
        frame = frame.with_column(name, column)?;
    }
    debug!(rows = frame.len(), "derived prevalence columns");
    Ok(frame)
}
