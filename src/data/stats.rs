// SPDX-License-Identifier: PMPL-1.0-or-later

//! Summary statistics over numeric columns.

use super::Frame;

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(sum(values) / values.len() as f64)
    }
}

/// Pearson correlation coefficient.
///
/// `None` when the slices differ in length, hold fewer than two values, or
/// either side has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mx = mean(xs)?;
    let my = mean(ys)?;

    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }

    if vx == 0.0 || vy == 0.0 {
        return None;
    }
    Some((cov / (vx.sqrt() * vy.sqrt())).clamp(-1.0, 1.0))
}

/// Pairwise Pearson correlation over every numeric column of `frame`.
///
/// Returns the column names and a square matrix in the same order.
pub fn correlation_matrix(frame: &Frame) -> (Vec<String>, Vec<Vec<Option<f64>>>) {
    let names: Vec<&str> = frame.numeric_columns();
    let columns: Vec<&[f64]> = names
        .iter()
        .filter_map(|name| frame.numbers(name).ok())
        .collect();

    let matrix = columns
        .iter()
        .map(|a| columns.iter().map(|b| pearson(a, b)).collect())
        .collect();

    (names.into_iter().map(str::to_string).collect(), matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Column;

    #[test]
    fn mean_and_sum() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn pearson_perfect_and_inverse() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        assert!((pearson(&xs, &[2.0, 4.0, 6.0, 8.0]).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&xs, &[8.0, 6.0, 4.0, 2.0]).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_degenerate_inputs() {
        assert_eq!(pearson(&[1.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0, 1.0], &[2.0, 3.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[2.0]), None);
    }

    #[test]
    fn matrix_covers_numeric_columns_only() {
        let frame = Frame::new()
            .with_column("Ward", Column::Text(vec!["A".into(), "B".into(), "C".into()]))
            .unwrap()
            .with_column("x", Column::Number(vec![1.0, 2.0, 3.0]))
            .unwrap()
            .with_column("y", Column::Number(vec![3.0, 2.0, 1.0]))
            .unwrap();
        let (names, matrix) = correlation_matrix(&frame);
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(matrix.len(), 2);
        assert!((matrix[0][0].unwrap() - 1.0).abs() < 1e-12);
        assert!((matrix[0][1].unwrap() + 1.0).abs() < 1e-12);
    }
}
