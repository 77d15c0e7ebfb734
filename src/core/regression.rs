//! Polynom-Ausgleichsrechnung über Normalgleichungen.
//!
//! X-Werte werden vor dem Aufstellen der Vandermonde-Summen auf max|x|
//! normiert, das hält die Konditionierung auch bei großen Förderstrom-Werten
//! im Griff. Gelöst wird per Gauß-Elimination mit Spaltenpivotisierung;
//! ein singuläres System liefert `None` (kein Fit), niemals einen Fehler.

use super::points::CurvePoint;

/// Unter dieser Pivot-Schwelle gilt das Gleichungssystem als singulär.
const PIVOT_EPS: f64 = 1e-18;

/// Kleinste-Quadrate-Polynomfit durch die Punktmenge.
///
/// Effektiver Grad ist `min(degree, n-1)`. Weniger als 2 Punkte oder ein
/// singuläres System (z.B. mehrfach derselbe Q-Wert) ergeben `None`.
/// Koeffizienten in aufsteigenden Potenzen: `c[0] + c[1]·x + c[2]·x² + …`
pub fn fit_polynomial(points: &[CurvePoint], degree: usize) -> Option<Vec<f64>> {
    let n = points.len();
    if n < 2 {
        return None;
    }
    let actual_degree = degree.min(n - 1);
    let size = actual_degree + 1;

    // Normierung gegen schlechte Konditionierung
    let max_x = points.iter().map(|p| p.q.abs()).fold(0.0_f64, f64::max);
    let max_x = if max_x == 0.0 { 1.0 } else { max_x };

    // Potenzsummen Σx^i und Σx^i·y über den normierten x-Werten
    let mut x_sums = vec![0.0_f64; 2 * actual_degree + 1];
    let mut y_sums = vec![0.0_f64; size];
    for p in points {
        let x = p.q / max_x;
        let mut xp = 1.0;
        for i in 0..=2 * actual_degree {
            x_sums[i] += xp;
            if i < size {
                y_sums[i] += xp * p.value;
            }
            xp *= x;
        }
    }

    // Augmentierte Normalgleichungs-Matrix
    let mut matrix = vec![vec![0.0_f64; size + 1]; size];
    for (i, row) in matrix.iter_mut().enumerate() {
        for j in 0..size {
            row[j] = x_sums[i + j];
        }
        row[size] = y_sums[i];
    }

    // Gauß-Elimination mit Spaltenpivotisierung
    for i in 0..size {
        let mut pivot_row = i;
        for j in i + 1..size {
            if matrix[j][i].abs() > matrix[pivot_row][i].abs() {
                pivot_row = j;
            }
        }
        matrix.swap(i, pivot_row);

        if matrix[i][i].abs() < PIVOT_EPS {
            return None;
        }

        let (pivot_part, rest) = matrix.split_at_mut(i + 1);
        let pivot = &pivot_part[i];
        for row in rest.iter_mut() {
            let factor = row[i] / pivot[i];
            for k in i..=size {
                row[k] -= pivot[k] * factor;
            }
        }
    }

    // Rückwärtseinsetzen
    let mut coeffs = vec![0.0_f64; size];
    for i in (0..size).rev() {
        let mut s = 0.0;
        for j in i + 1..size {
            s += matrix[i][j] * coeffs[j];
        }
        coeffs[i] = (matrix[i][size] - s) / matrix[i][i];
    }

    // Entnormieren: c_i = b_i / max_x^i
    for (i, c) in coeffs.iter_mut().enumerate() {
        *c /= max_x.powi(i as i32);
    }
    Some(coeffs)
}

/// Wertet das Polynom (aufsteigende Potenzen) an der Stelle `x` aus.
pub fn eval_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Wurzel des mittleren quadratischen Residuums des Fits gegen die Punkte.
/// `None` bei weniger als 2 Punkten oder fehlendem Fit.
pub fn rmse(points: &[CurvePoint], coeffs: &[f64]) -> Option<f64> {
    if points.len() < 2 || coeffs.is_empty() {
        return None;
    }
    let sum_sq: f64 = points
        .iter()
        .map(|p| {
            let e = p.value - eval_polynomial(coeffs, p.q);
            e * e
        })
        .sum();
    Some((sum_sq / points.len() as f64).sqrt())
}

/// Bestimmtheitsmaß R² des Fits gegen die Punkte.
///
/// `None` bei weniger als 2 Punkten oder fehlendem Fit. Verschwindet die
/// Gesamtvarianz (konstante Daten), ist das Ergebnis exakt `1.0`.
pub fn r_squared(points: &[CurvePoint], coeffs: &[f64]) -> Option<f64> {
    if points.len() < 2 || coeffs.is_empty() {
        return None;
    }
    let mean = points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for p in points {
        let e = p.value - eval_polynomial(coeffs, p.q);
        ss_res += e * e;
        let d = p.value - mean;
        ss_tot += d * d;
    }

    if ss_tot == 0.0 {
        return Some(1.0);
    }
    Some(1.0 - ss_res / ss_tot)
}

/// Tastet das Polynom gleichmäßig über `[q_min, q_max]` ab
/// (`steps` Segmente, also `steps + 1` Punkte), für Tabellierung und Vorschau.
pub fn sample_curve(coeffs: &[f64], q_min: f64, q_max: f64, steps: usize) -> Vec<CurvePoint> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let q = q_min + (q_max - q_min) * (i as f64 / steps as f64);
            CurvePoint::new(q, eval_polynomial(coeffs, q))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cubic(x: f64) -> f64 {
        x * x * x - 2.0 * x * x + x - 5.0
    }

    #[test]
    fn test_exact_cubic_recovered() {
        let points: Vec<CurvePoint> = [1.0, 2.0, 3.0, 4.0]
            .iter()
            .map(|&x| CurvePoint::new(x, cubic(x)))
            .collect();

        let coeffs = fit_polynomial(&points, 3).expect("Fit muss existieren");
        let expected = [-5.0, 1.0, -2.0, 1.0];
        assert_eq!(coeffs.len(), 4);
        for (c, e) in coeffs.iter().zip(expected) {
            assert_relative_eq!(*c, e, epsilon = 1e-6);
        }

        let r2 = r_squared(&points, &coeffs).unwrap();
        assert_relative_eq!(r2, 1.0, epsilon = 1e-9);
        assert!(rmse(&points, &coeffs).unwrap() < 1e-6);
    }

    #[test]
    fn test_two_points_fall_back_to_line() {
        let points = [CurvePoint::new(0.0, 1.0), CurvePoint::new(10.0, 21.0)];
        let coeffs = fit_polynomial(&points, 3).expect("Fit muss existieren");

        // Effektiver Grad 1, nicht 3
        assert_eq!(coeffs.len(), 2);
        assert_relative_eq!(coeffs[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_inputs_yield_none() {
        assert!(fit_polynomial(&[], 3).is_none());
        assert!(fit_polynomial(&[CurvePoint::new(1.0, 1.0)], 3).is_none());
        assert!(rmse(&[CurvePoint::new(1.0, 1.0)], &[1.0]).is_none());
        assert!(r_squared(&[], &[1.0]).is_none());
        assert!(rmse(&[CurvePoint::new(0.0, 0.0), CurvePoint::new(1.0, 1.0)], &[]).is_none());
    }

    #[test]
    fn test_singular_system_yields_none() {
        // Zweimal derselbe Q-Wert: keine eindeutige Gerade
        let points = [CurvePoint::new(2.0, 1.0), CurvePoint::new(2.0, 3.0)];
        assert!(fit_polynomial(&points, 3).is_none());
    }

    #[test]
    fn test_constant_data_has_r_squared_one() {
        let points = [
            CurvePoint::new(1.0, 7.0),
            CurvePoint::new(2.0, 7.0),
            CurvePoint::new(3.0, 7.0),
        ];
        let coeffs = fit_polynomial(&points, 2).unwrap();
        assert_relative_eq!(r_squared(&points, &coeffs).unwrap(), 1.0);
    }

    #[test]
    fn test_normalization_handles_large_flow_values() {
        // Quadratisch auf Werten um 1e6; ohne Normierung wäre das System
        // praktisch singulär
        let f = |x: f64| 3.0 + 0.5 * x + 2e-6 * x * x;
        let points: Vec<CurvePoint> = [1.0e6, 1.1e6, 1.2e6, 1.3e6]
            .iter()
            .map(|&x| CurvePoint::new(x, f(x)))
            .collect();

        let coeffs = fit_polynomial(&points, 2).expect("Fit muss existieren");
        for p in &points {
            assert_relative_eq!(
                eval_polynomial(&coeffs, p.q),
                p.value,
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn test_all_zero_x_normalizes_by_one() {
        // max|x| = 0 fällt auf Divisor 1 zurück, zwei identische Punkte
        // bleiben trotzdem singulär
        let points = [CurvePoint::new(0.0, 1.0), CurvePoint::new(0.0, 1.0)];
        assert!(fit_polynomial(&points, 1).is_none());
    }

    #[test]
    fn test_eval_polynomial_increasing_powers() {
        // 2 + 3x + x²
        assert_relative_eq!(eval_polynomial(&[2.0, 3.0, 1.0], 2.0), 12.0);
    }

    #[test]
    fn test_sample_curve_covers_range() {
        let samples = sample_curve(&[0.0, 1.0], 10.0, 20.0, 100);
        assert_eq!(samples.len(), 101);
        assert_relative_eq!(samples[0].q, 10.0);
        assert_relative_eq!(samples[100].q, 20.0);
        assert_relative_eq!(samples[50].value, 15.0);
    }
}
