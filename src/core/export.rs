//! Ausrichtung der Punktmengen auf das Master-Raster und das
//! Übergabe-Paket für die nachgelagerte Berechnungs-/Bericht-Engine.

use serde::Serialize;

use super::mode::{CurveMode, ModeMap};
use super::points::{CurvePoint, PointSet};
use super::regression;

/// Projiziert die Punktmenge eines Modus auf das Master-Raster.
///
/// Für jeden Raster-Wert in Reihenfolge: der erfasste Wert des Modus, sonst
/// `0.0`. Ein Modus ohne Punkte liefert `None` (keine Kennlinie zu
/// exportieren). Vollständigkeit prüft der Aufrufer vorab; diese Funktion
/// füllt stillschweigend mit Nullen auf.
pub fn align_to_grid(master_q: &[f64], points: &PointSet, tolerance: f64) -> Option<Vec<f64>> {
    if points.is_empty() {
        return None;
    }
    Some(
        master_q
            .iter()
            .map(|&q| points.value_at_q(q, tolerance).unwrap_or(0.0))
            .collect(),
    )
}

/// Fit-Kennzahlen einer exportierten Kennlinie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveFit {
    /// Polynomkoeffizienten in aufsteigenden Potenzen
    pub coefficients: Vec<f64>,
    /// Wurzel des mittleren quadratischen Residuums
    pub rmse: f64,
    /// Bestimmtheitsmaß
    pub r_squared: f64,
}

impl CurveFit {
    /// Berechnet Fit und Kennzahlen einer Punktmenge.
    ///
    /// `None` unter 3 Punkten oder bei singulärem Gleichungssystem; die
    /// fehlende Kurve ist ein gültiger, anzeigbarer Zustand.
    pub fn compute(points: &[CurvePoint], degree: usize) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }
        let coefficients = regression::fit_polynomial(points, degree)?;
        let rmse = regression::rmse(points, &coefficients)?;
        let r_squared = regression::r_squared(points, &coefficients)?;
        Some(Self {
            coefficients,
            rmse,
            r_squared,
        })
    }
}

/// Eine auf das Raster ausgerichtete Kennlinie im Export-Paket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedCurve {
    /// Werte in Raster-Reihenfolge, `0.0` wo der Modus keinen Punkt hat
    pub values: Vec<f64>,
    /// Fit-Kennzahlen (ab 3 Punkten, sofern das System nicht singulär ist)
    pub fit: Option<CurveFit>,
}

/// Fehlbestand eines angefangenen, aber unvollständigen Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeShortfall {
    /// Der unvollständige Modus
    pub mode: CurveMode,
    /// Bereits erfasste Punkte
    pub captured: usize,
    /// Größe des Master-Rasters
    pub required: usize,
}

/// Das vollständige Übergabe-Paket eines Exports.
///
/// Serialisierbar; das konkrete Ablage-Format gehört dem nachgelagerten
/// Storage-Adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveExport {
    /// Das Master-Raster in aufsteigender Reihenfolge
    pub master_q: Vec<f64>,
    /// Kleinster Raster-Wert
    pub q_min: f64,
    /// Größter Raster-Wert
    pub q_max: f64,
    /// Ausgerichtete Kennlinien; `None` für Modi ohne Punkte
    pub curves: ModeMap<Option<ExportedCurve>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_zero_fills_missing_grid_values() {
        let mut points = PointSet::new();
        points.insert(CurvePoint::new(20.0, 5.0));

        let aligned = align_to_grid(&[10.0, 20.0, 30.0], &points, 1e-3).unwrap();
        assert_eq!(aligned, vec![0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_align_empty_mode_yields_none() {
        assert!(align_to_grid(&[10.0, 20.0], &PointSet::new(), 1e-3).is_none());
    }

    #[test]
    fn test_align_matches_within_tolerance() {
        let mut points = PointSet::new();
        points.insert(CurvePoint::new(10.0004, 3.0));

        let aligned = align_to_grid(&[10.0], &points, 1e-3).unwrap();
        assert_eq!(aligned, vec![3.0]);
    }

    #[test]
    fn test_curve_fit_needs_three_points() {
        let mut points = PointSet::new();
        points.insert(CurvePoint::new(10.0, 1.0));
        points.insert(CurvePoint::new(20.0, 2.0));
        assert!(CurveFit::compute(points.as_slice(), 3).is_none());

        points.insert(CurvePoint::new(30.0, 3.5));
        let fit = CurveFit::compute(points.as_slice(), 3).expect("Fit muss existieren");
        assert_eq!(fit.coefficients.len(), 3);
        assert!(fit.rmse < 1e-9);
    }

    #[test]
    fn test_export_payload_serializes() {
        let export = CurveExport {
            master_q: vec![10.0, 20.0],
            q_min: 10.0,
            q_max: 20.0,
            curves: ModeMap::from_fn(|_| None),
        };
        let json = serde_json::to_string(&export).expect("Export muss serialisierbar sein");
        assert!(json.contains("\"master_q\":[10.0,20.0]"));
        assert!(json.contains("\"q_min\":10.0"));
    }
}
