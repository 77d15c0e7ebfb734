//! Erfasste Kennlinien-Punkte in Ingenieureinheiten.

use serde::{Deserialize, Serialize};

/// Ein erfasster Punkt: Förderstrom und modusabhängige Größe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Förderstrom-Wert (gemeinsame X-Achse aller Kennlinien)
    pub q: f64,
    /// Abhängige Größe (Förderhöhe, Leistung, NPSH oder Wirkungsgrad)
    pub value: f64,
}

impl CurvePoint {
    /// Erstellt einen Punkt.
    pub fn new(q: f64, value: f64) -> Self {
        Self { q, value }
    }
}

/// Punktmenge eines Modus: nach Q sortiert, eindeutig pro Q-Wert
/// (innerhalb der Toleranz).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    points: Vec<CurvePoint>,
}

impl PointSet {
    /// Erstellt eine leere Punktmenge.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` wenn keine Punkte erfasst sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte (nach Q sortiert).
    pub fn as_slice(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Punkt an Listen-Position.
    pub fn get(&self, index: usize) -> Option<CurvePoint> {
        self.points.get(index).copied()
    }

    /// Iterator über alle Punkte.
    pub fn iter(&self) -> impl Iterator<Item = &CurvePoint> {
        self.points.iter()
    }

    /// `true` wenn bereits ein Punkt mit diesem Q-Wert existiert.
    pub fn contains_q(&self, q: f64, tolerance: f64) -> bool {
        self.points.iter().any(|p| (p.q - q).abs() < tolerance)
    }

    /// Wert am exakten Q-Raster-Wert, falls erfasst.
    pub fn value_at_q(&self, q: f64, tolerance: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|p| (p.q - q).abs() < tolerance)
            .map(|p| p.value)
    }

    /// Fügt einen Punkt ein und hält die Sortierung nach Q aufrecht.
    /// Eindeutigkeit pro Q-Wert stellt der Aufrufer sicher.
    pub fn insert(&mut self, point: CurvePoint) {
        self.points.push(point);
        self.points
            .sort_by(|a, b| a.q.partial_cmp(&b.q).unwrap_or(std::cmp::Ordering::Equal));
    }

    /// Entfernt den Punkt an Listen-Position.
    pub fn remove_index(&mut self, index: usize) -> Option<CurvePoint> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Entfernt alle Punkte mit diesem Q-Wert (Kaskaden-Löschung).
    /// Gibt die Anzahl der entfernten Punkte zurück.
    pub fn remove_at_q(&mut self, q: f64, tolerance: f64) -> usize {
        let before = self.points.len();
        self.points.retain(|p| (p.q - q).abs() >= tolerance);
        before - self.points.len()
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_sorted_by_q() {
        let mut set = PointSet::new();
        set.insert(CurvePoint::new(30.0, 3.0));
        set.insert(CurvePoint::new(10.0, 1.0));
        set.insert(CurvePoint::new(20.0, 2.0));

        let qs: Vec<f64> = set.iter().map(|p| p.q).collect();
        assert_eq!(qs, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_contains_q_uses_tolerance() {
        let mut set = PointSet::new();
        set.insert(CurvePoint::new(10.0, 1.0));

        assert!(set.contains_q(10.0005, 1e-3));
        assert!(!set.contains_q(10.01, 1e-3));
    }

    #[test]
    fn test_remove_at_q() {
        let mut set = PointSet::new();
        set.insert(CurvePoint::new(10.0, 1.0));
        set.insert(CurvePoint::new(20.0, 2.0));

        assert_eq!(set.remove_at_q(10.0, 1e-3), 1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.remove_at_q(99.0, 1e-3), 0);
    }

    #[test]
    fn test_value_at_q() {
        let mut set = PointSet::new();
        set.insert(CurvePoint::new(20.0, 5.0));
        assert_eq!(set.value_at_q(20.0, 1e-3), Some(5.0));
        assert_eq!(set.value_at_q(10.0, 1e-3), None);
    }
}
