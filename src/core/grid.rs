//! Master-Raster: die verbindliche Menge der Förderstrom-Werte, an denen
//! alle Kennlinien abgetastet werden.

use super::error::DigitizerError;
use super::mode::CurveMode;

/// Das gemeinsame Förderstrom-Raster aller Modi.
///
/// Der Modus, der den allerersten Punkt liefert, wird Master-Modus: nur seine
/// freien Erfassungen dürfen das Raster erweitern. Alle anderen Modi rasten
/// auf bestehende Werte ein. Wird das Raster leer, ist auch der Master-Modus
/// wieder frei.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasterGrid {
    values: Vec<f64>,
    master_mode: Option<CurveMode>,
}

impl MasterGrid {
    /// Erstellt ein leeres Raster.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            master_mode: None,
        }
    }

    /// Anzahl der Raster-Werte.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` wenn noch kein Wert erfasst wurde.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only Sicht auf die Raster-Werte (aufsteigend sortiert).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Der Modus, der das Raster definiert (`None` solange leer).
    pub fn master_mode(&self) -> Option<CurveMode> {
        self.master_mode
    }

    /// Kleinster Raster-Wert.
    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Größter Raster-Wert.
    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// `true` wenn der Q-Wert (innerhalb der Toleranz) im Raster liegt.
    pub fn contains(&self, q: f64, tolerance: f64) -> bool {
        self.values.iter().any(|&v| (v - q).abs() < tolerance)
    }

    /// Nächstgelegener Raster-Wert zu `q`, mit Abstand.
    pub fn nearest(&self, q: f64) -> Option<(f64, f64)> {
        self.values
            .iter()
            .map(|&v| (v, (v - q).abs()))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Nimmt einen frei erfassten Q-Wert in das Raster auf.
    ///
    /// Der erste Wert überhaupt ernennt den erfassenden Modus zum Master.
    /// Danach darf nur noch der Master-Modus erweitern; jeder andere Modus
    /// wird ohne Mutation zurückgewiesen. Wertnahe Duplikate werden bewusst
    /// nicht zusammengefasst: jede freie Master-Erfassung erzeugt eine Linie.
    pub fn try_insert(&mut self, q: f64, mode: CurveMode) -> Result<(), DigitizerError> {
        match self.master_mode {
            None => {
                self.master_mode = Some(mode);
            }
            Some(master) if master != mode => {
                return Err(DigitizerError::ForeignAxisCreation {
                    master,
                    attempted: mode,
                });
            }
            Some(_) => {}
        }

        self.values.push(q);
        self.values
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Ok(())
    }

    /// Entfernt einen Raster-Wert (innerhalb der Toleranz).
    ///
    /// Läuft das Raster dabei leer, wird der Master-Modus freigegeben.
    /// Gibt `true` zurück, wenn mindestens ein Wert entfernt wurde.
    pub fn remove(&mut self, q: f64, tolerance: f64) -> bool {
        let before = self.values.len();
        self.values.retain(|&v| (v - q).abs() >= tolerance);
        if self.values.is_empty() {
            self.master_mode = None;
        }
        before != self.values.len()
    }

    /// Leert das Raster und gibt den Master-Modus frei.
    pub fn clear(&mut self) {
        self.values.clear();
        self.master_mode = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_insert_names_master() {
        let mut grid = MasterGrid::new();
        assert_eq!(grid.master_mode(), None);

        grid.try_insert(120.0, CurveMode::QH).unwrap();
        assert_eq!(grid.master_mode(), Some(CurveMode::QH));
        assert_eq!(grid.values(), &[120.0]);
    }

    #[test]
    fn test_foreign_mode_rejected_without_mutation() {
        let mut grid = MasterGrid::new();
        grid.try_insert(120.0, CurveMode::QH).unwrap();

        let err = grid.try_insert(80.0, CurveMode::QP).unwrap_err();
        assert_eq!(
            err,
            DigitizerError::ForeignAxisCreation {
                master: CurveMode::QH,
                attempted: CurveMode::QP,
            }
        );
        assert_eq!(grid.values(), &[120.0]);
        assert_eq!(grid.master_mode(), Some(CurveMode::QH));
    }

    #[test]
    fn test_master_inserts_stay_sorted_and_keep_near_duplicates() {
        let mut grid = MasterGrid::new();
        grid.try_insert(120.0, CurveMode::QH).unwrap();
        grid.try_insert(80.0, CurveMode::QH).unwrap();
        grid.try_insert(80.0002, CurveMode::QH).unwrap();

        assert_eq!(grid.len(), 3);
        assert_eq!(grid.values(), &[80.0, 80.0002, 120.0]);
    }

    #[test]
    fn test_remove_frees_master_when_empty() {
        let mut grid = MasterGrid::new();
        grid.try_insert(120.0, CurveMode::QH).unwrap();

        assert!(grid.remove(120.0, 1e-3));
        assert!(grid.is_empty());
        assert_eq!(grid.master_mode(), None);

        // Neues erstes Einfügen darf einen anderen Master ernennen
        grid.try_insert(50.0, CurveMode::QP).unwrap();
        assert_eq!(grid.master_mode(), Some(CurveMode::QP));
    }

    #[test]
    fn test_nearest() {
        let mut grid = MasterGrid::new();
        grid.try_insert(10.0, CurveMode::QH).unwrap();
        grid.try_insert(20.0, CurveMode::QH).unwrap();

        let (value, dist) = grid.nearest(13.0).unwrap();
        assert_eq!(value, 10.0);
        assert!((dist - 3.0).abs() < 1e-12);
        assert!(MasterGrid::new().nearest(5.0).is_none());
    }

    #[test]
    fn test_min_max() {
        let mut grid = MasterGrid::new();
        grid.try_insert(120.0, CurveMode::QH).unwrap();
        grid.try_insert(80.0, CurveMode::QH).unwrap();
        assert_eq!(grid.min(), Some(80.0));
        assert_eq!(grid.max(), Some(120.0));
    }
}
