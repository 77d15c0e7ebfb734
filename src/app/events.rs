//! Digitizer-Commands: mutierende Schritte, die zentral ausgeführt werden.

use crate::core::CurveMode;
use glam::DVec2;

/// Ziel-Achse eines Kalibrier-Commands.
///
/// `Dependent` meint immer die Achse des aktiven Modus; die Bedienoberfläche
/// kennt nur "X" und "Y", nie die Achse eines fremden Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisTarget {
    /// Die globale Förderstrom-Achse
    Flow,
    /// Die abhängige Achse des aktiven Modus
    Dependent,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Bildkoordinaten (`pick`) liefert die Pick-Quelle des Frontends; Pan/Zoom
/// und die Screen-zu-Bild-Umrechnung bleiben dort.
#[derive(Debug, Clone)]
pub enum DigitizerCommand {
    /// Ursprungs-Anker einer Achse an der Pick-Position setzen
    FixOrigin {
        /// Ziel-Achse
        axis: AxisTarget,
        /// Pick-Position in Bildkoordinaten
        pick: DVec2,
    },
    /// Maßstabs-Anker einer Achse fixieren
    FixScale {
        /// Ziel-Achse
        axis: AxisTarget,
        /// Pick-Position in Bildkoordinaten
        pick: DVec2,
    },
    /// Ursprungs-Beschriftung einer Achse ändern
    SetAxisValue0 {
        /// Ziel-Achse
        axis: AxisTarget,
        /// Neuer Ingenieurwert
        value: f64,
    },
    /// Maßstabs-Beschriftung einer Achse ändern
    SetAxisValue1 {
        /// Ziel-Achse
        axis: AxisTarget,
        /// Neuer Ingenieurwert
        value: f64,
    },
    /// Punkt an der Pick-Position im aktiven Modus erfassen
    CapturePoint {
        /// Pick-Position in Bildkoordinaten
        pick: DVec2,
    },
    /// Erfassung auf die nächstgelegene Q-Linie sperren bzw. entsperren
    ToggleLock {
        /// Horizontale Pick-Position in Bildkoordinaten
        pick_x: f64,
        /// Bild-Pixel pro Screen-Pixel beim aktuellen Zoom
        image_px_per_screen_px: f64,
    },
    /// Aktiven Kennlinien-Modus wechseln
    SwitchMode {
        /// Der neue Modus
        mode: CurveMode,
    },
    /// Punkt eines Modus löschen (im Master-Modus kaskadiert über alle Modi)
    DeletePoint {
        /// Modus, dessen Punkt gelöscht wird
        mode: CurveMode,
        /// Listen-Position innerhalb des Modus
        index: usize,
    },
    /// Alle Punkte und das Master-Raster löschen, Kalibrierung behalten
    ClearPoints,
    /// Kompletter Sitzungs-Reset: Kalibrierung, Punkte, Raster, Sperre
    ResetAll,
    /// Kennlinien auf das Master-Raster ausrichten und Übergabe-Paket bauen
    ExportCurves,
}
