//! Digitizer-Sitzungszustand — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{
    CalibrationSet, CalibrationStage, CurveExport, CurveFit, CurveMode, MasterGrid, ModeMap,
    PointSet,
};
use crate::shared::DigitizerOptions;
use glam::DVec2;

/// Zustand der Punkt-Erfassung.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CaptureLock {
    /// Q-Wert folgt frei der Pick-Position
    #[default]
    Free,
    /// Erfassung ist auf diesen Master-Q-Wert gesperrt
    Locked(f64),
}

/// Zentrier-Entscheidungen, die die Ansicht umsetzen soll.
///
/// Die Engine entscheidet nur *worauf* zentriert wird; Pan/Zoom-Mechanik
/// gehört dem Frontend. Der Host konsumiert den Request per
/// [`DigitizerState::take_view_request`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewRequest {
    /// Auf die neue Kalibrier-Stufe ausrichten (Stufe gerade abgeschlossen)
    RecenterStage(CalibrationStage),
    /// Auf eine gesperrte Q-Linie zentrieren (horizontale Bildkoordinate)
    CenterFlowLine {
        /// X-Bildkoordinate der Linie
        image_x: f64,
    },
}

/// Hauptzustand einer Digitalisier-Sitzung.
///
/// Wird einmal pro Dokument erstellt und ausschließlich von den Use-Cases
/// mutiert; jede Operation validiert vollständig, bevor sie etwas ändert.
pub struct DigitizerState {
    /// Alle Kalibrierachsen (Q global, abhängige Achse pro Modus)
    pub calibration: CalibrationSet,
    /// Erfasste Punkte pro Modus
    pub points: ModeMap<PointSet>,
    /// Das gemeinsame Förderstrom-Raster
    pub grid: MasterGrid,
    /// Aktiver Kennlinien-Modus
    pub current_mode: CurveMode,
    /// Sperre der Punkt-Erfassung auf eine Q-Linie
    pub lock: CaptureLock,
    /// Ausstehende Zentrier-Entscheidung für die Ansicht
    pub view_request: Option<ViewRequest>,
    /// Letzte zurückgewiesene Eingabe (für die Status-Anzeige)
    pub status_message: Option<String>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Toleranzen, Fit-Grad, Farben)
    pub options: DigitizerOptions,
    /// Übergabe-Paket des letzten erfolgreichen Exports
    pub last_export: Option<CurveExport>,
}

impl DigitizerState {
    /// Erstellt eine neue, leere Sitzung.
    pub fn new() -> Self {
        Self {
            calibration: CalibrationSet::new(),
            points: ModeMap::default(),
            grid: MasterGrid::new(),
            current_mode: CurveMode::QH,
            lock: CaptureLock::Free,
            view_request: None,
            status_message: None,
            command_log: CommandLog::new(),
            options: DigitizerOptions::default(),
            last_export: None,
        }
    }

    /// Punktmenge eines Modus (read-only, für Anzeige und Export).
    pub fn points(&self, mode: CurveMode) -> &PointSet {
        self.points.get(mode)
    }

    /// Gesamtzahl erfasster Punkte über alle Modi (für UI-Anzeige).
    pub fn total_point_count(&self) -> usize {
        self.points.iter().map(|(_, set)| set.len()).sum()
    }

    /// Der gesperrte Q-Wert, falls die Erfassung gesperrt ist.
    pub fn locked_q(&self) -> Option<f64> {
        match self.lock {
            CaptureLock::Free => None,
            CaptureLock::Locked(q) => Some(q),
        }
    }

    /// `true` wenn im aktiven Modus Punkte erfasst werden dürfen.
    pub fn is_capture_ready(&self) -> bool {
        self.calibration.is_capture_ready(self.current_mode)
    }

    /// Kalibrier-Stufe des aktiven Modus.
    pub fn stage(&self) -> CalibrationStage {
        self.calibration.stage(self.current_mode)
    }

    /// Konsumiert die ausstehende Zentrier-Entscheidung.
    pub fn take_view_request(&mut self) -> Option<ViewRequest> {
        self.view_request.take()
    }

    /// Raster-Wert, auf den das Fadenkreuz gerade einrasten würde.
    ///
    /// Wandelt das Hervorhebungs-Fenster (Screen-Pixel) über die Achsskala in
    /// Ingenieureinheiten um und sucht die nächstgelegene Q-Linie. `None`
    /// außerhalb des Fensters oder solange Q-Achse/Raster fehlen.
    pub fn snap_candidate(&self, pick: DVec2) -> Option<f64> {
        let flow = self.calibration.flow();
        let q_cursor = flow.value_at(pick)?;
        let units_per_px = flow.units_per_pixel()?;
        let threshold = self.options.snap_window_px * units_per_px;

        let (value, dist) = self.grid.nearest(q_cursor)?;
        (dist < threshold).then_some(value)
    }

    /// Fit-Kennzahlen eines Modus für die laufende Qualitätsanzeige.
    ///
    /// `None` unter 3 Punkten oder bei singulärem System; die fehlende Kurve
    /// ist ein gültiger, anzeigbarer Zustand.
    pub fn fit_preview(&self, mode: CurveMode) -> Option<CurveFit> {
        CurveFit::compute(self.points.get(mode).as_slice(), self.options.fit_degree)
    }
}

impl Default for DigitizerState {
    fn default() -> Self {
        Self::new()
    }
}
