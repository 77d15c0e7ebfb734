//! Zentrale Konfiguration für den Kennlinien-Digitizer.
//!
//! `DigitizerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CurveMode, ModeMap};
use serde::{Deserialize, Serialize};

// ── Erfassung ───────────────────────────────────────────────────────

/// Einrast-Radius in Screen-Pixeln: Klick innerhalb dieses Abstands zu einer
/// Master-Q-Linie sperrt die Erfassung auf diese Linie.
pub const SNAP_RADIUS_PX: f64 = 15.0;
/// Hervorhebungs-Fenster in Screen-Pixeln für die Q-Linie unter dem Fadenkreuz.
pub const SNAP_WINDOW_PX: f64 = 20.0;
/// Toleranz, innerhalb derer zwei Förderstrom-Werte als derselbe Raster-Wert gelten.
pub const Q_TOLERANCE: f64 = 1e-3;

// ── Ausgleichsrechnung ─────────────────────────────────────────────

/// Standard-Polynomgrad für Kennlinien-Fits.
pub const FIT_DEGREE: usize = 3;
/// Segmentanzahl beim Abtasten einer gefitteten Kennlinie (Vorschau/Tabelle).
pub const CURVE_SAMPLE_STEPS: usize = 100;

// ── Kennlinien-Darstellung ─────────────────────────────────────────

/// Hilfslinien-Farbe der Q-H-Kennlinie (RGBA: Rot).
pub const CURVE_COLOR_QH: [f32; 4] = [1.0, 0.302, 0.302, 1.0];
/// Hilfslinien-Farbe der Q-P-Kennlinie (RGBA: Grün).
pub const CURVE_COLOR_QP: [f32; 4] = [0.18, 0.8, 0.443, 1.0];
/// Hilfslinien-Farbe der Q-NPSH-Kennlinie (RGBA: Blau).
pub const CURVE_COLOR_QN: [f32; 4] = [0.204, 0.596, 0.859, 1.0];
/// Hilfslinien-Farbe der Q-Eta-Kennlinie (RGBA: Orange).
pub const CURVE_COLOR_QE: [f32; 4] = [0.953, 0.612, 0.071, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Digitizer-Optionen.
/// Wird als `kennlinien_digitizer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitizerOptions {
    // ── Erfassung ───────────────────────────────────────────────
    /// Einrast-Radius für das Sperren auf eine Q-Linie (Screen-Pixel)
    pub snap_radius_px: f64,
    /// Hervorhebungs-Fenster für die Linie unter dem Fadenkreuz (Screen-Pixel)
    pub snap_window_px: f64,
    /// Toleranz für Q-Wert-Gleichheit (Ingenieureinheiten)
    pub q_tolerance: f64,

    // ── Fit ─────────────────────────────────────────────────────
    /// Polynomgrad für Kennlinien-Fits
    pub fit_degree: usize,
    /// Segmentanzahl beim Abtasten gefitteter Kennlinien
    #[serde(default = "default_curve_sample_steps")]
    pub curve_sample_steps: usize,

    // ── Darstellung ─────────────────────────────────────────────
    /// Hilfslinien-Farbe pro Kennlinie (RGBA)
    pub curve_colors: ModeMap<[f32; 4]>,
}

impl Default for DigitizerOptions {
    fn default() -> Self {
        Self {
            snap_radius_px: SNAP_RADIUS_PX,
            snap_window_px: SNAP_WINDOW_PX,
            q_tolerance: Q_TOLERANCE,

            fit_degree: FIT_DEGREE,
            curve_sample_steps: CURVE_SAMPLE_STEPS,

            curve_colors: ModeMap {
                qh: CURVE_COLOR_QH,
                qp: CURVE_COLOR_QP,
                qn: CURVE_COLOR_QN,
                qe: CURVE_COLOR_QE,
            },
        }
    }
}

/// Serde-Default für `curve_sample_steps` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_curve_sample_steps() -> usize {
    CURVE_SAMPLE_STEPS
}

impl DigitizerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("kennlinien_digitizer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("kennlinien_digitizer.toml")
    }

    /// Hilfslinien-Farbe einer Kennlinie.
    pub fn curve_color(&self, mode: CurveMode) -> [f32; 4] {
        *self.curve_colors.get(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_toml_roundtrip() {
        let mut opts = DigitizerOptions::default();
        opts.fit_degree = 2;
        opts.snap_radius_px = 22.0;

        let toml_str = toml::to_string_pretty(&opts).expect("Optionen müssen serialisierbar sein");
        let back: DigitizerOptions = toml::from_str(&toml_str).expect("TOML muss parsebar sein");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_sample_steps_falls_back_to_default() {
        // Alte Optionen-Datei ohne das Feld
        let toml_str = r#"
            snap_radius_px = 15.0
            snap_window_px = 20.0
            q_tolerance = 0.001
            fit_degree = 3

            [curve_colors]
            qh = [1.0, 0.302, 0.302, 1.0]
            qp = [0.18, 0.8, 0.443, 1.0]
            qn = [0.204, 0.596, 0.859, 1.0]
            qe = [0.953, 0.612, 0.071, 1.0]
        "#;
        let opts: DigitizerOptions = toml::from_str(toml_str).expect("TOML muss parsebar sein");
        assert_eq!(opts.curve_sample_steps, CURVE_SAMPLE_STEPS);
    }

    #[test]
    fn test_curve_color_accessor() {
        let opts = DigitizerOptions::default();
        assert_eq!(opts.curve_color(CurveMode::QN), CURVE_COLOR_QN);
    }
}
