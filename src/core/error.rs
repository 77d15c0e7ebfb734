//! Validierungsfehler der Digitalisierung.
//!
//! Alle Varianten sind erwartbare, behebbare Bedienfehler und tragen die
//! Information, mit der sich die Eingabe korrigieren lässt. Kein Fehler
//! hinterlässt einen teilweise mutierten Zustand.

use super::export::ModeShortfall;
use super::mode::CurveMode;
use thiserror::Error;

/// Identifiziert eine Kalibrierachse in Fehlermeldungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisId {
    /// Die globale Förderstrom-Achse (horizontal, alle Modi gemeinsam)
    Flow,
    /// Die abhängige Achse eines Modus (vertikal, pro Modus)
    Dependent(CurveMode),
}

impl std::fmt::Display for AxisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisId::Flow => f.write_str("Q-Achse"),
            AxisId::Dependent(mode) => write!(f, "{}-Achse ({})", mode.unit(), mode),
        }
    }
}

/// Zurückgewiesene Bedienschritte der Kalibrier- und Erfassungslogik.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DigitizerError {
    /// Punkt-Erfassung vor abgeschlossener Kalibrierung
    #[error("Kalibrierung unvollständig: {axis} ist noch nicht fixiert")]
    CalibrationIncomplete {
        /// Die Achse, deren Maßstab noch fehlt
        axis: AxisId,
    },

    /// Maßstab vor dem Ursprung gesetzt
    #[error("{axis}: erst den Ursprung setzen, dann den Maßstab fixieren")]
    OutOfOrder {
        /// Die betroffene Achse
        axis: AxisId,
    },

    /// Anker-Änderung an einer bereits fixierten Achse
    #[error("{axis} ist bereits fixiert und kann nicht mehr verschoben werden")]
    AlreadyFixed {
        /// Die betroffene Achse
        axis: AxisId,
    },

    /// Gesperrte Erfassung auf einer Q-Linie, die im Modus schon belegt ist
    #[error("Für Q = {q:.3} existiert im Modus {mode} bereits ein Punkt")]
    DuplicateAtQ {
        /// Der aktive Modus
        mode: CurveMode,
        /// Der gesperrte Förderstrom-Wert
        q: f64,
    },

    /// Freie Erfassung außerhalb des Master-Modus
    #[error(
        "Modus {attempted} darf keine neuen Q-Linien anlegen (Master ist {master}); \
         zum Erfassen auf eine bestehende Linie einrasten"
    )]
    ForeignAxisCreation {
        /// Der Modus, der das Master-Raster definiert
        master: CurveMode,
        /// Der Modus, in dem die freie Erfassung versucht wurde
        attempted: CurveMode,
    },

    /// Moduswechsel mit angefangener, unvollständiger Punktmenge
    #[error(
        "Modus {mode} ist unvollständig: {captured} von {required} Punkten erfasst, \
         es fehlen noch {}",
        .required - .captured
    )]
    IncompleteSet {
        /// Der Modus, der erst vervollständigt werden muss
        mode: CurveMode,
        /// Bereits erfasste Punkte
        captured: usize,
        /// Größe des Master-Rasters
        required: usize,
    },

    /// Export ohne ein einziges erfasstes Master-Raster
    #[error("Keine Punkte zum Exportieren vorhanden")]
    NothingToExport,

    /// Export mit angefangenen, aber unvollständigen Modi
    #[error("Export nicht möglich: {}", format_shortfalls(.shortfalls))]
    ExportMisaligned {
        /// Jeder unvollständige Modus mit seinem Fehlbestand
        shortfalls: Vec<ModeShortfall>,
    },
}

/// Listet jeden unvollständigen Modus mit Ist/Soll und Fehlbestand auf.
fn format_shortfalls(shortfalls: &[ModeShortfall]) -> String {
    shortfalls
        .iter()
        .map(|s| {
            format!(
                "{}: {} von {} Punkten (es fehlen {})",
                s.mode,
                s.captured,
                s.required,
                s.required - s.captured
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortfall_message_lists_every_mode() {
        let err = DigitizerError::ExportMisaligned {
            shortfalls: vec![
                ModeShortfall {
                    mode: CurveMode::QP,
                    captured: 1,
                    required: 3,
                },
                ModeShortfall {
                    mode: CurveMode::QE,
                    captured: 2,
                    required: 3,
                },
            ],
        };

        let msg = err.to_string();
        assert!(msg.contains("Q-P: 1 von 3"));
        assert!(msg.contains("Q-Eta: 2 von 3"));
        assert!(msg.contains("es fehlen 2"));
    }

    #[test]
    fn test_incomplete_set_names_missing_count() {
        let err = DigitizerError::IncompleteSet {
            mode: CurveMode::QN,
            captured: 1,
            required: 4,
        };
        assert!(err.to_string().contains("es fehlen noch 3"));
    }

    #[test]
    fn test_axis_id_display() {
        assert_eq!(AxisId::Flow.to_string(), "Q-Achse");
        assert_eq!(
            AxisId::Dependent(CurveMode::QH).to_string(),
            "m-Achse (Q-H)"
        );
    }
}
