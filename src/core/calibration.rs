//! Kalibrier-Satz: eine globale Förderstrom-Achse plus eine abhängige Achse
//! pro Kennlinien-Modus, mit der zweistufigen Kalibrier-Reihenfolge
//! (erst beide Ursprünge, dann beide Maßstäbe).

use super::axis::CalibrationAxis;
use super::error::AxisId;
use super::mode::{CurveMode, ModeMap};

/// Kalibrier-Stufe bezogen auf den aktiven Modus.
///
/// Die Stufe bestimmt, worauf die Ansicht zentriert wird; der Übergang in die
/// nächste Stufe wird als View-Request signalisiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationStage {
    /// Ursprünge setzen (Q-Achse und abhängige Achse des aktiven Modus)
    Origins,
    /// Maßstäbe fixieren
    Scales,
    /// Kalibrierung vollständig, Punkte können erfasst werden
    Capture,
}

/// Alle Kalibrierachsen einer Sitzung.
///
/// Die Förderstrom-Achse gilt für alle Modi gemeinsam; jede Kennlinie hat
/// ihre eigene vertikale Achse, da die Größen verschiedene Skalen haben.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationSet {
    flow: CalibrationAxis,
    dependent: ModeMap<CalibrationAxis>,
}

impl CalibrationSet {
    /// Erstellt einen vollständig unkalibrierten Satz.
    pub fn new() -> Self {
        Self {
            flow: CalibrationAxis::new(AxisId::Flow),
            dependent: ModeMap::from_fn(|mode| CalibrationAxis::new(AxisId::Dependent(mode))),
        }
    }

    /// Die gemeinsame Förderstrom-Achse.
    pub fn flow(&self) -> &CalibrationAxis {
        &self.flow
    }

    /// Die abhängige Achse eines Modus.
    pub fn dependent(&self, mode: CurveMode) -> &CalibrationAxis {
        self.dependent.get(mode)
    }

    /// Achszugriff über die Identität.
    pub fn axis(&self, id: AxisId) -> &CalibrationAxis {
        match id {
            AxisId::Flow => &self.flow,
            AxisId::Dependent(mode) => self.dependent.get(mode),
        }
    }

    /// Mutierender Achszugriff über die Identität.
    pub fn axis_mut(&mut self, id: AxisId) -> &mut CalibrationAxis {
        match id {
            AxisId::Flow => &mut self.flow,
            AxisId::Dependent(mode) => self.dependent.get_mut(mode),
        }
    }

    /// Kalibrier-Stufe für den aktiven Modus.
    pub fn stage(&self, mode: CurveMode) -> CalibrationStage {
        let dep = self.dependent.get(mode);
        if !(self.flow.has_origin() && dep.has_origin()) {
            CalibrationStage::Origins
        } else if !(self.flow.is_fixed() && dep.is_fixed()) {
            CalibrationStage::Scales
        } else {
            CalibrationStage::Capture
        }
    }

    /// `true` wenn im Modus Punkte erfasst werden dürfen.
    pub fn is_capture_ready(&self, mode: CurveMode) -> bool {
        self.stage(mode) == CalibrationStage::Capture
    }

    /// Erste noch nicht fixierte Achse des Modus (Q-Achse zuerst), für die
    /// Meldung einer unvollständigen Kalibrierung.
    pub fn missing_axis(&self, mode: CurveMode) -> Option<AxisId> {
        if !self.flow.is_fixed() {
            Some(AxisId::Flow)
        } else if !self.dependent.get(mode).is_fixed() {
            Some(AxisId::Dependent(mode))
        } else {
            None
        }
    }

    /// Setzt alle Achsen zurück (Anker und Beschriftungen).
    pub fn reset(&mut self) {
        self.flow.reset();
        for mode in CurveMode::ALL {
            self.dependent.get_mut(mode).reset();
        }
    }
}

impl Default for CalibrationSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_stage_progression_per_mode() {
        let mut cal = CalibrationSet::new();
        assert_eq!(cal.stage(CurveMode::QH), CalibrationStage::Origins);

        cal.axis_mut(AxisId::Flow)
            .set_origin(DVec2::new(100.0, 500.0))
            .unwrap();
        // Q-Ursprung allein genügt nicht, der Modus-Ursprung fehlt noch
        assert_eq!(cal.stage(CurveMode::QH), CalibrationStage::Origins);

        cal.axis_mut(AxisId::Dependent(CurveMode::QH))
            .set_origin(DVec2::new(100.0, 500.0))
            .unwrap();
        assert_eq!(cal.stage(CurveMode::QH), CalibrationStage::Scales);

        cal.axis_mut(AxisId::Flow)
            .set_scale(DVec2::new(900.0, 500.0))
            .unwrap();
        cal.axis_mut(AxisId::Dependent(CurveMode::QH))
            .set_scale(DVec2::new(100.0, 80.0))
            .unwrap();
        assert_eq!(cal.stage(CurveMode::QH), CalibrationStage::Capture);
        assert!(cal.is_capture_ready(CurveMode::QH));

        // Andere Modi bleiben in der Ursprungs-Stufe (eigene Y-Achse)
        assert_eq!(cal.stage(CurveMode::QP), CalibrationStage::Origins);
        assert!(!cal.is_capture_ready(CurveMode::QP));
    }

    #[test]
    fn test_missing_axis_reports_flow_first() {
        let mut cal = CalibrationSet::new();
        assert_eq!(cal.missing_axis(CurveMode::QH), Some(AxisId::Flow));

        cal.axis_mut(AxisId::Flow)
            .set_origin(DVec2::ZERO)
            .unwrap();
        cal.axis_mut(AxisId::Flow)
            .set_scale(DVec2::new(800.0, 0.0))
            .unwrap();
        assert_eq!(
            cal.missing_axis(CurveMode::QH),
            Some(AxisId::Dependent(CurveMode::QH))
        );
    }

    #[test]
    fn test_reset_returns_to_origin_stage() {
        let mut cal = CalibrationSet::new();
        cal.axis_mut(AxisId::Flow)
            .set_origin(DVec2::ZERO)
            .unwrap();
        cal.axis_mut(AxisId::Flow)
            .set_scale(DVec2::new(800.0, 0.0))
            .unwrap();
        cal.reset();
        assert_eq!(cal.stage(CurveMode::QH), CalibrationStage::Origins);
        assert!(!cal.flow().has_origin());
    }
}
