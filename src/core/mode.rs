//! Kennlinien-Modi (Q-H, Q-P, Q-NPSH, Q-Eta) und der feste Mode-Container.

use serde::{Deserialize, Serialize};

/// Die vier digitalisierbaren Kennlinien einer Pumpe.
///
/// Q ist immer die Förderstrom-Achse; der Modus bestimmt die abhängige Größe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveMode {
    /// Förderhöhe über Förderstrom
    QH,
    /// Wellenleistung über Förderstrom
    QP,
    /// NPSH (Haltedruckhöhe) über Förderstrom
    QN,
    /// Wirkungsgrad über Förderstrom
    QE,
}

impl CurveMode {
    /// Alle Modi in fester Reihenfolge (für Iteration und Anzeige).
    pub const ALL: [CurveMode; 4] = [CurveMode::QH, CurveMode::QP, CurveMode::QN, CurveMode::QE];

    /// Anzeigename der Kennlinie
    pub fn display_name(&self) -> &'static str {
        match self {
            CurveMode::QH => "Q-H",
            CurveMode::QP => "Q-P",
            CurveMode::QN => "Q-NPSH",
            CurveMode::QE => "Q-Eta",
        }
    }

    /// Beschriftung der abhängigen Achse inkl. Einheit
    pub fn axis_label(&self) -> &'static str {
        match self {
            CurveMode::QH => "H (m)",
            CurveMode::QP => "P2 (kW)",
            CurveMode::QN => "NPSH (m)",
            CurveMode::QE => "Eff (%)",
        }
    }

    /// Einheit der abhängigen Größe
    pub fn unit(&self) -> &'static str {
        match self {
            CurveMode::QH => "m",
            CurveMode::QP => "kW",
            CurveMode::QN => "m",
            CurveMode::QE => "%",
        }
    }
}

impl std::fmt::Display for CurveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fester Container mit genau einem Wert pro [`CurveMode`].
///
/// Ersetzt eine String-indizierte Map: Zugriff ist exhaustiv und ohne
/// Fehlerfall, neue Modi erzwingen Anpassung aller Verwender.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeMap<T> {
    /// Wert für Q-H
    pub qh: T,
    /// Wert für Q-P
    pub qp: T,
    /// Wert für Q-NPSH
    pub qn: T,
    /// Wert für Q-Eta
    pub qe: T,
}

impl<T> ModeMap<T> {
    /// Erstellt den Container aus einer Funktion pro Modus.
    pub fn from_fn(mut f: impl FnMut(CurveMode) -> T) -> Self {
        Self {
            qh: f(CurveMode::QH),
            qp: f(CurveMode::QP),
            qn: f(CurveMode::QN),
            qe: f(CurveMode::QE),
        }
    }

    /// Read-only Zugriff auf den Wert eines Modus.
    pub fn get(&self, mode: CurveMode) -> &T {
        match mode {
            CurveMode::QH => &self.qh,
            CurveMode::QP => &self.qp,
            CurveMode::QN => &self.qn,
            CurveMode::QE => &self.qe,
        }
    }

    /// Mutierender Zugriff auf den Wert eines Modus.
    pub fn get_mut(&mut self, mode: CurveMode) -> &mut T {
        match mode {
            CurveMode::QH => &mut self.qh,
            CurveMode::QP => &mut self.qp,
            CurveMode::QN => &mut self.qn,
            CurveMode::QE => &mut self.qe,
        }
    }

    /// Iteriert über alle Modi in fester Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (CurveMode, &T)> {
        CurveMode::ALL.iter().map(move |&m| (m, self.get(m)))
    }

    /// Wendet eine Funktion auf jeden Modus-Wert an und sammelt das Ergebnis.
    pub fn map<U>(&self, mut f: impl FnMut(CurveMode, &T) -> U) -> ModeMap<U> {
        ModeMap {
            qh: f(CurveMode::QH, &self.qh),
            qp: f(CurveMode::QP, &self.qp),
            qn: f(CurveMode::QN, &self.qn),
            qe: f(CurveMode::QE, &self.qe),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_map_roundtrip() {
        let mut map: ModeMap<u32> = ModeMap::default();
        *map.get_mut(CurveMode::QP) = 7;

        assert_eq!(*map.get(CurveMode::QP), 7);
        assert_eq!(*map.get(CurveMode::QH), 0);
    }

    #[test]
    fn test_mode_map_iter_order() {
        let map = ModeMap::from_fn(|m| m.display_name());
        let collected: Vec<_> = map.iter().map(|(m, _)| m).collect();
        assert_eq!(collected, CurveMode::ALL.to_vec());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CurveMode::QH.to_string(), "Q-H");
        assert_eq!(CurveMode::QN.axis_label(), "NPSH (m)");
        assert_eq!(CurveMode::QE.unit(), "%");
    }
}
