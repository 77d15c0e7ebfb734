//! Kalibrierachse: zwei Bild-Anker mit bekannten Ingenieurwerten und die
//! lineare Abbildung zwischen Bildkoordinate und Wert.

use super::error::{AxisId, DigitizerError};
use glam::DVec2;

/// Ausrichtung einer Kalibrierachse im Bild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Förderstrom-Achse: nur die X-Bildkoordinate trägt Information
    Horizontal,
    /// Abhängige Achse: nur die Y-Bildkoordinate trägt Information
    Vertical,
}

impl AxisOrientation {
    /// Extrahiert die tragende Koordinate eines Bildpunkts.
    pub fn coord(&self, p: DVec2) -> f64 {
        match self {
            AxisOrientation::Horizontal => p.x,
            AxisOrientation::Vertical => p.y,
        }
    }
}

/// Anker-Zustand einer Achse.
///
/// `Fixed` ist terminal: beide Anker sind danach unveränderlich, nur die
/// Wertebeschriftung (`val0`/`val1`) bleibt editierbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisAnchors {
    /// Noch kein Anker gesetzt
    Unset,
    /// Ursprung gesetzt, Maßstab fehlt; der Ursprung darf noch verschoben werden
    OriginOnly(DVec2),
    /// Ursprung und Maßstab fixiert
    Fixed {
        /// Bild-Anker des Werts `val0`
        p0: DVec2,
        /// Bild-Anker des Werts `val1`
        p1: DVec2,
    },
}

/// Eine Kalibrierachse: Anker-Zustand plus die beiden bekannten Werte.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationAxis {
    id: AxisId,
    orientation: AxisOrientation,
    anchors: AxisAnchors,
    /// Ingenieurwert am Ursprungs-Anker
    pub val0: f64,
    /// Ingenieurwert am Maßstabs-Anker
    pub val1: f64,
}

impl CalibrationAxis {
    /// Standard-Beschriftung des Ursprungs-Ankers.
    pub const DEFAULT_VAL0: f64 = 0.0;
    /// Standard-Beschriftung des Maßstabs-Ankers.
    pub const DEFAULT_VAL1: f64 = 100.0;

    /// Erstellt eine unkalibrierte Achse. Die Ausrichtung folgt aus der
    /// Identität: Förderstrom horizontal, abhängige Größen vertikal.
    pub fn new(id: AxisId) -> Self {
        let orientation = match id {
            AxisId::Flow => AxisOrientation::Horizontal,
            AxisId::Dependent(_) => AxisOrientation::Vertical,
        };
        Self {
            id,
            orientation,
            anchors: AxisAnchors::Unset,
            val0: Self::DEFAULT_VAL0,
            val1: Self::DEFAULT_VAL1,
        }
    }

    /// Identität der Achse (für Meldungen).
    pub fn id(&self) -> AxisId {
        self.id
    }

    /// Ausrichtung im Bild.
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    /// Aktueller Anker-Zustand (read-only, für Hilfslinien-Darstellung).
    pub fn anchors(&self) -> AxisAnchors {
        self.anchors
    }

    /// `true` sobald der Ursprung gesetzt ist.
    pub fn has_origin(&self) -> bool {
        !matches!(self.anchors, AxisAnchors::Unset)
    }

    /// `true` sobald beide Anker fixiert sind.
    pub fn is_fixed(&self) -> bool {
        matches!(self.anchors, AxisAnchors::Fixed { .. })
    }

    /// Ursprungs-Anker, falls gesetzt.
    pub fn origin(&self) -> Option<DVec2> {
        match self.anchors {
            AxisAnchors::Unset => None,
            AxisAnchors::OriginOnly(p0) | AxisAnchors::Fixed { p0, .. } => Some(p0),
        }
    }

    /// Setzt (oder verschiebt) den Ursprungs-Anker.
    ///
    /// Nach Fixierung des Maßstabs ist der Ursprung unveränderlich.
    pub fn set_origin(&mut self, pick: DVec2) -> Result<(), DigitizerError> {
        if self.is_fixed() {
            return Err(DigitizerError::AlreadyFixed { axis: self.id });
        }
        self.anchors = AxisAnchors::OriginOnly(pick);
        Ok(())
    }

    /// Fixiert den Maßstabs-Anker und damit die Achse.
    ///
    /// Die quer zur Achse liegende Koordinate des Picks wird auf die des
    /// Ursprungs gezwungen, damit die Kalibrierlinie exakt achsparallel ist.
    pub fn set_scale(&mut self, pick: DVec2) -> Result<(), DigitizerError> {
        let p0 = match self.anchors {
            AxisAnchors::Unset => return Err(DigitizerError::OutOfOrder { axis: self.id }),
            AxisAnchors::Fixed { .. } => {
                return Err(DigitizerError::AlreadyFixed { axis: self.id })
            }
            AxisAnchors::OriginOnly(p0) => p0,
        };

        let p1 = match self.orientation {
            AxisOrientation::Horizontal => DVec2::new(pick.x, p0.y),
            AxisOrientation::Vertical => DVec2::new(p0.x, pick.y),
        };
        self.anchors = AxisAnchors::Fixed { p0, p1 };
        Ok(())
    }

    /// Beschriftet den Ursprungs-Anker neu. Immer erlaubt, auch nach Fixierung.
    pub fn set_value0(&mut self, value: f64) {
        self.val0 = value;
    }

    /// Beschriftet den Maßstabs-Anker neu. Immer erlaubt, auch nach Fixierung.
    pub fn set_value1(&mut self, value: f64) {
        self.val1 = value;
    }

    /// Bildet einen Bildpunkt auf den Ingenieurwert der Achse ab.
    ///
    /// `None` solange die Achse nicht fixiert ist. Eine degenerierte Achse
    /// (beide Anker auf derselben Bildkoordinate) wird nicht abgefangen und
    /// liefert ±inf/NaN; der Anker-Zustandsautomat macht sie über die
    /// Bedienung praktisch unerreichbar.
    pub fn value_at(&self, img: DVec2) -> Option<f64> {
        let AxisAnchors::Fixed { p0, p1 } = self.anchors else {
            return None;
        };
        let c0 = self.orientation.coord(p0);
        let c1 = self.orientation.coord(p1);
        let c = self.orientation.coord(img);
        Some(self.val0 + (c - c0) * (self.val1 - self.val0) / (c1 - c0))
    }

    /// Umkehrung von [`value_at`](Self::value_at): Bildkoordinate (entlang der
    /// Achsrichtung) eines Ingenieurwerts. `None` solange nicht fixiert.
    pub fn image_at(&self, value: f64) -> Option<f64> {
        let AxisAnchors::Fixed { p0, p1 } = self.anchors else {
            return None;
        };
        let c0 = self.orientation.coord(p0);
        let c1 = self.orientation.coord(p1);
        Some(c0 + (value - self.val0) * (c1 - c0) / (self.val1 - self.val0))
    }

    /// Ingenieurwert pro Bildpixel entlang der Achse (Betrag).
    /// `None` solange nicht fixiert.
    pub fn units_per_pixel(&self) -> Option<f64> {
        let AxisAnchors::Fixed { p0, p1 } = self.anchors else {
            return None;
        };
        let c0 = self.orientation.coord(p0);
        let c1 = self.orientation.coord(p1);
        Some(((self.val1 - self.val0) / (c1 - c0)).abs())
    }

    /// Setzt die Achse vollständig zurück (Anker und Beschriftung).
    pub fn reset(&mut self) {
        self.anchors = AxisAnchors::Unset;
        self.val0 = Self::DEFAULT_VAL0;
        self.val1 = Self::DEFAULT_VAL1;
    }
}
