//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konstanten und Laufzeit-Optionen, die Core, App-Layer und ein
//! Frontend gemeinsam verwenden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::DigitizerOptions;
pub use options::{CURVE_SAMPLE_STEPS, FIT_DEGREE, Q_TOLERANCE, SNAP_RADIUS_PX, SNAP_WINDOW_PX};
