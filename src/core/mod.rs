//! Core-Domänentypen: Kalibrierachsen, Master-Raster, Punktmengen,
//! Ausgleichsrechnung und Export-Ausrichtung.

pub mod axis;
pub mod calibration;
pub mod error;
pub mod export;
pub mod grid;
/// Kennlinien-Modi und der feste Mode-Container
///
/// Dieses Modul definiert die geschlossene Aufzählung der vier Kennlinien
/// (Q-H, Q-P, Q-NPSH, Q-Eta) samt Anzeige-Metadaten.
pub mod mode;
pub mod points;
pub mod regression;

pub use axis::{AxisAnchors, AxisOrientation, CalibrationAxis};
pub use calibration::{CalibrationSet, CalibrationStage};
pub use error::{AxisId, DigitizerError};
pub use export::{align_to_grid, CurveExport, CurveFit, ExportedCurve, ModeShortfall};
pub use grid::MasterGrid;
pub use mode::{CurveMode, ModeMap};
pub use points::{CurvePoint, PointSet};
pub use regression::{eval_polynomial, fit_polynomial, r_squared, rmse, sample_curve};
