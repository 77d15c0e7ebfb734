//! Kennlinien-Digitizer Library.
//! Digitalisierungs-Engine als Library exportiert für Tests und Frontends.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AxisTarget, CaptureLock, CommandLog, DigitizerCommand, DigitizerController, DigitizerState,
    ViewRequest,
};
pub use core::{
    align_to_grid, eval_polynomial, fit_polynomial, r_squared, rmse, sample_curve, AxisAnchors,
    AxisId, AxisOrientation, CalibrationAxis, CalibrationSet, CalibrationStage, CurveExport,
    CurveFit, CurveMode, CurvePoint, DigitizerError, ExportedCurve, MasterGrid, ModeMap,
    ModeShortfall, PointSet,
};
pub use shared::DigitizerOptions;
