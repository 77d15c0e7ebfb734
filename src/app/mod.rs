//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
/// Digitizer State und Controller
///
/// Dieses Modul verwaltet den Zustand einer Digitalisier-Sitzung
/// (Kalibrierung, Punkte, Master-Raster, Erfassungs-Sperre).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::DigitizerController;
pub use events::{AxisTarget, DigitizerCommand};
pub use state::{CaptureLock, DigitizerState, ViewRequest};
