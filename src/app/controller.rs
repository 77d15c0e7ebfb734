//! Digitizer-Controller für zentrale Command-Verarbeitung.

use super::{use_cases, DigitizerCommand, DigitizerState};

/// Orchestriert UI-Commands und Use-Cases auf den DigitizerState.
#[derive(Default)]
pub struct DigitizerController;

impl DigitizerController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt mutierende Commands auf dem Sitzungszustand aus.
    ///
    /// Zurückgewiesene Eingaben sind kein Fehlerfall des Hosts: sie landen
    /// als Meldung in `status_message` und im Log, der Zustand bleibt
    /// unverändert. `Err` ist für unerwartete Fehler des Hosts reserviert.
    pub fn handle_command(
        &mut self,
        state: &mut DigitizerState,
        command: DigitizerCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        let outcome = match command {
            // === Kalibrierung ===
            DigitizerCommand::FixOrigin { axis, pick } => {
                use_cases::calibration::fix_origin(state, axis, pick)
            }
            DigitizerCommand::FixScale { axis, pick } => {
                use_cases::calibration::fix_scale(state, axis, pick)
            }
            DigitizerCommand::SetAxisValue0 { axis, value } => {
                use_cases::calibration::set_value0(state, axis, value);
                Ok(())
            }
            DigitizerCommand::SetAxisValue1 { axis, value } => {
                use_cases::calibration::set_value1(state, axis, value);
                Ok(())
            }

            // === Erfassung ===
            DigitizerCommand::CapturePoint { pick } => {
                use_cases::capture::capture_point(state, pick).map(|_| ())
            }
            DigitizerCommand::ToggleLock {
                pick_x,
                image_px_per_screen_px,
            } => {
                use_cases::capture::toggle_lock(state, pick_x, image_px_per_screen_px);
                Ok(())
            }

            // === Punktverwaltung ===
            DigitizerCommand::SwitchMode { mode } => use_cases::points::switch_mode(state, mode),
            DigitizerCommand::DeletePoint { mode, index } => {
                use_cases::points::delete_point(state, mode, index);
                Ok(())
            }
            DigitizerCommand::ClearPoints => {
                use_cases::points::clear_points(state);
                Ok(())
            }
            DigitizerCommand::ResetAll => {
                use_cases::points::reset_all(state);
                Ok(())
            }

            // === Export ===
            DigitizerCommand::ExportCurves => {
                use_cases::export::export_curves(state).map(|_| ())
            }
        };

        match outcome {
            Ok(()) => state.status_message = None,
            Err(err) => {
                log::warn!("Eingabe zurückgewiesen: {}", err);
                state.status_message = Some(err.to_string());
            }
        }

        Ok(())
    }
}
