//! Use-Case: Moduswechsel, Punkt-Löschung und Sitzungs-Resets.

use crate::app::state::{CaptureLock, DigitizerState, ViewRequest};
use crate::core::{CalibrationStage, CurveMode, DigitizerError};

/// Wechselt den aktiven Kennlinien-Modus.
///
/// Ein angefangener Modus muss erst das volle Master-Raster abdecken, bevor
/// er verlassen werden darf; sonst bleibt der aktive Modus unverändert.
/// Damit braucht der Export nie Teilmengen eines angefangenen Modus.
pub fn switch_mode(state: &mut DigitizerState, new_mode: CurveMode) -> Result<(), DigitizerError> {
    let current = state.current_mode;
    if new_mode == current {
        return Ok(());
    }

    let captured = state.points.get(current).len();
    let required = state.grid.len();
    if required > 0 && captured > 0 && captured < required {
        return Err(DigitizerError::IncompleteSet {
            mode: current,
            captured,
            required,
        });
    }

    state.current_mode = new_mode;
    log::info!("Aktiver Modus: {}", new_mode);
    Ok(())
}

/// Löscht einen Punkt eines Modus.
///
/// Im Master-Modus kaskadiert die Löschung: der Q-Wert verschwindet aus dem
/// Raster und aus jeder Punktmenge, damit alle Modi Teilmengen des Rasters
/// bleiben. Läuft das Raster leer, ist der Master-Modus wieder frei. In
/// anderen Modi wird nur der einzelne Punkt entfernt.
pub fn delete_point(state: &mut DigitizerState, mode: CurveMode, index: usize) {
    let Some(point) = state.points.get(mode).get(index) else {
        log::debug!("Lösch-Index {} außerhalb der Punktliste von {}", index, mode);
        return;
    };

    let tolerance = state.options.q_tolerance;
    if state.grid.master_mode() == Some(mode) {
        state.grid.remove(point.q, tolerance);
        for m in CurveMode::ALL {
            state.points.get_mut(m).remove_at_q(point.q, tolerance);
        }

        // Eine Sperre auf die entfernte Linie würde beim nächsten Erfassen
        // einen Q-Wert außerhalb des Rasters erzeugen
        if let CaptureLock::Locked(locked_q) = state.lock {
            if (locked_q - point.q).abs() < tolerance {
                state.lock = CaptureLock::Free;
                log::debug!("Q-Sperre aufgehoben, Linie Q = {:.3} wurde gelöscht", locked_q);
            }
        }

        log::info!(
            "Master-Punkt Q = {:.3} aus allen Modi gelöscht ({} Raster-Werte übrig)",
            point.q,
            state.grid.len()
        );
    } else {
        state.points.get_mut(mode).remove_index(index);
        log::info!("Punkt #{} in {} gelöscht", index + 1, mode);
    }
}

/// Löscht alle Punkte und das Master-Raster; die Kalibrierung bleibt erhalten.
pub fn clear_points(state: &mut DigitizerState) {
    state.grid.clear();
    for mode in CurveMode::ALL {
        state.points.get_mut(mode).clear();
    }
    state.lock = CaptureLock::Free;
    log::info!("Alle Punkte und das Master-Raster gelöscht, Kalibrierung bleibt erhalten");
}

/// Kompletter Sitzungs-Reset: Kalibrierung, Raster, Punkte, Sperre, Export.
pub fn reset_all(state: &mut DigitizerState) {
    state.calibration.reset();
    state.grid.clear();
    for mode in CurveMode::ALL {
        state.points.get_mut(mode).clear();
    }
    state.lock = CaptureLock::Free;
    state.last_export = None;
    state.view_request = Some(ViewRequest::RecenterStage(CalibrationStage::Origins));
    log::info!("Sitzung vollständig zurückgesetzt");
}
