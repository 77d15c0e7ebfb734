//! Use-Case: Achsen kalibrieren (Ursprung setzen, Maßstab fixieren, beschriften).

use crate::app::events::AxisTarget;
use crate::app::state::{DigitizerState, ViewRequest};
use crate::core::{AxisId, DigitizerError};
use glam::DVec2;

/// Löst das Command-Ziel auf die konkrete Achse auf.
/// "Y" meint immer die abhängige Achse des aktiven Modus.
fn resolve(state: &DigitizerState, target: AxisTarget) -> AxisId {
    match target {
        AxisTarget::Flow => AxisId::Flow,
        AxisTarget::Dependent => AxisId::Dependent(state.current_mode),
    }
}

/// Setzt den Ursprungs-Anker einer Achse an der Pick-Position.
///
/// Schließt die Aktion die Ursprungs-Stufe des aktiven Modus ab, wird das
/// als Zentrier-Request an die Ansicht signalisiert.
pub fn fix_origin(
    state: &mut DigitizerState,
    target: AxisTarget,
    pick: DVec2,
) -> Result<(), DigitizerError> {
    let id = resolve(state, target);
    let stage_before = state.stage();

    state.calibration.axis_mut(id).set_origin(pick)?;
    log::info!("Ursprung {} gesetzt: ({:.1}, {:.1})", id, pick.x, pick.y);

    signal_stage_advance(state, stage_before);
    Ok(())
}

/// Fixiert den Maßstabs-Anker einer Achse; die Achse ist danach unveränderlich.
pub fn fix_scale(
    state: &mut DigitizerState,
    target: AxisTarget,
    pick: DVec2,
) -> Result<(), DigitizerError> {
    let id = resolve(state, target);
    let stage_before = state.stage();

    state.calibration.axis_mut(id).set_scale(pick)?;
    log::info!("Maßstab {} fixiert: ({:.1}, {:.1})", id, pick.x, pick.y);

    signal_stage_advance(state, stage_before);
    Ok(())
}

/// Beschriftet den Ursprungs-Anker neu (auch nach Fixierung erlaubt).
pub fn set_value0(state: &mut DigitizerState, target: AxisTarget, value: f64) {
    let id = resolve(state, target);
    state.calibration.axis_mut(id).set_value0(value);
    log::debug!("{}: val0 = {}", id, value);
}

/// Beschriftet den Maßstabs-Anker neu (auch nach Fixierung erlaubt).
pub fn set_value1(state: &mut DigitizerState, target: AxisTarget, value: f64) {
    let id = resolve(state, target);
    state.calibration.axis_mut(id).set_value1(value);
    log::debug!("{}: val1 = {}", id, value);
}

/// Meldet einen gerade abgeschlossenen Kalibrier-Stufenwechsel an die Ansicht.
fn signal_stage_advance(state: &mut DigitizerState, stage_before: crate::core::CalibrationStage) {
    let stage_after = state.stage();
    if stage_after != stage_before {
        log::info!("Kalibrier-Stufe abgeschlossen, weiter mit {:?}", stage_after);
        state.view_request = Some(ViewRequest::RecenterStage(stage_after));
    }
}
