//! Use-Case: Punkte erfassen und die Erfassung auf Q-Linien sperren.

use crate::app::state::{CaptureLock, DigitizerState, ViewRequest};
use crate::core::{AxisId, CurvePoint, DigitizerError};
use glam::DVec2;

/// Erfasst einen Punkt an der Pick-Position im aktiven Modus.
///
/// Der Q-Wert folgt der Sperre: gesperrt wird exakt der gesperrte
/// Raster-Wert übernommen (Duplikate im Modus sind verboten), frei wird der
/// Cursor-Wert verwendet und muss das Master-Raster erweitern dürfen. Jede
/// Zurückweisung erfolgt vor der ersten Mutation.
pub fn capture_point(
    state: &mut DigitizerState,
    pick: DVec2,
) -> Result<CurvePoint, DigitizerError> {
    let mode = state.current_mode;

    let Some(q_raw) = state.calibration.flow().value_at(pick) else {
        return Err(DigitizerError::CalibrationIncomplete { axis: AxisId::Flow });
    };
    let Some(y_raw) = state.calibration.dependent(mode).value_at(pick) else {
        return Err(DigitizerError::CalibrationIncomplete {
            axis: AxisId::Dependent(mode),
        });
    };

    let q = match state.lock {
        CaptureLock::Locked(locked_q) => {
            if state
                .points
                .get(mode)
                .contains_q(locked_q, state.options.q_tolerance)
            {
                return Err(DigitizerError::DuplicateAtQ { mode, q: locked_q });
            }
            locked_q
        }
        CaptureLock::Free => {
            // Erster Punkt überhaupt ernennt den Master-Modus; fremde Modi
            // werden hier ohne Mutation zurückgewiesen
            state.grid.try_insert(q_raw, mode)?;
            q_raw
        }
    };

    let point = CurvePoint::new(q, y_raw);
    state.points.get_mut(mode).insert(point);
    log::info!(
        "Punkt erfasst in {}: Q = {:.3}, {} = {:.3}",
        mode,
        point.q,
        mode.unit(),
        point.value
    );
    Ok(point)
}

/// Sperrt die Erfassung auf die nächstgelegene Q-Linie oder hebt die Sperre auf.
///
/// Der Einrast-Radius ist in Screen-Pixeln konfiguriert und wird über den
/// mitgelieferten Zoom-Faktor in Bild-Pixel umgerechnet. Ohne Linie in
/// Reichweite (oder ohne fixierte Q-Achse) passiert nichts. Beim Sperren wird
/// das Zentrieren auf die Linie als View-Request signalisiert.
pub fn toggle_lock(state: &mut DigitizerState, pick_x: f64, image_px_per_screen_px: f64) {
    if let CaptureLock::Locked(q) = state.lock {
        state.lock = CaptureLock::Free;
        log::debug!("Q-Sperre aufgehoben (war Q = {:.3})", q);
        return;
    }

    let flow = state.calibration.flow();
    if !flow.is_fixed() || state.grid.is_empty() {
        return;
    }

    let snap_radius_img = state.options.snap_radius_px * image_px_per_screen_px;
    let mut best: Option<(f64, f64, f64)> = None; // (q, image_x, Abstand)
    for &q in state.grid.values() {
        let Some(image_x) = flow.image_at(q) else {
            continue;
        };
        let dist = (image_x - pick_x).abs();
        if dist < snap_radius_img && best.map_or(true, |(_, _, d)| dist < d) {
            best = Some((q, image_x, dist));
        }
    }

    if let Some((q, image_x, _)) = best {
        state.lock = CaptureLock::Locked(q);
        state.view_request = Some(ViewRequest::CenterFlowLine { image_x });
        log::info!("Erfassung auf Q = {:.3} gesperrt", q);
    }
}
