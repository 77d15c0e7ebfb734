//! Use-Case: Kennlinien auf das Master-Raster ausrichten und exportieren.

use crate::app::state::DigitizerState;
use crate::core::{
    align_to_grid, CurveExport, CurveFit, CurveMode, DigitizerError, ExportedCurve, ModeShortfall,
};

/// Baut das Übergabe-Paket für die nachgelagerte Berechnungs-/Bericht-Engine.
///
/// Vorab wird die Vollständigkeit geprüft: jeder angefangene Modus muss
/// genau so viele Punkte haben wie das Raster Werte. Die Meldung zählt jeden
/// unvollständigen Modus einzeln auf. Erst danach wird ausgerichtet; Modi
/// ohne Punkte exportieren keine Kennlinie.
pub fn export_curves(state: &mut DigitizerState) -> Result<CurveExport, DigitizerError> {
    if state.grid.is_empty() {
        return Err(DigitizerError::NothingToExport);
    }

    let required = state.grid.len();
    let shortfalls: Vec<ModeShortfall> = CurveMode::ALL
        .iter()
        .filter_map(|&mode| {
            let captured = state.points.get(mode).len();
            (captured > 0 && captured < required).then_some(ModeShortfall {
                mode,
                captured,
                required,
            })
        })
        .collect();
    if !shortfalls.is_empty() {
        return Err(DigitizerError::ExportMisaligned { shortfalls });
    }

    let tolerance = state.options.q_tolerance;
    let degree = state.options.fit_degree;
    let master_q = state.grid.values().to_vec();

    let curves = state.points.map(|_, set| {
        align_to_grid(&master_q, set, tolerance).map(|values| ExportedCurve {
            values,
            fit: CurveFit::compute(set.as_slice(), degree),
        })
    });

    let export = CurveExport {
        q_min: state.grid.min().unwrap_or(0.0),
        q_max: state.grid.max().unwrap_or(0.0),
        master_q,
        curves,
    };

    let curve_count = CurveMode::ALL
        .iter()
        .filter(|&&m| export.curves.get(m).is_some())
        .count();
    log::info!(
        "Export erstellt: {} Raster-Werte, {} Kennlinien, Q = [{:.3}, {:.3}]",
        export.master_q.len(),
        curve_count,
        export.q_min,
        export.q_max
    );

    state.last_export = Some(export.clone());
    Ok(export)
}
