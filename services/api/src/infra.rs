use metrics_exporter_prometheus::PrometheusHandle;
use rental_iq::analysis::StrAnalysisEngine;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine with the production assumption tables. One instance serves every
/// request; analyses share no state.
pub(crate) fn analysis_engine() -> Arc<StrAnalysisEngine> {
    Arc::new(StrAnalysisEngine::default())
}
