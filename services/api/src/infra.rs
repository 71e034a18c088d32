use budget_allocator::planner::BudgetPlanner;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) planner: Arc<BudgetPlanner>,
}

/// Splits a comma-separated query value, dropping blanks.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) fn test_state(planner: BudgetPlanner, ready: bool) -> AppState {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let recorder = PrometheusBuilder::new().build_recorder();
    AppState {
        readiness: Arc::new(AtomicBool::new(ready)),
        metrics: Arc::new(recorder.handle()),
        planner: Arc::new(planner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(
            split_list(" Data Science, ,Cybersecurity,"),
            vec!["Data Science".to_string(), "Cybersecurity".to_string()]
        );
        assert!(split_list("").is_empty());
    }
}
