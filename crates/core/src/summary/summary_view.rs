//! Summary view state machine.

use super::summary_traits::SummaryServiceTrait;
use weekgoals_api::Summary;

/// Render state of the summary view.
///
/// A failed fetch lands in `Errored` with a user-visible message; the view
/// never renders blank on error. There is no automatic retry and no
/// focus-driven revalidation; the state only changes on an explicit
/// [`SummaryView::load`] or through cache invalidation.
#[derive(Clone, Debug, PartialEq)]
pub enum SummaryViewState {
    Loading,
    Loaded(Summary),
    Errored(String),
}

#[derive(Clone, Debug)]
pub struct SummaryView {
    state: SummaryViewState,
}

impl Default for SummaryView {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryView {
    /// A fresh view, rendering its loading placeholder.
    pub fn new() -> Self {
        Self {
            state: SummaryViewState::Loading,
        }
    }

    pub fn state(&self) -> &SummaryViewState {
        &self.state
    }

    /// Drives one load through the service.
    pub async fn load(&mut self, service: &dyn SummaryServiceTrait) {
        self.state = SummaryViewState::Loading;
        self.state = match service.get_summary().await {
            Ok(summary) => SummaryViewState::Loaded(summary),
            Err(e) => SummaryViewState::Errored(e.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, Result};
    use async_trait::async_trait;

    struct FixedSummaryService(Result<Summary>);

    #[async_trait]
    impl SummaryServiceTrait for FixedSummaryService {
        async fn get_summary(&self) -> Result<Summary> {
            match &self.0 {
                Ok(summary) => Ok(summary.clone()),
                Err(e) => Err(Error::Cache(e.to_string())),
            }
        }
    }

    #[test]
    fn test_new_view_is_loading() {
        let view = SummaryView::new();
        assert_eq!(*view.state(), SummaryViewState::Loading);
    }

    #[tokio::test]
    async fn test_load_success_lands_in_loaded() {
        let summary = Summary {
            total: 4,
            goals_per_day: None,
            completed: 1,
        };
        let service = FixedSummaryService(Ok(summary.clone()));

        let mut view = SummaryView::new();
        view.load(&service).await;

        assert_eq!(*view.state(), SummaryViewState::Loaded(summary));
    }

    #[tokio::test]
    async fn test_load_failure_lands_in_errored_not_blank() {
        let service = FixedSummaryService(Err(Error::Cache("timeout".to_string())));

        let mut view = SummaryView::new();
        view.load(&service).await;

        match view.state() {
            SummaryViewState::Errored(message) => assert!(message.contains("timeout")),
            state => panic!("expected Errored, got {state:?}"),
        }
    }
}
