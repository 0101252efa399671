//! Tests for cached summary and pending goals reads.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::cache::RequestCache;
    use crate::errors::Error;
    use crate::summary::{
        PendingGoalsService, PendingGoalsServiceTrait, SummaryService, SummaryServiceTrait,
    };
    use weekgoals_api::{MockGoalsApi, PendingGoal, Summary};

    #[tokio::test]
    async fn test_repeated_reads_hit_the_cache() {
        let api = Arc::new(MockGoalsApi::new());
        api.set_summary(Summary {
            total: 3,
            goals_per_day: None,
            completed: 2,
        });
        let cache = Arc::new(RequestCache::new());
        let service = SummaryService::new(api.clone(), cache);

        let first = service.get_summary().await.unwrap();
        let second = service.get_summary().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.total, 3);
        assert_eq!(api.summary_calls(), 1);
    }

    #[tokio::test]
    async fn test_summary_fetch_failure_propagates() {
        let api = Arc::new(MockGoalsApi::new());
        api.fail_summary("dns failure");
        let cache = Arc::new(RequestCache::new());
        let service = SummaryService::new(api, cache);

        let err = service.get_summary().await.unwrap_err();
        assert!(matches!(err, Error::Cache(ref message) if message.contains("dns failure")));
    }

    #[tokio::test]
    async fn test_pending_goals_round_trip_through_cache() {
        let api = Arc::new(MockGoalsApi::new());
        api.set_pending_goals(vec![PendingGoal {
            id: "g1".to_string(),
            title: "Nadar".to_string(),
            desired_weekly_frequency: 2,
            completion_count: 1,
        }]);
        let cache = Arc::new(RequestCache::new());
        let service = PendingGoalsService::new(api.clone(), cache);

        let goals = service.get_pending_goals().await.unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].title, "Nadar");

        service.get_pending_goals().await.unwrap();
        assert_eq!(api.pending_calls(), 1);
    }
}
