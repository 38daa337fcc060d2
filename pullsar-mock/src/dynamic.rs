use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use pullsar_core::{
    ApiConfig, Capability, ExportQuery, ListQuery, OverallPulls, OverallQuery, PaginatedResponse,
    PullsarError, StatsConnector, SummaryStats,
};

use crate::MockConnector;

/// Instruction for how a method should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(PullsarError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    list_rule: Option<MockBehavior<PaginatedResponse>>,
    overall_rule: Option<MockBehavior<OverallPulls>>,
    summary_rule: Option<MockBehavior<SummaryStats>>,
    export_rule: Option<MockBehavior<Vec<u8>>>,
    config_rule: Option<MockBehavior<ApiConfig>>,
    calls: HashMap<Capability, usize>,
    list_requests: Vec<ListQuery>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `list_items`, at every level.
    pub async fn set_list_behavior(&self, behavior: MockBehavior<PaginatedResponse>) {
        self.state.lock().await.list_rule = Some(behavior);
    }

    /// Set the behavior for `overall`.
    pub async fn set_overall_behavior(&self, behavior: MockBehavior<OverallPulls>) {
        self.state.lock().await.overall_rule = Some(behavior);
    }

    /// Set the behavior for `summary`.
    pub async fn set_summary_behavior(&self, behavior: MockBehavior<SummaryStats>) {
        self.state.lock().await.summary_rule = Some(behavior);
    }

    /// Set the behavior for `export_csv`.
    pub async fn set_export_behavior(&self, behavior: MockBehavior<Vec<u8>>) {
        self.state.lock().await.export_rule = Some(behavior);
    }

    /// Set the behavior for `api_config`.
    pub async fn set_config_behavior(&self, behavior: MockBehavior<ApiConfig>) {
        self.state.lock().await.config_rule = Some(behavior);
    }

    /// Restore fixture behavior for every method and forget recorded calls.
    pub async fn reset(&self) {
        *self.state.lock().await = InternalState::default();
    }

    /// Number of calls that reached the connector for `capability`.
    pub async fn calls(&self, capability: Capability) -> usize {
        self.state
            .lock()
            .await
            .calls
            .get(&capability)
            .copied()
            .unwrap_or(0)
    }

    /// Listing queries received so far, in call order.
    pub async fn list_requests(&self) -> Vec<ListQuery> {
        self.state.lock().await.list_requests.clone()
    }
}

/// Connector whose responses are scripted at runtime.
///
/// Methods without a scripted behavior fall back to [`MockConnector`] fixtures.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
    fallback: MockConnector,
}

impl DynamicMockConnector {
    /// Create a connector named `name` and the controller that scripts it.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let connector = Arc::new(Self {
            name,
            state: Arc::clone(&state),
            fallback: MockConnector::new(),
        });
        (connector, DynamicMockController { state })
    }

    async fn resolve<T>(behavior: Option<MockBehavior<T>>) -> Option<Result<T, PullsarError>> {
        match behavior? {
            MockBehavior::Return(v) => Some(Ok(v)),
            MockBehavior::Fail(e) => Some(Err(e)),
            MockBehavior::Hang => std::future::pending().await,
        }
    }
}

#[async_trait]
impl StatsConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn list_items(&self, query: &ListQuery) -> Result<PaginatedResponse, PullsarError> {
        let rule = {
            let mut guard = self.state.lock().await;
            *guard
                .calls
                .entry(pullsar_core::connector::listing_capability(query))
                .or_default() += 1;
            guard.list_requests.push(query.clone());
            guard.list_rule.clone()
        };
        match Self::resolve(rule).await {
            Some(r) => r,
            None => self.fallback.list_items(query).await,
        }
    }

    async fn overall(&self, query: &OverallQuery) -> Result<OverallPulls, PullsarError> {
        let rule = {
            let mut guard = self.state.lock().await;
            *guard.calls.entry(Capability::Overall).or_default() += 1;
            guard.overall_rule.clone()
        };
        match Self::resolve(rule).await {
            Some(r) => r,
            None => self.fallback.overall(query).await,
        }
    }

    async fn summary(&self) -> Result<SummaryStats, PullsarError> {
        let rule = {
            let mut guard = self.state.lock().await;
            *guard.calls.entry(Capability::Summary).or_default() += 1;
            guard.summary_rule.clone()
        };
        match Self::resolve(rule).await {
            Some(r) => r,
            None => self.fallback.summary().await,
        }
    }

    async fn export_csv(&self, query: &ExportQuery) -> Result<Vec<u8>, PullsarError> {
        let rule = {
            let mut guard = self.state.lock().await;
            *guard.calls.entry(Capability::ExportCsv).or_default() += 1;
            guard.export_rule.clone()
        };
        match Self::resolve(rule).await {
            Some(r) => r,
            None => self.fallback.export_csv(query).await,
        }
    }

    async fn ocp_versions(&self) -> Result<Vec<String>, PullsarError> {
        *self
            .state
            .lock()
            .await
            .calls
            .entry(Capability::OcpVersions)
            .or_default() += 1;
        self.fallback.ocp_versions().await
    }

    async fn sort_types(&self) -> Result<Vec<String>, PullsarError> {
        *self
            .state
            .lock()
            .await
            .calls
            .entry(Capability::SortTypes)
            .or_default() += 1;
        self.fallback.sort_types().await
    }

    async fn api_config(&self) -> Result<ApiConfig, PullsarError> {
        let rule = {
            let mut guard = self.state.lock().await;
            *guard.calls.entry(Capability::Config).or_default() += 1;
            guard.config_rule.clone()
        };
        match Self::resolve(rule).await {
            Some(r) => r,
            None => self.fallback.api_config().await,
        }
    }
}
