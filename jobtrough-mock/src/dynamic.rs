use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use jobtrough_core::{
    JobtroughError, ObservationSource, RawAnnualRow, RawMonthlyRow, SupersectorTable,
};

/// Instruction for how a method should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(JobtroughError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

impl<T> Default for MockBehavior<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::Return(T::default())
    }
}

#[derive(Default)]
struct InternalState {
    monthly: MockBehavior<Vec<RawMonthlyRow>>,
    annual: MockBehavior<Vec<RawAnnualRow>>,
    supersectors: Option<MockBehavior<SupersectorTable>>,
    calls: Vec<&'static str>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `monthly_rows` calls.
    pub async fn set_monthly_behavior(&self, behavior: MockBehavior<Vec<RawMonthlyRow>>) {
        let mut guard = self.state.lock().await;
        guard.monthly = behavior;
    }

    /// Set the behavior for `annual_rows` calls.
    pub async fn set_annual_behavior(&self, behavior: MockBehavior<Vec<RawAnnualRow>>) {
        let mut guard = self.state.lock().await;
        guard.annual = behavior;
    }

    /// Set the behavior for `supersectors` calls. Unset means the CES defaults.
    pub async fn set_supersector_behavior(&self, behavior: MockBehavior<SupersectorTable>) {
        let mut guard = self.state.lock().await;
        guard.supersectors = Some(behavior);
    }

    /// Names of the source methods invoked so far, in call order.
    pub async fn calls(&self) -> Vec<&'static str> {
        let guard = self.state.lock().await;
        guard.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn ObservationSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn ObservationSource>, controller)
    }

    async fn resolve<T>(behavior: MockBehavior<T>) -> Result<T, JobtroughError> {
        match behavior {
            MockBehavior::Return(v) => Ok(v),
            MockBehavior::Fail(e) => Err(e),
            MockBehavior::Hang => std::future::pending().await,
        }
    }
}

#[async_trait]
impl ObservationSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn monthly_rows(&self) -> Result<Vec<RawMonthlyRow>, JobtroughError> {
        // Snapshot the behavior without holding the lock across the await
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push("monthly_rows");
            guard.monthly.clone()
        };
        Self::resolve(behavior).await
    }

    async fn annual_rows(&self) -> Result<Vec<RawAnnualRow>, JobtroughError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push("annual_rows");
            guard.annual.clone()
        };
        Self::resolve(behavior).await
    }

    async fn supersectors(&self) -> Result<SupersectorTable, JobtroughError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push("supersectors");
            guard
                .supersectors
                .clone()
                .unwrap_or_else(|| MockBehavior::Return(SupersectorTable::ces_defaults()))
        };
        Self::resolve(behavior).await
    }
}
