use crate::core::render::Frame;
use crate::core::{Technician, TechnicianQuery, TechnicianSource};

/// The three mutually exclusive states of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Failed(String),
    Loaded(Vec<Technician>),
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }
}

/// Fetches the technician collection and holds the state derived from it.
///
/// Every fetch goes through `&mut self`, so a view has at most one request
/// outstanding.
pub struct TechnicianListView<S: TechnicianSource> {
    source: S,
    query: TechnicianQuery,
    state: ListState,
    mounted: bool,
}

impl<S: TechnicianSource> TechnicianListView<S> {
    pub fn new(source: S) -> Self {
        Self::with_query(source, TechnicianQuery::default())
    }

    pub fn with_query(source: S, query: TechnicianQuery) -> Self {
        Self {
            source,
            query,
            state: ListState::Loading,
            mounted: false,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn query(&self) -> &TechnicianQuery {
        &self.query
    }

    pub fn frame(&self) -> Frame {
        Frame::from_state(&self.state)
    }

    /// First fetch. Calling it again on a mounted view is a no-op.
    pub async fn mount(&mut self) -> &ListState {
        if !self.mounted {
            self.mounted = true;
            self.fetch().await;
        }
        &self.state
    }

    /// Switches the query key. Only a different key triggers a new read.
    pub async fn set_query(&mut self, query: TechnicianQuery) -> &ListState {
        if query == self.query && self.mounted {
            tracing::debug!("Query key unchanged, keeping current state");
            return &self.state;
        }
        self.query = query;
        self.mounted = true;
        self.fetch().await;
        &self.state
    }

    pub async fn refresh(&mut self) -> &ListState {
        self.mounted = true;
        self.fetch().await;
        &self.state
    }

    async fn fetch(&mut self) {
        self.state = ListState::Loading;
        tracing::debug!("Fetching technicians with {:?}", self.query);

        self.state = match self.source.fetch_technicians(&self.query).await {
            Ok(technicians) => {
                tracing::info!("Loaded {} technicians", technicians.len());
                ListState::Loaded(technicians)
            }
            Err(e) => {
                tracing::error!("Fetch failed: {}", e);
                ListState::Failed(e.to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{BoardError, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    struct StubSource {
        outcome: std::result::Result<Vec<Technician>, String>,
        calls: Arc<AtomicUsize>,
    }

    impl StubSource {
        fn ok(technicians: Vec<Technician>) -> Self {
            Self {
                outcome: Ok(technicians),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                outcome: Err(message.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl TechnicianSource for StubSource {
        async fn fetch_technicians(&self, _query: &TechnicianQuery) -> Result<Vec<Technician>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone().map_err(BoardError::fetch)
        }
    }

    fn tech(id: u64) -> Technician {
        Technician {
            id,
            name: format!("Tech {}", id),
            specialty: "Redes".to_string(),
            national_id: format!("{}-0", id),
            phone: "123".to_string(),
            available: id % 2 == 0,
            current_location: None,
        }
    }

    #[test]
    fn test_fresh_view_is_loading() {
        let view = TechnicianListView::new(StubSource::ok(vec![]));
        assert!(view.state().is_loading());
        assert!(matches!(view.frame(), Frame::Loading { .. }));
    }

    #[test]
    fn test_mount_loads_once() {
        let source = StubSource::ok(vec![tech(1), tech(2)]);
        let mut view = TechnicianListView::new(source.clone());

        tokio_test::block_on(async {
            view.mount().await;
            view.mount().await;
        });

        assert_eq!(source.calls(), 1);
        assert_eq!(view.frame().cards().len(), 2);
    }

    #[test]
    fn test_failure_surfaces_message() {
        let mut view = TechnicianListView::new(StubSource::failing("timed out reading body"));
        let state = tokio_test::block_on(view.mount()).clone();
        assert_eq!(state, ListState::Failed("timed out reading body".to_string()));
    }

    #[tokio::test]
    async fn test_set_query_refetches_only_on_change() {
        let source = StubSource::ok(vec![tech(1)]);
        let mut view = TechnicianListView::new(source.clone());

        view.mount().await;
        view.set_query(TechnicianQuery::default()).await;
        assert_eq!(source.calls(), 1);

        view.set_query(TechnicianQuery::new().available(true)).await;
        assert_eq!(source.calls(), 2);
        assert_eq!(view.query().available, Some(true));

        view.refresh().await;
        assert_eq!(source.calls(), 3);
    }
}
