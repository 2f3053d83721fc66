use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    api::DynAPI,
    entities::{PlacesView, Trip},
    error::{invalid_input_error, Error},
};

struct Run {
    token: Uuid,
    handle: Option<JoinHandle<()>>,
}

/// Keeps the places view for one trip screen up to date. A new trip supersedes
/// the running one, and only the latest run publishes.
pub struct PlacesSession {
    pub id: Uuid,
    api: DynAPI,
    current: Arc<Mutex<Run>>,
    view: Arc<watch::Sender<PlacesView>>,
}

impl std::fmt::Debug for PlacesSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesSession")
            .field("id", &self.id)
            .finish()
    }
}

impl PlacesSession {
    pub fn new(api: DynAPI) -> Self {
        let (view, _) = watch::channel(PlacesView::ready(Vec::new()));

        Self {
            id: Uuid::new_v4(),
            api,
            current: Arc::new(Mutex::new(Run {
                token: Uuid::nil(),
                handle: None,
            })),
            view: Arc::new(view),
        }
    }

    pub fn current(&self) -> PlacesView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlacesView> {
        self.view.subscribe()
    }

    #[tracing::instrument(skip(self, trip), fields(session = %self.id))]
    pub async fn submit(&self, trip: Trip) -> Uuid {
        let token = Uuid::new_v4();
        let mut current = self.current.lock().await;

        if let Some(previous) = current.handle.take() {
            tracing::debug!("superseding run {}", current.token);
            previous.abort();
        }

        current.token = token;
        self.view.send_replace(PlacesView::loading());

        let api = self.api.clone();
        let latest = self.current.clone();
        let view = self.view.clone();

        current.handle = Some(tokio::spawn(async move {
            let result = api.find_intermediate_places(trip).await;

            let current = latest.lock().await;
            if current.token != token {
                tracing::info!("discarding stale result of run {}", token);
                return;
            }

            if let Err(err) = &result {
                tracing::warn!("run {} failed: {}", token, err);
            }

            view.send_replace(PlacesView::from(result));
        }));

        token
    }

    /// Aborts the running lookup, if any. A result that still arrives is discarded.
    pub async fn close(&self) {
        let mut current = self.current.lock().await;

        if let Some(handle) = current.handle.take() {
            handle.abort();
        }
        current.token = Uuid::nil();
    }
}

#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, Arc<PlacesSession>>>,
}

impl SessionRegistry {
    pub async fn create(&self, api: DynAPI) -> Arc<PlacesSession> {
        let session = Arc::new(PlacesSession::new(api));

        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());

        session
    }

    pub async fn find(&self, id: Uuid) -> Result<Arc<PlacesSession>, Error> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(invalid_input_error)
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> Result<(), Error> {
        let session = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or_else(invalid_input_error)?;

        session.close().await;
        tracing::debug!("removed session");

        Ok(())
    }
}
