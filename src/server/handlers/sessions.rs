use std::sync::Arc;

use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::DynAPI,
    entities::{PlacesView, Trip},
    error::Error,
    session::SessionRegistry,
};

#[derive(Serialize, Deserialize)]
pub struct SessionId {
    pub id: Uuid,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(registry): Extension<Arc<SessionRegistry>>,
) -> Json<SessionId> {
    let session = registry.create(api).await;

    SessionId { id: session.id }.into()
}

pub async fn submit(
    Extension(registry): Extension<Arc<SessionRegistry>>,
    Path(id): Path<Uuid>,
    Json(trip): Json<Trip>,
) -> Result<Json<PlacesView>, Error> {
    let session = registry.find(id).await?;
    session.submit(trip).await;

    Ok(session.current().into())
}

pub async fn find(
    Extension(registry): Extension<Arc<SessionRegistry>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlacesView>, Error> {
    let session = registry.find(id).await?;

    Ok(session.current().into())
}

pub async fn remove(
    Extension(registry): Extension<Arc<SessionRegistry>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionId>, Error> {
    registry.remove(id).await?;

    Ok(SessionId { id }.into())
}
