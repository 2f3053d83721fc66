mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post, put},
    Router,
};

use crate::api::{DynAPI, API};
use crate::server::handlers::{geocode, places, sessions};
use crate::session::SessionRegistry;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/places", post(places::find))
        .route("/sessions", post(sessions::create))
        .route("/sessions/:id", get(sessions::find).delete(sessions::remove))
        .route("/sessions/:id/trip", put(sessions::submit))
        .route("/geocode", get(geocode::find))
        .layer(Extension(api))
        .layer(Extension(Arc::new(SessionRegistry::default())))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) {
    let api = Arc::new(api) as DynAPI;
    let app = router(api);

    tracing::info!("listening on {}", addr);

    if let Err(err) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", err);
    }
}
