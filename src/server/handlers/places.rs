use axum::extract::{Extension, Json};

use crate::{
    api::DynAPI,
    entities::{PlacesView, Trip},
};

pub async fn find(Extension(api): Extension<DynAPI>, Json(trip): Json<Trip>) -> Json<PlacesView> {
    let result = api.find_intermediate_places(trip).await;

    PlacesView::from(result).into()
}
