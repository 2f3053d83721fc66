use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::{api::DynAPI, entities::Coordinates, error::Error};

#[derive(Serialize, Deserialize)]
pub struct FindParams {
    address: String,
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<FindParams>,
) -> Result<Json<Coordinates>, Error> {
    let coordinates = api.geocode(params.address).await?;

    Ok(coordinates.into())
}
