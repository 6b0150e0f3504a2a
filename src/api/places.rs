//! Place endpoints under the catalog namespace.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::request::{segment, ApiRequest};

/// GET {catalog}/places/
pub async fn get_places(client: &ApiClient) -> Result<Value, ApiError> {
    let path = client.namespaces().catalog_path("/places/");
    client.send_data(ApiRequest::get(path)).await
}

/// POST {catalog}/place/add/
pub async fn add_place<T: Serialize + ?Sized>(
    client: &ApiClient,
    place: &T,
) -> Result<Value, ApiError> {
    let path = client.namespaces().catalog_path("/place/add/");
    client.send_data(ApiRequest::post(path).json(place)?).await
}

/// GET {catalog}/place/{id}/
pub async fn place_details(client: &ApiClient, id: impl Display) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .catalog_path(&format!("/place/{}/", segment(id)));
    client.send_data(ApiRequest::get(path)).await
}

/// PATCH {catalog}/place/{id}/edit/
pub async fn edit_place<T: Serialize + ?Sized>(
    client: &ApiClient,
    id: impl Display,
    changes: &T,
) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .catalog_path(&format!("/place/{}/edit/", segment(id)));
    client.send_data(ApiRequest::patch(path).json(changes)?).await
}

/// DELETE {catalog}/place/{id}/delete/
pub async fn delete_place(client: &ApiClient, id: impl Display) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .catalog_path(&format!("/place/{}/delete/", segment(id)));
    client.send_data(ApiRequest::delete(path)).await
}
