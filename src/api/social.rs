//! Place social-media endpoints under the media namespace.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::request::{segment, ApiRequest};

/// GET {media}/places/{place_id}/social/
pub async fn get_place_social_media(
    client: &ApiClient,
    place_id: impl Display,
) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .media_path(&format!("/places/{}/social/", segment(place_id)));
    client.send_data(ApiRequest::get(path)).await
}

/// POST {media}/places/{place_id}/social/add/
pub async fn add_place_social_media<T: Serialize + ?Sized>(
    client: &ApiClient,
    place_id: impl Display,
    record: &T,
) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .media_path(&format!("/places/{}/social/add/", segment(place_id)));
    client.send_data(ApiRequest::post(path).json(record)?).await
}

/// GET {media}/social/{id}/
pub async fn social_media_details(client: &ApiClient, id: impl Display) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .media_path(&format!("/social/{}/", segment(id)));
    client.send_data(ApiRequest::get(path)).await
}

/// PATCH {media}/social/{id}/edit/
pub async fn edit_social_media<T: Serialize + ?Sized>(
    client: &ApiClient,
    id: impl Display,
    changes: &T,
) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .media_path(&format!("/social/{}/edit/", segment(id)));
    client.send_data(ApiRequest::patch(path).json(changes)?).await
}

/// DELETE {media}/social/{id}/delete/
pub async fn delete_social_media(client: &ApiClient, id: impl Display) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .media_path(&format!("/social/{}/delete/", segment(id)));
    client.send_data(ApiRequest::delete(path)).await
}
