//! Tag endpoints under the catalog namespace.
//!
//! The backend exposes no delete operation for tags.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::request::{segment, ApiRequest};

pub async fn get_tags(client: &ApiClient) -> Result<Value, ApiError> {
    let path = client.namespaces().catalog_path("/tags/");
    client.send_data(ApiRequest::get(path)).await
}

pub async fn add_tag<T: Serialize + ?Sized>(
    client: &ApiClient,
    tag: &T,
) -> Result<Value, ApiError> {
    let path = client.namespaces().catalog_path("/tag/add/");
    client.send_data(ApiRequest::post(path).json(tag)?).await
}

pub async fn tag_details(client: &ApiClient, id: impl Display) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .catalog_path(&format!("/tag/{}/", segment(id)));
    client.send_data(ApiRequest::get(path)).await
}

pub async fn edit_tag<T: Serialize + ?Sized>(
    client: &ApiClient,
    id: impl Display,
    changes: &T,
) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .catalog_path(&format!("/tag/{}/edit/", segment(id)));
    client.send_data(ApiRequest::patch(path).json(changes)?).await
}
