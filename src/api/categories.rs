//! Category endpoints under the catalog namespace.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::request::{segment, ApiRequest};

pub async fn get_categories(client: &ApiClient) -> Result<Value, ApiError> {
    let path = client.namespaces().catalog_path("/categories/");
    client.send_data(ApiRequest::get(path)).await
}

pub async fn add_category<T: Serialize + ?Sized>(
    client: &ApiClient,
    category: &T,
) -> Result<Value, ApiError> {
    let path = client.namespaces().catalog_path("/category/add/");
    client.send_data(ApiRequest::post(path).json(category)?).await
}

pub async fn category_details(client: &ApiClient, id: impl Display) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .catalog_path(&format!("/category/{}/", segment(id)));
    client.send_data(ApiRequest::get(path)).await
}

pub async fn edit_category<T: Serialize + ?Sized>(
    client: &ApiClient,
    id: impl Display,
    changes: &T,
) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .catalog_path(&format!("/category/{}/edit/", segment(id)));
    client.send_data(ApiRequest::patch(path).json(changes)?).await
}

pub async fn delete_category(client: &ApiClient, id: impl Display) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .catalog_path(&format!("/category/{}/delete/", segment(id)));
    client.send_data(ApiRequest::delete(path)).await
}
