//! Place image endpoints under the media namespace.
//!
//! Uploads are sent as `multipart/form-data`; everything else is JSON.

use std::fmt::Display;

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::request::{segment, ApiRequest};

/// Form field the backend reads the uploaded file from.
pub const IMAGE_FIELD: &str = "image";

/// GET {media}/place/{place_id}/images/
pub async fn get_place_images(
    client: &ApiClient,
    place_id: impl Display,
) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .media_path(&format!("/place/{}/images/", segment(place_id)));
    client.send_data(ApiRequest::get(path)).await
}

/// POST {media}/place/{place_id}/images/add/ as multipart.
///
/// The form is forwarded as-is; its fields are not inspected.
pub async fn add_place_image(
    client: &ApiClient,
    place_id: impl Display,
    form: Form,
) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .media_path(&format!("/place/{}/images/add/", segment(place_id)));
    client.send_data(ApiRequest::post(path).multipart(form)).await
}

/// GET {media}/images/{id}/
pub async fn image_details(client: &ApiClient, id: impl Display) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .media_path(&format!("/images/{}/", segment(id)));
    client.send_data(ApiRequest::get(path)).await
}

/// PATCH {media}/images/{id}/edit/
pub async fn edit_image<T: Serialize + ?Sized>(
    client: &ApiClient,
    id: impl Display,
    changes: &T,
) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .media_path(&format!("/images/{}/edit/", segment(id)));
    client.send_data(ApiRequest::patch(path).json(changes)?).await
}

/// DELETE {media}/images/{id}/delete/
pub async fn delete_image(client: &ApiClient, id: impl Display) -> Result<Value, ApiError> {
    let path = client
        .namespaces()
        .media_path(&format!("/images/{}/delete/", segment(id)));
    client.send_data(ApiRequest::delete(path)).await
}

/// Build an upload form holding one image file under [`IMAGE_FIELD`].
pub fn image_form(data: Vec<u8>, file_name: &str) -> Result<Form, ApiError> {
    let part = Part::bytes(data)
        .file_name(file_name.to_string())
        .mime_str(mime_for(file_name))?;
    Ok(Form::new().part(IMAGE_FIELD, part))
}

/// Content type from the file extension.
fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("front.PNG"), "image/png");
        assert_eq!(mime_for("a.b.jpeg"), "image/jpeg");
        assert_eq!(mime_for("photo.webp"), "image/webp");
        assert_eq!(mime_for("README"), "application/octet-stream");
    }

    #[test]
    fn test_image_form_builds() {
        let form = image_form(vec![0x89, b'P', b'N', b'G'], "logo.png").unwrap();
        assert!(!form.boundary().is_empty());
    }
}
