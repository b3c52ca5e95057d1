//! Mock index host helpers
//!
//! Stands up wiremock endpoints serving index files the way the
//! production raw-content host does, and builds catalog entries in the
//! published wire formats.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use core_images_index::IndexClient;

/// Client pointed at the mock index host
pub fn test_client(server: &MockServer) -> IndexClient {
    IndexClient::new().with_base_url(server.uri())
}

/// Serve a JSON catalog at `/{file}`
pub async fn mount_index(server: &MockServer, file: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", file)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve a failing status at `/{file}`
pub async fn mount_failing_index(server: &MockServer, file: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", file)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Serve a body that is not a decodable catalog at `/{file}`
pub async fn mount_garbage_index(server: &MockServer, file: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", file)))
        .respond_with(ResponseTemplate::new(200).set_body_string("not an index"))
        .mount(server)
        .await;
}

/// One AWS catalog entry in the published wire format
pub fn aws_image(image_id: &str, region: &str, release: &str) -> serde_json::Value {
    json!({
        "CreationDate": "2022-08-16T18:44:54.000Z",
        "ImageId": image_id,
        "Name": format!("core-{}", release),
        "Region": region,
        "Release": release,
    })
}

/// One GCP catalog entry in the published wire format
pub fn gcp_image(name: &str, location: &str, release_label: &str) -> serde_json::Value {
    json!({
        "creationTimestamp": "2022-08-16T11:44:54.000-07:00",
        "labels": {
            "calyptia-core-release": release_label,
            "source-image": "projects/debian-cloud/global/images/debian-11",
        },
        "name": name,
        "storageLocations": [location],
    })
}
