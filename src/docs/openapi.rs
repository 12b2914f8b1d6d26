//! OpenAPI description generated from the relay handlers' annotations.

use serde::{Deserialize, Serialize};
use utoipa::openapi::server::Server;
use utoipa::{OpenApi, ToSchema};

use crate::config::RelayConfig;

/// Documented shape of a submission. The relay forwards whatever JSON it
/// receives; this type only describes the expected fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[schema(example = "t")]
    pub title: String,
    #[schema(example = "b")]
    pub body: String,
    #[schema(example = 1)]
    pub user_id: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::relay::handlers::fetch_data,
        crate::relay::handlers::submit_data,
    ),
    components(schemas(NewPost)),
    tags((name = "relay", description = "Relay to the third-party API"))
)]
pub struct ApiDoc;

/// The generated document with title, version and server taken from config.
pub fn build_document(config: &RelayConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = config.docs.title.clone();
    doc.info.version = config.docs.version.clone();
    doc.info.description = Some(config.docs.description.clone());
    doc.servers = Some(vec![Server::new(config.listener.public_url())]);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{Operation, DATA_PATH};
    use serde_json::Value;

    fn document(config: &RelayConfig) -> Value {
        serde_json::to_value(build_document(config)).unwrap()
    }

    #[test]
    fn test_document_describes_both_operations() {
        let doc = document(&RelayConfig::default());

        assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
        assert_eq!(doc["servers"][0]["url"], "http://localhost:3000");

        let data = &doc["paths"][DATA_PATH];
        assert!(data["get"]["responses"]["200"].is_object());
        assert!(data["get"]["responses"]["500"]["content"]["text/plain"].is_object());
        assert!(data["post"]["responses"]["201"].is_object());
        assert_eq!(
            data["post"]["requestBody"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/NewPost"
        );
        assert_eq!(
            data["get"]["summary"],
            "Retrieve data from a third-party API"
        );
        assert!(Operation::Fetch.failure_message().starts_with("Error fetching data"));
    }

    #[test]
    fn test_submission_schema_uses_wire_names() {
        let doc = document(&RelayConfig::default());
        let props = &doc["components"]["schemas"]["NewPost"]["properties"];

        assert_eq!(props["title"]["type"], "string");
        assert_eq!(props["body"]["type"], "string");
        assert_eq!(props["userId"]["type"], "integer");
        assert!(props.get("user_id").is_none());
    }

    #[test]
    fn test_document_follows_config() {
        let mut config = RelayConfig::default();
        config.listener.port = 8080;
        config.docs.title = "Relay".into();
        config.docs.version = "2.0.0".into();

        let doc = document(&config);
        assert_eq!(doc["servers"][0]["url"], "http://localhost:8080");
        assert_eq!(doc["info"]["title"], "Relay");
        assert_eq!(doc["info"]["version"], "2.0.0");
    }
}
