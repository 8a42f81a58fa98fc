//! Run API endpoints

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::query::{Collection, IncludeSet};
use crate::hcp::TfeClient;

use super::models::{Run, RunCreateOptions};

impl TfeClient {
    /// Runs of a workspace, newest first
    pub fn workspace_runs<'a>(
        &'a self,
        workspace_id: &str,
        includes: IncludeSet,
    ) -> Collection<'a, Run> {
        Collection::new(
            self,
            format!("/{}/{}/{}", api::WORKSPACES, workspace_id, api::RUNS),
            format!("runs of workspace '{}'", workspace_id),
        )
        .includes(includes)
    }

    /// Queue a new run on a workspace
    pub async fn create_run(
        &self,
        workspace_id: &str,
        options: &RunCreateOptions,
    ) -> Result<(Run, serde_json::Value)> {
        let url = format!("{}/{}", self.base_url(), api::RUNS);
        debug!("POST {} for workspace {}", url, workspace_id);

        self.send_document(self.post(&url), &options.to_document(workspace_id), "run")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TfcError;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_run() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/runs"))
            .and(header("Content-Type", "application/vnd.api+json"))
            .and(body_partial_json(serde_json::json!({
                "data": {
                    "attributes": {"message": "from cli"},
                    "relationships": {"workspace": {"data": {"id": "ws-1"}}}
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {
                    "id": "run-new",
                    "type": "runs",
                    "attributes": {"status": "pending", "message": "from cli", "position-in-queue": 0}
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = RunCreateOptions {
            message: Some("from cli".to_string()),
            ..Default::default()
        };
        let (run, raw) = client.create_run("ws-1", &options).await.unwrap();

        assert_eq!(run.id, "run-new");
        assert_eq!(run.status(), "pending");
        assert_eq!(raw["data"]["type"], "runs");
    }

    #[tokio::test]
    async fn test_create_run_on_locked_workspace() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/runs"))
            .respond_with(ResponseTemplate::new(409).set_body_string("workspace is locked"))
            .mount(&mock_server)
            .await;

        let err = client
            .create_run("ws-1", &RunCreateOptions::default())
            .await
            .unwrap_err();

        match err {
            TfcError::Api { status, message } => {
                assert_eq!(status, 409);
                assert!(message.contains("workspace is locked"));
            }
            other => panic!("Expected TfcError::Api, got {:?}", other),
        }
    }
}
