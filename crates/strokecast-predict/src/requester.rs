//! Fan-out of one form submission to every model

use std::{collections::BTreeMap, sync::Arc, time::Instant};

use futures::future::{join_all, try_join_all};
use serde::Serialize;
use serde_json::Value;
use strokecast_forms::{FormSchema, FormState};
use strokecast_http::HttpClientTrait;
use tracing::{debug, info, warn};

use crate::{
    error::{PredictError, Result},
    model::ModelName,
};

/// Join a base URL and endpoint path into the request URL.
///
/// The base keeps any path prefix it has (`http://host/api` + `/predict-stroke/`
/// gives `http://host/api/predict-stroke/`).
pub fn endpoint_url(base_url: &str, path: &str) -> Result<String> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let parsed = url::Url::parse(&joined).map_err(|e| PredictError::InvalidEndpoint {
        url: joined.clone(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(joined),
        other => Err(PredictError::InvalidEndpoint {
            url: joined.clone(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// Pretty-printed response text per model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PredictionResults {
    raw: BTreeMap<ModelName, String>,
}

impl PredictionResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, model: ModelName, raw: String) {
        self.raw.insert(model, raw);
    }

    pub fn get(&self, model: ModelName) -> Option<&str> {
        self.raw.get(&model).map(String::as_str)
    }

    /// Entries in fixed model order
    pub fn iter(&self) -> impl Iterator<Item = (ModelName, &str)> {
        self.raw.iter().map(|(m, r)| (*m, r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl FromIterator<(ModelName, String)> for PredictionResults {
    fn from_iter<T: IntoIterator<Item = (ModelName, String)>>(iter: T) -> Self {
        Self {
            raw: iter.into_iter().collect(),
        }
    }
}

/// Settled result of one model's request
#[derive(Debug)]
pub struct ModelOutcome {
    pub model: ModelName,
    pub result: Result<String>,
}

/// Issues one POST per model against a fixed endpoint
#[derive(Clone)]
pub struct MultiModelRequester {
    client: Arc<dyn HttpClientTrait>,
    endpoint: String,
}

impl MultiModelRequester {
    /// Create a requester posting to a complete endpoint URL
    pub fn new(client: Arc<dyn HttpClientTrait>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Create a requester from a base URL plus endpoint path
    pub fn from_base_url(
        client: Arc<dyn HttpClientTrait>,
        base_url: &str,
        path: &str,
    ) -> Result<Self> {
        Ok(Self::new(client, endpoint_url(base_url, path)?))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request one model and return its reply as pretty-printed JSON
    pub async fn request_one(
        &self,
        schema: &FormSchema,
        state: &FormState,
        model: ModelName,
    ) -> Result<String> {
        let body = Value::Object(schema.shape_request(state, model.as_str()));
        debug!(model = %model, endpoint = %self.endpoint, "Sending prediction request");

        let response = self
            .client
            .post_json(&self.endpoint, &body)
            .await
            .map_err(|e| {
                if e.is_transport() {
                    warn!(
                        model = %model,
                        endpoint = %self.endpoint,
                        "Prediction service unreachable"
                    );
                }
                PredictError::from_http(model, e)
            })?;

        let text = response
            .text()
            .await
            .map_err(|e| PredictError::from_http(model, e.into()))?;
        let parsed: Value = serde_json::from_str(&text)
            .map_err(|source| PredictError::InvalidBody { model, source })?;

        serde_json::to_string_pretty(&parsed)
            .map_err(|source| PredictError::InvalidBody { model, source })
    }

    /// Request every model concurrently; all must succeed.
    ///
    /// The first failure to settle wins and the other in-flight requests are dropped.
    pub async fn request_all(
        &self,
        schema: &FormSchema,
        state: &FormState,
    ) -> Result<PredictionResults> {
        let started = Instant::now();
        let requests = ModelName::ALL.into_iter().map(|model| async move {
            let raw = self.request_one(schema, state, model).await?;
            Ok::<_, PredictError>((model, raw))
        });

        match try_join_all(requests).await {
            Ok(replies) => {
                info!(
                    models = replies.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "All model predictions received"
                );
                Ok(replies.into_iter().collect())
            }
            Err(e) => {
                warn!("Prediction failed: {}", e);
                Err(e)
            }
        }
    }

    /// Request every model concurrently and keep every outcome, successful or not
    pub async fn request_each(&self, schema: &FormSchema, state: &FormState) -> Vec<ModelOutcome> {
        let requests = ModelName::ALL.into_iter().map(|model| async move {
            ModelOutcome {
                model,
                result: self.request_one(schema, state, model).await,
            }
        });
        join_all(requests).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use strokecast_forms::variants::{DEMOGRAPHIC, VITALS};
    use strokecast_http::{HttpClient, HttpConfig};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/predict-stroke/";

    fn requester_for(server: &MockServer) -> MultiModelRequester {
        let client = Arc::new(HttpClient::new(HttpConfig::default()).unwrap());
        MultiModelRequester::from_base_url(client, &server.uri(), ENDPOINT).unwrap()
    }

    async fn mount_model(server: &MockServer, model: ModelName, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(body_partial_json(json!({ "model_name": model.as_str() })))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[test]
    fn test_endpoint_url_joins_paths() {
        assert_eq!(
            endpoint_url("http://127.0.0.1:8000", "/predict-stroke/").unwrap(),
            "http://127.0.0.1:8000/predict-stroke/"
        );
        assert_eq!(
            endpoint_url("https://example.org/api/", "predict-stroke/").unwrap(),
            "https://example.org/api/predict-stroke/"
        );
    }

    #[test]
    fn test_endpoint_url_rejects_bad_base() {
        assert!(matches!(
            endpoint_url("127.0.0.1:8000", "/predict-stroke/"),
            Err(PredictError::InvalidEndpoint { .. })
        ));
        assert!(endpoint_url("not a url", "/x").is_err());
    }

    #[tokio::test]
    async fn test_request_all_collects_pretty_bodies() {
        let server = MockServer::start().await;
        for (i, model) in ModelName::ALL.into_iter().enumerate() {
            mount_model(
                &server,
                model,
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "model": model.as_str(), "rank": i })),
            )
            .await;
        }

        let results = requester_for(&server)
            .request_all(&DEMOGRAPHIC, &DEMOGRAPHIC.initial_state())
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(
            results.get(ModelName::Xgboost),
            Some("{\n  \"model\": \"xgboost\",\n  \"rank\": 1\n}")
        );
        let order: Vec<_> = results.iter().map(|(m, _)| m).collect();
        assert_eq!(order, ModelName::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_request_all_sends_full_state_per_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(3)
            .mount(&server)
            .await;

        let mut state = VITALS.initial_state();
        state.set_field("suhu_tubuh", "37.2");
        requester_for(&server).request_all(&VITALS, &state).await.unwrap();

        let received = server.received_requests().await.unwrap();
        let mut models: Vec<String> = Vec::new();
        for request in &received {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            assert_eq!(body["suhu_tubuh"], json!(37.2));
            assert_eq!(body["usia"], json!("70"));
            assert_eq!(body.as_object().unwrap().len(), 13);
            models.push(body["model_name"].as_str().unwrap().to_string());
        }
        models.sort();
        assert_eq!(models, vec!["logistic_regression", "random_forest", "xgboost"]);
    }

    #[tokio::test]
    async fn test_one_failure_discards_everything() {
        let server = MockServer::start().await;
        mount_model(
            &server,
            ModelName::LogisticRegression,
            ResponseTemplate::new(200).set_body_json(json!({"ok": 1})),
        )
        .await;
        mount_model(&server, ModelName::Xgboost, ResponseTemplate::new(500)).await;
        mount_model(
            &server,
            ModelName::RandomForest,
            ResponseTemplate::new(200).set_body_json(json!({"ok": 3})),
        )
        .await;

        let err = requester_for(&server)
            .request_all(&DEMOGRAPHIC, &DEMOGRAPHIC.initial_state())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error for xgboost: 500");
    }

    #[tokio::test]
    async fn test_first_failure_to_settle_is_reported() {
        let server = MockServer::start().await;
        mount_model(
            &server,
            ModelName::LogisticRegression,
            ResponseTemplate::new(422).set_delay(Duration::from_millis(300)),
        )
        .await;
        mount_model(
            &server,
            ModelName::Xgboost,
            ResponseTemplate::new(200).set_body_json(json!({})),
        )
        .await;
        mount_model(&server, ModelName::RandomForest, ResponseTemplate::new(503)).await;

        let err = requester_for(&server)
            .request_all(&DEMOGRAPHIC, &DEMOGRAPHIC.initial_state())
            .await
            .unwrap_err();

        assert_eq!(err.model(), Some(ModelName::RandomForest));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let err = requester_for(&server)
            .request_one(&DEMOGRAPHIC, &DEMOGRAPHIC.initial_state(), ModelName::Xgboost)
            .await
            .unwrap_err();
        assert!(matches!(err, PredictError::InvalidBody { model: ModelName::Xgboost, .. }));
    }

    #[tokio::test]
    async fn test_request_each_keeps_siblings() {
        let server = MockServer::start().await;
        mount_model(
            &server,
            ModelName::LogisticRegression,
            ResponseTemplate::new(200).set_body_json(json!({"p": "1.00%"})),
        )
        .await;
        mount_model(
            &server,
            ModelName::Xgboost,
            ResponseTemplate::new(404).set_body_string("Not Found"),
        )
        .await;
        mount_model(
            &server,
            ModelName::RandomForest,
            ResponseTemplate::new(200).set_body_json(json!({"p": "2.00%"})),
        )
        .await;

        let outcomes = requester_for(&server)
            .request_each(&DEMOGRAPHIC, &DEMOGRAPHIC.initial_state())
            .await;

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].model, ModelName::LogisticRegression);
        assert!(outcomes[0].result.is_ok());
        match &outcomes[1].result {
            Err(PredictError::Status { status, body, .. }) => {
                assert_eq!(*status, 404);
                assert_eq!(body, "Not Found");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(outcomes[2].result.is_ok());
    }
}
