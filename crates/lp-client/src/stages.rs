//! The three stage endpoints.

use async_trait::async_trait;
use lp_core::requests::{MarketAnalysisRequest, ProductRoadmapRequest, TechBlueprintRequest};
use lp_core::{MarketAnalysis, ProductRoadmap, Stage, StageOutput, TechBlueprint};
use lp_schema::SchemaRegistry;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::BackendClient;
use crate::error::ClientError;
use crate::http::{check_response, malformed, read_json, send};

/// Key under which the backend echoes the stage 1 report in a roadmap.
const MARKET_ECHO_KEY: &str = "_market_analyst_data";

/// One call per chain stage. [`BackendClient`] is the HTTP implementation.
#[async_trait]
pub trait StageApi: Send + Sync {
    async fn market_analysis(
        &self,
        request: &MarketAnalysisRequest<'_>,
    ) -> Result<MarketAnalysis, ClientError>;

    async fn product_roadmap(
        &self,
        request: &ProductRoadmapRequest<'_>,
    ) -> Result<ProductRoadmap, ClientError>;

    async fn technical_blueprint(
        &self,
        request: &TechBlueprintRequest<'_>,
    ) -> Result<TechBlueprint, ClientError>;

    /// Where `stage` is sent, for error reports.
    fn stage_url(&self, stage: Stage) -> String {
        stage.endpoint().to_string()
    }
}

#[async_trait]
impl StageApi for BackendClient {
    async fn market_analysis(
        &self,
        request: &MarketAnalysisRequest<'_>,
    ) -> Result<MarketAnalysis, ClientError> {
        self.post_stage(request, |_| {}).await
    }

    async fn product_roadmap(
        &self,
        request: &ProductRoadmapRequest<'_>,
    ) -> Result<ProductRoadmap, ClientError> {
        // The echoed report has its identity stripped, so it cannot pass the
        // market schema. The chain re-attaches the original.
        self.post_stage(request, |body| {
            if let Some(map) = body.as_object_mut() {
                map.remove(MARKET_ECHO_KEY);
            }
        })
        .await
    }

    async fn technical_blueprint(
        &self,
        request: &TechBlueprintRequest<'_>,
    ) -> Result<TechBlueprint, ClientError> {
        self.post_stage(request, |_| {}).await
    }

    fn stage_url(&self, stage: Stage) -> String {
        self.url(stage.endpoint())
    }
}

impl BackendClient {
    async fn post_stage<T, B>(
        &self,
        body: &B,
        prepare: impl FnOnce(&mut Value) + Send,
    ) -> Result<T, ClientError>
    where
        T: StageOutput + DeserializeOwned,
        B: Serialize + Sync,
    {
        let stage = T::STAGE;
        let url = StageApi::stage_url(self, stage);
        tracing::debug!(%stage, %url, "posting stage request");

        let resp = send(self.http.post(&url).json(body), &url, self.stage_timeout).await?;
        let mut value = read_json(check_response(resp).await?, &url, self.stage_timeout).await?;
        prepare(&mut value);

        parse_stage::<T>(&url, value)
    }
}

/// Validate and deserialize one stage response.
fn parse_stage<T>(url: &str, value: Value) -> Result<T, ClientError>
where
    T: StageOutput + DeserializeOwned,
{
    let stage: Stage = T::STAGE;
    SchemaRegistry::shared()
        .and_then(|registry| registry.validate_stage(stage, &value))
        .map_err(|e| malformed(url, e.to_string()))?;

    serde_json::from_value(value).map_err(|e| malformed(url, format!("{stage}: {e}")))
}
