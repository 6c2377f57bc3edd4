//! The chain runner.
//!
//! One run is three strictly sequential awaits: each stage's request is
//! built from the previous stage's parsed result, and the first failure
//! ends the run without a partial result.

use std::future::Future;
use std::time::Instant;

use lp_auth::IdentityProvider;
use lp_client::{ClientError, StageApi};
use lp_core::requests::{MarketAnalysisRequest, ProductRoadmapRequest, TechBlueprintRequest};
use lp_core::{ChainResult, RunIdentity, StageOutput, StartupIdea};

use crate::error::ChainError;
use crate::observer::{ChainObserver, NoopObserver};

/// Runs market analysis, product roadmap and technical blueprint for one
/// startup idea. Holds no per-run state.
#[derive(Debug, Clone)]
pub struct ChainRunner<S, I> {
    stages: S,
    identity: I,
}

impl<S, I> ChainRunner<S, I>
where
    S: StageApi,
    I: IdentityProvider,
{
    pub const fn new(stages: S, identity: I) -> Self {
        Self { stages, identity }
    }

    pub const fn stages(&self) -> &S {
        &self.stages
    }

    pub const fn identity(&self) -> &I {
        &self.identity
    }

    /// Run the chain.
    ///
    /// # Errors
    ///
    /// - [`ChainError::InvalidIdea`] if the trimmed idea is too short; no
    ///   identity lookup or request happens.
    /// - [`ChainError::NotSignedIn`] / [`ChainError::Identity`] if no user
    ///   can be resolved; no request happens.
    /// - [`ChainError::Stage`] with the first failing stage's error.
    pub async fn run(&self, startup_idea: &str) -> Result<ChainResult, ChainError> {
        self.run_observed(startup_idea, &mut NoopObserver).await
    }

    /// [`run`](Self::run), reporting progress to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub async fn run_observed<O>(
        &self,
        startup_idea: &str,
        observer: &mut O,
    ) -> Result<ChainResult, ChainError>
    where
        O: ChainObserver + ?Sized,
    {
        let idea = StartupIdea::parse(startup_idea)?;
        let run = lp_auth::begin_run(&self.identity).await?;
        tracing::info!(session_id = %run.session_id, user_id = %run.user_id, "chain started");
        observer.run_started(&run);
        let started = Instant::now();

        let market_analysis = run_stage(&self.stages, &run, observer, async {
            self.stages
                .market_analysis(&MarketAnalysisRequest::new(&idea, &run))
                .await
        })
        .await?;

        let mut product_roadmap = run_stage(&self.stages, &run, observer, async {
            self.stages
                .product_roadmap(&ProductRoadmapRequest::from_market(&market_analysis))
                .await
        })
        .await?;
        product_roadmap.market_analyst_data = Some(Box::new(market_analysis.clone()));

        let tech_blueprint = run_stage(&self.stages, &run, observer, async {
            self.stages
                .technical_blueprint(&TechBlueprintRequest::from_roadmap(&product_roadmap))
                .await
        })
        .await?;

        tracing::info!(
            session_id = %run.session_id,
            elapsed_ms = elapsed_ms(started),
            "chain finished"
        );
        Ok(ChainResult {
            market_analysis,
            product_roadmap,
            tech_blueprint,
        })
    }
}

/// Await one stage call, checking its echoed session and reporting progress.
async fn run_stage<S, T, O>(
    stages: &S,
    run: &RunIdentity,
    observer: &mut O,
    call: impl Future<Output = Result<T, ClientError>>,
) -> Result<T, ChainError>
where
    S: StageApi + ?Sized,
    T: StageOutput,
    O: ChainObserver + ?Sized,
{
    let stage = T::STAGE;
    observer.stage_started(stage);
    tracing::info!(%stage, session_id = %run.session_id, "stage started");
    let started = Instant::now();

    let result = call.await.and_then(|output| {
        if output.session_id() == run.session_id {
            Ok(output)
        } else {
            tracing::warn!(%stage, echoed = output.session_id(), "stage echoed a foreign session");
            Err(ClientError::Malformed {
                url: stages.stage_url(stage),
                reason: format!(
                    "{stage} echoed session_id '{}' but the run uses '{}'",
                    output.session_id(),
                    run.session_id
                ),
            })
        }
    });

    match result {
        Ok(output) => {
            observer.stage_finished(stage, started.elapsed());
            tracing::info!(
                %stage,
                session_id = %run.session_id,
                elapsed_ms = elapsed_ms(started),
                "stage finished"
            );
            Ok(output)
        }
        Err(source) => {
            observer.stage_failed(stage, &source);
            tracing::warn!(
                %stage,
                session_id = %run.session_id,
                kind = %source.kind(),
                error = %source,
                "stage failed"
            );
            Err(ChainError::Stage { stage, source })
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
