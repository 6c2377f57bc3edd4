use std::time::Duration;

use lp_client::ClientError;
use lp_core::{RunIdentity, Stage};

/// Progress callbacks for one chain run. All methods default to no-ops.
pub trait ChainObserver {
    /// Identity resolved; the first stage is about to start.
    fn run_started(&mut self, _identity: &RunIdentity) {}

    fn stage_started(&mut self, _stage: Stage) {}

    fn stage_finished(&mut self, _stage: Stage, _elapsed: Duration) {}

    fn stage_failed(&mut self, _stage: Stage, _error: &ClientError) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ChainObserver for NoopObserver {}
