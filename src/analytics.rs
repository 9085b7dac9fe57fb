//! Fire-and-forget funnel analytics.
//!
//! Every event is logged through `tracing`. When a collector endpoint is
//! configured, the event is additionally POSTed as JSON from a detached task;
//! there is no response contract and failures are only logged at debug level.
//! Nothing in the wizard ever waits on an analytics call.

use crate::phase::Phase;
use serde::Serialize;
use serde_json::{Map, Value};

/// What happened at a funnel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunnelAction {
    Start,
    Complete,
    Abandon,
    Error,
}

/// A single funnel progression event with a flat parameter object.
#[derive(Debug, Clone, Serialize)]
pub struct FunnelEvent {
    pub event: String,
    pub phase: String,
    pub action: FunnelAction,
    /// 1-based position of the phase in the funnel
    pub funnel_position: usize,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl FunnelEvent {
    pub fn new(phase: Phase, action: FunnelAction) -> Self {
        Self {
            event: "funnel_progress".to_string(),
            phase: phase.to_string(),
            action,
            funnel_position: phase.index() + 1,
            params: Map::new(),
        }
    }

    /// Attach one flat parameter.
    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }
}

/// Analytics adapter. Cheap to clone; the HTTP client is shared.
#[derive(Debug, Clone)]
pub struct Analytics {
    enabled: bool,
    collector_url: Option<String>,
    client: reqwest::Client,
}

impl Analytics {
    pub fn new(enabled: bool, collector_url: Option<String>) -> Self {
        Self {
            enabled,
            collector_url,
            client: reqwest::Client::new(),
        }
    }

    /// A disabled adapter that drops every event.
    pub fn disabled() -> Self {
        Self::new(false, None)
    }

    /// Emit an event. Never blocks and never fails.
    pub fn emit(&self, event: FunnelEvent) {
        if !self.enabled {
            return;
        }
        tracing::info!(
            event = %event.event,
            phase = %event.phase,
            action = ?event.action,
            funnel_position = event.funnel_position,
            "analytics"
        );
        if let Some(url) = self.collector_url.clone() {
            let client = self.client.clone();
            tokio::spawn(async move {
                if let Err(err) = client.post(&url).json(&event).send().await {
                    tracing::debug!(error = %err, "analytics post failed");
                }
            });
        }
    }

    pub fn phase_start(&self, phase: Phase) {
        self.emit(FunnelEvent::new(phase, FunnelAction::Start));
    }

    pub fn phase_complete(&self, phase: Phase) {
        self.emit(FunnelEvent::new(phase, FunnelAction::Complete));
    }

    pub fn phase_error(&self, phase: Phase, message: &str) {
        self.emit(FunnelEvent::new(phase, FunnelAction::Error).with_param("error", message));
    }

    pub fn abandon(&self, phase: Phase) {
        self.emit(FunnelEvent::new(phase, FunnelAction::Abandon));
    }

    /// Terminal event fired when the funnel finishes.
    pub fn onboarding_complete(&self, box_id: &str) {
        let mut event = FunnelEvent::new(Phase::Complete, FunnelAction::Complete)
            .with_param("box_id", box_id);
        event.event = "funnel_complete".to_string();
        self.emit(event);
    }
}
