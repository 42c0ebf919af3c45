//! Interface to the subsystem that acquires keepalived state.

use crate::types::{VRRPData, VRRPInstance, VRRPScript, VRRPStats};
use async_trait::async_trait;
use common::Error as SourceError;
use std::collections::HashMap;

/// Source of raw keepalived state.
///
/// Implementations decide how the daemon is asked to dump its state (signal,
/// query) and how the output is read. Reads are only meaningful after a
/// successful [`refresh`](Collector::refresh) in the same cycle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Collector: Send + Sync {
    /// Make the daemon materialize its current state.
    async fn refresh(&mut self) -> Result<(), SourceError>;

    /// States of the configured `vrrp_script`s.
    async fn script_vrrps(&self) -> Result<Vec<VRRPScript>, SourceError>;

    /// Instance data keyed by instance name.
    async fn data_vrrps(&self) -> Result<HashMap<String, VRRPData>, SourceError>;

    /// Instance counters keyed by instance name.
    async fn stats_vrrps(&self) -> Result<HashMap<String, VRRPStats>, SourceError>;

    /// Data and counters already joined by the daemon (JSON dump).
    async fn json_vrrps(&self) -> Result<Vec<VRRPInstance>, SourceError>;

    /// Whether the daemon reports script states.
    fn has_script_state_support(&self) -> bool;
}
