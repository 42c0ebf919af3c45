//! Snapshot collection from a keepalived state source.

use crate::error::CollectorError;
use crate::script::ScriptChecker;
use crate::source::Collector;
use crate::types::{KeepalivedStats, VRRPData, VRRPInstance, VRRPStats};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, error};

/// How instance data and counters are obtained from the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Single read of the pre-joined JSON dump; no script states
    #[default]
    Json,
    /// Separate script, stats and data reads merged by instance name
    Legacy,
}

/// Result of probing one virtual address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VipCheck {
    pub instance: String,
    pub vip: String,
    pub healthy: bool,
}

/// Builds [`KeepalivedStats`] snapshots from a [`Collector`].
///
/// The source lives behind a lock held for a whole refresh/read/merge cycle,
/// so concurrent callers never observe reads from another cycle's refresh.
pub struct KeepalivedCollector {
    mode: Mode,
    source: Mutex<Box<dyn Collector>>,
    script: Option<ScriptChecker>,
    script_state_support: bool,
}

impl KeepalivedCollector {
    /// Create a collector. `script_path` enables VIP probing.
    ///
    /// The source's script state capability is read once here.
    pub fn new(mode: Mode, script_path: Option<String>, source: Box<dyn Collector>) -> Self {
        let script_state_support = source.has_script_state_support();
        Self {
            mode,
            script_state_support,
            source: Mutex::new(source),
            script: script_path.map(ScriptChecker::new),
        }
    }

    /// Collection mode chosen at construction.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Configured check script, if any.
    pub fn script_checker(&self) -> Option<&ScriptChecker> {
        self.script.as_ref()
    }

    /// Whether the underlying daemon reports script states.
    pub fn has_script_state_support(&self) -> bool {
        self.script_state_support
    }

    /// Refresh the source and build a validated snapshot.
    ///
    /// Any source failure aborts the cycle and is returned unchanged. In
    /// legacy mode data and counters must describe exactly the same
    /// instances, otherwise no snapshot is produced.
    pub async fn get_keepalived_stats(&self) -> Result<KeepalivedStats, CollectorError> {
        let mut source = self.source.lock().await;

        source.refresh().await?;

        match self.mode {
            Mode::Json => {
                let vrrps = source.json_vrrps().await?;
                debug!(instances = vrrps.len(), "Collected keepalived JSON state");
                Ok(KeepalivedStats::new(vrrps, Vec::new()))
            }
            Mode::Legacy => {
                let scripts = source.script_vrrps().await?;
                let stats = source.stats_vrrps().await?;
                let data = source.data_vrrps().await?;

                let vrrps = merge_instances(data, stats)?;
                debug!(
                    instances = vrrps.len(),
                    scripts = scripts.len(),
                    "Collected keepalived state"
                );
                Ok(KeepalivedStats::new(vrrps, scripts))
            }
        }
    }

    /// Probe every VIP of every instance with the check script.
    ///
    /// Returns nothing when no script is configured. Keepalived reports VIPs
    /// as `"<addr> dev <if> scope <scope>"`; only the address is passed on.
    pub async fn check_vips(&self, stats: &KeepalivedStats) -> Vec<VipCheck> {
        let Some(checker) = &self.script else {
            return Vec::new();
        };

        let mut checks = Vec::new();
        for instance in stats.vrrps() {
            for vip in &instance.data.vips {
                let Some(addr) = vip.split_whitespace().next() else {
                    continue;
                };
                checks.push(VipCheck {
                    instance: instance.data.iname.clone(),
                    vip: addr.to_string(),
                    healthy: checker.check_script(addr).await,
                });
            }
        }
        checks
    }
}

/// Join instance data with counters by instance name.
///
/// Fails as a whole if the maps differ in size or an instance has no
/// counters. Output is ordered by instance name.
pub fn merge_instances(
    data: HashMap<String, VRRPData>,
    mut stats: HashMap<String, VRRPStats>,
) -> Result<Vec<VRRPInstance>, CollectorError> {
    if data.len() != stats.len() {
        error!(
            data = data.len(),
            stats = stats.len(),
            "keepalived.data and keepalived.stats are not synced"
        );
        return Err(CollectorError::NotSynced {
            data: data.len(),
            stats: stats.len(),
        });
    }

    let mut vrrps = Vec::with_capacity(data.len());
    for (instance, data) in data {
        match stats.remove(&instance) {
            Some(stats) => vrrps.push(VRRPInstance { data, stats }),
            None => {
                error!(instance = %instance, "No stats found for instance");
                return Err(CollectorError::MissingStats { instance });
            }
        }
    }

    vrrps.sort_by(|a, b| a.data.iname.cmp(&b.data.iname));
    Ok(vrrps)
}
