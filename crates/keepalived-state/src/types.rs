//! Keepalived VRRP data types.
//!
//! Field names on the wire follow keepalived's own JSON dump so a source
//! reading `keepalived.json` can deserialize straight into these types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// VRRP instance state as reported by keepalived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VRRPStatus {
    /// Instance is initializing
    Init,
    /// Instance is a backup router
    Backup,
    /// Instance owns the virtual addresses
    Master,
    /// Instance is in fault state (interface down, failed track script)
    Fault,
}

impl VRRPStatus {
    /// Decode keepalived's numeric state code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(VRRPStatus::Init),
            1 => Some(VRRPStatus::Backup),
            2 => Some(VRRPStatus::Master),
            3 => Some(VRRPStatus::Fault),
            _ => None,
        }
    }

    /// Numeric state code used by keepalived.
    pub fn code(self) -> i32 {
        match self {
            VRRPStatus::Init => 0,
            VRRPStatus::Backup => 1,
            VRRPStatus::Master => 2,
            VRRPStatus::Fault => 3,
        }
    }
}

impl fmt::Display for VRRPStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VRRPStatus::Init => write!(f, "INIT"),
            VRRPStatus::Backup => write!(f, "BACKUP"),
            VRRPStatus::Master => write!(f, "MASTER"),
            VRRPStatus::Fault => write!(f, "FAULT"),
        }
    }
}

/// Configuration and runtime facts of one VRRP instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VRRPData {
    /// Instance name, unique per daemon
    pub iname: String,

    /// Current state code
    pub state: i32,

    /// Desired state code
    #[serde(rename = "wantstate")]
    pub want_state: i32,

    /// Bound network interface
    #[serde(rename = "ifp_ifname")]
    pub interface: String,

    /// Gratuitous ARP delay (seconds)
    pub garp_delay: u32,

    /// Virtual Router ID
    pub vrid: u32,

    /// Virtual addresses owned by the instance
    #[serde(default)]
    pub vips: Vec<String>,

    /// Virtual addresses excluded from advertisements
    #[serde(default)]
    pub excluded_vips: Vec<String>,
}

impl VRRPData {
    /// Decoded current state, `None` for codes keepalived may add later.
    pub fn status(&self) -> Option<VRRPStatus> {
        VRRPStatus::from_code(self.state)
    }

    /// Decoded desired state.
    pub fn wanted_status(&self) -> Option<VRRPStatus> {
        VRRPStatus::from_code(self.want_state)
    }
}

/// Protocol counters of one VRRP instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VRRPStats {
    pub advert_rcvd: u64,
    pub advert_sent: u64,
    pub become_master: u64,
    pub release_master: u64,
    pub packet_len_err: u64,
    pub advert_interval_err: u64,
    pub ip_ttl_err: u64,
    pub invalid_type_rcvd: u64,
    pub addr_list_err: u64,
    #[serde(rename = "invalid_authtype")]
    pub invalid_auth_type: u64,
    #[serde(rename = "authtype_mismatch")]
    pub auth_type_mismatch: u64,
    pub auth_failure: u64,
    pub pri_zero_rcvd: u64,
    pub pri_zero_sent: u64,
}

/// State of a `vrrp_script` configured in keepalived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VRRPScript {
    pub name: String,
    pub status: String,
    pub state: String,
}

/// One instance's data joined with its counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VRRPInstance {
    pub data: VRRPData,
    pub stats: VRRPStats,
}

impl VRRPInstance {
    /// Instance name shared by data and counters.
    pub fn name(&self) -> &str {
        &self.data.iname
    }
}

/// Consistent snapshot of keepalived's VRRP state.
///
/// Built once per collection cycle and never modified afterwards; a new
/// cycle yields a new value. Both sequences are always present, empty when
/// the source reported nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeepalivedStats {
    vrrps: Vec<VRRPInstance>,
    scripts: Vec<VRRPScript>,
}

impl KeepalivedStats {
    pub(crate) fn new(vrrps: Vec<VRRPInstance>, scripts: Vec<VRRPScript>) -> Self {
        Self { vrrps, scripts }
    }

    /// VRRP instances with their counters.
    pub fn vrrps(&self) -> &[VRRPInstance] {
        &self.vrrps
    }

    /// Script states (empty when collected in JSON mode).
    pub fn scripts(&self) -> &[VRRPScript] {
        &self.scripts
    }

    /// Consume the snapshot into its parts.
    pub fn into_parts(self) -> (Vec<VRRPInstance>, Vec<VRRPScript>) {
        (self.vrrps, self.scripts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        for status in [
            VRRPStatus::Init,
            VRRPStatus::Backup,
            VRRPStatus::Master,
            VRRPStatus::Fault,
        ] {
            assert_eq!(VRRPStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(VRRPStatus::from_code(7), None);
        assert_eq!(VRRPStatus::Master.to_string(), "MASTER");
    }

    #[test]
    fn test_data_status_helpers() {
        let data = VRRPData {
            iname: "VI_1".to_string(),
            state: 2,
            want_state: 1,
            ..Default::default()
        };

        assert_eq!(data.status(), Some(VRRPStatus::Master));
        assert_eq!(data.wanted_status(), Some(VRRPStatus::Backup));
    }

    #[test]
    fn test_keepalived_json_field_names() {
        let json = r#"{
            "data": {
                "iname": "VI_1",
                "state": 2,
                "wantstate": 2,
                "ifp_ifname": "eth0",
                "garp_delay": 5,
                "vrid": 51,
                "vips": ["10.0.0.1 dev eth0 scope global"]
            },
            "stats": {
                "advert_rcvd": 10,
                "advert_sent": 3,
                "invalid_authtype": 1,
                "authtype_mismatch": 2,
                "pri_zero_sent": 4
            }
        }"#;

        let instance: VRRPInstance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.name(), "VI_1");
        assert_eq!(instance.data.interface, "eth0");
        assert_eq!(instance.data.vrid, 51);
        assert_eq!(instance.data.want_state, 2);
        assert!(instance.data.excluded_vips.is_empty());
        assert_eq!(instance.stats.advert_rcvd, 10);
        assert_eq!(instance.stats.invalid_auth_type, 1);
        assert_eq!(instance.stats.auth_type_mismatch, 2);
        assert_eq!(instance.stats.pri_zero_sent, 4);
        assert_eq!(instance.stats.become_master, 0);
    }

    #[test]
    fn test_empty_snapshot_serializes_sequences() {
        let value = serde_json::to_value(KeepalivedStats::default()).unwrap();
        assert_eq!(value["vrrps"], serde_json::json!([]));
        assert_eq!(value["scripts"], serde_json::json!([]));
    }
}
