//! Consistent snapshots of keepalived VRRP state.
//!
//! Turns the raw state exposed by a keepalived daemon (instance data,
//! per-instance counters and `vrrp_script` states) into one validated
//! [`KeepalivedStats`] value for monitoring exporters.
//!
//! # Components
//!
//! - **Collector**: trait implemented by whatever dumps and reads daemon state
//! - **KeepalivedCollector**: refreshes the source and merges its output
//! - **ScriptChecker**: runs an external check script against a VIP
//!
//! # Example
//!
//! ```no_run
//! use keepalived_state::{Collector, Config};
//!
//! # async fn example(source: Box<dyn Collector>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! let collector = config.build(source);
//!
//! let stats = collector.get_keepalived_stats().await?;
//! for vrrp in stats.vrrps() {
//!     println!("{} vrid={} adverts={}", vrrp.name(), vrrp.data.vrid, vrrp.stats.advert_rcvd);
//! }
//!
//! let checks = collector.check_vips(&stats).await;
//! # let _ = checks;
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod script;
pub mod source;
pub mod types;

pub use collector::{KeepalivedCollector, Mode, VipCheck, merge_instances};
pub use common::Error as SourceError;
pub use config::{Config, ConfigError};
pub use error::CollectorError;
pub use script::{ScriptChecker, ScriptOutcome};
pub use source::Collector;
pub use types::{KeepalivedStats, VRRPData, VRRPInstance, VRRPScript, VRRPStats, VRRPStatus};
