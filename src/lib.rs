//! Executive AI analysis for CT-e freight dashboards.
//!
//! Takes a batch of CT-e records plus a free-text operational context,
//! serializes a bounded sample into a fixed Portuguese prompt, sends it
//! to a hosted text-generation API and hands back a single displayable
//! string: the generated analysis, a configuration warning, or a
//! service-error notice. There is no structured error channel by
//! design; the dashboard renders whatever comes back.
//!
//! ```no_run
//! use cte_insights::{AnalysisConfig, AnalysisService, CteRecord};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let service = AnalysisService::new(AnalysisConfig::default());
//! let records = vec![CteRecord {
//!     cte_number: "35123".into(),
//!     status: "Atrasado".into(),
//!     value: 1850.0,
//!     delivery_unit: "SP-Capital".into(),
//! }];
//!
//! let analysis = service.analyze(&records, "Semana com greve parcial").await;
//! println!("{analysis}");
//! # }
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod records;
pub mod service;

pub use config::{AnalysisConfig, ProviderKind};
pub use error::GenerationError;
pub use provider::{GenerationRequest, TextGenerator};
pub use records::CteRecord;
pub use service::{AnalysisService, MISSING_KEY_NOTICE, NO_LEGIBLE_TEXT_NOTICE};
