//! Client for the Sysdig Cloud monitoring REST API.
//!
//! [`SdcClient`] talks to the service. The use cases in [`application`] are
//! written against the [`DashboardRepository`] and [`MonitoringRepository`]
//! traits. The main one is
//! [`DashboardService::create_dashboard_from_template`], which clones a
//! template dashboard into one scoped to a set of dimension values.
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::dashboard_repository::DashboardRepository;
pub use application::dashboard_service::DashboardService;
pub use application::monitoring_repository::MonitoringRepository;
pub use domain::scope::{Scope, ScopeEntry};
pub use error::{SdcError, TemplateError, TemplateStage};
pub use infrastructure::sdc_client::SdcClient;
