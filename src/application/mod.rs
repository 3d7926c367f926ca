// Application layer - Use cases on top of the repository traits
pub mod alert_service;
pub mod dashboard_repository;
pub mod dashboard_service;
pub mod monitoring_repository;
pub mod notification_service;
pub mod topology_service;

#[cfg(test)]
pub(crate) mod fake_repository;
