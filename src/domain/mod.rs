// Domain layer - Resource models of the monitoring service
pub mod account;
pub mod alert;
pub mod dashboard;
pub mod group_configuration;
pub mod notification;
pub mod scope;
pub mod topology;
