use crate::domain::scope::Scope;
use crate::infrastructure::sdc_client::DEFAULT_URL;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct SdcConfig {
    pub sdc: SdcSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SdcSettings {
    #[serde(default = "default_url")]
    pub url: String,
    pub token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl SdcSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TemplatesConfig {
    #[serde(default)]
    pub dashboards: Vec<TemplateJob>,
}

/// One dashboard to create from a template.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateJob {
    pub name: String,
    pub template: String,
    #[serde(default)]
    pub scope: Scope,
}

/// Connection settings from `config/sdc.*`, overridable through `SDC_SDC__*`
/// environment variables (e.g. `SDC_SDC__TOKEN`).
pub fn load_sdc_config() -> anyhow::Result<SdcConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/sdc").required(false))
        .add_source(
            config::Environment::with_prefix("SDC")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_templates_config() -> anyhow::Result<TemplatesConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/templates"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
