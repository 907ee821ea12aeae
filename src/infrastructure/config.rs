use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "config/dashboard";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub source: SourceSettings,
    #[serde(default)]
    pub page: PageSettings,
    #[serde(default)]
    pub startup: StartupSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub base_url: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default = "default_mount_id")]
    pub mount_id: String,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            mount_id: default_mount_id(),
            title: default_title(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StartupSettings {
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    #[serde(default)]
    pub demo: bool,
}

impl Default for StartupSettings {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            demo: false,
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_mount_id() -> String {
    "myChart".to_string()
}

fn default_title() -> String {
    "Hive Dashboard".to_string()
}

fn default_fields() -> Vec<String> {
    vec!["Outside_temp".to_string()]
}

/// Load `config/dashboard.*` (or the file named by `DASHBOARD_CONFIG`),
/// overridden by `DASHBOARD_<SECTION>__<KEY>` environment variables
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let file = std::env::var("DASHBOARD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let settings = config::Config::builder()
        .add_source(config::File::with_name(&file).required(false))
        .add_source(env_source())
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// `startup.fields` is a comma separated list, e.g. `DASHBOARD_STARTUP__FIELDS=Temp_1,Weight`
fn env_source() -> config::Environment {
    config::Environment::with_prefix("DASHBOARD")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("startup.fields")
}
