use serde::Deserialize;

/// Configuration options specific to the storefront service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Content store connection settings.
    pub sanity: SanityConfig,
}

/// Connection settings for the Sanity content lake.
#[derive(Debug, Clone, Deserialize)]
pub struct SanityConfig {
    /// Sanity project identifier, e.g. `"2aholtmc"`.
    pub project_id: String,
    /// Dataset name, usually `"production"`.
    pub dataset: String,
    /// API version date, e.g. `"2023-12-26"`.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Optional bearer token for private datasets.
    #[serde(default)]
    pub token: Option<String>,
}

impl SanityConfig {
    /// Read endpoint for GROQ queries against this project and dataset.
    pub fn query_url(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v{}/data/query/{}",
            self.project_id, self.api_version, self.dataset
        )
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_version() -> String {
    "2023-12-26".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_targets_the_project_dataset() {
        let config = SanityConfig {
            project_id: "2aholtmc".into(),
            dataset: "production".into(),
            api_version: default_api_version(),
            token: None,
        };
        assert_eq!(
            config.query_url(),
            "https://2aholtmc.api.sanity.io/v2023-12-26/data/query/production"
        );
    }
}
