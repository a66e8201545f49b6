use std::env;

pub const DEFAULT_OUTPUT_PREFIX: &str = "summaries";
pub const DEFAULT_HF_MODEL: &str = "mosaicml/mpt-30b";
pub const DEFAULT_HF_API_BASE_URL: &str = "https://api-inference.huggingface.co/models";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Falls back to the bucket that triggered the invocation when unset.
    pub output_bucket: Option<String>,
    pub output_prefix: String,
    /// Checked at summarization time, not at load time.
    pub hf_api_token: Option<String>,
    pub hf_model: String,
    pub hf_api_base_url: String,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// Nothing here is mandatory at load time: a missing `HF_API_TOKEN`
    /// surfaces later as a summarization failure.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from any key/value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            output_bucket: get("OUTPUT_BUCKET"),
            output_prefix: get("OUTPUT_PREFIX")
                .unwrap_or_else(|| DEFAULT_OUTPUT_PREFIX.to_string()),
            hf_api_token: get("HF_API_TOKEN"),
            hf_model: get("HF_MODEL").unwrap_or_else(|| DEFAULT_HF_MODEL.to_string()),
            hf_api_base_url: get("HF_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_HF_API_BASE_URL.to_string()),
        }
    }

    /// Bucket the summary is written to for an object that arrived in `source_bucket`.
    #[must_use]
    pub fn output_bucket_for<'a>(&'a self, source_bucket: &'a str) -> &'a str {
        self.output_bucket.as_deref().unwrap_or(source_bucket)
    }

    /// Full URL of the text-generation endpoint.
    #[must_use]
    pub fn inference_endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.hf_api_base_url.trim_end_matches('/'),
            self.hf_model.trim_start_matches('/')
        )
    }
}
