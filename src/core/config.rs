use std::env;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub textract_endpoint_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let textract_endpoint_url = match env::var("TEXTRACT_ENDPOINT_URL") {
            Ok(url) if url.trim().is_empty() => {
                return Err("TEXTRACT_ENDPOINT_URL: must not be empty when set".to_string());
            }
            Ok(url) => Some(url.trim().to_string()),
            Err(env::VarError::NotPresent) => None,
            Err(e) => return Err(format!("TEXTRACT_ENDPOINT_URL: {}", e)),
        };

        Ok(Self {
            textract_endpoint_url,
        })
    }
}
