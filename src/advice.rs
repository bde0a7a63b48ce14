use crate::config::AdviceConfig;
use crate::BloomError;
use std::time::Duration;

const SYSTEM_PROMPT: &str =
    "You are a gentle wellness companion inside a period tracking app. You never diagnose. Keep answers short, warm, and safe.";

const USER_PROMPT_TEMPLATE: &str = r#"The user is experiencing these period symptoms: {SYMPTOMS}.
Provide 2 short, empathetic, safe wellness tips.
Be supportive and calming."#;

pub const NOTHING_LOGGED: &str = "No symptoms logged yet.";
pub const UNAVAILABLE: &str = "AI is currently busy. Please try again later.";
pub const DISABLED: &str = "AI tips are turned off.";

/// Outcome of asking for a tip. Every variant renders to user-facing text,
/// so callers have no error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    Tip(String),
    NothingLogged,
    Unavailable,
    Disabled,
}

impl Advice {
    pub fn text(&self) -> &str {
        match self {
            Advice::Tip(t) => t,
            Advice::NothingLogged => NOTHING_LOGGED,
            Advice::Unavailable => UNAVAILABLE,
            Advice::Disabled => DISABLED,
        }
    }
}

/// A single text-generation request against some remote model.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, BloomError>;
}

/// OpenAI-compatible chat completions endpoint (Gemini's compat API by default).
pub struct ChatCompletions {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ChatCompletions {
    pub fn from_config(config: &AdviceConfig) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::config::Config::builder()
                .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
                .build(),
        );
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.is_empty());
        if api_key.is_none() {
            log::warn!(
                "{} is not set; advice requests will be unauthenticated",
                config.api_key_env
            );
        }
        Self {
            agent,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        }
    }
}

impl TextGenerator for ChatCompletions {
    fn generate(&self, prompt: &str) -> Result<String, BloomError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "temperature": 0.7,
            "max_tokens": 300,
        });

        let mut request = self.agent.post(self.endpoint.as_str());
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {key}"));
        }

        let resp: serde_json::Value = request
            .send_json(&body)
            .map_err(|e| BloomError::Remote(format!("advice request: {e}")))?
            .body_mut()
            .read_json()
            .map_err(|e| BloomError::Remote(format!("advice response: {e}")))?;

        extract_content(&resp)
    }
}

fn extract_content(resp: &serde_json::Value) -> Result<String, BloomError> {
    let text = resp
        .pointer("/choices/0/message/content")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .unwrap_or_default();
    if text.is_empty() {
        return Err(BloomError::Remote("empty completion".into()));
    }
    Ok(text.to_string())
}

pub fn build_prompt(symptoms: &str) -> String {
    USER_PROMPT_TEMPLATE.replace("{SYMPTOMS}", symptoms.trim())
}

/// Retry wrapper: a fixed number of attempts with a fixed pause in between.
pub struct AdviceClient<G> {
    generator: G,
    max_attempts: u32,
    delay: Duration,
}

impl AdviceClient<ChatCompletions> {
    pub fn from_config(config: &AdviceConfig) -> Self {
        Self::new(
            ChatCompletions::from_config(config),
            config.max_attempts,
            Duration::from_secs(config.retry_delay_secs),
        )
    }
}

impl<G: TextGenerator> AdviceClient<G> {
    pub fn new(generator: G, max_attempts: u32, delay: Duration) -> Self {
        Self {
            generator,
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Ask for a tip for `symptoms`. Blank input never reaches the service.
    pub fn advise(&self, symptoms: &str) -> Advice {
        if symptoms.trim().is_empty() {
            return Advice::NothingLogged;
        }
        let prompt = build_prompt(symptoms);

        for attempt in 1..=self.max_attempts {
            match self.generator.generate(&prompt) {
                Ok(text) if !text.trim().is_empty() => {
                    return Advice::Tip(text.trim().to_string());
                }
                Ok(_) => {
                    log::warn!(
                        "advice attempt {attempt}/{} returned no text",
                        self.max_attempts
                    );
                }
                Err(e) => {
                    log::warn!("advice attempt {attempt}/{} failed: {e}", self.max_attempts);
                }
            }
            if attempt < self.max_attempts {
                std::thread::sleep(self.delay);
            }
        }
        Advice::Unavailable
    }
}

/// Advice for the configured service, or `Disabled` when turned off.
/// Blank symptoms return before any client is built.
pub fn advise_with_config(config: &AdviceConfig, symptoms: &str) -> Advice {
    if !config.enabled {
        return Advice::Disabled;
    }
    if symptoms.trim().is_empty() {
        return Advice::NothingLogged;
    }
    AdviceClient::from_config(config).advise(symptoms)
}
