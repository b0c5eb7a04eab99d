use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::provider::create_provider;

use super::theme;

/// Smoke test for API configuration and connectivity. Exits the process with
/// a non-zero code on failure so shell scripts can gate on it.
pub async fn run_check() -> Result<()> {
    let config = Config::load()?;

    if config.provider.api_key.is_empty() {
        theme::print_error("OPENAI_API_KEY is not set.");
        std::process::exit(1);
    }
    theme::print_success("API key configured");

    let provider = match create_provider(&config.provider) {
        Ok(provider) => provider,
        Err(e) => {
            theme::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = provider.health_check().await {
        theme::print_error(&format!("health check failed: {}", e));
        std::process::exit(1);
    }
    theme::print_success(&format!("endpoint reachable: {}", config.provider.endpoint));

    match provider
        .complete("This is a test. Reply with a short greeting.")
        .await
    {
        Ok(sample) => {
            let preview: String = sample.chars().take(120).collect();
            theme::print_success("test completion succeeded");
            println!("  {}", style(preview).dim());
        }
        Err(e) => {
            theme::print_error(&format!("test completion failed: {}", e));
            std::process::exit(1);
        }
    }

    Ok(())
}
