use anyhow::Context;

use crm_app::{AppConfig, AppState};

/// Resolve each email given on the command line into a user and print the
/// dashboard the front-end would render for them.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    crm_observability::init(&config.log);

    let (state, organizations) = AppState::in_memory(&config);
    tracing::info!(provider = ?config.provider, "identity provider selected");

    let emails: Vec<String> = std::env::args().skip(1).collect();
    let users = if emails.is_empty() {
        tracing::warn!("no emails given; showing the default user");
        vec![config.provider.default_user(&organizations)]
    } else {
        emails
            .iter()
            .enumerate()
            .map(|(i, email)| {
                config
                    .provider
                    .map_identity(&format!("cli-{i}"), email, &organizations)
            })
            .collect()
    };

    for user in &users {
        let dashboard = state.dashboard(user).await;
        let json = serde_json::to_string_pretty(&dashboard).context("serialize dashboard")?;
        println!("{json}");
    }

    Ok(())
}
