use std::time::Duration;

use moodwhisperer::{catalog, CheckIn, Config, LiveCheckIn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodwhisperer=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let mut live = LiveCheckIn::new(&config, CheckIn::seeded(&config));

    // Scripted walkthrough of one check-in
    let mood = config.demo_mood.as_deref().unwrap_or("calm");
    if live.select_mood(mood).await.is_none() {
        tracing::warn!(mood = %mood, "DEMO_MOOD is not a known mood, continuing without one");
    }

    let suggestion = {
        let state = live.state();
        let mut checkin = state.lock().await;
        if let Some(&idea) = checkin.selected_mood().and_then(|m| catalog::mood(m).suggestions.first()) {
            checkin.select_suggestion(idea);
        }
        checkin.history.toggle_selected("10");
        checkin.habits.suggestions().first().cloned()
    };
    if let Some(suggestion) = suggestion {
        live.promote_suggestion(&suggestion).await;
    }
    live.toggle_habit("water").await;

    for draft in [
        "Took a slow walk",
        "Took a slow walk after lunch and noticed",
        "Took a slow walk after lunch and noticed how quiet the park was today.",
    ] {
        live.type_text(draft).await;
        tokio::time::sleep(Duration::from_millis(600)).await;
    }
    live.save_journal().await;

    let snapshot = live.snapshot().await;
    live.close();

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
