//! Command dispatcher.
//!
//! Binds the two bot commands to their handlers. Each update is handled as
//! an independent task; there is no conversation state, so the only shared
//! values are the `Arc` handles teloxide injects through dptree.

use crate::config::Config;
use crate::format;
use crate::search::providers::SerpApiProvider;
use crate::search::SearchProvider;
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Perintah yang tersedia:")]
pub enum Command {
    #[command(description = "tampilkan pesan sambutan.")]
    Start,
    #[command(description = "cari informasi, contoh: /cari resep nasi goreng.")]
    Cari(String),
}

/// Connect to Telegram and long-poll for commands until shutdown.
pub async fn run(config: Config) -> Result<()> {
    let bot = Bot::new(config.bot_token.clone());
    let provider: Arc<dyn SearchProvider> = Arc::new(SerpApiProvider::new(&config));

    tracing::info!(
        max_results = config.max_results,
        device = config.device.as_deref().unwrap_or("desktop"),
        "bot starting, long polling for updates"
    );

    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handle_command);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![provider])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    provider: Arc<dyn SearchProvider>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            let name = msg
                .from()
                .map(|user| user.first_name.as_str())
                .unwrap_or("kawan");
            bot.send_message(msg.chat.id, format::greeting(name)).await?;
        }
        Command::Cari(raw) => {
            // No query, no search: reply with the usage hint and stop.
            let Some(query) = normalize_query(&raw) else {
                bot.send_message(msg.chat.id, format::USAGE_HINT).await?;
                return Ok(());
            };

            bot.send_message(msg.chat.id, format::acknowledgment(&query))
                .await?;

            let reply = run_search(provider.as_ref(), &query).await;

            bot.send_message(msg.chat.id, reply)
                .parse_mode(ParseMode::Markdown)
                .disable_web_page_preview(true)
                .await?;
        }
    }

    Ok(())
}

/// Collapse raw argument text into a single-space separated query.
///
/// Returns `None` when nothing remains, which is the signal to skip the
/// search entirely.
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}

/// Run one search and reduce the outcome to a displayable reply.
///
/// Every failure path of the provider ends in a fixed user-facing string;
/// nothing propagates out of here.
pub async fn run_search(provider: &dyn SearchProvider, query: &str) -> String {
    format::render(query, provider.search(query).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query_joins_with_single_spaces() {
        assert_eq!(
            normalize_query("  resep   nasi goreng "),
            Some("resep nasi goreng".to_string())
        );
    }

    #[test]
    fn test_normalize_query_passes_through_simple_text() {
        assert_eq!(normalize_query("bakso"), Some("bakso".to_string()));
    }

    #[test]
    fn test_normalize_query_rejects_empty_input() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \t  "), None);
    }
}
