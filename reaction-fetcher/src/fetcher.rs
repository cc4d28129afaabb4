use crate::config::Config;
use crate::error::{Context, Result};
use model::guild::EmojiRef;
use model::user::Reactor;
use tracing::debug;

/// The two read-only endpoints needed to list the users behind a reaction.
pub trait ReactionSource {
    /// `GET /guilds/{guild.id}/emojis/{emoji.id}`
    fn emoji(&self, guild_id: &str, emoji_id: &str) -> Result<EmojiRef>;

    /// `GET /channels/{channel.id}/messages/{message.id}/reactions/{emoji}?limit={limit}`
    fn reactors(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
        limit: &str,
    ) -> Result<Vec<Reactor>>;
}

/// Resolves the configured emoji and returns the ids of the users that reacted
/// with it to the configured message, in the order the API returned them.
pub fn fetch_reactions<S: ReactionSource>(source: &S, config: &Config) -> Result<Vec<String>> {
    let emoji = source
        .emoji(&config.guild_id, &config.emoji_id)
        .context("failed to fetch emoji object")?;

    debug!(id = %emoji.id, name = %emoji.name, "Resolved emoji");

    let reactors = source
        .reactors(
            &config.channel_id,
            &config.message_id,
            &emoji.token(),
            &config.response_limit,
        )
        .context("failed to fetch user objects")?;

    Ok(extract_ids(reactors))
}

pub fn extract_ids(reactors: Vec<Reactor>) -> Vec<String> {
    reactors.into_iter().map(String::from).collect()
}
