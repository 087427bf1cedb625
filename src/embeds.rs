use poise::CreateReply;
use serenity::all::{Colour, CreateEmbed};

/// Reply for a request the bot refuses. Only the invoker sees it.
pub fn warning(msg: impl Into<String>) -> CreateReply {
    notice("Warning", msg, Colour::ORANGE)
}

/// Reply confirming a completed action. Only the invoker sees it.
pub fn confirmation(msg: impl Into<String>) -> CreateReply {
    notice("Confirmation", msg, Colour::DARK_GREEN)
}

fn notice(title: &str, msg: impl Into<String>, colour: Colour) -> CreateReply {
    CreateReply::default()
        .embed(
            CreateEmbed::new()
                .title(title)
                .description(msg)
                .colour(colour),
        )
        .ephemeral(true)
}
