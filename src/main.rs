use color_eyre::eyre::Result;
use poise::{Framework, FrameworkOptions};
use serenity::all::{ActivityData, ClientBuilder, GatewayIntents};
use tracing_subscriber::prelude::*;

#[macro_use]
extern crate tracing;

pub mod command;
pub mod data;
pub mod embeds;
pub mod error;
pub mod study_groups;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_error::ErrorLayer::default())
        .init();

    color_eyre::install()?;

    let data = data::load()?;
    let token = data.config.token.clone();

    let intents =
        // allow reading the channel list of the study group category
        GatewayIntents::GUILDS
        // allow resolving group members by their display names
        | GatewayIntents::GUILD_MEMBERS;

    debug!(?intents, "Starting bot");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: command::commands(),
            on_error: error::handle_error,
            // we don't use the owner system so just disable it entirely
            initialize_owners: false,
            skip_checks_for_owners: true,
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                // the commands only make sense in the configured guilds, so
                // they are registered there instead of globally
                for guild in &data.config.guilds {
                    trace!(%guild, "registering commands");
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, *guild)
                        .await?;
                }

                ctx.set_activity(Some(ActivityData::watching("study groups form")));

                Ok(data)
            })
        })
        .build();

    debug!("Creating client");
    let mut client = ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    info!("Starting up");
    client.start().await?;

    Ok(())
}
