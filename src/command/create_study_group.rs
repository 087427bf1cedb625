use color_eyre::eyre::{OptionExt, Result};
use serenity::all::{ChannelType, CreateChannel};

use crate::{
    data::Context,
    embeds,
    study_groups::{self, Rejection, Standing},
};

super::command! {
    /// Create a private text and voice channel pair for your study group
    pub async fn create_study_group(
        ctx: Context<'_>,
        #[description = "Try to make it unique, e.g. by putting member names in the group name"]
        group_name: String,
        #[description = "Server names of the group members, separated by a comma and a space (', ')"]
        names: String,
    ) -> Result<()> {
        let data = ctx.data();
        let category_id = data.config.study_groups.category_id;
        let author_id = ctx.author().id;
        let bot_id = ctx.framework().bot_id;

        let group_name = group_name.to_lowercase();

        // held from the duplicate check until both channels exist, so two
        // invocations cannot both create the same group
        let _creating = data.create_lock.lock().await;

        let (guild_id, everyone, standing, duplicate, roster) = {
            let guild = ctx.guild().ok_or_eyre("guild missing from the cache")?;

            let member = guild
                .members
                .get(&author_id)
                .ok_or_eyre("invoker missing from the member cache")?;
            let standing =
                Standing::classify(&member.roles, data.config.study_groups.incoming_role_id);

            let duplicate = guild.channels.values().any(|channel| {
                channel.parent_id == Some(category_id) && channel.name == group_name
            });

            let roster = guild
                .members
                .values()
                .map(|member| (member.user.id, member.display_name().to_string()))
                .collect::<Vec<_>>();

            (
                guild.id,
                guild.id.everyone_role(),
                standing,
                duplicate,
                roster,
            )
        };

        if let Some(rejection) = standing.rejection() {
            trace!(?rejection, "refusing to create a study group");
            ctx.send(embeds::warning(rejection.message())).await?;
            return Ok(());
        }

        if duplicate {
            trace!(%group_name, "study group name already in use");
            ctx.send(embeds::warning(Rejection::DuplicateName.message()))
                .await?;
            return Ok(());
        }

        let members = match study_groups::resolve_members(&names, &roster) {
            Ok(members) => members,
            Err(rejection) => {
                trace!(%names, "could not resolve every group member");
                ctx.send(embeds::warning(rejection.message())).await?;
                return Ok(());
            }
        };

        let overwrites = study_groups::channel_overwrites(everyone, bot_id, &members);
        let topic = format!("Study group {group_name} for {names}.");
        let reason = format!("study group created by {}", ctx.author().name);

        debug!(%group_name, members = members.len(), "creating study group channels");
        let text_channel = guild_id
            .create_channel(
                ctx.http(),
                CreateChannel::new(group_name.as_str())
                    .kind(ChannelType::Text)
                    .category(category_id)
                    .topic(topic)
                    .permissions(overwrites.clone())
                    .audit_log_reason(&reason),
            )
            .await?;
        let voice_channel = guild_id
            .create_channel(
                ctx.http(),
                CreateChannel::new(group_name.as_str())
                    .kind(ChannelType::Voice)
                    .category(category_id)
                    .permissions(overwrites)
                    .audit_log_reason(&reason),
            )
            .await?;

        ctx.send(embeds::confirmation(format!(
            "Text channel <#{}> and voice channel <#{}> have been created. Users {names} have been given access.",
            text_channel.id, voice_channel.id,
        )))
        .await?;

        Ok(())
    }
}
