use color_eyre::eyre::{OptionExt, Result};

use crate::{
    data::Context,
    embeds,
    study_groups::{self, Rejection, Standing},
};

super::command! {
    /// Delete your study group's text and voice channels
    pub async fn delete_study_group(
        ctx: Context<'_>,
        #[description = "The name of the study group's text or voice channel"]
        group_name: String,
    ) -> Result<()> {
        let data = ctx.data();
        let category_id = data.config.study_groups.category_id;
        let author_id = ctx.author().id;

        let group_name = group_name.to_lowercase();

        let (standing, channels) = {
            let guild = ctx.guild().ok_or_eyre("guild missing from the cache")?;

            let member = guild
                .members
                .get(&author_id)
                .ok_or_eyre("invoker missing from the member cache")?;
            let standing =
                Standing::classify(&member.roles, data.config.study_groups.incoming_role_id);

            // both halves of the pair share the group name, collect them all
            let channels = guild
                .channels
                .values()
                .filter(|channel| {
                    channel.parent_id == Some(category_id) && channel.name == group_name
                })
                .map(|channel| (channel.id, channel.permission_overwrites.clone()))
                .collect::<Vec<_>>();

            (standing, channels)
        };

        if let Some(rejection) = standing.rejection() {
            trace!(?rejection, "refusing to delete a study group");
            ctx.send(embeds::warning(rejection.message())).await?;
            return Ok(());
        }

        let Some((_, overwrites)) = channels.first() else {
            trace!(%group_name, "no study group channels matched");
            ctx.send(embeds::warning(Rejection::GroupNotFound(group_name).message()))
                .await?;
            return Ok(());
        };

        // membership is judged against the first matched channel; the pair is
        // created together so their overwrites agree
        if !study_groups::is_overwrite_member(overwrites, author_id) {
            trace!(%group_name, "invoker is not in the group's overwrites");
            ctx.send(embeds::warning(Rejection::NotGroupMember.message()))
                .await?;
            return Ok(());
        }

        let reason = format!("study group deleted by {}", ctx.author().name);
        for (channel_id, _) in &channels {
            trace!(%channel_id, "deleting study group channel");
            ctx.http().delete_channel(*channel_id, Some(&reason)).await?;
        }

        ctx.send(embeds::confirmation(format!(
            "Study group {group_name} has been deleted. Farewell."
        )))
        .await?;

        Ok(())
    }
}
