use std::path::PathBuf;

use color_eyre::eyre::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use serenity::all::{ChannelId, GuildId, RoleId};

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// The Discord token used to authenticate the bot
    pub token: String,
    /// The guilds the study group commands are registered in
    pub guilds: Vec<GuildId>,
    /// Configuration for study group channels
    pub study_groups: StudyGroupsConfig,
}

#[derive(Debug, Deserialize)]
pub struct StudyGroupsConfig {
    /// The category every study group channel pair is created under
    pub category_id: ChannelId,
    /// The role held by incoming members who aren't students yet
    ///
    /// Members holding this role cannot create or delete study groups.
    pub incoming_role_id: RoleId,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_file = match std::env::var("STUDYHALL_CONFIG") {
            Ok(path) => PathBuf::from(path),
            Err(_) => {
                let mut path = std::env::current_dir()?;
                path.push("studyhall.toml");
                path
            }
        };
        trace!("Loading configuration from {:?}", config_file);

        let config = Figment::new()
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("STUDYHALL_").global())
            .extract::<AppConfig>()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config = Figment::new()
            .merge(Toml::string(
                r#"
                    token = "example-token"
                    guilds = [123456789, 987654321]

                    [study_groups]
                    category_id = 111222333
                    incoming_role_id = 444555666
                "#,
            ))
            .extract::<AppConfig>()
            .unwrap();

        assert_eq!(config.token, "example-token");
        assert_eq!(
            config.guilds,
            vec![GuildId::new(123456789), GuildId::new(987654321)]
        );
        assert_eq!(config.study_groups.category_id, ChannelId::new(111222333));
        assert_eq!(
            config.study_groups.incoming_role_id,
            RoleId::new(444555666)
        );
    }
}
