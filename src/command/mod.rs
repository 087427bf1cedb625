macro_rules! commands {
    ($($name:ident),* $(,)?) => {
        $(
            pub mod $name;
        )*

        pub fn commands() -> Vec<crate::data::Command> {
            vec![$( $name::command() ),*]
        }
    };
}

commands! {
    create_study_group,
    delete_study_group,
}

macro_rules! command {
    (
        $(#[$attr:meta])*
        pub async fn $name:ident(
            $($(#[$arg_attr:meta])* $arg:ident: $arg_ty:ty),* $(,)?
        ) -> Result<$ret_ty:ty> $body:block
    ) => {
        pub fn command() -> $crate::data::Command {
            $name()
        }

        $(#[$attr])*
        #[::poise::command(slash_command, guild_only)]
        async fn $name($($(#[$arg_attr])* $arg: $arg_ty),*) -> ::color_eyre::eyre::Result<$ret_ty> $body
    };
}

pub(crate) use command;
