use std::sync::Arc;

use color_eyre::eyre::{Report, Result};
use tokio::sync::Mutex;

pub mod config;

/// The main data struct shared by every command invocation.
#[derive(Debug)]
pub struct DataInner {
    pub config: config::AppConfig,
    /// Serializes the duplicate-name check against channel creation.
    ///
    /// Two `/create_study_group` invocations with the same name must not both
    /// pass the check before either creates its channels.
    pub create_lock: Mutex<()>,
}

pub fn load() -> Result<Data> {
    debug!("Loading configuration");
    let config = config::AppConfig::load()?;

    let data = DataInner {
        config,
        create_lock: Mutex::new(()),
    };

    Ok(Arc::new(data))
}

pub type Data = Arc<DataInner>;
pub type Error = Report;

// a collection of type aliases for various poise types that take both of these
// type parameters
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type Command = poise::Command<Data, Error>;
pub type FrameworkError<'a> = poise::FrameworkError<'a, Data, Error>;
