use models::{Channel, Guild, LookupError, Result};
use redis::Commands;

pub const DEFAULT_NOTIFICATION_TIMEOUT: f32 = 5.0;
pub const DEFAULT_NOTIFICATION_OPACITY: f32 = 0.9;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub notification_timeout: f32,
    pub notification_opacity: f32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
            notification_opacity: DEFAULT_NOTIFICATION_OPACITY,
        }
    }
}

pub trait Directory {
    fn get_channel(&mut self, id: &str) -> Result<Channel>;
    fn get_guild(&mut self, id: &str) -> Result<Guild>;
}

// Reads the `channel:<id>` / `guild:<id>` mirror the host keeps up to date.
pub struct RedisDirectory {
    conn: redis::Connection,
}

impl RedisDirectory {
    pub fn new(conn: redis::Connection) -> RedisDirectory {
        RedisDirectory { conn }
    }
}

impl Directory for RedisDirectory {
    fn get_channel(&mut self, id: &str) -> Result<Channel> {
        let channel: Option<Channel> = self.conn.get(format!("channel:{}", id))?;
        channel.ok_or_else(|| LookupError::Channel(id.to_string()).into())
    }

    fn get_guild(&mut self, id: &str) -> Result<Guild> {
        let guild: Option<Guild> = self.conn.get(format!("guild:{}", id))?;
        guild.ok_or_else(|| LookupError::Guild(id.to_string()).into())
    }
}

pub struct Context {
    pub directory: RedisDirectory,
    pub http: reqwest::Client,
    pub config: Config,
}
