use redis::{FromRedisValue, ToRedisArgs};
use serde::{Deserialize, Serialize};

use crate::User;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "u8", into = "u8")]
pub enum ChannelType {
    GuildText,
    Dm,
    GroupDm,
    GuildAnnouncement,
    GuildStore,
    Unhandled(u8),
}

impl From<u8> for ChannelType {
    fn from(code: u8) -> ChannelType {
        match code {
            0 => ChannelType::GuildText,
            1 => ChannelType::Dm,
            3 => ChannelType::GroupDm,
            5 => ChannelType::GuildAnnouncement,
            6 => ChannelType::GuildStore,
            code => ChannelType::Unhandled(code),
        }
    }
}

impl From<ChannelType> for u8 {
    fn from(kind: ChannelType) -> u8 {
        match kind {
            ChannelType::GuildText => 0,
            ChannelType::Dm => 1,
            ChannelType::GroupDm => 3,
            ChannelType::GuildAnnouncement => 5,
            ChannelType::GuildStore => 6,
            ChannelType::Unhandled(code) => code,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub raw_recipients: Vec<User>,
}

impl ToRedisArgs for Channel {
    fn write_redis_args<W>(&self, out: &mut W)
    where
        W: ?Sized + redis::RedisWrite,
    {
        let args = serde_json::to_string(self).unwrap();
        args.write_redis_args(out);
    }
}

impl FromRedisValue for Channel {
    fn from_redis_value(v: &redis::Value) -> redis::RedisResult<Self> {
        let args: String = FromRedisValue::from_redis_value(v)?;
        serde_json::from_str(&args).map_err(|err| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "Invalid channel payload",
                err.to_string(),
            ))
        })
    }
}
