use redis::{FromRedisValue, ToRedisArgs};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Guild {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub roles: HashMap<String, Role>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub color: u32,
}

impl ToRedisArgs for Guild {
    fn write_redis_args<W>(&self, out: &mut W)
    where
        W: ?Sized + redis::RedisWrite,
    {
        let args = serde_json::to_string(self).unwrap();
        args.write_redis_args(out);
    }
}

impl FromRedisValue for Guild {
    fn from_redis_value(v: &redis::Value) -> redis::RedisResult<Self> {
        let args: String = FromRedisValue::from_redis_value(v)?;
        serde_json::from_str(&args).map_err(|err| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "Invalid guild payload",
                err.to_string(),
            ))
        })
    }
}
