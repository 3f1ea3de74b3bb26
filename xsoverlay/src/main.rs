mod events;
mod format;
mod handle_events;
mod scanner;
mod send;
mod types;
mod util;

use models::Result;
use std::env;
use types::{Config, Context, RedisDirectory};

const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());
    let config = Config {
        notification_timeout: float_option(
            "NOTIFICATION_TIMEOUT",
            types::DEFAULT_NOTIFICATION_TIMEOUT,
        ),
        notification_opacity: float_option(
            "NOTIFICATION_OPACITY",
            types::DEFAULT_NOTIFICATION_OPACITY,
        ),
    };

    let redis = redis::Client::open(redis_url)?;
    log::info!("Connected to Redis {}", redis.get_connection_info().addr);

    let context = Context {
        directory: RedisDirectory::new(redis.get_connection()?),
        http: reqwest::Client::new(),
        config,
    };

    handle_events::handle_events(redis.get_async_connection().await?, context).await
}

fn float_option(name: &str, default: f32) -> f32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
