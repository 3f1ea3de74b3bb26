use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use models::{NotificationEvent, NotificationPayload, Result, SOURCE_APP};

use crate::format;
use crate::send;
use crate::types::{Config, Context};
use crate::util;

pub async fn on_notification(event: NotificationEvent, context: &mut Context) -> Result<()> {
    let NotificationEvent {
        channel,
        message: msg,
        author,
    } = event;

    let content = format::format_message(&msg, &author, &mut context.directory)?;
    let title = match format::format_title(&channel, &msg, &author, &mut context.directory)? {
        Some(title) => title,
        None => {
            log::debug!("No title for channel kind {:?}", channel.kind);
            String::new()
        }
    };

    let icon = match util::get_avatar_url(&author) {
        Some(url) => match util::fetch_avatar(&context.http, &url).await {
            Ok(bytes) => STANDARD.encode(bytes),
            Err(err) => {
                log::warn!("Failed to fetch avatar for {}: {:?}", author.id, err);
                String::new()
            }
        },
        None => String::new(),
    };

    let payload = build_payload(title, content, icon, &context.config);

    if let Err(err) = send::send_to_overlay(&serde_json::to_string(&payload)?).await {
        log::warn!("Failed to reach the overlay: {:?}", err);
    }

    Ok(())
}

fn build_payload(
    title: String,
    content: String,
    icon: String,
    config: &Config,
) -> NotificationPayload {
    let height = format::calculate_height(&format::strip_tags(&content));

    NotificationPayload {
        message_type: 1,
        index: 0,
        timeout: config.notification_timeout,
        height,
        opacity: config.notification_opacity,
        volume: 0.0,
        audio_path: String::new(),
        title,
        content,
        use_base64_icon: true,
        icon,
        source_app: SOURCE_APP.to_string(),
    }
}
