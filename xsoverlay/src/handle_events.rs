use futures::StreamExt;
use models::{Event, Result};
use redis::aio::Connection;

use crate::events;
use crate::types::Context;

const EVENTS_CHANNEL: &str = "xsoverlay-notifications";

pub async fn handle_events(conn: Connection, mut context: Context) -> Result<()> {
    let mut pubsub = conn.into_pubsub();

    pubsub.subscribe(EVENTS_CHANNEL).await?;
    let mut pubsub = pubsub.into_on_message();

    while let Some(payload) = pubsub.next().await {
        let event = match serde_json::from_str::<Event>(&payload.get_payload::<String>()?) {
            Ok(event) => event,
            Err(err) => {
                log::warn!("Ignoring malformed event payload: {:?}", err);
                continue;
            }
        };

        match event {
            Event::Notification(event) => {
                // A failed lookup drops this one notification, nothing else.
                if let Err(err) = events::message::on_notification(event, &mut context).await {
                    log::warn!("Dropping notification: {:?}", err);
                }
            }
        }
    }

    Ok(())
}
