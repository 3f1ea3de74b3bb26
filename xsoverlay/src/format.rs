use lazy_static::lazy_static;
use models::{Channel, ChannelType, Guild, LookupError, MessageEvent, MessageType, Result, User};
use regex::Regex;

use crate::scanner::{tokenize, Segment};
use crate::types::Directory;

pub const BLURPLE: &str = "#5865f2";
pub const BOOSTER: &str = "#ff73fa";

lazy_static! {
    static ref TAG: Regex = Regex::new("<[^>]*>").unwrap();
}

pub fn format_message(
    msg: &MessageEvent,
    author: &User,
    directory: &mut dyn Directory,
) -> Result<String> {
    match msg.kind {
        MessageType::Default | MessageType::Reply => {}
        MessageType::RecipientAdd => {
            return Ok(format!(
                "<b>{}</b> added <b>{}</b> to the group.",
                author.username,
                first_mention(msg)
            ))
        }
        MessageType::RecipientRemove => {
            return Ok(format!(
                "<b>{}</b> removed <b>{}</b> from the group.",
                author.username,
                first_mention(msg)
            ))
        }
        MessageType::Call => return Ok(format!("<b>{}</b> started a call.", author.username)),
        MessageType::ChannelNameChange => {
            return Ok(format!(
                "<b>{}</b> changed the channel name: <b>{}</b>",
                author.username, msg.content
            ))
        }
        MessageType::ChannelIconChange => {
            return Ok(format!("<b>{}</b> changed the channel icon.", author.username))
        }
        MessageType::ChannelPinnedMessage => {
            return Ok(format!(
                "<b>{}</b> pinned <b>a message</b> to this channel.",
                author.username
            ))
        }
        MessageType::GuildMemberJoin => {
            return Ok(format!("<b>{}</b> joined the server.", author.username))
        }
        MessageType::GuildBoost => {
            return Ok(format!(
                "<b>{}</b> just <b><color={}>boosted</color></b> the server!",
                author.username, BOOSTER
            ))
        }
        MessageType::GuildBoostTier1 => return boost_tier(msg, author, directory, 1),
        MessageType::GuildBoostTier2 => return boost_tier(msg, author, directory, 2),
        MessageType::GuildBoostTier3 => return boost_tier(msg, author, directory, 3),
        MessageType::ChannelFollowAdd => {
            return Ok(format!(
                "<b>{}</b> has added <b>{}</b> notifications to this channel.",
                author.username, msg.content
            ))
        }
        MessageType::Unhandled(code) => {
            return Ok(format!(
                "Type of message ({}) not implemented. Please check yourself.",
                code
            ))
        }
    }

    let mut content = msg.content.clone();
    if content.is_empty() {
        if let Some(attachment) = msg.attachments.first() {
            return Ok(format!("Uploaded {}", attachment.filename));
        }
        if let Some(embed) = msg.embeds.first() {
            content = embed.title.clone().unwrap_or_default();
        }
    }

    let rendered = render(&content, msg, directory)?;
    Ok(if rendered.is_empty() {
        "Empty".to_string()
    } else {
        rendered
    })
}

fn render(content: &str, msg: &MessageEvent, directory: &mut dyn Directory) -> Result<String> {
    // One lookup covers every role mention in the message.
    let guild = if msg.mention_roles.is_empty() {
        None
    } else {
        Some(resolve_guild(msg, directory)?)
    };

    let mut out = String::with_capacity(content.len());
    for segment in tokenize(content) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Everyone => {
                out.push_str(&format!("<b><color={}>@everyone</color></b>", BLURPLE))
            }
            Segment::Here => out.push_str(&format!("<b><color={}>@here</color></b>", BLURPLE)),
            Segment::Emote { name } => {
                out.push(':');
                out.push_str(name);
                out.push(':');
            }
            Segment::UserMention { id, raw } => {
                match msg.mentions.iter().find(|user| user.id == id) {
                    Some(user) => out.push_str(&format!(
                        "<b><color={}>@{}</color></b>",
                        BLURPLE, user.username
                    )),
                    None => out.push_str(raw),
                }
            }
            Segment::RoleMention { id, raw } => {
                if msg.mention_roles.iter().any(|role_id| role_id == id) {
                    let role = guild
                        .as_ref()
                        .and_then(|guild| guild.roles.get(id))
                        .ok_or_else(|| LookupError::Role(id.to_string()))?;
                    out.push_str(&format!(
                        "<b><color=#{:06x}>@{}</color></b>",
                        role.color, role.name
                    ));
                } else {
                    out.push_str(raw);
                }
            }
            Segment::ChannelRef { id, .. } => {
                let channel = directory.get_channel(id)?;
                out.push_str(&format!("<b><color={}>#{}</color></b>", BLURPLE, channel.name));
            }
        }
    }

    Ok(out)
}

fn boost_tier(
    msg: &MessageEvent,
    author: &User,
    directory: &mut dyn Directory,
    level: u8,
) -> Result<String> {
    let guild = resolve_guild(msg, directory)?;
    Ok(format!(
        "<b>{}</b> just <b><color={}>boosted</color></b> the server! <b>{}</b> has achieved <b>Level {}!</b>",
        author.username, BOOSTER, guild.name, level
    ))
}

fn resolve_guild(msg: &MessageEvent, directory: &mut dyn Directory) -> Result<Guild> {
    let guild_id = msg.guild_id.as_deref().ok_or(LookupError::MissingGuildId)?;
    directory.get_guild(guild_id)
}

fn first_mention(msg: &MessageEvent) -> &str {
    msg.mentions
        .first()
        .map(|user| user.username.as_str())
        .unwrap_or("someone")
}

pub fn format_title(
    channel: &Channel,
    msg: &MessageEvent,
    author: &User,
    directory: &mut dyn Directory,
) -> Result<Option<String>> {
    Ok(match channel.kind {
        ChannelType::GuildText | ChannelType::GuildAnnouncement | ChannelType::GuildStore => {
            let name = msg
                .member
                .as_ref()
                .and_then(|member| member.nick.as_deref())
                .unwrap_or(&author.username);
            Some(match &channel.parent_id {
                Some(parent_id) => {
                    let category = directory.get_channel(parent_id)?;
                    format!("{} (#{}, {})", name, channel.name, category.name)
                }
                None => format!("{} (#{})", name, channel.name),
            })
        }
        ChannelType::Dm => Some(author.username.clone()),
        ChannelType::GroupDm => Some(format!(
            "{} ({})",
            author.username,
            format_group_dm_title(channel, msg)?
        )),
        ChannelType::Unhandled(_) => None,
    })
}

fn format_group_dm_title(channel: &Channel, msg: &MessageEvent) -> Result<String> {
    if !channel.name.is_empty() {
        return Ok(channel.name.clone());
    }

    let mut names = Vec::with_capacity(channel.recipients.len() + 1);
    for id in &channel.recipients {
        let recipient = if *id == msg.author.id {
            &msg.author
        } else {
            channel
                .raw_recipients
                .iter()
                .find(|user| &user.id == id)
                .ok_or_else(|| LookupError::Recipient(id.clone()))?
        };
        names.push(recipient.username.as_str());
    }
    if !channel.recipients.contains(&msg.author.id) {
        names.push(msg.author.username.as_str());
    }

    Ok(names.join(", "))
}

pub fn strip_tags(content: &str) -> String {
    TAG.replace_all(content, "").into_owned()
}

pub fn calculate_height(content: &str) -> i32 {
    match content.chars().count() {
        0..=100 => 100,
        101..=200 => 150,
        201..=300 => 200,
        _ => 250,
    }
}
