use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN: Regex = Regex::new(
        "<a?:(\\w+):\\d+>|<@!?(\\d+)>|<@&(\\d+)>|<#(\\d+)>|@everyone|@here"
    )
    .unwrap();
}

#[derive(Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    UserMention { id: &'a str, raw: &'a str },
    RoleMention { id: &'a str, raw: &'a str },
    ChannelRef { id: &'a str, raw: &'a str },
    Emote { name: &'a str },
    Everyone,
    Here,
}

// Single left-to-right pass; rendered output is never fed back in.
pub fn tokenize(content: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for captures in TOKEN.captures_iter(content) {
        let matched = captures.get(0).unwrap();
        if matched.start() > cursor {
            segments.push(Segment::Text(&content[cursor..matched.start()]));
        }

        let raw = matched.as_str();
        segments.push(if let Some(name) = captures.get(1) {
            Segment::Emote {
                name: name.as_str(),
            }
        } else if let Some(id) = captures.get(2) {
            Segment::UserMention {
                id: id.as_str(),
                raw,
            }
        } else if let Some(id) = captures.get(3) {
            Segment::RoleMention {
                id: id.as_str(),
                raw,
            }
        } else if let Some(id) = captures.get(4) {
            Segment::ChannelRef {
                id: id.as_str(),
                raw,
            }
        } else if raw == "@everyone" {
            Segment::Everyone
        } else {
            Segment::Here
        });

        cursor = matched.end();
    }

    if cursor < content.len() {
        segments.push(Segment::Text(&content[cursor..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(tokenize("just words"), vec![Segment::Text("just words")]);
    }

    #[test]
    fn empty_content_has_no_segments() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn splits_mentions_and_channel_refs() {
        assert_eq!(
            tokenize("hello <@123> check <#456>"),
            vec![
                Segment::Text("hello "),
                Segment::UserMention {
                    id: "123",
                    raw: "<@123>",
                },
                Segment::Text(" check "),
                Segment::ChannelRef {
                    id: "456",
                    raw: "<#456>",
                },
            ]
        );
    }

    #[test]
    fn nickname_mention_form_matches() {
        assert_eq!(
            tokenize("<@!123>"),
            vec![Segment::UserMention {
                id: "123",
                raw: "<@!123>",
            }]
        );
    }

    #[test]
    fn role_mentions_are_distinct_from_users() {
        assert_eq!(
            tokenize("<@&9>"),
            vec![Segment::RoleMention {
                id: "9",
                raw: "<@&9>",
            }]
        );
    }

    #[test]
    fn emotes_capture_the_name() {
        assert_eq!(
            tokenize("<:pog:111><a:spin:222>"),
            vec![
                Segment::Emote { name: "pog" },
                Segment::Emote { name: "spin" },
            ]
        );
    }

    #[test]
    fn everyone_and_here_are_tokens() {
        assert_eq!(
            tokenize("@everyone or @here"),
            vec![
                Segment::Everyone,
                Segment::Text(" or "),
                Segment::Here,
            ]
        );
    }

    #[test]
    fn malformed_tokens_stay_text() {
        assert_eq!(
            tokenize("<@abc> <#> <:noid:>"),
            vec![Segment::Text("<@abc> <#> <:noid:>")]
        );
    }
}
