//! Rules for the hierarchical topic paths the node publishes and subscribes to.
//!
//! Topic structure used by this node:
//! ```text
//! /home/floor/{floor}/{room}/environment
//! /home/floor/{floor}/{room}/outlets
//! ```
//!
//! A single leading `/` is accepted. Every level after it must be non-empty.

use thiserror::Error;

/// Longest string an MQTT packet can carry (two-byte length prefix).
pub const MAX_TOPIC_LEN: usize = 65_535;

const SEPARATOR: char = '/';

/// Ways a topic path can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("topic is empty")]
    Empty,

    #[error("topic has an empty level at position {index}")]
    EmptySegment { index: usize },

    #[error("topic contains a NUL character")]
    NulCharacter,

    #[error("topic is {len} bytes, limit is 65535")]
    TooLong { len: usize },
}

/// Check that `topic` is a well-formed hierarchical path.
pub fn validate_topic(topic: &str) -> Result<(), TopicError> {
    if topic.is_empty() {
        return Err(TopicError::Empty);
    }
    if topic.len() > MAX_TOPIC_LEN {
        return Err(TopicError::TooLong { len: topic.len() });
    }
    if topic.contains('\0') {
        return Err(TopicError::NulCharacter);
    }

    let body = strip_root(topic);
    if body.is_empty() {
        // "/" alone has no levels at all.
        return Err(TopicError::EmptySegment { index: 0 });
    }
    match body.split(SEPARATOR).position(str::is_empty) {
        Some(index) => Err(TopicError::EmptySegment { index }),
        None => Ok(()),
    }
}

/// Split a topic into its levels, ignoring the optional leading `/`.
///
/// Callers should validate first; an invalid topic yields empty levels.
pub fn segments(topic: &str) -> Vec<&str> {
    strip_root(topic).split(SEPARATOR).collect()
}

/// Whether the topic contains an MQTT wildcard (`+` or `#`).
///
/// Wildcards are valid in subscription filters but a topic containing one
/// cannot be published to.
pub fn has_wildcard(topic: &str) -> bool {
    topic.contains(['+', '#'])
}

fn strip_root(topic: &str) -> &str {
    topic.strip_prefix(SEPARATOR).unwrap_or(topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_node_topics() {
        assert!(validate_topic("/home/floor/1/livingroom/environment").is_ok());
        assert!(validate_topic("/home/floor/1/livingroom/outlets").is_ok());
    }

    #[test]
    fn accepts_topic_without_leading_slash() {
        assert!(validate_topic("home/outlets").is_ok());
        assert!(validate_topic("outlets").is_ok());
    }

    #[test]
    fn rejects_empty_topic() {
        assert_eq!(validate_topic(""), Err(TopicError::Empty));
    }

    #[test]
    fn rejects_double_leading_slash() {
        assert_eq!(
            validate_topic("//outlets"),
            Err(TopicError::EmptySegment { index: 0 })
        );
    }

    #[test]
    fn rejects_inner_and_trailing_empty_levels() {
        assert_eq!(
            validate_topic("/home//outlets"),
            Err(TopicError::EmptySegment { index: 1 })
        );
        assert_eq!(
            validate_topic("/home/outlets/"),
            Err(TopicError::EmptySegment { index: 2 })
        );
    }

    #[test]
    fn rejects_root_only() {
        assert_eq!(
            validate_topic("/"),
            Err(TopicError::EmptySegment { index: 0 })
        );
    }

    #[test]
    fn rejects_nul_character() {
        assert_eq!(validate_topic("home/\0"), Err(TopicError::NulCharacter));
    }

    #[test]
    fn rejects_oversized_topic() {
        let long = "a".repeat(MAX_TOPIC_LEN + 1);
        assert_eq!(
            validate_topic(&long),
            Err(TopicError::TooLong {
                len: MAX_TOPIC_LEN + 1
            })
        );
    }

    #[test]
    fn segments_skip_leading_slash() {
        assert_eq!(
            segments("/home/floor/1/livingroom/outlets"),
            vec!["home", "floor", "1", "livingroom", "outlets"]
        );
        assert_eq!(segments("home/outlets"), vec!["home", "outlets"]);
    }

    #[test]
    fn wildcard_detection() {
        assert!(has_wildcard("/home/+/outlets"));
        assert!(has_wildcard("/home/#"));
        assert!(!has_wildcard("/home/floor/1/livingroom/outlets"));
    }
}
