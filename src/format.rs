//! Message classification and rendering.
//!
//! Each category has a fixed layout. Every layout ends with the message body
//! and the right-aligned time; what precedes them (badges, id, name) depends
//! on the category. `me` and `do` fold the player name into the body text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;

use crate::markup::{Element, Node};
use crate::message::{ChatMessage, MAX_TIMESTAMP_MS, MessageType};

const DEFAULT_NAME_COLOR: &str = "#FFFFFF";
const DEFAULT_DEPARTMENT_COLOR: &str = "#C5FF00";

const SYSTEM_ICON: &str = r##"<svg width="16" height="16" fill="none" stroke="#C5FF00" viewBox="0 0 24 24" stroke-width="2"><path stroke-linecap="round" stroke-linejoin="round" d="M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"##;
const TWEET_ICON: &str = r##"<svg class="tweet-icon" viewBox="0 0 24 24"><path d="M23.953 4.57a10 10 0 01-2.825.775 4.958 4.958 0 002.163-2.723c-.951.555-2.005.959-3.127 1.184a4.92 4.92 0 00-8.384 4.482C7.69 8.095 4.067 6.13 1.64 3.162a4.822 4.822 0 00-.666 2.475c0 1.71.87 3.213 2.188 4.096a4.904 4.904 0 01-2.228-.616v.06a4.923 4.923 0 003.946 4.827 4.996 4.996 0 01-2.212.085 4.936 4.936 0 004.604 3.417 9.867 9.867 0 01-6.102 2.105c-.39 0-.779-.023-1.17-.067a13.995 13.995 0 007.557 2.209c9.053 0 13.998-7.496 13.998-13.985 0-.21 0-.42-.015-.63A9.935 9.935 0 0024 4.59z"/></svg>"##;

/// Render style of a message. All radio variants share one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Normal,
    Ooc,
    Me,
    Do,
    System,
    Admin,
    Twitter,
    Radio,
}

impl Category {
    /// Suffix of the root element's `msg-*` class.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Ooc => "ooc",
            Self::Me => "me",
            Self::Do => "do",
            Self::System => "system",
            Self::Admin => "admin",
            Self::Twitter => "twitter",
            Self::Radio => "radio",
        }
    }
}

/// Pick the render category for a message. Pure function of its type.
#[must_use]
pub fn classify(msg: &ChatMessage) -> Category {
    match msg.kind {
        MessageType::Normal => Category::Normal,
        MessageType::Ooc => Category::Ooc,
        MessageType::Me => Category::Me,
        MessageType::Do => Category::Do,
        MessageType::System => Category::System,
        MessageType::Admin => Category::Admin,
        MessageType::Twitter => Category::Twitter,
        MessageType::Radio | MessageType::RadioPolice | MessageType::RadioEms | MessageType::RadioMechanic => {
            Category::Radio
        }
    }
}

/// Format an epoch-millis timestamp as 24-hour `HH:MM` in the given offset.
///
/// Missing, zero or out-of-range timestamps produce an empty string.
#[must_use]
pub fn format_time(timestamp: Option<i64>, utc_offset_minutes: i32) -> String {
    let Some(millis) = timestamp.filter(|ms| *ms != 0 && ms.unsigned_abs() <= MAX_TIMESTAMP_MS.unsigned_abs()) else {
        return String::new();
    };
    let local_ms = i128::from(millis) + i128::from(utc_offset_minutes) * 60_000;
    match OffsetDateTime::from_unix_timestamp_nanos(local_ms * 1_000_000) {
        Ok(at) => format!("{:02}:{:02}", at.hour(), at.minute()),
        Err(_) => String::new(),
    }
}

/// Render a message into its visual tree.
#[must_use]
pub fn render(msg: &ChatMessage, utc_offset_minutes: i32) -> Element {
    let category = classify(msg);
    let time = format_time(msg.timestamp, utc_offset_minutes);
    let root = Node::div(&format!("msg msg-{}", category.class_suffix()));

    let root = match category {
        Category::Normal => with_name(with_player_id(root, msg), msg),
        Category::Ooc => with_name(with_player_id(root.child(badge("badge-ooc", "OOC")), msg), msg),
        Category::Me => {
            let name = msg.player_name.as_deref().unwrap_or_default();
            return root
                .child(Node::span("msg-text").text(format!("* {name} {} *", msg.message)))
                .child(time_span(time));
        }
        Category::Do => {
            let name = msg.player_name.as_deref().unwrap_or_default();
            return root
                .child(Node::span("msg-text").text(format!("* {} ({name}) *", msg.message)))
                .child(time_span(time));
        }
        Category::System => root.child(Node::span("msg-icon").child(Node::trusted(SYSTEM_ICON))),
        Category::Admin => {
            let root = root.child(badge("badge-admin", "ADMIN"));
            match &msg.player_name {
                Some(name) => root.child(name_label(name, DEFAULT_NAME_COLOR, "")),
                None => root,
            }
        }
        Category::Twitter => {
            let root = root.child(
                Node::span("msg-badge badge-tweet")
                    .child(Node::trusted(TWEET_ICON))
                    .text("Tweet"),
            );
            match &msg.player_name {
                Some(name) => root.child(name_label(name, player_color(msg), "@")),
                None => root,
            }
        }
        Category::Radio => {
            let root = match &msg.department {
                Some(department) => {
                    let color = msg.department_color.as_deref().unwrap_or(DEFAULT_DEPARTMENT_COLOR);
                    root.child(
                        Node::span("badge-dept")
                            .style(format!("background:{color}20;color:{color}"))
                            .text(department.as_str()),
                    )
                }
                None => root,
            };
            with_name(with_player_id(root, msg), msg)
        }
    };

    root.child(Node::span("msg-text").text(msg.message.as_str()))
        .child(time_span(time))
}

fn badge(class: &str, label: &str) -> Element {
    Node::span(&format!("msg-badge {class}")).text(label)
}

fn with_player_id(root: Element, msg: &ChatMessage) -> Element {
    match &msg.player_id {
        Some(id) => root.child(badge("badge-id", &format!("ID: {id}"))),
        None => root,
    }
}

fn with_name(root: Element, msg: &ChatMessage) -> Element {
    match &msg.player_name {
        Some(name) => root.child(name_label(name, player_color(msg), "")),
        None => root,
    }
}

fn name_label(name: &str, color: &str, prefix: &str) -> Element {
    Node::span("msg-name")
        .style(format!("color:{color}"))
        .text(format!("{prefix}{name}:"))
}

fn player_color(msg: &ChatMessage) -> &str {
    msg.player_color.as_deref().unwrap_or(DEFAULT_NAME_COLOR)
}

fn time_span(time: String) -> Element {
    Node::span("msg-time").text(time)
}
