//! Lark bot message model and its JSON shape.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Exactly one of these is produced per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "msg_type")]
pub enum Message {
    #[serde(rename = "text")]
    Text { content: TextContent },
    #[serde(rename = "interactive")]
    Card { card: Card },
}

impl Message {
    pub fn text(body: impl Into<String>) -> Self {
        Message::Text {
            content: TextContent { text: body.into() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub header: CardHeader,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardHeader {
    pub title: TextObject,
    /// Header color template, e.g. `"green"` or `"red"`.
    pub template: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTag {
    PlainText,
    LarkMd,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextObject {
    pub content: String,
    pub tag: TextTag,
}

impl TextObject {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: TextTag::PlainText,
        }
    }

    pub fn markdown(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: TextTag::LarkMd,
        }
    }
}

/// Card body section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum Element {
    Div { text: TextObject },
    Hr,
    Action { actions: Vec<Button> },
}

impl Element {
    pub fn markdown(content: impl Into<String>) -> Self {
        Element::Div {
            text: TextObject::markdown(content),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub url: String,
    pub style: ButtonStyle,
}

impl Serialize for Button {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Button", 4)?;
        state.serialize_field("tag", "button")?;
        state.serialize_field("text", &TextObject::plain(self.label.as_str()))?;
        state.serialize_field("type", &self.style)?;
        state.serialize_field("url", &self.url)?;
        state.end()
    }
}
