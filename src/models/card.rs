//! Card is a pair <front, back> plus a tag naming the bundled picture shown with it
use serde::{Deserialize, Serialize};

/// Bundled pictures a card can reference. Only the tag is persisted;
/// the UI resolves it to something drawable at render time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardImage {
    #[default]
    Flowers,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub image: CardImage,
}

impl Card {
    /// New card with the default picture. Surrounding whitespace is trimmed.
    pub fn new(front: &str, back: &str) -> Self {
        Self {
            front: front.trim().to_string(),
            back: back.trim().to_string(),
            image: CardImage::default(),
        }
    }

    /// Both sides hold something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.front) && !is_blank(&self.back)
    }

    /// Overwrites the fields present in `patch`, leaving the rest alone.
    pub fn merge(&mut self, patch: CardPatch) {
        if let Some(front) = patch.front {
            self.front = front;
        }
        if let Some(back) = patch.back {
            self.back = back;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}

/// A partial card used for in-place edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub front: Option<String>,
    pub back: Option<String>,
    pub image: Option<CardImage>,
}

impl CardPatch {
    pub fn text(front: &str, back: &str) -> Self {
        Self {
            front: Some(front.trim().to_string()),
            back: Some(back.trim().to_string()),
            image: None,
        }
    }

    /// A patch that would blank out either side is not accepted.
    pub fn is_valid(&self) -> bool {
        self.front.as_deref().is_none_or(|s| !is_blank(s))
            && self.back.as_deref().is_none_or(|s| !is_blank(s))
    }
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
