//! Modal form for creating a new card or editing an existing one.
//! Holds an unsaved draft until it is committed into the deck or discarded.

use super::{Card, CardPatch, DeckStore};
use crate::database::KeyValueStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub front: String,
    pub back: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the card at this index, captured when the form opened.
    Edit { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Committed,
    /// Blank side or stale index; the form stays open.
    Rejected,
    NotOpen,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CardForm {
    #[default]
    Closed,
    Open { mode: FormMode, draft: Draft },
}

impl CardForm {
    pub fn is_open(&self) -> bool {
        matches!(self, CardForm::Open { .. })
    }

    /// Opens with an empty draft. Ignored if the form is already open.
    pub fn open_for_create(&mut self) -> bool {
        self.open(FormMode::Create, Draft::default())
    }

    /// Opens with a copy of `card`'s text. Ignored if the form is already open.
    pub fn open_for_edit(&mut self, index: usize, card: &Card) -> bool {
        let draft = Draft {
            front: card.front.clone(),
            back: card.back.clone(),
        };
        self.open(FormMode::Edit { index }, draft)
    }

    fn open(&mut self, mode: FormMode, draft: Draft) -> bool {
        if self.is_open() {
            log::debug!("card form already open");
            return false;
        }
        *self = CardForm::Open { mode, draft };
        true
    }

    pub fn mode(&self) -> Option<FormMode> {
        match self {
            CardForm::Open { mode, .. } => Some(*mode),
            CardForm::Closed => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode() {
            Some(FormMode::Edit { .. }) => "Edit Flashcard",
            _ => "New Flashcard",
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            CardForm::Open { draft, .. } => Some(draft),
            CardForm::Closed => None,
        }
    }

    /// Mutable draft, for binding text inputs directly.
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            CardForm::Open { draft, .. } => Some(draft),
            CardForm::Closed => None,
        }
    }

    pub fn edit_front(&mut self, text: &str) {
        if let Some(draft) = self.draft_mut() {
            draft.front = text.to_string();
        }
    }

    pub fn edit_back(&mut self, text: &str) {
        if let Some(draft) = self.draft_mut() {
            draft.back = text.to_string();
        }
    }

    /// Commits the draft into `deck` and closes the form.
    ///
    /// A blank side leaves the form open and the deck untouched.
    pub fn save<S: KeyValueStore>(&mut self, deck: &mut DeckStore<S>) -> SaveOutcome {
        let CardForm::Open { mode, draft } = self else {
            return SaveOutcome::NotOpen;
        };

        let committed = match *mode {
            FormMode::Create => deck.append(Card::new(&draft.front, &draft.back)),
            FormMode::Edit { index } => {
                match deck.replace_at(index, CardPatch::text(&draft.front, &draft.back)) {
                    Ok(applied) => applied,
                    Err(e) => {
                        log::error!("could not save edited card: {}", e);
                        false
                    }
                }
            }
        };

        if committed {
            *self = CardForm::Closed;
            SaveOutcome::Committed
        } else {
            SaveOutcome::Rejected
        }
    }

    /// Closes the form and drops the draft.
    pub fn cancel(&mut self) {
        *self = CardForm::Closed;
    }
}
