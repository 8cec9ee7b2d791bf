//! Open/closed state of the certificate preview.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent<'a> {
    /// Click on the trigger card. `on_link` is set when the click landed on a
    /// link nested inside the card.
    TriggerClick { on_link: bool },
    TriggerKey(&'a str),
    OverlayClick,
    CloseClick,
    Key(&'a str),
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn next(self, event: ModalEvent<'_>) -> Self {
        use ModalEvent::*;
        match (self, event) {
            (Self::Closed, TriggerClick { on_link: false }) => Self::Open,
            (Self::Closed, TriggerKey(key)) if opens_with(key) => Self::Open,
            (Self::Open, OverlayClick | CloseClick) => Self::Closed,
            (Self::Open, Key("Escape")) => Self::Closed,
            (state, _) => state,
        }
    }
}

/// Keys that activate the trigger card like a button.
pub fn opens_with(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
