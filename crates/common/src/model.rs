/// A player's click on a hole, as delivered by the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation {
    pub hole: usize,
    /// `false` for synthetic events, e.g. `element.click()` from a script.
    pub trusted: bool,
}

impl Activation {
    pub fn trusted(hole: usize) -> Self {
        Activation {
            hole,
            trusted: true,
        }
    }

    pub fn synthetic(hole: usize) -> Self {
        Activation {
            hole,
            trusted: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bonk {
    Scored { score: u32 },
    Untrusted,
    Missed,
}
