use rand::Rng;

/// Picks a hole uniformly among `0..count`, never returning `excluding`
/// unless it is the only hole there is.
///
/// Drawing over the `count - 1` other holes and stepping past the excluded
/// index gives the same distribution as redrawing until the result differs.
pub fn pick_hole<R: Rng + ?Sized>(rng: &mut R, count: usize, excluding: Option<usize>) -> usize {
    assert!(count > 0, "cannot pick from zero holes");

    match excluding {
        Some(excluded) if count > 1 && excluded < count => {
            let index = rng.gen_range(0..count - 1);
            if index >= excluded {
                index + 1
            } else {
                index
            }
        }
        _ => rng.gen_range(0..count),
    }
}

/// Peep state of every hole on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Holes {
    peeping: Vec<bool>,
}

impl Holes {
    pub fn new(count: usize) -> Self {
        Holes {
            peeping: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.peeping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peeping.is_empty()
    }

    pub fn is_peeping(&self, hole: usize) -> bool {
        self.peeping.get(hole).copied().unwrap_or(false)
    }

    pub fn peeping(&self) -> impl Iterator<Item = usize> + '_ {
        self.peeping
            .iter()
            .enumerate()
            .filter(|&(_, &peeping)| peeping)
            .map(|(hole, _)| hole)
    }

    /// Returns whether the hole changed state.
    pub fn set(&mut self, hole: usize, peeping: bool) -> bool {
        match self.peeping.get_mut(hole) {
            Some(state) if *state != peeping => {
                *state = peeping;
                true
            }
            _ => false,
        }
    }

    /// Hides every hole, returning the ones that were peeping.
    pub fn clear(&mut self) -> Vec<usize> {
        let shown = self.peeping().collect();
        self.peeping.iter_mut().for_each(|state| *state = false);
        shown
    }
}
