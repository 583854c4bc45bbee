use std::rc::Rc;
use yew::Reducible;

/// Index into a fixed, non-empty list of quotes. `previous` is the quote
/// currently animating out; it is never considered current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    previous: Option<usize>,
}

pub enum CarouselAction {
    Tick,
    Select(usize),
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            previous: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn next(&self) -> Self {
        if self.len < 2 {
            return self.clone();
        }
        self.moved_to((self.index + 1) % self.len)
    }

    /// Out of range indices and the current index leave the state untouched.
    pub fn select(&self, index: usize) -> Self {
        if index >= self.len || index == self.index {
            return self.clone();
        }
        self.moved_to(index)
    }

    fn moved_to(&self, index: usize) -> Self {
        Self {
            len: self.len,
            index,
            previous: Some(self.index),
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CarouselAction::Tick => self.next(),
            CarouselAction::Select(index) => self.select(index),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_by_one_and_wraps() {
        let mut carousel = Carousel::new(3);
        let mut seen = Vec::new();
        for _ in 0..7 {
            carousel = carousel.next();
            seen.push(carousel.index());
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut carousel = Carousel::new(4);
        for step in 0..50 {
            carousel = if step % 3 == 0 {
                carousel.select(step % 6)
            } else {
                carousel.next()
            };
            assert!(carousel.index() < 4);
        }
    }

    #[test]
    fn select_jumps_regardless_of_position() {
        let carousel = Carousel::new(3).next();
        let jumped = carousel.select(0);
        assert_eq!(jumped.index(), 0);
        assert_eq!(jumped.previous(), Some(1));
        // the next tick continues from the selected quote
        assert_eq!(jumped.next().index(), 1);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.select(3), carousel);
        assert_eq!(carousel.select(usize::MAX), carousel);
    }

    #[test]
    fn previous_is_never_current() {
        let mut carousel = Carousel::new(2);
        for _ in 0..5 {
            carousel = carousel.next();
            assert_ne!(carousel.previous(), Some(carousel.index()));
        }
        assert_eq!(carousel.select(carousel.index()).previous(), carousel.previous());
    }

    #[test]
    fn single_quote_stays_put() {
        let carousel = Carousel::new(1).next();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.previous(), None);
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(Carousel::new(3));
        let state = state.reduce(CarouselAction::Tick);
        assert_eq!(state.index(), 1);
        let state = state.reduce(CarouselAction::Select(2));
        assert_eq!(state.index(), 2);
        let same = state.clone().reduce(CarouselAction::Select(9));
        assert!(Rc::ptr_eq(&state, &same));
    }
}
