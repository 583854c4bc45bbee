/// Single-selection state shared by the FAQ accordion and the testimonial
/// list: either nothing is open or exactly one key is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<K> {
    None,
    Open(K),
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Selection::None
    }
}

impl<K: Copy + PartialEq> Selection<K> {
    /// Reselecting the open key closes it; any other key replaces it.
    pub fn select(self, key: K) -> Self {
        match self {
            Selection::Open(open) if open == key => Selection::None,
            _ => Selection::Open(key),
        }
    }

    pub fn is_open(&self, key: K) -> bool {
        matches!(self, Selection::Open(open) if *open == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(selection: Selection<usize>, len: usize) -> usize {
        (0..len).filter(|i| selection.is_open(*i)).count()
    }

    #[test]
    fn starts_closed() {
        let selection = Selection::<usize>::default();
        assert_eq!(selection, Selection::None);
        assert_eq!(open_count(selection, 4), 0);
    }

    #[test]
    fn reselecting_open_entry_closes_it() {
        let selection = Selection::None.select(2);
        assert!(selection.is_open(2));
        assert_eq!(selection.select(2), Selection::None);
    }

    #[test]
    fn selecting_another_entry_switches_directly() {
        let selection = Selection::None.select(0).select(3);
        assert_eq!(selection, Selection::Open(3));
        assert!(!selection.is_open(0));
    }

    #[test]
    fn never_more_than_one_open() {
        let presses = [0, 1, 1, 2, 0, 0, 3, 2, 2, 1];
        let mut selection = Selection::None;
        for key in presses {
            selection = selection.select(key);
            assert!(open_count(selection, 4) <= 1);
        }
        assert_eq!(selection, Selection::Open(1));
    }
}
