/// Current position in the library, wrapping in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    /// Clamps `index` into a list of `len` entries; an empty list selects 0.
    pub fn new(index: usize, len: usize) -> Self {
        Self {
            index: if len == 0 { 0 } else { index.min(len - 1) },
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns false without moving when the list is empty.
    pub fn next(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.index = (self.index + 1) % len;
        true
    }

    pub fn previous(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.index = (self.index + len - 1) % len;
        true
    }

    /// Selects the last entry of a list that just grew to `len`.
    pub fn select_last(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_around() {
        let mut selection = Selection::new(0, 3);
        assert!(selection.next(3));
        assert_eq!(selection.index(), 1);
        assert!(selection.next(3));
        assert_eq!(selection.index(), 2);
        assert!(selection.next(3));
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut selection = Selection::new(0, 4);
        assert!(selection.previous(4));
        assert_eq!(selection.index(), 3);
    }

    #[test]
    fn test_n_steps_return_to_start() {
        for len in 1..8 {
            for start in 0..len {
                let mut selection = Selection::new(start, len);
                for _ in 0..len {
                    selection.next(len);
                }
                assert_eq!(selection.index(), start, "len {} start {}", len, start);
            }
        }
    }

    #[test]
    fn test_previous_undoes_next() {
        for len in 2..6 {
            for start in 0..len {
                let mut selection = Selection::new(start, len);
                selection.next(len);
                selection.previous(len);
                assert_eq!(selection.index(), start);

                selection.previous(len);
                selection.next(len);
                assert_eq!(selection.index(), start);
            }
        }
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut selection = Selection::default();
        assert!(!selection.next(0));
        assert!(!selection.previous(0));
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn test_new_clamps_out_of_range() {
        assert_eq!(Selection::new(9, 3).index(), 2);
        assert_eq!(Selection::new(9, 0).index(), 0);
    }

    #[test]
    fn test_select_last() {
        let mut selection = Selection::new(0, 3);
        selection.select_last(4);
        assert_eq!(selection.index(), 3);
    }
}
