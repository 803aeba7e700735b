/// State of the pager under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    pub fn previous_disabled(&self) -> bool {
        self.current_page == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// One entry per page button: its number and whether it is the active page.
    pub fn pages(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (1..=self.total_pages).map(move |page| (page, page == self.current_page))
    }
}

/// `ceil(count / page_size)`, never less than one page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_with_a_floor_of_one() {
        assert_eq!(total_pages(0, 3), 1);
        assert_eq!(total_pages(3, 3), 1);
        assert_eq!(total_pages(4, 3), 2);
        assert_eq!(total_pages(7, 3), 3);
    }

    #[test]
    fn previous_and_next_disable_at_the_edges() {
        let first = Pagination::new(1, 3);
        assert!(first.previous_disabled());
        assert!(!first.next_disabled());

        let last = Pagination::new(3, 3);
        assert!(!last.previous_disabled());
        assert!(last.next_disabled());

        let only = Pagination::new(1, 1);
        assert!(only.previous_disabled() && only.next_disabled());
    }

    #[test]
    fn one_button_per_page_with_active_marked() {
        let pages: Vec<_> = Pagination::new(2, 3).pages().collect();
        assert_eq!(pages, [(1, false), (2, true), (3, false)]);
    }
}
