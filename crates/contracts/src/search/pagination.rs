use super::request::ROWS_PER_PAGE;

/// Элемент пейджера: номер страницы или разрыв
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Above this many pages the window collapses into "1 … c-1 c c+1 … N"
const FULL_WINDOW_MAX: u32 = 5;

pub fn total_pages_for(total_count: u64) -> u32 {
    let pages = total_count.div_ceil(u64::from(ROWS_PER_PAGE));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamps a page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Page buttons to render for the current position.
pub fn pagination_window(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= FULL_WINDOW_MAX {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];

    if current_page > 3 {
        items.push(PageItem::Ellipsis);
    }

    let from = current_page.saturating_sub(1).max(2);
    let to = current_page.saturating_add(1).min(total_pages - 1);
    items.extend((from..=to).map(PageItem::Page));

    if current_page < total_pages - 2 {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages_for(0), 0);
        assert_eq!(total_pages_for(1), 1);
        assert_eq!(total_pages_for(10), 1);
        assert_eq!(total_pages_for(11), 2);
        assert_eq!(total_pages_for(95), 10);
    }

    #[test]
    fn test_clamp_treats_zero_pages_as_one() {
        assert_eq!(clamp_page(7, 0), 1);
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(9, 5), 5);
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(
            pagination_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_small_has_no_ellipsis() {
        for current in 1..=4 {
            assert_eq!(
                pagination_window(current, 4),
                vec![Page(1), Page(2), Page(3), Page(4)]
            );
        }
        assert!(pagination_window(1, 0).is_empty());
    }

    #[test]
    fn test_window_edges() {
        assert_eq!(
            pagination_window(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            pagination_window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            pagination_window(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            pagination_window(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }
}
