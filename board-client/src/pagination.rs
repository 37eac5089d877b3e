//! Окно номеров страниц для пагинатора.
//!
//! Пагинатор показывает не больше [`MAX_VISIBLE_PAGES`] соседних страниц
//! вокруг текущей, а первую и последнюю выносит отдельно с многоточием.

/// Сколько номеров страниц помещается в окно.
pub const MAX_VISIBLE_PAGES: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Вычисленное окно пагинатора. Номера страниц считаются с нуля.
pub struct PageWindow {
    /// Текущая страница.
    pub current: u32,
    /// Общее количество страниц.
    pub total_pages: u32,
    /// Первая страница окна.
    pub start: u32,
    /// Последняя страница окна (включительно).
    pub end: u32,
}

impl PageWindow {
    /// Строит окно для страницы `current` из `total_pages`.
    ///
    /// Окно центрируется на текущей странице, а у краёв сдвигается так, чтобы
    /// по возможности оставаться полным.
    pub fn new(current: u32, total_pages: u32) -> Self {
        if total_pages == 0 {
            return Self {
                current,
                total_pages,
                start: 0,
                end: 0,
            };
        }

        let last = total_pages - 1;
        let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2);
        let end = last.min(start.saturating_add(MAX_VISIBLE_PAGES - 1));

        if end.saturating_sub(start) < MAX_VISIBLE_PAGES - 1 {
            start = end.saturating_sub(MAX_VISIBLE_PAGES - 1);
        }

        Self {
            current,
            total_pages,
            start,
            end,
        }
    }

    /// Пустое ли окно (страниц нет вовсе).
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Нужно ли вообще рисовать пагинатор.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    /// Номера страниц окна.
    pub fn pages(&self) -> Vec<u32> {
        if self.is_empty() {
            return Vec::new();
        }
        (self.start..=self.end).collect()
    }

    /// Показывать ли отдельную ссылку на первую страницу.
    pub fn show_first(&self) -> bool {
        !self.is_empty() && self.start > 0
    }

    /// Многоточие между первой страницей и окном.
    pub fn leading_gap(&self) -> bool {
        !self.is_empty() && self.start > 1
    }

    /// Показывать ли отдельную ссылку на последнюю страницу.
    pub fn show_last(&self) -> bool {
        !self.is_empty() && self.end + 1 < self.total_pages
    }

    /// Многоточие между окном и последней страницей.
    pub fn trailing_gap(&self) -> bool {
        !self.is_empty() && self.end + 2 < self.total_pages
    }

    /// Доступна ли кнопка «назад».
    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    /// Доступна ли кнопка «вперёд».
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.total_pages
    }

    /// Последняя страница (с нуля), если страницы есть.
    pub fn last_page(&self) -> Option<u32> {
        self.total_pages.checked_sub(1)
    }

    /// Текстовое представление окна, например `‹ 1 … 4 5 [6] 7 8 … 12 ›`.
    ///
    /// Номера выводятся с единицы.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut parts = Vec::new();
        parts.push(if self.has_prev() { "‹" } else { " " }.to_string());
        if self.show_first() {
            parts.push("1".to_string());
            if self.leading_gap() {
                parts.push("…".to_string());
            }
        }
        for page in self.pages() {
            if page == self.current {
                parts.push(format!("[{}]", page + 1));
            } else {
                parts.push((page + 1).to_string());
            }
        }
        if self.show_last() {
            if self.trailing_gap() {
                parts.push("…".to_string());
            }
            parts.push(self.total_pages.to_string());
        }
        parts.push(if self.has_next() { "›" } else { " " }.to_string());

        parts.join(" ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_at_start_is_left_aligned() {
        let window = PageWindow::new(0, 10);
        assert_eq!(window.pages(), vec![0, 1, 2, 3, 4]);
        assert!(!window.show_first());
        assert!(window.show_last());
        assert!(window.trailing_gap());
        assert!(!window.has_prev());
        assert!(window.has_next());
    }

    #[test]
    fn window_in_the_middle_is_centered() {
        let window = PageWindow::new(5, 12);
        assert_eq!(window.pages(), vec![3, 4, 5, 6, 7]);
        assert!(window.show_first());
        assert!(window.leading_gap());
        assert!(window.show_last());
        assert!(window.trailing_gap());
    }

    #[test]
    fn window_at_end_is_shifted_left() {
        let window = PageWindow::new(9, 10);
        assert_eq!(window.pages(), vec![5, 6, 7, 8, 9]);
        assert!(window.show_first());
        assert!(!window.show_last());
        assert!(!window.has_next());
    }

    #[test]
    fn short_list_shows_every_page() {
        let window = PageWindow::new(1, 3);
        assert_eq!(window.pages(), vec![0, 1, 2]);
        assert!(!window.show_first());
        assert!(!window.show_last());
    }

    #[test]
    fn no_gap_when_first_page_is_adjacent() {
        let window = PageWindow::new(3, 10);
        assert_eq!(window.pages(), vec![1, 2, 3, 4, 5]);
        assert!(window.show_first());
        assert!(!window.leading_gap());
    }

    #[test]
    fn no_trailing_gap_when_last_page_is_adjacent() {
        let window = PageWindow::new(6, 10);
        assert_eq!(window.pages(), vec![4, 5, 6, 7, 8]);
        assert!(window.show_last());
        assert!(!window.trailing_gap());
    }

    #[test]
    fn empty_window_has_no_pages() {
        let window = PageWindow::new(0, 0);
        assert!(window.is_empty());
        assert!(!window.is_visible());
        assert!(window.pages().is_empty());
        assert!(!window.has_next());
        assert_eq!(window.render(), "");
    }

    #[test]
    fn single_page_is_not_visible() {
        let window = PageWindow::new(0, 1);
        assert!(!window.is_visible());
        assert_eq!(window.pages(), vec![0]);
    }

    #[test]
    fn render_marks_current_page_and_gaps() {
        let window = PageWindow::new(5, 12);
        assert_eq!(window.render(), "‹ 1 … 4 5 [6] 7 8 … 12 ›");
    }
}
