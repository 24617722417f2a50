use std::collections::BTreeSet;

/// Rows shown by list screens expose a stable id and a searchable name.
pub(crate) trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// Rows per page in paginated list screens.
pub(crate) const DEFAULT_PAGE_SIZE: usize = 7;

/// In-memory row list with a case-insensitive name filter, pagination and
/// per-row selection/removal flags.
#[derive(Debug, Clone)]
pub(crate) struct FilteredList<T> {
    rows: Vec<T>,
    query: String,
    needle: String,
    page: usize,
    page_size: usize,
    selected: BTreeSet<String>,
    removed: BTreeSet<String>,
}

impl<T: Named> FilteredList<T> {
    pub(crate) fn new(rows: Vec<T>) -> Self {
        Self::with_page_size(rows, DEFAULT_PAGE_SIZE)
    }

    pub(crate) fn with_page_size(rows: Vec<T>, page_size: usize) -> Self {
        Self {
            rows,
            query: String::new(),
            needle: String::new(),
            page: 0,
            page_size: page_size.max(1),
            selected: BTreeSet::new(),
            removed: BTreeSet::new(),
        }
    }

    /// Raw filter text as typed.
    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    /// Replace the filter text and jump back to the first page.
    pub(crate) fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.needle = self.query.trim().to_lowercase();
        self.page = 0;
    }

    /// Rows that survive removal regardless of the filter, in order.
    pub(crate) fn retained(&self) -> impl Iterator<Item = &T> {
        self.rows
            .iter()
            .filter(|row| !self.removed.contains(row.id()))
    }

    /// Rows that survive removal and match the current filter, in order.
    pub(crate) fn visible(&self) -> Vec<&T> {
        self.retained()
            .filter(|row| {
                self.needle.is_empty()
                    || row.name().to_lowercase().contains(&self.needle)
            })
            .collect()
    }

    /// Rows of the current page.
    pub(crate) fn page_rows(&self) -> Vec<&T> {
        let visible = self.visible();
        let page = self.page.min(last_page(visible.len(), self.page_size));
        visible
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    pub(crate) fn page(&self) -> usize {
        self.page.min(self.last_page())
    }

    pub(crate) fn page_count(&self) -> usize {
        self.last_page() + 1
    }

    /// Move to `page`, clamped to the last available page.
    pub(crate) fn set_page(&mut self, page: usize) {
        self.page = page.min(self.last_page());
    }

    pub(crate) fn next_page(&mut self) {
        self.set_page(self.page().saturating_add(1));
    }

    pub(crate) fn previous_page(&mut self) {
        self.set_page(self.page().saturating_sub(1));
    }

    pub(crate) fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub(crate) fn selected_count(&self) -> usize {
        self.retained()
            .filter(|row| self.selected.contains(row.id()))
            .count()
    }

    /// Flip the selection flag of a known row. Unknown ids are ignored.
    pub(crate) fn toggle_selected(&mut self, id: &str) {
        if !self.contains(id) {
            return;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Remove a row from the visible set. Unknown ids are ignored.
    pub(crate) fn remove(&mut self, id: &str) {
        if self.contains(id) {
            self.selected.remove(id);
            self.removed.insert(id.to_string());
            self.page = self.page.min(self.last_page());
        }
    }

    pub(crate) fn get(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Mutable access to a row that has not been removed.
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        let removed = &self.removed;
        self.rows
            .iter_mut()
            .find(|row| row.id() == id && !removed.contains(id))
    }

    /// Append a row after the existing ones. Returns `false` and leaves
    /// the list unchanged when the id is already taken.
    pub(crate) fn push(&mut self, row: T) -> bool {
        if self.contains(row.id()) {
            return false;
        }
        self.rows.push(row);
        true
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn last_page(&self) -> usize {
        last_page(self.visible().len(), self.page_size)
    }
}

fn last_page(len: usize, page_size: usize) -> usize {
    len.saturating_sub(1) / page_size
}

#[cfg(test)]
mod tests {
    use super::{FilteredList, Named};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row(&'static str, &'static str);

    impl Named for Row {
        fn id(&self) -> &str {
            self.0
        }

        fn name(&self) -> &str {
            self.1
        }
    }

    fn patients() -> Vec<Row> {
        vec![
            Row("regiane-takahashi", "Regiane Takahashi"),
            Row("lucas-ferreira", "Lucas Ferreira da Silva"),
            Row("pedro-henrique", "Pedro Henrique Almeida Costa"),
            Row("ana-paula", "Ana Paula Monteiro"),
        ]
    }

    fn ids(rows: Vec<&Row>) -> Vec<&'static str> {
        rows.into_iter().map(|row| row.0).collect()
    }

    #[test]
    fn given_empty_query_when_listing_then_all_rows_are_visible_in_order() {
        let list = FilteredList::new(patients());
        assert_eq!(
            ids(list.visible()),
            vec![
                "regiane-takahashi",
                "lucas-ferreira",
                "pedro-henrique",
                "ana-paula"
            ]
        );
    }

    #[test]
    fn given_mixed_case_query_with_padding_when_filtering_then_match_is_case_insensitive()
     {
        let mut list = FilteredList::new(patients());
        list.set_query("  SILVA ");
        assert_eq!(ids(list.visible()), vec!["lucas-ferreira"]);
        assert_eq!(list.query(), "  SILVA ");

        list.set_query("a p");
        assert_eq!(ids(list.visible()), vec!["ana-paula"]);
    }

    #[test]
    fn given_query_change_when_on_later_page_then_page_resets_to_first() {
        let mut list = FilteredList::with_page_size(patients(), 2);
        list.next_page();
        assert_eq!(list.page(), 1);
        assert_eq!(ids(list.page_rows()), vec!["pedro-henrique", "ana-paula"]);

        list.set_query("e");
        assert_eq!(list.page(), 0);
    }

    #[test]
    fn given_page_past_end_when_setting_page_then_it_clamps_to_last_page() {
        let mut list = FilteredList::with_page_size(patients(), 3);
        list.set_page(10);
        assert_eq!(list.page(), 1);
        assert_eq!(list.page_count(), 2);
        list.previous_page();
        list.previous_page();
        assert_eq!(list.page(), 0);
    }

    #[test]
    fn given_selected_row_when_removed_then_it_is_hidden_and_unselected() {
        let mut list = FilteredList::new(patients());
        list.toggle_selected("ana-paula");
        list.toggle_selected("pedro-henrique");
        assert_eq!(list.selected_count(), 2);

        list.remove("ana-paula");
        assert!(!list.is_selected("ana-paula"));
        assert_eq!(list.selected_count(), 1);
        assert!(!ids(list.visible()).contains(&"ana-paula"));
    }

    #[test]
    fn given_removed_row_when_asking_retained_or_mutable_row_then_it_is_skipped()
     {
        let mut list = FilteredList::new(patients());
        list.set_query("pedro");
        list.remove("ana-paula");

        assert_eq!(list.retained().count(), 3);
        assert!(list.get_mut("ana-paula").is_none());
        assert!(list.get_mut("lucas-ferreira").is_some());
    }

    #[test]
    fn given_new_and_duplicate_ids_when_pushing_then_only_new_rows_are_added() {
        let mut list = FilteredList::new(patients());
        assert!(list.push(Row("bruno-rodrigues", "Bruno Rodrigues")));
        assert!(!list.push(Row("ana-paula", "Ana Paula Outra")));

        assert_eq!(list.visible().len(), 5);
        assert_eq!(
            list.get("ana-paula").map(|row| row.1),
            Some("Ana Paula Monteiro")
        );
    }

    #[test]
    fn given_unknown_id_when_toggling_or_removing_then_list_is_unchanged() {
        let mut list = FilteredList::new(patients());
        list.toggle_selected("nobody");
        list.remove("nobody");
        assert_eq!(list.selected_count(), 0);
        assert_eq!(list.visible().len(), 4);
    }
}
