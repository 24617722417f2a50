use super::calendar::CalendarBoard;
use super::consigned::ConsignedSheet;
use super::model::{
    self, ListTab, PageBody, PatientRow, RoomSheetTab, ScreenBody,
};
use super::sheet::ItemSheet;
use crate::navigation::Screen;
use crate::shared::list::FilteredList;

/// Local state of the mounted screen: its body, the filter text and the
/// free-text fields. Everything is rebuilt on remount.
#[derive(Debug)]
pub(super) struct PagesState {
    screen: Screen,
    body: ScreenBody,
    note: String,
    idgen: String,
    attachments: Vec<&'static str>,
    room_tab: RoomSheetTab,
}

impl PagesState {
    pub(super) fn new(screen: Screen) -> Self {
        Self {
            screen,
            body: model::body(screen),
            note: String::new(),
            idgen: String::new(),
            attachments: model::attachments(screen),
            room_tab: RoomSheetTab::default(),
        }
    }

    pub(super) fn screen(&self) -> Screen {
        self.screen
    }

    /// Replace the screen and rebuild its local state from scratch.
    pub(super) fn mount(&mut self, screen: Screen) {
        *self = Self::new(screen);
    }

    pub(super) fn body(&self) -> PageBody<'_> {
        match &self.body {
            ScreenBody::Lists { lists, active } => lists
                .get(*active)
                .map(|entry| PageBody::List(&entry.list))
                .unwrap_or(PageBody::Static),
            ScreenBody::Items(sheet) => PageBody::Items(sheet),
            ScreenBody::Calendar(board) => PageBody::Calendar(board),
            ScreenBody::Consigned(sheet) => PageBody::Consigned(sheet),
            ScreenBody::Static => PageBody::Static,
        }
    }

    pub(super) fn tab(&self) -> Option<ListTab> {
        match &self.body {
            ScreenBody::Lists { lists, active } => {
                lists.get(*active).and_then(|entry| entry.tab)
            },
            _ => None,
        }
    }

    /// Switch to `tab`, carrying the filter text over. Returns `false` when
    /// the screen has no such tab.
    pub(super) fn select_tab(&mut self, tab: ListTab) -> bool {
        let ScreenBody::Lists { lists, active } = &mut self.body else {
            return false;
        };
        let Some(index) =
            lists.iter().position(|entry| entry.tab == Some(tab))
        else {
            return false;
        };
        let query = lists
            .get(*active)
            .map(|entry| entry.list.query().to_string())
            .unwrap_or_default();
        *active = index;
        if let Some(entry) = lists.get_mut(index) {
            entry.list.set_query(query);
        }
        true
    }

    /// Apply filter text to whatever the body searches.
    pub(super) fn search(&mut self, query: String) {
        match &mut self.body {
            ScreenBody::Lists { lists, active } => {
                if let Some(entry) = lists.get_mut(*active) {
                    entry.list.set_query(query);
                }
            },
            ScreenBody::Items(sheet) => sheet.set_query(query),
            ScreenBody::Calendar(board) => board.set_query(query),
            ScreenBody::Consigned(sheet) => sheet.set_query(query),
            ScreenBody::Static => {},
        }
    }

    #[cfg(test)]
    pub(super) fn list(&self) -> Option<&FilteredList<PatientRow>> {
        match self.body() {
            PageBody::List(list) => Some(list),
            _ => None,
        }
    }

    pub(super) fn list_mut(
        &mut self,
    ) -> Option<&mut FilteredList<PatientRow>> {
        match &mut self.body {
            ScreenBody::Lists { lists, active } => {
                lists.get_mut(*active).map(|entry| &mut entry.list)
            },
            _ => None,
        }
    }

    pub(super) fn sheet_mut(&mut self) -> Option<&mut ItemSheet> {
        match &mut self.body {
            ScreenBody::Items(sheet) => Some(sheet),
            _ => None,
        }
    }

    pub(super) fn calendar_mut(&mut self) -> Option<&mut CalendarBoard> {
        match &mut self.body {
            ScreenBody::Calendar(board) => Some(board),
            _ => None,
        }
    }

    pub(super) fn consigned_mut(&mut self) -> Option<&mut ConsignedSheet> {
        match &mut self.body {
            ScreenBody::Consigned(sheet) => Some(sheet),
            _ => None,
        }
    }

    pub(super) fn note(&self) -> &str {
        &self.note
    }

    pub(super) fn set_note(&mut self, note: String) {
        self.note = note;
    }

    pub(super) fn idgen(&self) -> &str {
        &self.idgen
    }

    pub(super) fn set_idgen(&mut self, idgen: String) {
        self.idgen = idgen;
    }

    pub(super) fn attachments(&self) -> &[&'static str] {
        &self.attachments
    }

    pub(super) fn remove_attachment(&mut self, name: &str) -> bool {
        let before = self.attachments.len();
        self.attachments.retain(|attached| *attached != name);
        self.attachments.len() != before
    }

    pub(super) fn room_tab(&self) -> RoomSheetTab {
        self.room_tab
    }

    pub(super) fn set_room_tab(&mut self, tab: RoomSheetTab) {
        self.room_tab = tab;
    }
}
