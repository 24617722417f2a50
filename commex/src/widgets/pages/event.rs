use super::model::{Decision, ListTab, RoomSheetTab, RowAction};
use crate::navigation::{Route, Screen};

/// Intent events handled by the pages widget.
#[derive(Debug, Clone)]
pub(crate) enum PagesIntent {
    /// Navigation mounted another screen; local page state starts over.
    ScreenChanged(Screen),
    Search(String),
    NextPage,
    PreviousPage,
    SelectTab(ListTab),
    ToggleRow(String),
    RowAction { row_id: String, action: RowAction },
    /// Back or forward button of a detail screen.
    FollowLink(Route),
    /// Confirm button of the procedure creation form.
    OpenWizard,
    /// Quantity stepper of a line item.
    AdjustQuantity { item_id: String, delta: i32 },
    /// Typed unit price of a line item.
    EditPrice { item_id: String, value: String },
    AddItem,
    RemoveItem(String),
    /// Highlight checkbox of a line item.
    ToggleItem(String),
    /// Justification, comment or observation text of the screen.
    EditNote(String),
    EditIdgen(String),
    Decide(Decision),
    /// Calendar pager; negative values go back.
    ShiftMonth(i32),
    SetLot { product_id: String, lot: String },
    ToggleSameLot(String),
    RemoveAttachment(String),
    SelectRoomTab(RoomSheetTab),
}

/// Effect events produced by the pages reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PagesEffect {
    NavigateTo(Route),
    OpenWizard { to_list: Option<Route> },
}

/// Pages event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PagesEvent {
    /// Intent event reduced by the pages widget.
    Intent(PagesIntent),
    /// External effect orchestrated by app-level routing.
    Effect(PagesEffect),
}
