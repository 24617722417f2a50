use crate::navigation::MenuIcon;

pub(crate) const LOGO: &[u8] = include_bytes!("../../assets/svg/logo.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../../assets/svg/chevron-down.svg");
pub(crate) const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../../assets/svg/chevron-right.svg");
pub(crate) const SIDEBAR_COLLAPSE: &[u8] =
    include_bytes!("../../assets/svg/sidebar-collapse.svg");
pub(crate) const SIDEBAR_EXPAND: &[u8] =
    include_bytes!("../../assets/svg/sidebar-expand.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../../assets/svg/close.svg");
pub(crate) const PLUS: &[u8] = include_bytes!("../../assets/svg/plus.svg");
pub(crate) const INFO: &[u8] = include_bytes!("../../assets/svg/info.svg");
pub(crate) const TRASH: &[u8] = include_bytes!("../../assets/svg/trash.svg");
pub(crate) const ALERT: &[u8] =
    include_bytes!("../../assets/svg/alert-circle.svg");
pub(crate) const SEARCH: &[u8] =
    include_bytes!("../../assets/svg/search.svg");
pub(crate) const CHECK: &[u8] = include_bytes!("../../assets/svg/check.svg");

const PLUS_CIRCLE: &[u8] = include_bytes!("../../assets/svg/plus-circle.svg");
const FILE_TEXT: &[u8] = include_bytes!("../../assets/svg/file-text.svg");
const DOLLAR_SIGN: &[u8] = include_bytes!("../../assets/svg/dollar-sign.svg");
const CLIPBOARD_CHECK: &[u8] =
    include_bytes!("../../assets/svg/clipboard-check.svg");
const CALENDAR_CHECK: &[u8] =
    include_bytes!("../../assets/svg/calendar-check.svg");
const CALENDAR: &[u8] = include_bytes!("../../assets/svg/calendar.svg");
const MAP: &[u8] = include_bytes!("../../assets/svg/map.svg");
const FILE_SPREADSHEET: &[u8] =
    include_bytes!("../../assets/svg/file-spreadsheet.svg");
const SHOPPING_CART: &[u8] =
    include_bytes!("../../assets/svg/shopping-cart.svg");
const RECEIPT: &[u8] = include_bytes!("../../assets/svg/receipt.svg");

/// SVG bytes for a menu icon token.
pub(crate) fn menu_icon(icon: MenuIcon) -> &'static [u8] {
    match icon {
        MenuIcon::PlusCircle => PLUS_CIRCLE,
        MenuIcon::FileText => FILE_TEXT,
        MenuIcon::DollarSign => DOLLAR_SIGN,
        MenuIcon::ClipboardCheck => CLIPBOARD_CHECK,
        MenuIcon::CalendarCheck => CALENDAR_CHECK,
        MenuIcon::Calendar => CALENDAR,
        MenuIcon::Map => MAP,
        MenuIcon::FileSpreadsheet => FILE_SPREADSHEET,
        MenuIcon::Search => SEARCH,
        MenuIcon::ShoppingCart => SHOPPING_CART,
        MenuIcon::Receipt => RECEIPT,
    }
}
