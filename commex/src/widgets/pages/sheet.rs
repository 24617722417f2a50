//! Line-item sheets: quotation and release items with quantities, prices
//! and a running total.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::shared::list::{FilteredList, Named};

/// Money amount in cents, rendered with pt-BR grouping ("1.095,00").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Amount(u64);

impl Amount {
    pub(crate) const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub(crate) fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Parse price field input. Everything except digits and commas is
    /// dropped, the first comma separates the fraction, and the fraction is
    /// rounded to cents. `None` when no digit is left.
    pub(crate) fn parse_input(input: &str) -> Option<Self> {
        let kept: String = input
            .chars()
            .filter(|ch| ch.is_ascii_digit() || *ch == ',')
            .collect();
        let mut parts = kept.split(',');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };
        let mut digits = fraction.bytes().map(|byte| u64::from(byte - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|digit| digit >= 5);

        let cents = whole
            .checked_mul(100)?
            .checked_add(tenths * 10 + hundredths + u64::from(round_up))?;
        Some(Self(cents))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::default(), Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (index, digit) in whole.chars().enumerate() {
            if index > 0 && (whole.len() - index) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        write!(f, "{grouped},{:02}", self.0 % 100)
    }
}

/// One product line of a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineItem {
    pub(crate) id: String,
    pub(crate) code: &'static str,
    pub(crate) description: &'static str,
    pub(crate) anvisa: &'static str,
    pub(crate) quantity: u32,
    /// Catalogue price, shown next to the negotiated one when known.
    pub(crate) list_price: Option<Amount>,
    pub(crate) unit_price: Amount,
    /// Greyed-out line: quantity and price are frozen.
    pub(crate) inactive: bool,
}

impl LineItem {
    pub(crate) fn line_total(&self) -> Amount {
        self.unit_price.times(self.quantity)
    }

    fn blank(id: String) -> Self {
        Self {
            id,
            code: "",
            description: "",
            anvisa: "",
            quantity: 1,
            list_price: None,
            unit_price: Amount::default(),
            inactive: false,
        }
    }
}

impl Named for LineItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.description
    }
}

/// Which lines accept a typed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PriceRule {
    Locked,
    /// Only highlighted (selected) lines.
    Selected,
    /// Every line that is not inactive.
    Active,
}

/// Editing capabilities of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SheetRules {
    pub(crate) can_add: bool,
    pub(crate) can_remove: bool,
    pub(crate) selectable: bool,
    pub(crate) quantity_steps: bool,
    pub(crate) price: PriceRule,
}

/// Line items of a screen together with their editing rules.
#[derive(Debug, Clone)]
pub(crate) struct ItemSheet {
    items: FilteredList<LineItem>,
    rules: SheetRules,
    next_number: usize,
}

impl ItemSheet {
    /// Build a sheet. Ids in `highlighted` start selected.
    pub(crate) fn new(
        items: Vec<LineItem>,
        highlighted: &[&str],
        rules: SheetRules,
    ) -> Self {
        let next_number = items.len() + 1;
        let mut items = FilteredList::new(items);
        for id in highlighted {
            items.toggle_selected(id);
        }
        Self {
            items,
            rules,
            next_number,
        }
    }

    pub(crate) fn items(&self) -> &FilteredList<LineItem> {
        &self.items
    }

    pub(crate) fn rules(&self) -> SheetRules {
        self.rules
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.items.set_query(query);
    }

    /// Sum of quantity times unit price over every line still on the
    /// sheet, filtered out or not.
    pub(crate) fn total(&self) -> Amount {
        self.items.retained().map(LineItem::line_total).sum()
    }

    /// A sheet never drops its last line.
    pub(crate) fn can_remove(&self) -> bool {
        self.rules.can_remove && self.items.retained().nth(1).is_some()
    }

    /// Append an empty line and return its id. Numbers keep growing after
    /// removals so an id is never reused.
    pub(crate) fn add_blank(&mut self) -> Option<String> {
        if !self.rules.can_add {
            return None;
        }
        loop {
            let id = format!("item-{}", self.next_number);
            self.next_number += 1;
            if self.items.push(LineItem::blank(id.clone())) {
                return Some(id);
            }
        }
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        if !self.can_remove() || self.items.get_mut(id).is_none() {
            return false;
        }
        self.items.remove(id);
        true
    }

    /// Step a quantity by `delta`, never below one.
    pub(crate) fn adjust_quantity(&mut self, id: &str, delta: i32) -> bool {
        if !self.rules.quantity_steps {
            return false;
        }
        match self.items.get_mut(id) {
            Some(item) if !item.inactive => {
                let next = i64::from(item.quantity) + i64::from(delta);
                item.quantity =
                    u32::try_from(next.max(1)).unwrap_or(u32::MAX);
                true
            },
            _ => false,
        }
    }

    /// Apply typed price input. Unparseable input keeps the old price.
    pub(crate) fn set_unit_price(&mut self, id: &str, input: &str) -> bool {
        let allowed = match self.rules.price {
            PriceRule::Locked => false,
            PriceRule::Selected => self.items.is_selected(id),
            PriceRule::Active => true,
        };
        let Some(price) = Amount::parse_input(input) else {
            return false;
        };
        match self.items.get_mut(id) {
            Some(item) if allowed && !item.inactive => {
                item.unit_price = price;
                true
            },
            _ => false,
        }
    }

    pub(crate) fn toggle(&mut self, id: &str) -> bool {
        if !self.rules.selectable || self.items.get_mut(id).is_none() {
            return false;
        }
        self.items.toggle_selected(id);
        true
    }
}
