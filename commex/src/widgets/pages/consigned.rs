use crate::shared::list::{FilteredList, Named};

/// Consigned product reported on a room sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConsignedProduct {
    pub(crate) id: &'static str,
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) total: u32,
    pub(crate) utilized: u32,
    pub(crate) reversed: u32,
    /// Every unit comes from one lot.
    pub(crate) same_lot: bool,
    pub(crate) lot: String,
}

impl Named for ConsignedProduct {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Products of the consigned room sheet with their lot answers.
#[derive(Debug, Clone)]
pub(crate) struct ConsignedSheet {
    products: FilteredList<ConsignedProduct>,
}

impl ConsignedSheet {
    pub(crate) fn new(products: Vec<ConsignedProduct>) -> Self {
        Self {
            products: FilteredList::new(products),
        }
    }

    pub(crate) fn products(&self) -> &FilteredList<ConsignedProduct> {
        &self.products
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.products.set_query(query);
    }

    pub(crate) fn set_lot(&mut self, id: &str, lot: String) -> bool {
        match self.products.get_mut(id) {
            Some(product) => {
                product.lot = lot;
                true
            },
            None => false,
        }
    }

    pub(crate) fn toggle_same_lot(&mut self, id: &str) -> bool {
        match self.products.get_mut(id) {
            Some(product) => {
                product.same_lot = !product.same_lot;
                true
            },
            None => false,
        }
    }
}
