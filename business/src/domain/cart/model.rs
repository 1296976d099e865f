use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::PaymentMethod;

/// Upper bound of a single line's quantity.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// A product line in the cart. Display metadata and price are
/// snapshotted when the product is first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub category: String,
    pub price: BigDecimal,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn line_total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

/// Input for adding a product to the cart.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub product_id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub image: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartLineItem>,
    pub unique_items: usize,
    pub total_items: u32,
    pub total_price: BigDecimal,
    pub payment_method: PaymentMethod,
    pub is_open: bool,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            unique_items: 0,
            total_items: 0,
            total_price: BigDecimal::zero(),
            payment_method: PaymentMethod::default(),
            is_open: false,
        }
    }
}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of the product, appending a new line only when the
    /// product is not in the cart yet.
    pub fn add_item(&mut self, item: NewCartItem) {
        match self
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY),
            None => self.items.push(CartLineItem {
                id: Uuid::new_v4(),
                product_id: item.product_id,
                name: item.name,
                image: item.image,
                category: item.category,
                price: item.price,
                quantity: 1,
            }),
        }
        self.recompute();
    }

    /// Returns false when the product was not in the cart.
    pub fn remove_item(&mut self, product_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.product_id != product_id);
        self.recompute();
        self.items.len() != before
    }

    /// Quantities outside `1..=MAX_LINE_QUANTITY` are ignored; removing a
    /// line is the caller's call.
    pub fn update_quantity(&mut self, product_id: Uuid, quantity: i64) -> bool {
        if !(1..=i64::from(MAX_LINE_QUANTITY)).contains(&quantity) {
            return false;
        }
        let quantity = quantity as u32;
        let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
        else {
            return false;
        };
        line.quantity = quantity;
        self.recompute();
        true
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Empties the cart and restores the default payment method.
    pub fn clear(&mut self) {
        *self = Self {
            is_open: self.is_open,
            ..Self::default()
        };
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Repairs state read from storage: drops empty lines, merges lines
    /// sharing a product and recomputes the aggregates.
    pub fn normalized(mut self) -> Self {
        let mut items: Vec<CartLineItem> = Vec::with_capacity(self.items.len());
        for mut line in self.items.drain(..).filter(|line| line.quantity >= 1) {
            match items.iter_mut().find(|l| l.product_id == line.product_id) {
                Some(existing) => {
                    existing.quantity = existing
                        .quantity
                        .saturating_add(line.quantity)
                        .min(MAX_LINE_QUANTITY)
                }
                None => {
                    line.quantity = line.quantity.min(MAX_LINE_QUANTITY);
                    items.push(line);
                }
            }
        }
        self.items = items;
        self.recompute();
        self
    }

    fn recompute(&mut self) {
        self.unique_items = self.items.len();
        self.total_items = self
            .items
            .iter()
            .map(|line| line.quantity)
            .sum();
        self.total_price = self
            .items
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.line_total());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn new_item(product_id: Uuid, price: i64) -> NewCartItem {
        NewCartItem {
            product_id,
            name: format!("Product {}", product_id),
            price: BigDecimal::from(price),
            image: None,
            category: "Tools".to_string(),
        }
    }

    fn assert_invariants(state: &CartState) {
        assert_eq!(state.unique_items, state.items.len());
        assert_eq!(
            state.total_items,
            state.items.iter().map(|l| l.quantity).sum::<u32>()
        );
        let expected_price = state
            .items
            .iter()
            .fold(BigDecimal::zero(), |acc, l| acc + &l.price * BigDecimal::from(l.quantity));
        assert_eq!(state.total_price, expected_price);
        assert!(
            state
                .items
                .iter()
                .all(|l| (1..=MAX_LINE_QUANTITY).contains(&l.quantity))
        );
        for (i, line) in state.items.iter().enumerate() {
            assert!(
                state.items[i + 1..]
                    .iter()
                    .all(|other| other.product_id != line.product_id)
            );
        }
    }

    #[test]
    fn should_start_empty_with_default_payment_method() {
        let state = CartState::default();

        assert!(state.is_empty());
        assert_eq!(state.unique_items, 0);
        assert_eq!(state.total_items, 0);
        assert_eq!(state.total_price, BigDecimal::zero());
        assert_eq!(state.payment_method, PaymentMethod::BankTransfer);
        assert!(!state.is_open);
    }

    #[test]
    fn should_merge_duplicate_products_into_one_line() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut state = CartState::default();

        state.add_item(new_item(a, 100));
        state.add_item(new_item(b, 50));
        state.add_item(new_item(a, 100));

        assert_eq!(state.unique_items, 2);
        assert_eq!(state.total_items, 3);
        assert_eq!(state.total_price, BigDecimal::from(250));
        assert_eq!(state.items[0].product_id, a);
        assert_eq!(state.items[0].quantity, 2);
        assert_eq!(state.items[1].product_id, b);
    }

    #[test]
    fn should_keep_snapshotted_price_on_repeat_add() {
        let a = Uuid::new_v4();
        let mut state = CartState::default();

        state.add_item(new_item(a, 100));
        state.add_item(new_item(a, 120));

        assert_eq!(state.items[0].price, BigDecimal::from(100));
        assert_eq!(state.total_price, BigDecimal::from(200));
    }

    #[test]
    fn should_generate_line_id_distinct_from_product_id() {
        let a = Uuid::new_v4();
        let mut state = CartState::default();

        state.add_item(new_item(a, 10));

        assert_ne!(state.items[0].id, a);
    }

    #[test]
    fn should_ignore_removal_of_unknown_product() {
        let mut state = CartState::default();
        state.add_item(new_item(Uuid::new_v4(), 10));
        let before = state.clone();

        let removed = state.remove_item(Uuid::new_v4());

        assert!(!removed);
        assert_eq!(state, before);
    }

    #[test]
    fn should_remove_existing_product() {
        let a = Uuid::new_v4();
        let mut state = CartState::default();
        state.add_item(new_item(a, 10));
        state.add_item(new_item(Uuid::new_v4(), 5));

        let removed = state.remove_item(a);

        assert!(removed);
        assert_eq!(state.unique_items, 1);
        assert_eq!(state.total_price, BigDecimal::from(5));
    }

    #[test]
    fn should_reject_quantity_below_one() {
        let a = Uuid::new_v4();
        let mut state = CartState::default();
        state.add_item(new_item(a, 10));
        state.add_item(new_item(a, 10));

        assert!(!state.update_quantity(a, 0));
        assert!(!state.update_quantity(a, -3));

        assert_eq!(state.items[0].quantity, 2);
        assert_eq!(state.total_items, 2);
    }

    #[test]
    fn should_reject_quantity_above_line_maximum() {
        let a = Uuid::new_v4();
        let mut state = CartState::default();
        state.add_item(new_item(a, 10));

        assert!(!state.update_quantity(a, i64::from(MAX_LINE_QUANTITY) + 1));
        assert!(!state.update_quantity(a, i64::from(u32::MAX)));
        assert!(!state.update_quantity(a, i64::from(u32::MAX) + 1));
        assert_eq!(state.items[0].quantity, 1);
    }

    #[test]
    fn should_accept_quantity_at_line_maximum() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut state = CartState::default();
        state.add_item(new_item(a, 1));
        state.add_item(new_item(b, 1));

        assert!(state.update_quantity(a, i64::from(MAX_LINE_QUANTITY)));
        assert!(state.update_quantity(b, 5));

        assert_eq!(state.total_items, MAX_LINE_QUANTITY + 5);
        assert_invariants(&state);
    }

    #[test]
    fn should_not_grow_line_past_maximum_on_add() {
        let a = Uuid::new_v4();
        let mut state = CartState::default();
        state.add_item(new_item(a, 2));
        state.update_quantity(a, i64::from(MAX_LINE_QUANTITY));

        state.add_item(new_item(a, 2));

        assert_eq!(state.items[0].quantity, MAX_LINE_QUANTITY);
        assert_invariants(&state);
    }

    #[test]
    fn should_update_quantity_and_totals() {
        let a = Uuid::new_v4();
        let mut state = CartState::default();
        state.add_item(new_item(a, 10));

        assert!(state.update_quantity(a, 4));

        assert_eq!(state.items[0].quantity, 4);
        assert_eq!(state.total_items, 4);
        assert_eq!(state.total_price, BigDecimal::from(40));
    }

    #[test]
    fn should_reset_to_defaults_on_clear() {
        let mut state = CartState::default();
        state.add_item(new_item(Uuid::new_v4(), 10));
        state.set_payment_method(PaymentMethod::Cash);

        state.clear();

        assert!(state.is_empty());
        assert_eq!(state.unique_items, 0);
        assert_eq!(state.total_items, 0);
        assert_eq!(state.total_price, BigDecimal::zero());
        assert_eq!(state.payment_method, PaymentMethod::BankTransfer);
    }

    #[test]
    fn should_toggle_visibility_without_touching_totals() {
        let mut state = CartState::default();
        state.add_item(new_item(Uuid::new_v4(), 10));

        state.open();
        assert!(state.is_open);
        assert_eq!(state.total_items, 1);

        state.close();
        assert!(!state.is_open);
        assert_eq!(state.total_items, 1);
    }

    #[test]
    fn should_repair_stale_state_when_normalized() {
        let a = Uuid::new_v4();
        let line = |quantity| CartLineItem {
            id: Uuid::new_v4(),
            product_id: a,
            name: "Widget".to_string(),
            image: None,
            category: "Tools".to_string(),
            price: BigDecimal::from(10),
            quantity,
        };
        let stale = CartState {
            items: vec![line(1), line(0), line(2)],
            unique_items: 7,
            total_items: 0,
            total_price: BigDecimal::from(999),
            payment_method: PaymentMethod::Card,
            is_open: false,
        };

        let state = stale.normalized();

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 3);
        assert_eq!(state.payment_method, PaymentMethod::Card);
        assert_invariants(&state);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, i64),
        Remove(usize),
        Update(usize, i64),
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0..5usize, 1..1000i64).prop_map(|(p, price)| Op::Add(p, price)),
            1 => (0..5usize).prop_map(Op::Remove),
            2 => (0..5usize, -2..2000i64).prop_map(|(p, q)| Op::Update(p, q)),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn should_hold_invariants_after_any_sequence(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let products: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
            let mut state = CartState::default();

            for op in ops {
                match op {
                    Op::Add(p, price) => state.add_item(new_item(products[p], price)),
                    Op::Remove(p) => {
                        state.remove_item(products[p]);
                    }
                    Op::Update(p, q) => {
                        let before = state.items.iter().find(|l| l.product_id == products[p]).map(|l| l.quantity);
                        state.update_quantity(products[p], q);
                        let after = state.items.iter().find(|l| l.product_id == products[p]).map(|l| l.quantity);
                        if q < 1 || q > i64::from(MAX_LINE_QUANTITY) {
                            prop_assert_eq!(before, after);
                        }
                    }
                    Op::Clear => state.clear(),
                }
                assert_invariants(&state);
            }
        }

        #[test]
        fn should_count_distinct_adds_as_unique_items(prices in prop::collection::vec(1..500i64, 0..20)) {
            let mut state = CartState::default();
            for price in &prices {
                state.add_item(new_item(Uuid::new_v4(), *price));
            }

            prop_assert_eq!(state.unique_items, prices.len());
            prop_assert_eq!(state.total_items as usize, prices.len());
            let expected = prices.iter().fold(BigDecimal::zero(), |acc, p| acc + BigDecimal::from(*p));
            prop_assert_eq!(state.total_price, expected);
        }
    }
}
