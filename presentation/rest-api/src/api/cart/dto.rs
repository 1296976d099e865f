use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{CartLineItem, CartState};
use business::domain::cart::value_objects::PaymentMethod;
use business::domain::shared::money::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum PaymentMethodDto {
    #[oai(rename = "bank_transfer")]
    BankTransfer,
    #[oai(rename = "cash")]
    Cash,
    #[oai(rename = "card")]
    Card,
}

impl From<PaymentMethod> for PaymentMethodDto {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::BankTransfer => PaymentMethodDto::BankTransfer,
            PaymentMethod::Cash => PaymentMethodDto::Cash,
            PaymentMethod::Card => PaymentMethodDto::Card,
        }
    }
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(dto: PaymentMethodDto) -> Self {
        match dto {
            PaymentMethodDto::BankTransfer => PaymentMethod::BankTransfer,
            PaymentMethodDto::Cash => PaymentMethod::Cash,
            PaymentMethodDto::Card => PaymentMethod::Card,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PaymentMethodOption {
    pub value: PaymentMethodDto,
    pub label: String,
}

impl From<PaymentMethod> for PaymentMethodOption {
    fn from(method: PaymentMethod) -> Self {
        Self {
            value: method.into(),
            label: method.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AddCartItemRequest {
    pub product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateQuantityRequest {
    /// New quantity; values outside 1..=999 leave the cart unchanged
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SetPaymentMethodRequest {
    pub payment_method: PaymentMethodDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemResponse {
    pub id: String,
    pub product_id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub category: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<CartLineItem> for CartItemResponse {
    fn from(item: CartLineItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id.to_string(),
            price: format_amount(&item.price),
            line_total: format_amount(&item.line_total()),
            name: item.name,
            image: item.image,
            category: item.category,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub unique_items: u64,
    pub total_items: u32,
    pub total_price: String,
    pub payment_method: PaymentMethodDto,
    pub payment_method_label: String,
    pub is_open: bool,
}

impl From<CartState> for CartResponse {
    fn from(state: CartState) -> Self {
        Self {
            unique_items: state.unique_items as u64,
            total_items: state.total_items,
            total_price: format_amount(&state.total_price),
            payment_method: state.payment_method.into(),
            payment_method_label: state.payment_method.label().to_string(),
            is_open: state.is_open,
            items: state.items.into_iter().map(|item| item.into()).collect(),
        }
    }
}
