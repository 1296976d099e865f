pub mod cart;
pub mod category;
pub mod checkout;
pub mod error;
pub mod health;
pub mod product;
pub mod session;
pub mod tags;
