pub mod category;
pub mod client;
pub mod product;
pub mod record;
pub mod sale;
pub mod supplier;
pub mod user;

pub use category::{Category, CategoryPayload};
pub use client::{Client, ClientPayload};
pub use product::{Product, ProductPayload};
pub use record::ListRecord;
pub use sale::{
    CreateSaleDetailPayload, CreateSalePayload, CreateSaleResponse, SaleCart, SaleCartItem,
};
pub use supplier::{Supplier, SupplierPayload};
pub use user::UserProfile;
