pub mod use_auth;
pub mod use_debounced_input;
pub mod use_entity_list;
pub mod use_sale;

pub use use_auth::{use_auth, AuthSession, UseAuthHandle};
pub use use_debounced_input::{use_debounced_input, UseDebouncedInputHandle};
pub use use_entity_list::{filter_records, use_entity_list, UseEntityListHandle};
pub use use_sale::{use_sale, UseSaleHandle};
