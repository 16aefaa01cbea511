//! Pages
//!
//! Top-level views selected by route.

mod forms_list;
mod not_available;

pub use forms_list::FormsList;
pub use not_available::NotAvailable;
