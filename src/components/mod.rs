//! UI Components
//!
//! The shopping list and its presentation collaborators.

mod category_filter;
mod delete_confirm_button;
mod item_form;
mod item_row;
mod shopping_list;

pub use category_filter::CategoryFilter;
pub use delete_confirm_button::DeleteConfirmButton;
pub use item_form::ItemForm;
pub use item_row::ItemRow;
pub use shopping_list::ShoppingList;
