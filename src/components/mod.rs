//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod record_editor;
mod record_row;
mod record_table;
mod toolbar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use record_editor::RecordEditor;
pub use record_row::RecordRow;
pub use record_table::RecordTable;
pub use toolbar::Toolbar;
