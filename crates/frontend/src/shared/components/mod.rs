pub mod delete_confirm_dialog;
pub mod page_header;
