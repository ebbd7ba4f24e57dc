pub mod form_field;
pub mod history_table;
pub mod loading_overlay;
pub mod navbar;
pub mod particles;
pub mod result_panel;
pub mod status_badge;
pub mod toast;
pub mod transaction_form;
pub mod transaction_modal;
