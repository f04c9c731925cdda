pub mod confirm_dialog;
pub mod error_message;
pub mod loading_spinner;
pub mod review_card;
pub mod review_form;
pub mod review_list;
pub mod review_table;
pub mod sort_toolbar;
