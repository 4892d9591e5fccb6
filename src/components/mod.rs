//! View components shared by the routed pages.

pub mod chat_panel;
pub mod company_form;
pub mod mode_toggle;
pub mod top_bar;
