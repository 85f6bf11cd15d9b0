pub mod async_callback;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod theme;
