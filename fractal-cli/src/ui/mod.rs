pub mod log_panel;
pub mod watch_view;
