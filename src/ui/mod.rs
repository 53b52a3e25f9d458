//! Terminal widgets for the login and home screens.

pub mod widgets;

pub use widgets::{HomeWidget, LoginForm, LoginFormWidget};
