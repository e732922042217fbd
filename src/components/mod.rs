//! Shared UI components exported for routes.

pub(crate) mod digit_input;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use digit_input::DigitInput;
pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, AlertKind, Button, Spinner};
