//! HYU core: pure link sanitization and UI state machine.
mod effect;
mod msg;
mod sanitize;
mod state;
mod theme;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use sanitize::{sanitize, RejectReason, INSTAGRAM_DOMAIN};
pub use state::{AppState, Toast, ToastKind, ToastSeq};
pub use theme::Theme;
pub use update::update;
pub use view_model::AppViewModel;
