//! UI Components
//!
//! Reusable Leptos components.

mod background_editor;
mod delete_confirm_button;
mod kind_selector;
mod options_editor;
mod toolbar;
mod widget_list;
mod widgets;

pub use background_editor::BackgroundEditor;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kind_selector::KindSelector;
pub use options_editor::{save_option, OptionsEditor};
pub use toolbar::Toolbar;
pub use widget_list::WidgetList;
pub use widgets::WidgetBody;
