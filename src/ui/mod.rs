pub mod dialogs;
pub mod form_field;
pub mod keybindings;
pub mod terminal_guard;
pub mod wizard;

pub use wizard::WizardScreen;
