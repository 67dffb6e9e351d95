//! UI components for the Prontu desktop shell.

mod attachment_field;
mod record_form;
mod settings_form;

pub use record_form::RecordForm;
pub use settings_form::SettingsForm;
