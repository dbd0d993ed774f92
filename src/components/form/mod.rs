//! Form controls shared by the hide and extract panels.

mod dropzone;
mod kind_picker;
mod password;

pub use dropzone::DropZone;
pub use kind_picker::KindPicker;
pub use password::PasswordField;

stylance::import_crate_style!(pub css, "src/components/form/form.module.css");

/// Join a base class with a modifier when `on` holds.
pub(crate) fn modifier(base: &str, extra: &str, on: bool) -> String {
    if on {
        format!("{} {}", base, extra)
    } else {
        base.to_string()
    }
}
