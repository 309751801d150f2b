use crate::form::{FormData, MappingForm};

/// Everything the console page owns for one session.
///
/// Workflows receive `&mut PageState` and are the only writers of the two
/// display messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub form: FormData,
    pub mapping: MappingForm,
    pub mapping_message: Option<String>,
    pub confirmation_message: Option<String>,
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the store form. Mapping inputs and messages are kept.
    pub fn reset_form(&mut self) {
        self.form.reset();
    }
}
