// ABOUTME: Errors raised while composing an arrangement.
// ABOUTME: All are detected up front; a failed composition returns nothing partial.

use plotgrid_core::PanelId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("No panels supplied")]
    EmptyInput,

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid fraction {value}: sizes must be positive and finite")]
    NegativeFraction { value: f32 },

    #[error("Panel id '{0}' is used more than once")]
    DuplicatePanel(PanelId),
}

impl LayoutError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LayoutError::InvalidLayout(reason.into())
    }
}
