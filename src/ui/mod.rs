// src/ui/mod.rs
pub mod case_form;
pub mod dialog;
pub mod markup;
pub mod results;

/// User intent raised by a view, handled by the app after drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Submit,
    Cancel,
    NewAnalysis,
    TryAgain,
    Retry,
    SaveReport,
}
