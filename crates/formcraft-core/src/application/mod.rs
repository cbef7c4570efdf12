//! Application layer
//!
//! Editor and preview session state that a builder UI drives. Each object
//! has a single owner; nothing here is shared or global.

pub mod builder;
pub mod editor;
pub mod preview;
pub mod themes;

pub use builder::FormBuilder;
pub use editor::{EditorMode, FormEditor};
pub use preview::{PreviewSession, PreviewSummary, SubmitOutcome};
pub use themes::ThemeLibrary;
