pub mod form;
pub mod nav;
pub mod typewriter;
pub mod validators;
pub mod viewport;

pub use self::form::FormInput;
pub use self::nav::NavState;
pub use self::typewriter::Typewriter;
pub use self::viewport::{SectionMetrics, ViewportSnapshot};
