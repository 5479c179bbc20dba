pub mod core;
pub mod page;
pub mod runtime;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod exports;

pub use crate::core::form;
pub use crate::core::form::FormInput;
pub use crate::core::viewport;
pub use crate::core::viewport::ViewportSnapshot;

pub use crate::page::PageBindings;
pub use crate::page::PageLayout;
pub use crate::page::state::PageState;

pub use crate::runtime::event::PageEvent;
pub use crate::runtime::runner::Runtime;

/// Address copied by the `copyEmail()` page entry point and shown in the
/// console banner.
pub const CONTACT_EMAIL: &str = "yonelgalvisnetworket@gmail.com";
