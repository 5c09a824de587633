pub mod apps;
pub mod catalog;
pub mod components;
pub mod content;
mod effect_executor;
pub mod frame;
pub mod geometry;
pub mod host;
pub mod icons;
pub mod model;
pub mod reducer;
pub mod registry;
mod runtime_context;
pub mod surface;

pub use catalog::{AppCatalog, AppDescriptor, CatalogError, WindowManagerConfig};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use frame::{FrameState, WindowFrame};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use registry::{InvariantViolation, OpenOutcome, WindowRegistry};
