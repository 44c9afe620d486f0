pub mod cache;
pub mod registry;
pub mod traits;

pub use cache::DependencyCache;
pub use registry::{InstallerFactory, InstallerRegistry};
pub use traits::Installer;
