//! Configuration: the per-run [`Policy`] and the optional config file.

pub mod file;
pub mod policy;

pub use file::FileConfig;
pub use policy::Policy;
