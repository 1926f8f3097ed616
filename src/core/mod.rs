pub mod cleaner;
pub mod domains;
pub mod scanner;
pub mod teardown;

pub use crate::domain::model::{
    DrainPolicy, DrainTimeoutAction, FileSystem, MountTarget, Tag, OWNERSHIP_TAG_KEY,
};
pub use crate::domain::ports::{ConfigProvider, DomainCatalog, FileSystemStore};
pub use crate::utils::error::Result;
