pub mod config;
pub mod logging;

pub mod archive;
pub mod checksum;
pub mod engine;
pub mod naming;
pub mod policy;
pub mod upload;

pub use archive::{ArchivePackager, ZipPackager};
pub use engine::{ArchiveEntry, RenameEngine, RenameSession, RenamedName};
pub use policy::{RawPolicy, RenamePolicy};
pub use upload::UploadedFile;
