//! Small helpers shared by the library and the command line.

pub mod files;
pub mod natural;

pub use files::collect_documents;
pub use natural::natural_cmp;
