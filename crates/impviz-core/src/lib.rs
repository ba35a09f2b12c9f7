pub mod modules;

pub use impviz_error::{Error, ErrorKind, Result};
pub use modules::{INIT_STEM, ModuleIndex, index_modules};
