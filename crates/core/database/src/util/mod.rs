pub mod files;
pub mod funcs;
pub mod reference;
