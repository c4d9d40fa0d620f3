// Utils compartidos

pub mod scanner_ffi;

pub use scanner_ffi::*;
