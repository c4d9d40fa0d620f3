pub mod scan_flow;

pub use scan_flow::{Phase, ScanEffect, ScanEvent, ScanFlow, SubmitFailurePolicy};
