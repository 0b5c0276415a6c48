//! Browser glue for the shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module binds one `pitstop` seam (store, appearance, history, toast,
//! offline worker) to web APIs, keeping components free of web-sys calls.

pub mod config;
pub mod dark_mode;
pub mod hash_route;
pub mod service_worker;
pub mod storage;
pub mod toast;
