pub mod api;
pub mod context;
pub mod error;
pub mod guard;
pub mod navigator;
pub mod profile;
pub mod roles;
pub mod service;
pub mod session;
pub mod storage;
