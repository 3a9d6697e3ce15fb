pub mod console;
pub mod login;
