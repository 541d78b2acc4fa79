pub mod naming;
pub mod scanner;
