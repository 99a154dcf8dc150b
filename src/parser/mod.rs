// Object-literal notation parser module

pub mod callback;
pub mod lexer;
pub mod literal;

// Public API re-exports
pub use callback::is_callback;
pub use literal::{literal_value, parse_literal};
