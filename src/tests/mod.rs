//! Unit tests for the lexer, parser, and AST surface.

mod parser_extension_tests;
mod parser_schema_tests;
mod parser_type_tests;
mod parser_value_tests;
mod utils;
