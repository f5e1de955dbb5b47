#[macro_use]
mod util;

mod lexer;
mod converter;
