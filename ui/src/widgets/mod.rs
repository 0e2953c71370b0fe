mod code_generator;

pub use code_generator::code_generator;
