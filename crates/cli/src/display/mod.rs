pub mod formatter;

pub use formatter::write_sequence;
