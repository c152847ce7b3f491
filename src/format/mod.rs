//! Certificate and key transcription into C string literals.
//!
//! Input files are treated as opaque text: every line becomes `"<line>\n"`
//! so the output can be pasted into a C source file as a concatenated
//! string constant.

mod formatter;
mod literal;

pub use formatter::{
    classify, format_file, ArgKind, Formatter, Summary, ACCEPTED_EXTENSIONS, UNSUPPORTED_WARNING,
};
pub use literal::{format_text, quote_line, split_lines};
