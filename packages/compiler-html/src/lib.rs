//! # OpenBuild HTML Exporter
//!
//! Turns an element tree plus page settings into one self-contained HTML
//! file. Element styles are inlined from the desktop bucket; page-level
//! background and tracking snippets come from [`PageSettings`].
//!
//! [`PageSettings`]: openbuild_document::PageSettings

mod compiler;
mod tracking;


pub use compiler::{
    element_html, export_file_name, export_html, ExportOptions, DEFAULT_FILE_NAME, DEFAULT_TITLE,
};
pub use tracking::sanitize_id;
