//! Built-in template catalog
//!
//! Static content written into the template tree at bootstrap, plus the
//! help texts for `pytool help`. The scaffolding commands copy from the
//! on-disk tree, not from these constants, so users can edit the
//! materialized copies to taste; this module is only the seed content.

pub mod files;
pub mod help;

pub use files::*;

use std::path::Path;

use crate::config::TEMPLATES_DIR;

/// Render the seed `pytool.ini` for a config directory.
///
/// The single entry points at the template tree populated next to it in
/// the same bootstrap pass.
#[must_use]
pub fn pytool_ini(config_dir: &Path) -> String {
    format!(
        "[pytool]\ntemplates_dir = {}\n",
        config_dir.join(TEMPLATES_DIR).display()
    )
}
