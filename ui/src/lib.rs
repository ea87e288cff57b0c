//! Shared UI crate for AutoML: result payload charting, the upload form, and
//! the views both platform shells route to.

pub mod core;
pub mod i18n;
pub mod results;
pub mod tasks;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod upload_form;
    pub use upload_form::{FormStatus, UploadForm};
}
