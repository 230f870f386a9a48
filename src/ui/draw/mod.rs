//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: header, footer, mode tabs and the toast overlay
//! - `modals`: the server URL dialog
//! - `panels`: the analysis form and the results panel
//! - `styling`: color schemes and style constants

mod components;
mod modals;
mod panels;
mod styling;

pub use components::{render_footer, render_header, render_mode_panel, render_toast};
pub use modals::render_url_input_modal;
pub use panels::{render_form_panel, render_results_panel};
pub use styling::SCROLL_LINES_PER_ACTION;
