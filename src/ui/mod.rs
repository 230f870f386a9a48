//! Terminal UI: drawing and input handling

pub mod draw;
pub mod events;

pub use draw::{
    render_footer, render_form_panel, render_header, render_mode_panel, render_results_panel,
    render_toast, render_url_input_modal,
};
pub use events::{apply, apply_many, read_state, EventHandler};
