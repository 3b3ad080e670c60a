mod draw_target;
mod text_draw_target;
mod render_report;
mod shape_renderer;

pub use draw_target::*;
pub use text_draw_target::*;
pub use render_report::*;
pub use shape_renderer::*;
