pub mod text_view;

pub use text_view::render_result;
