mod renderer;

pub use renderer::TreeRenderer;
