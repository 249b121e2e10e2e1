pub mod canvas;
pub mod disk;
pub mod renderer;
pub mod stream;
