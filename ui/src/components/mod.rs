pub mod dialog;
pub mod drawer;
pub mod screen;
