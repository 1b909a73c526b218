pub mod dock;
pub mod menu_bar;
pub mod workspace_canvas;
