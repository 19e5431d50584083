pub mod draw;
pub mod draw_list;
pub mod layout;

pub use draw_list::{DrawList, OutlineCmd, RectCmd, TextCmd};
pub use layout::{Layout, SquareLayout};
