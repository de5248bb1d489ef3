pub mod placement;

pub use placement::{
    Placement, Point, Rect, Side, Size, available_space, place_tooltip,
};
