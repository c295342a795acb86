pub mod grid_to_complex_coords;
pub mod scale_for_frame;
