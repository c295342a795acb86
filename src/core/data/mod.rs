pub mod colour;
pub mod colour_table;
pub mod complex;
pub mod frame_spec;
pub mod iteration_grid;
pub mod movie;
pub mod params_error;
pub mod pixel_buffer;
pub mod point;
