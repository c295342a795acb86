pub mod frame_path;
pub mod read_colour_table;
