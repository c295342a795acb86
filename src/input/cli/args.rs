use std::path::PathBuf;

use clap::Parser;

use crate::core::actions::generate_movie::movie_params::MovieParams;
use crate::core::data::complex::Complex;
use crate::core::data::params_error::ParamsError;

/// Renders a zoom into the Mandelbrot set as a numbered sequence of PPM frames.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "mandel_movie", version, allow_negative_numbers = true)]
pub struct MovieArgs {
    /// Magnitude at which an orbit counts as escaped
    pub threshold: f64,
    /// Iteration budget per point
    pub max_iterations: u64,
    /// Real part of the zoom centre
    pub center_real: f64,
    /// Imaginary part of the zoom centre
    pub center_imaginary: f64,
    /// Half-width of the first frame
    pub initial_scale: f64,
    /// Half-width of the last frame
    pub final_scale: f64,
    /// Number of frames, 1 to 10000
    pub frame_count: u32,
    /// Pixels from the centre to an edge; frames are 2 * resolution + 1 pixels wide
    pub resolution: u64,
    /// Existing directory that receives frame00000.ppm, frame00001.ppm, ...
    pub output_folder: PathBuf,
    /// Colour table: a count followed by that many "r g b" triples
    pub colour_file: PathBuf,
    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl MovieArgs {
    pub fn movie_params(&self) -> Result<MovieParams, ParamsError> {
        MovieParams::new(
            self.threshold,
            self.max_iterations,
            Complex::new(self.center_real, self.center_imaginary),
            self.initial_scale,
            self.final_scale,
            self.frame_count,
            self.resolution,
        )
    }
}
