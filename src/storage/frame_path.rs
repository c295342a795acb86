use std::path::{Path, PathBuf};

/// Path of frame `index` inside `output_dir`: `frame00000.ppm`, `frame00001.ppm`, ...
pub fn frame_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!("frame{:05}.ppm", index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_numbers_are_zero_padded() {
        let dir = Path::new("out");

        assert_eq!(frame_path(dir, 0), Path::new("out/frame00000.ppm"));
        assert_eq!(frame_path(dir, 42), Path::new("out/frame00042.ppm"));
        assert_eq!(frame_path(dir, 9999), Path::new("out/frame09999.ppm"));
    }

    #[test]
    fn test_paths_sort_in_frame_order() {
        let dir = Path::new("out");
        let mut paths: Vec<PathBuf> = [10, 2, 100, 1].iter().map(|&i| frame_path(dir, i)).collect();
        paths.sort();

        let expected: Vec<PathBuf> = [1, 2, 10, 100].iter().map(|&i| frame_path(dir, i)).collect();
        assert_eq!(paths, expected);
    }
}
