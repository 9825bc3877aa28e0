use std::path::{Path, PathBuf};

use argh::FromArgs;

use depthcloud::calib::QMatrix;
use depthcloud::convert::convert_depth_file;
use depthcloud::frame::{DEPTH_HEIGHT, DEPTH_WIDTH};

/// Extension written on every produced point cloud file.
const OUTPUT_EXTENSION: &str = "ply";

#[derive(FromArgs)]
/// Convert a directory of raw stereo depth frames into PLY point clouds
struct Args {
    /// path to the disparity-to-depth calibration file (16 f32 values)
    #[argh(option)]
    calibration: PathBuf,

    /// directory holding the raw depth frame files
    #[argh(option)]
    input_dir: PathBuf,

    /// directory to write the point cloud files into
    #[argh(option)]
    output_dir: PathBuf,

    /// extension of the depth frame files (default: bin)
    #[argh(option, default = "String::from(\"bin\")")]
    extension: String,

    /// frame width in pixels (default: 640)
    #[argh(option, default = "DEPTH_WIDTH")]
    width: usize,

    /// frame height in pixels (default: 400)
    #[argh(option, default = "DEPTH_HEIGHT")]
    height: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let q = QMatrix::from_file(&args.calibration)?;
    std::fs::create_dir_all(&args.output_dir)?;

    let frames = collect_frame_files(&args.input_dir, &args.extension)?;
    log::info!(
        "Found {} .{} frames in {}",
        frames.len(),
        args.extension,
        args.input_dir.display()
    );

    let mut converted = 0usize;
    let mut failed = 0usize;
    for input in &frames {
        let output = output_path(&args.output_dir, input);
        match convert_depth_file(&q, input, &output, args.width, args.height) {
            Ok(num_points) => {
                log::info!(
                    "{} -> {} ({} points)",
                    input.display(),
                    output.display(),
                    num_points
                );
                converted += 1;
            }
            Err(e) => {
                log::error!("Failed to convert {}: {}", input.display(), e);
                failed += 1;
            }
        }
    }

    log::info!("Converted {converted} frames, {failed} failed");
    Ok(())
}

/// Collect the frame files with the given extension, sorted by name so
/// reruns process the batch in the same order.
fn collect_frame_files(input_dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut frames = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            frames.push(path);
        }
    }
    frames.sort();
    Ok(frames)
}

fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    output_dir.join(stem).with_extension(OUTPUT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_collect_frame_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.bin"), b"").unwrap();
        std::fs::write(dir.path().join("a.bin"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
        std::fs::write(dir.path().join("Q.dat"), b"").unwrap();
        std::fs::create_dir(dir.path().join("sub.bin")).unwrap();

        let frames = collect_frame_files(dir.path(), "bin").unwrap();
        assert_eq!(
            frames,
            vec![dir.path().join("a.bin"), dir.path().join("b.bin")]
        );
    }

    #[test]
    fn test_output_path_swaps_extension() {
        let output = output_path(Path::new("/out"), Path::new("/in/frame012.bin"));
        assert_eq!(output, Path::new("/out/frame012.ply"));
    }
}
