use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use anyhow::Result;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

/// A decoded, display-ready preview image.
#[derive(Debug, Clone)]
pub struct PreviewFrame {
    pub image: RgbaImage,
}

impl PreviewFrame {
    pub fn size(&self) -> [usize; 2] {
        [self.image.width() as usize, self.image.height() as usize]
    }
}

/// Decodes the first frame of a video file.
pub trait FrameSource {
    /// `Ok(None)` when the decoder produced no frame.
    fn first_frame(&self, video_path: &Path) -> Result<Option<DynamicImage>>;
}

/// Extracts frames by running an `ffmpeg` executable per request.
pub struct FfmpegFrameSource {
    ffmpeg: PathBuf,
}

impl FfmpegFrameSource {
    pub fn new(ffmpeg: PathBuf) -> Self {
        Self { ffmpeg }
    }
}

impl FrameSource for FfmpegFrameSource {
    fn first_frame(&self, video_path: &Path) -> Result<Option<DynamicImage>> {
        if !video_path.exists() {
            return Err(anyhow::anyhow!("Video file does not exist: {}", video_path.display()));
        }

        // output() waits for the child, so the decoder never outlives this call
        let output = Command::new(&self.ffmpeg)
            .arg("-v").arg("error")
            .arg("-i").arg(video_path)
            .arg("-frames:v").arg("1")
            .arg("-f").arg("image2pipe")
            .arg("-vcodec").arg("png")
            .arg("pipe:1")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| anyhow::anyhow!("Failed to run {}: {}", self.ffmpeg.display(), e))?;

        if !output.status.success() {
            let error = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow::anyhow!("FFmpeg failed: {}", error.trim()));
        }

        if output.stdout.is_empty() {
            return Ok(None);
        }

        let frame = image::load_from_memory_with_format(&output.stdout, image::ImageFormat::Png)?;
        Ok(Some(frame))
    }
}

/// Largest size with the same aspect ratio that fits in `max_width`×`max_height`.
/// Images that already fit are left alone.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    // A zero bound would leave no valid size; treat it as one pixel
    let max_width = max_width.max(1);
    let max_height = max_height.max(1);
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    let scaled_width = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let scaled_height = ((height as f64 * scale).round() as u32).clamp(1, max_height);
    (scaled_width, scaled_height)
}

/// Shrinks a decoded frame to the preview bounds and converts it to RGBA.
pub fn make_preview(frame: DynamicImage, max_width: u32, max_height: u32) -> PreviewFrame {
    let (width, height) = fit_within(frame.width(), frame.height(), max_width, max_height);
    let frame = if (width, height) == (frame.width(), frame.height()) {
        frame
    } else {
        frame.resize_exact(width, height, FilterType::Triangle)
    };

    PreviewFrame {
        image: frame.to_rgba8(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_fit_within_keeps_small_images() {
        assert_eq!(fit_within(320, 240, 400, 300), (320, 240));
        assert_eq!(fit_within(400, 300, 400, 300), (400, 300));
    }

    #[test]
    fn test_fit_within_widescreen() {
        assert_eq!(fit_within(1920, 1080, 400, 300), (400, 225));
    }

    #[test]
    fn test_fit_within_portrait() {
        assert_eq!(fit_within(1080, 1920, 400, 300), (169, 300));
    }

    #[test]
    fn test_fit_within_extreme_ratio_never_hits_zero() {
        assert_eq!(fit_within(10000, 2, 400, 300), (400, 1));
    }

    #[test]
    fn test_fit_within_zero_bounds_do_not_panic() {
        assert_eq!(fit_within(800, 600, 0, 300), (1, 1));
        assert_eq!(fit_within(800, 600, 400, 0), (1, 1));
        assert_eq!(fit_within(800, 600, 0, 0), (1, 1));
    }

    #[test]
    fn test_make_preview_scales_and_converts() {
        let frame = DynamicImage::ImageRgb8(RgbImage::from_pixel(1280, 720, Rgb([200, 10, 30])));

        let preview = make_preview(frame, 400, 300);

        assert_eq!(preview.size(), [400, 225]);
        let pixel = preview.image.get_pixel(10, 10);
        assert_eq!(pixel.0, [200, 10, 30, 255]);
    }

    #[test]
    fn test_missing_video_is_an_error() {
        let source = FfmpegFrameSource::new(PathBuf::from("ffmpeg"));
        assert!(source.first_frame(Path::new("/definitely/not/here.mp4")).is_err());
    }
}
