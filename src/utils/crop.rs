//! Region cropping with recognition-friendly padding.

use crate::processors::BBox;
use image::{imageops, Rgb, RgbImage};

/// Crops a region from the image and surrounds it with a white border.
///
/// The box is clamped to the image bounds first. Recognition engines read
/// tight crops poorly, so `padding` pixels of white are added on every side.
///
/// Returns `None` when the clamped region has no area; the caller degrades
/// that region to an empty-crop outcome instead of failing the request.
pub fn crop_with_padding(image: &RgbImage, bbox: &BBox, padding: u32) -> Option<RgbImage> {
    let x1 = bbox.x1.clamp(0, image.width() as i32) as u32;
    let y1 = bbox.y1.clamp(0, image.height() as i32) as u32;
    let x2 = bbox.x2.clamp(0, image.width() as i32) as u32;
    let y2 = bbox.y2.clamp(0, image.height() as i32) as u32;
    if x2 <= x1 || y2 <= y1 {
        return None;
    }

    let crop = imageops::crop_imm(image, x1, y1, x2 - x1, y2 - y1).to_image();
    if padding == 0 {
        return Some(crop);
    }

    let mut canvas = RgbImage::from_pixel(
        crop.width() + 2 * padding,
        crop.height() + 2 * padding,
        Rgb([255, 255, 255]),
    );
    imageops::replace(&mut canvas, &crop, padding as i64, padding as i64);
    Some(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_dimensions_include_padding() {
        let image = RgbImage::from_pixel(100, 80, Rgb([10, 20, 30]));
        let crop = crop_with_padding(&image, &BBox::new(10, 10, 50, 40), 10).unwrap();
        assert_eq!(crop.width(), 40 + 20);
        assert_eq!(crop.height(), 30 + 20);
        // Border is white, interior keeps the source pixel.
        assert_eq!(crop.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(crop.get_pixel(15, 15), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_out_of_bounds_box_is_clamped() {
        let image = RgbImage::new(100, 80);
        let crop = crop_with_padding(&image, &BBox::new(-10, -10, 50, 40), 0).unwrap();
        assert_eq!(crop.width(), 50);
        assert_eq!(crop.height(), 40);
    }

    #[test]
    fn test_degenerate_box_returns_none() {
        let image = RgbImage::new(100, 80);
        assert!(crop_with_padding(&image, &BBox::new(50, 10, 50, 40), 10).is_none());
        assert!(crop_with_padding(&image, &BBox::new(200, 200, 300, 300), 10).is_none());
    }
}
