//! The transform seam between decoded images and the training pipeline.

use crate::common::*;

/// A single-argument mapping from a decoded image to the representation
/// the training pipeline consumes.
///
/// The dataset treats implementations as opaque black boxes: the output is
/// returned verbatim and any error is forwarded to the caller unchanged.
pub trait Transform {
    fn apply(&self, image: Tensor) -> anyhow::Result<Tensor>;
}

impl<F> Transform for F
where
    F: Fn(Tensor) -> anyhow::Result<Tensor>,
{
    fn apply(&self, image: Tensor) -> anyhow::Result<Tensor> {
        self(image)
    }
}

/// Convert u8 pixels to float values in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct ToFloat;

impl Transform for ToFloat {
    fn apply(&self, image: Tensor) -> anyhow::Result<Tensor> {
        Ok(image.to_kind(Kind::Float).g_div_scalar(255.0))
    }
}

/// Resize a CHW u8 image to an exact height and width.
#[derive(Debug, Clone, Copy)]
pub struct Resize {
    pub height: i64,
    pub width: i64,
}

impl Transform for Resize {
    fn apply(&self, image: Tensor) -> anyhow::Result<Tensor> {
        let resized = vision::image::resize(&image, self.width, self.height)?;
        Ok(resized)
    }
}

/// Standardize each channel with the given mean and standard deviation.
#[derive(Debug, Clone)]
pub struct Normalize {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl Transform for Normalize {
    fn apply(&self, image: Tensor) -> anyhow::Result<Tensor> {
        let (channels, _h, _w) = image.size3()?;
        ensure!(
            self.mean.len() as i64 == channels && self.std.len() as i64 == channels,
            "expected {} means and stds, found {} and {}",
            channels,
            self.mean.len(),
            self.std.len()
        );

        let mean = Tensor::of_slice(&self.mean)
            .view([channels, 1, 1])
            .to_kind(image.kind());
        let std = Tensor::of_slice(&self.std)
            .view([channels, 1, 1])
            .to_kind(image.kind());
        Ok((image - mean) / std)
    }
}

/// Apply a sequence of transforms in order.
pub struct Compose {
    pub transforms: Vec<Box<dyn Transform + Send + Sync>>,
}

impl Transform for Compose {
    fn apply(&self, image: Tensor) -> anyhow::Result<Tensor> {
        self.transforms
            .iter()
            .try_fold(image, |image, transform| transform.apply(image))
    }
}

impl Debug for Compose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compose")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(value: u8, height: i64, width: i64) -> Tensor {
        Tensor::of_slice(&vec![value; (3 * height * width) as usize]).view([3, height, width])
    }

    #[test]
    fn to_float_scales_into_unit_range() {
        let output = ToFloat.apply(gray_image(255, 2, 2)).unwrap();
        assert_eq!(output.kind(), Kind::Float);
        let values = Vec::<f32>::from(&output);
        assert!(values.iter().all(|&value| (value - 1.0).abs() < 1e-6));
    }

    #[test]
    fn resize_changes_spatial_dims_only() {
        let output = Resize {
            height: 2,
            width: 3,
        }
        .apply(gray_image(7, 4, 4))
        .unwrap();
        assert_eq!(output.size(), [3, 2, 3]);
    }

    #[test]
    fn normalize_standardizes_channels() {
        let image = gray_image(128, 1, 1).to_kind(Kind::Float).g_div_scalar(255.0);
        let output = Normalize {
            mean: vec![128.0 / 255.0; 3],
            std: vec![0.5; 3],
        }
        .apply(image)
        .unwrap();
        let values = Vec::<f32>::from(&output);
        assert!(values.iter().all(|&value| value.abs() < 1e-6));
    }

    #[test]
    fn normalize_rejects_channel_mismatch() {
        let image = gray_image(0, 1, 1);
        let result = Normalize {
            mean: vec![0.0; 2],
            std: vec![1.0; 2],
        }
        .apply(image);
        assert!(result.is_err());
    }

    #[test]
    fn compose_applies_in_order() {
        let compose = Compose {
            transforms: vec![
                Box::new(Resize {
                    height: 2,
                    width: 2,
                }),
                Box::new(ToFloat),
            ],
        };
        let output = compose.apply(gray_image(255, 4, 4)).unwrap();
        assert_eq!(output.size(), [3, 2, 2]);
        assert_eq!(output.kind(), Kind::Float);
    }
}
