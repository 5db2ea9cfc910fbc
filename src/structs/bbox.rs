//! Bounding boxes and coordinate format conversions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building or parsing bounding boxes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundingBoxError {
    #[error("Expected 4 coordinates, got {0}")]
    CoordinateCount(usize),

    #[error("Unknown bounding box format: '{0}' (expected xyxy, xywh or cxcywh)")]
    UnknownFormat(String),
}

/// Layout of the four coordinates of a bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundingBoxFormat {
    /// Top-left and bottom-right corners
    Xyxy,
    /// Top-left corner, width and height
    Xywh,
    /// Center, width and height
    Cxcywh,
}

impl BoundingBoxFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundingBoxFormat::Xyxy => "xyxy",
            BoundingBoxFormat::Xywh => "xywh",
            BoundingBoxFormat::Cxcywh => "cxcywh",
        }
    }
}

impl FromStr for BoundingBoxFormat {
    type Err = BoundingBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xyxy" => Ok(BoundingBoxFormat::Xyxy),
            "xywh" => Ok(BoundingBoxFormat::Xywh),
            "cxcywh" => Ok(BoundingBoxFormat::Cxcywh),
            _ => Err(BoundingBoxError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for BoundingBoxFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An axis-aligned bounding box
///
/// Coordinates are interpreted according to `format`. When `normalized` is
/// true they lie in `[0, 1]` relative to the image size, otherwise they are
/// pixels.
///
/// # Example
/// ```
/// use hoi::structs::{BoundingBox, BoundingBoxFormat};
///
/// let bbox = BoundingBox::new([0.1, 0.2, 0.5, 0.6], BoundingBoxFormat::Xyxy, true);
/// let xywh = bbox.to_xywh();
/// assert_eq!(xywh.format, BoundingBoxFormat::Xywh);
/// assert!((xywh.coordinates[2] - 0.4).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub coordinates: [f64; 4],
    pub format: BoundingBoxFormat,
    pub normalized: bool,
}

impl BoundingBox {
    pub fn new(coordinates: [f64; 4], format: BoundingBoxFormat, normalized: bool) -> Self {
        Self {
            coordinates,
            format,
            normalized,
        }
    }

    /// Build a bounding box from a coordinate slice, which must hold exactly 4 values
    pub fn from_slice(
        coordinates: &[f64],
        format: BoundingBoxFormat,
        normalized: bool,
    ) -> Result<Self, BoundingBoxError> {
        let coordinates: [f64; 4] = coordinates
            .try_into()
            .map_err(|_| BoundingBoxError::CoordinateCount(coordinates.len()))?;
        Ok(Self::new(coordinates, format, normalized))
    }

    /// Scale pixel coordinates into `[0, 1]` given the image `(width, height)`
    pub fn normalize(&self, size: (u32, u32)) -> Self {
        if self.normalized {
            return *self;
        }

        let (w, h) = (f64::from(size.0), f64::from(size.1));
        let [a, b, c, d] = self.coordinates;
        Self::new([a / w, b / h, c / w, d / h], self.format, true)
    }

    /// Scale normalized coordinates back to pixels given the image `(width, height)`
    pub fn denormalize(&self, size: (u32, u32)) -> Self {
        if !self.normalized {
            return *self;
        }

        let (w, h) = (f64::from(size.0), f64::from(size.1));
        let [a, b, c, d] = self.coordinates;
        Self::new([a * w, b * h, c * w, d * h], self.format, false)
    }

    pub fn to_xyxy(&self) -> Self {
        let coordinates = match self.format {
            BoundingBoxFormat::Xyxy => return *self,
            BoundingBoxFormat::Xywh => {
                let [xmin, ymin, w, h] = self.coordinates;
                [xmin, ymin, xmin + w, ymin + h]
            }
            BoundingBoxFormat::Cxcywh => {
                let [cx, cy, w, h] = self.coordinates;
                [cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0]
            }
        };
        Self::new(coordinates, BoundingBoxFormat::Xyxy, self.normalized)
    }

    pub fn to_xywh(&self) -> Self {
        let coordinates = match self.format {
            BoundingBoxFormat::Xywh => return *self,
            BoundingBoxFormat::Xyxy => {
                let [xmin, ymin, xmax, ymax] = self.coordinates;
                [xmin, ymin, xmax - xmin, ymax - ymin]
            }
            BoundingBoxFormat::Cxcywh => {
                let [cx, cy, w, h] = self.coordinates;
                [cx - w / 2.0, cy - h / 2.0, w, h]
            }
        };
        Self::new(coordinates, BoundingBoxFormat::Xywh, self.normalized)
    }

    pub fn to_cxcywh(&self) -> Self {
        let coordinates = match self.format {
            BoundingBoxFormat::Cxcywh => return *self,
            BoundingBoxFormat::Xyxy => {
                let [xmin, ymin, xmax, ymax] = self.coordinates;
                [
                    (xmin + xmax) / 2.0,
                    (ymin + ymax) / 2.0,
                    xmax - xmin,
                    ymax - ymin,
                ]
            }
            BoundingBoxFormat::Xywh => {
                let [xmin, ymin, w, h] = self.coordinates;
                [xmin + w / 2.0, ymin + h / 2.0, w, h]
            }
        };
        Self::new(coordinates, BoundingBoxFormat::Cxcywh, self.normalized)
    }

    /// Convert to the requested coordinate format
    pub fn convert(&self, format: BoundingBoxFormat) -> Self {
        match format {
            BoundingBoxFormat::Xyxy => self.to_xyxy(),
            BoundingBoxFormat::Xywh => self.to_xywh(),
            BoundingBoxFormat::Cxcywh => self.to_cxcywh(),
        }
    }
}
