use serde::{Deserialize, Deserializer, Serialize};

/// Packing dimensionality. Only [`Plane`](PackMode::Plane) has a split
/// algorithm; the other modes are recognized so that configuring them
/// fails with a clear error instead of producing a bogus layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackMode {
    /// Packing along a line (1D).
    Line,
    /// Packing on a flat rectangle (2D). The only supported mode.
    Plane,
    /// Packing into a volume (3D).
    Volume,
}

impl std::fmt::Display for PackMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackMode::Line => write!(f, "line"),
            PackMode::Plane => write!(f, "plane"),
            PackMode::Volume => write!(f, "volume"),
        }
    }
}

/// A width/height extent. Used for items and for free spaces alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub width: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub height: u32,
}

impl Rect {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Area of the rectangle. Depth is not part of the type, so footprints
    /// stay two-dimensional no matter how an item was added.
    pub fn footprint(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn fits_in(&self, other: &Rect) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An item the engine has placed: final extent (already swapped if the
/// rotation fallback fired), the location copied from the chosen space,
/// and the depth echoed back when one was supplied at add time.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PackedItem {
    pub rect: Rect,
    pub x: u32,
    pub y: u32,
    pub rotated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

/// Accepts JSON numbers that arrive as floats (e.g. `640.0` from JS
/// clients) as long as they are non-negative integers in u32 range.
pub fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value < 0.0 || value > u32::MAX as f64 || value.fract() != 0.0 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative integer, got {value}"
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint() {
        assert_eq!(Rect::new(6, 4).footprint(), 24);
        assert_eq!(Rect::new(0, 5).footprint(), 0);
        // u32 sides multiply without overflowing the u64 result
        assert_eq!(
            Rect::new(u32::MAX, u32::MAX).footprint(),
            u32::MAX as u64 * u32::MAX as u64
        );
    }

    #[test]
    fn test_rotated_swaps_sides() {
        let r = Rect::new(6, 4);
        assert_eq!(r.rotated(), Rect::new(4, 6));
        assert_eq!(r.rotated().rotated(), r);
        assert_eq!(r.rotated().footprint(), r.footprint());
    }

    #[test]
    fn test_fits_in() {
        let space = Rect::new(10, 8);
        assert!(Rect::new(10, 8).fits_in(&space));
        assert!(Rect::new(1, 1).fits_in(&space));
        assert!(!Rect::new(11, 8).fits_in(&space));
        assert!(!Rect::new(10, 9).fits_in(&space));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(6, 4).to_string(), "6x4");
        assert_eq!(PackMode::Volume.to_string(), "volume");
    }

    #[test]
    fn test_deserialize_accepts_whole_floats() {
        let r: Rect = serde_json::from_str(r#"{"width":640.0,"height":480}"#).unwrap();
        assert_eq!(r, Rect::new(640, 480));
    }

    #[test]
    fn test_deserialize_rejects_fractional() {
        let r: Result<Rect, _> = serde_json::from_str(r#"{"width":6.5,"height":4}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let r: Result<Rect, _> = serde_json::from_str(r#"{"width":-6,"height":4}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_packed_item_serializes_depth_only_when_present() {
        let flat = PackedItem {
            rect: Rect::new(6, 4),
            x: 0,
            y: 0,
            rotated: false,
            depth: None,
        };
        let json = serde_json::to_value(flat).unwrap();
        assert!(json.get("depth").is_none());

        let deep = PackedItem { depth: Some(2), ..flat };
        let json = serde_json::to_value(deep).unwrap();
        assert_eq!(json["depth"], 2);
    }
}
