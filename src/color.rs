use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{CellValue, Dataset};

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Blues gradient for table shading
// ---------------------------------------------------------------------------

/// Light-to-dark blue for `t` in `[0, 1]`; out-of-range input is clamped.
pub fn blues(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    hsl_to_color32(Hsl::new(210.0, 0.35 + 0.45 * t, 0.96 - 0.61 * t))
}

/// Text colour that stays readable on top of `blues(t)`.
pub fn text_on_blues(t: f32) -> Color32 {
    if t > 0.55 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

/// Per-column min/max over the rows of a view, used to shade numeric cells.
#[derive(Debug, Clone)]
pub struct GradientScale {
    /// `None` for columns without any numeric cell.
    bounds: Vec<Option<(f64, f64)>>,
}

impl GradientScale {
    pub fn new(dataset: &Dataset, rows: &[usize]) -> Self {
        let mut bounds: Vec<Option<(f64, f64)>> = vec![None; dataset.columns.len()];
        for &i in rows {
            for (col, cell) in dataset.rows[i].cells.iter().enumerate() {
                let Some(v) = CellValue::infer(cell.trim()).as_f64() else {
                    continue;
                };
                bounds[col] = Some(match bounds[col] {
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                    None => (v, v),
                });
            }
        }
        GradientScale { bounds }
    }

    /// Position of `cell` within its column's range, `None` for text cells.
    pub fn position(&self, col: usize, cell: &str) -> Option<f32> {
        let v = CellValue::infer(cell.trim()).as_f64()?;
        let (lo, hi) = (*self.bounds.get(col)?)?;
        let range = hi - lo;
        if range.abs() < f64::EPSILON {
            return Some(0.0);
        }
        Some(((v - lo) / range) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(3);
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn blues_darken_with_t() {
        let light = blues(0.0);
        let dark = blues(1.0);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(light) > sum(dark));
        assert_eq!(blues(-3.0), light);
    }

    #[test]
    fn scale_positions_numeric_cells_only() {
        let ds = Dataset::from_csv_reader(
            "t",
            "age,job,balance\n20,admin.,-100\n40,admin.,100\n".as_bytes(),
        )
        .unwrap();
        let scale = GradientScale::new(&ds, &[0, 1]);
        assert_eq!(scale.position(0, "20"), Some(0.0));
        assert_eq!(scale.position(0, "30"), Some(0.5));
        assert_eq!(scale.position(2, "100"), Some(1.0));
        assert_eq!(scale.position(1, "admin."), None);
    }
}
