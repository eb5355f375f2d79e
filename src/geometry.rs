use glam::Vec3;

pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const GREEN: Vec3 = Vec3::new(0.2, 0.8, 0.2);

/// Two triangles per bar, no index buffer.
pub const VERTICES_PER_BAR: usize = 6;

/// Build the triangle list for one bar per value.
///
/// Bars span [-1, 1] horizontally with a gap of 10% of the bar width between
/// neighbors, and rise from the y = -1 baseline to `-0.9 + value * 1.8`, so
/// values in [0, 1] map to bar tops in [-0.9, 0.9]. Vertex order per bar is
/// BL, TL, BR, BR, TL, TR.
pub fn bar_vertices(values: &[f32]) -> Vec<Vec3> {
    let width = 2.0 / values.len() as f32;
    let space = width * 0.1;

    let mut vertices = Vec::with_capacity(values.len() * VERTICES_PER_BAR);
    for (i, &value) in values.iter().enumerate() {
        let y = -0.9 + value * 1.8;
        let x1 = -1.0 + width * i as f32;
        let x2 = -1.0 + width * (i + 1) as f32 - space;

        vertices.extend_from_slice(&[
            Vec3::new(x1, -1.0, 0.0),
            Vec3::new(x1, y, 0.0),
            Vec3::new(x2, -1.0, 0.0),
            Vec3::new(x2, -1.0, 0.0),
            Vec3::new(x1, y, 0.0),
            Vec3::new(x2, y, 0.0),
        ]);
    }
    vertices
}

/// One RGB triple per vertex: green for the pair at `pair` and `pair + 1`,
/// white for everything else.
///
/// Bar membership is checked by equality, never by indexing, so a `pair` at
/// or past `size` simply leaves every bar white.
pub fn highlight_colors(size: usize, pair: usize) -> Vec<Vec3> {
    let mut colors = Vec::with_capacity(size * VERTICES_PER_BAR);
    for i in 0..size {
        let color = if i == pair || i == pair + 1 {
            GREEN
        } else {
            WHITE
        };
        colors.extend(std::iter::repeat(color).take(VERTICES_PER_BAR));
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_vertices_per_bar() {
        let values = [0.3, 0.7, 0.5, 0.1];
        let vertices = bar_vertices(&values);
        assert_eq!(vertices.len(), values.len() * VERTICES_PER_BAR);
    }

    #[test]
    fn bar_tops_follow_values() {
        let values = [0.0, 0.5, 1.0];
        let vertices = bar_vertices(&values);
        for (i, &value) in values.iter().enumerate() {
            let expected = -0.9 + value * 1.8;
            let bar = &vertices[i * VERTICES_PER_BAR..(i + 1) * VERTICES_PER_BAR];
            // TL, TL again, TR carry the top edge
            for top in [bar[1], bar[4], bar[5]] {
                assert!((top.y - expected).abs() < 1e-6);
            }
            // BL, BR, BR sit on the baseline
            for bottom in [bar[0], bar[2], bar[3]] {
                assert_eq!(bottom.y, -1.0);
            }
        }
    }

    #[test]
    fn bars_span_minus_one_to_one_with_gap() {
        let values = [0.4, 0.4];
        let vertices = bar_vertices(&values);
        let width = 2.0 / values.len() as f32;
        let space = width * 0.1;

        // First bar starts at the left edge
        assert_eq!(vertices[0].x, -1.0);
        // Its right edge leaves the gap before the next bar
        assert!((vertices[2].x - (-1.0 + width - space)).abs() < 1e-6);
        // Second bar starts exactly one bar width in
        assert!((vertices[VERTICES_PER_BAR].x - (-1.0 + width)).abs() < 1e-6);
    }

    #[test]
    fn vertices_stay_in_plane() {
        let vertices = bar_vertices(&[0.2, 0.9, 0.6]);
        assert!(vertices.iter().all(|v| v.z == 0.0));
    }

    #[test]
    fn highlight_marks_exactly_one_pair() {
        let colors = highlight_colors(5, 2);
        assert_eq!(colors.len(), 5 * VERTICES_PER_BAR);
        let green = colors.iter().filter(|&&c| c == GREEN).count();
        assert_eq!(green, 2 * VERTICES_PER_BAR);
        // Bars 2 and 3 carry the highlight
        assert!(colors[2 * VERTICES_PER_BAR..4 * VERTICES_PER_BAR]
            .iter()
            .all(|&c| c == GREEN));
    }

    #[test]
    fn out_of_range_highlight_is_all_white() {
        let colors = highlight_colors(4, 4);
        assert!(colors.iter().all(|&c| c == WHITE));
    }

    #[test]
    fn last_bar_highlight_has_no_partner() {
        // pair + 1 == size: only the last bar turns green, nothing panics
        let colors = highlight_colors(4, 3);
        let green = colors.iter().filter(|&&c| c == GREEN).count();
        assert_eq!(green, VERTICES_PER_BAR);
    }
}
