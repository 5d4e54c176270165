use crate::types::{PackedItem, Rect};

const MAX_COLS: f64 = 80.0;
const MAX_ROWS: f64 = 40.0;

pub fn render_layout(container: Rect, items: &[PackedItem]) -> String {
    let scale = f64::min(
        MAX_COLS / container.width as f64,
        MAX_ROWS / container.height as f64,
    );
    let cols = (container.width as f64 * scale).round() as usize;
    let rows = (container.height as f64 * scale).round() as usize;

    if cols == 0 || rows == 0 {
        return String::new();
    }

    let mut canvas = Canvas::new(cols, rows);

    // Container border first, so item edges can promote it to '+'.
    canvas.frame(0, 0, cols, rows);

    for item in items {
        let x = (item.x as f64 * scale).round() as usize;
        let y = (item.y as f64 * scale).round() as usize;
        let w = (item.rect.width as f64 * scale).round() as usize;
        let h = (item.rect.height as f64 * scale).round() as usize;

        if w == 0 || h == 0 {
            continue;
        }

        canvas.frame(x, y, w, h);
        canvas.label(
            x,
            y,
            w,
            h,
            &format!("{}x{}", item.rect.width, item.rect.height),
        );
    }

    canvas.into_string()
}

struct Canvas {
    grid: Vec<Vec<char>>,
}

impl Canvas {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            grid: vec![vec![' '; cols + 1]; rows + 1],
        }
    }

    fn put_horizontal(&mut self, x: usize, y: usize) {
        if y >= self.grid.len() || x >= self.grid[0].len() {
            return;
        }
        let cell = &mut self.grid[y][x];
        *cell = if *cell == '|' || *cell == '+' { '+' } else { '-' };
    }

    fn put_vertical(&mut self, x: usize, y: usize) {
        if y >= self.grid.len() || x >= self.grid[0].len() {
            return;
        }
        let cell = &mut self.grid[y][x];
        *cell = if *cell == '-' || *cell == '+' { '+' } else { '|' };
    }

    fn frame(&mut self, x: usize, y: usize, w: usize, h: usize) {
        for i in x..=x + w {
            self.put_horizontal(i, y);
            self.put_horizontal(i, y + h);
        }
        for j in y..=y + h {
            self.put_vertical(x, j);
            self.put_vertical(x + w, j);
        }
        for &cx in &[x, x + w] {
            for &cy in &[y, y + h] {
                if cy < self.grid.len() && cx < self.grid[0].len() {
                    self.grid[cy][cx] = '+';
                }
            }
        }
    }

    /// Writes `text` centered in the frame interior; skipped when the
    /// frame is too small to hold any of it.
    fn label(&mut self, x: usize, y: usize, w: usize, h: usize, text: &str) {
        if w <= 2 || h == 0 {
            return;
        }
        let chars: Vec<char> = text.chars().collect();
        let cx = x + w / 2;
        let cy = y + h / 2;
        let start = cx.saturating_sub(chars.len() / 2);

        for (i, &ch) in chars.iter().enumerate() {
            let col = start + i;
            if col > x && col < x + w && cy > y && cy < y + h {
                self.grid[cy][col] = ch;
            }
        }
    }

    fn into_string(self) -> String {
        let mut result = String::new();
        for row in &self.grid {
            let line: String = row.iter().collect();
            result.push_str(line.trim_end());
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_item() {
        let container = Rect::new(100, 50);
        let items = vec![PackedItem {
            rect: Rect::new(100, 50),
            x: 0,
            y: 0,
            rotated: false,
            depth: None,
        }];
        let output = render_layout(container, &items);
        assert!(output.contains('+'));
        assert!(output.contains('-'));
        assert!(output.contains('|'));
        assert!(output.contains("100x50"));
    }

    #[test]
    fn test_render_two_items() {
        let container = Rect::new(100, 100);
        let items = vec![
            PackedItem {
                rect: Rect::new(50, 100),
                x: 0,
                y: 0,
                rotated: false,
                depth: None,
            },
            PackedItem {
                rect: Rect::new(50, 100),
                x: 50,
                y: 0,
                rotated: true,
                depth: None,
            },
        ];
        let output = render_layout(container, &items);
        assert!(output.contains("50x100"));
    }

    #[test]
    fn test_render_empty() {
        let container = Rect::new(100, 100);
        let output = render_layout(container, &[]);
        // Still draws the container border
        assert!(output.contains('+'));
    }
}
