//! Screen geometry shared by drawing and hit testing.
//!
//! Kept free of any renderer types so click targets can be tested headless.

use crate::routes::Route;

pub const HEADER_HEIGHT: f32 = 64.0;
pub const FOOTER_HEIGHT: f32 = 40.0;
pub const PADDING: f32 = 48.0;
pub const GAP: f32 = 24.0;
const NAV_ITEM_WIDTH: f32 = 96.0;
const CAPTION_HEIGHT: f32 = 72.0;
const ARROW_SIZE: f32 = 40.0;
const DOT_HEIGHT: f32 = 8.0;
const DOT_WIDTH: f32 = 8.0;
const DOT_ACTIVE_WIDTH: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn inset(&self, by: f32) -> Rect {
        Rect::new(self.x + by, self.y + by, (self.w - 2.0 * by).max(0.0), (self.h - 2.0 * by).max(0.0))
    }

    pub fn offset_y(&self, dy: f32) -> Rect {
        Rect::new(self.x, self.y + dy, self.w, self.h)
    }
}

/// Index of the first rect containing the point.
pub fn hit(rects: &[Rect], px: f32, py: f32) -> Option<usize> {
    rects.iter().position(|r| r.contains(px, py))
}

pub fn header(width: f32) -> Rect {
    Rect::new(0.0, 0.0, width, HEADER_HEIGHT)
}

pub fn footer(width: f32, height: f32) -> Rect {
    Rect::new(0.0, height - FOOTER_HEIGHT, width, FOOTER_HEIGHT)
}

/// Area between header and footer.
pub fn content(width: f32, height: f32) -> Rect {
    Rect::new(0.0, HEADER_HEIGHT, width, (height - HEADER_HEIGHT - FOOTER_HEIGHT).max(0.0))
}

/// Right-aligned navigation links.
pub fn nav_items(width: f32) -> Vec<(Route, &'static str, Rect)> {
    let items = Route::nav();
    let start = width - PADDING - NAV_ITEM_WIDTH * items.len() as f32;
    items
        .into_iter()
        .enumerate()
        .map(|(i, (route, label))| {
            let rect = Rect::new(start + NAV_ITEM_WIDTH * i as f32, 0.0, NAV_ITEM_WIDTH, HEADER_HEIGHT);
            (route, label, rect)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroControls {
    pub previous: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
}

/// Arrow buttons at the vertical middle and one indicator per slide along
/// the bottom. The active indicator is wider.
pub fn hero_controls(hero: Rect, count: usize, active: usize) -> HeroControls {
    let mid = hero.y + (hero.h - ARROW_SIZE) / 2.0;
    let previous = Rect::new(hero.x + 16.0, mid, ARROW_SIZE, ARROW_SIZE);
    let next = Rect::new(hero.x + hero.w - 16.0 - ARROW_SIZE, mid, ARROW_SIZE, ARROW_SIZE);

    let width_of = |i: usize| if i == active { DOT_ACTIVE_WIDTH } else { DOT_WIDTH };
    let total: f32 = (0..count).map(width_of).sum::<f32>() + DOT_HEIGHT * count.saturating_sub(1) as f32;

    let mut x = hero.x + (hero.w - total) / 2.0;
    let y = hero.y + hero.h - 24.0 - DOT_HEIGHT;
    let dots = (0..count)
        .map(|i| {
            let rect = Rect::new(x, y, width_of(i), DOT_HEIGHT);
            x += width_of(i) + DOT_HEIGHT;
            rect
        })
        .collect();

    HeroControls { previous, next, dots }
}

/// Card rectangles for a grid with 4:3 images and a caption strip.
///
/// `scroll` shifts every card up by that many pixels.
pub fn grid_cells(area: Rect, count: usize, columns: usize, scroll: f32) -> Vec<Rect> {
    let columns = columns.max(1);
    let inner_w = (area.w - 2.0 * PADDING).max(0.0);
    let card_w = (inner_w - GAP * (columns - 1) as f32) / columns as f32;
    let card_h = card_w * 3.0 / 4.0 + CAPTION_HEIGHT;

    (0..count)
        .map(|i| {
            let col = (i % columns) as f32;
            let row = (i / columns) as f32;
            Rect::new(
                area.x + PADDING + col * (card_w + GAP),
                area.y + PADDING + row * (card_h + GAP) - scroll,
                card_w,
                card_h,
            )
        })
        .collect()
}

/// How far a grid can scroll before its last row leaves the area.
pub fn grid_max_scroll(area: Rect, count: usize, columns: usize) -> f32 {
    let cells = grid_cells(area, count, columns, 0.0);
    let bottom = cells.iter().map(|c| c.y + c.h).fold(area.y, f32::max) + PADDING;
    (bottom - (area.y + area.h)).max(0.0)
}

/// Source crop that fills `dest` with a `tex_w`x`tex_h` image, centred.
pub fn cover_source(tex_w: f32, tex_h: f32, dest: Rect) -> Rect {
    if tex_w <= 0.0 || tex_h <= 0.0 || dest.w <= 0.0 || dest.h <= 0.0 {
        return Rect::new(0.0, 0.0, tex_w.max(0.0), tex_h.max(0.0));
    }
    let scale = (dest.w / tex_w).max(dest.h / tex_h);
    let w = dest.w / scale;
    let h = dest.h / scale;
    Rect::new((tex_w - w) / 2.0, (tex_h - h) / 2.0, w, h)
}

/// Largest rect with the image's aspect ratio that fits inside `dest`, centred.
pub fn contain(tex_w: f32, tex_h: f32, dest: Rect) -> Rect {
    if tex_w <= 0.0 || tex_h <= 0.0 {
        return Rect::new(dest.x, dest.y, 0.0, 0.0);
    }
    let scale = (dest.w / tex_w).min(dest.h / tex_h);
    let w = tex_w * scale;
    let h = tex_h * scale;
    Rect::new(dest.x + (dest.w - w) / 2.0, dest.y + (dest.h - h) / 2.0, w, h)
}

/// Greedy word wrap. A single word wider than `max_width` gets its own line.
pub fn wrap(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(29.9, 29.9));
        assert!(!r.contains(30.0, 15.0));
        assert!(!r.contains(9.9, 15.0));
    }

    #[test]
    fn nav_items_fit_inside_width() {
        let items = nav_items(1280.0);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].0, Route::Home);
        let last = items.last().unwrap().2;
        assert!((last.x + last.w - (1280.0 - PADDING)).abs() < 1e-3);
        assert_eq!(hit(&items.iter().map(|i| i.2).collect::<Vec<_>>(), last.x + 1.0, 10.0), Some(3));
    }

    #[test]
    fn one_dot_per_slide_with_wide_active() {
        let controls = hero_controls(Rect::new(0.0, 64.0, 1000.0, 500.0), 3, 1);
        assert_eq!(controls.dots.len(), 3);
        assert_eq!(controls.dots[1].w, DOT_ACTIVE_WIDTH);
        assert_eq!(controls.dots[0].w, DOT_WIDTH);

        // centred
        let left = controls.dots[0].x;
        let right = controls.dots[2].x + controls.dots[2].w;
        assert!(((left + right) / 2.0 - 500.0).abs() < 1e-3);

        // no overlap
        assert!(controls.dots[0].x + controls.dots[0].w < controls.dots[1].x);
        assert!(controls.previous.x < controls.next.x);
    }

    #[test]
    fn grid_lays_out_rows() {
        let area = Rect::new(0.0, 64.0, 1280.0, 700.0);
        let cells = grid_cells(area, 9, 3, 0.0);
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0].y, cells[2].y);
        assert!(cells[3].y > cells[0].y);
        assert_eq!(cells[3].x, cells[0].x);

        let scrolled = grid_cells(area, 9, 3, 100.0);
        assert!((cells[4].y - scrolled[4].y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn grid_scroll_is_bounded() {
        let area = Rect::new(0.0, 64.0, 1280.0, 700.0);
        assert!(grid_max_scroll(area, 9, 3) > 0.0);
        assert_eq!(grid_max_scroll(area, 1, 3), 0.0);
    }

    #[test]
    fn cover_crops_the_long_side() {
        // 2:1 image into a square: keep the middle half horizontally
        let src = cover_source(200.0, 100.0, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(src, Rect::new(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn contain_letterboxes() {
        let r = contain(200.0, 100.0, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(r, Rect::new(0.0, 25.0, 100.0, 50.0));
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let measure = |s: &str| s.chars().count() as f32;
        let lines = wrap("the quick brown fox jumps", 10.0, measure);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);

        let lines = wrap("supercalifragilistic ok", 5.0, measure);
        assert_eq!(lines, vec!["supercalifragilistic", "ok"]);
        assert!(wrap("   ", 10.0, measure).is_empty());
    }
}
