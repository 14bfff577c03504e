//! raylib page shell.
//!
//! One [`Page`] per route. Each frame the shell polls input once, lets the
//! header and the active page react, advances time-based state and then
//! draws page, header and footer in that order.

mod about;
mod contact;
mod detail;
mod gallery;
mod home;

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use raylib::core::text::measure_text;
use raylib::prelude::*;
use tracing::{info, warn};

use crate::constants::SITE_NAME;
use crate::content::{self, Catalog};
use crate::decor::{self, DecorVariant, Tint};
use crate::layout::{self, Rect};
use crate::routes::Route;
use crate::slide::SlideDeck;
use crate::state::SiteState;
use crate::texture_loader::{fetch_client, load_texture, resolve_asset};

pub use about::AboutPage;
pub use contact::ContactPage;
pub use detail::DetailPage;
pub use gallery::GalleryPage;
pub use home::HomePage;

// --- Palette ---
pub const GALLERY_950: Color = Color::new(12, 10, 9, 255);
pub const GALLERY_900: Color = Color::new(28, 25, 23, 255);
pub const GALLERY_100: Color = Color::new(245, 245, 244, 255);
pub const ACCENT: Color = Color::new(201, 162, 39, 255);
pub const MUTED: Color = Color::new(156, 163, 175, 255);
pub const ERROR: Color = Color::new(239, 68, 68, 255);

/// Input gathered once per frame.
#[derive(Debug, Default)]
pub struct Input {
    pub keys: Vec<KeyboardKey>,
    pub chars: Vec<char>,
    pub click: Option<(f32, f32)>,
    pub secondary_click: Option<(f32, f32)>,
    pub wheel: f32,
}

impl Input {
    pub fn poll(rl: &mut RaylibHandle) -> Self {
        let mut input = Input::default();
        while let Some(key) = rl.get_key_pressed() {
            input.keys.push(key);
        }
        while let Some(c) = rl.get_char_pressed() {
            input.chars.push(c);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let pos = rl.get_mouse_position();
            input.click = Some((pos.x, pos.y));
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_RIGHT) {
            let pos = rl.get_mouse_position();
            input.secondary_click = Some((pos.x, pos.y));
        }
        input.wheel = rl.get_mouse_wheel_move();
        input
    }

    pub fn pressed(&self, key: KeyboardKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn clicked(&self, rect: Rect) -> bool {
        self.click.is_some_and(|(x, y)| rect.contains(x, y))
    }
}

/// Textures for every image URL that could be loaded.
pub struct Assets {
    textures: HashMap<String, Texture2D>,
}

impl Assets {
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets_dir: Option<&Path>,
        offline: bool,
        deck: &SlideDeck,
        catalog: &Catalog,
    ) -> Self {
        let client = if offline {
            None
        } else {
            fetch_client().map_err(|e| warn!("remote images disabled: {e:#}")).ok()
        };

        let mut urls: Vec<String> = deck.iter().map(|s| s.image_url.clone()).collect();
        urls.extend(catalog.artworks().iter().map(|a| a.image_url.clone()));
        urls.extend(content::team_members().into_iter().map(|m| m.image_url));
        urls.push(about::STORY_IMAGE_URL.to_string());

        let mut textures = HashMap::new();
        for url in urls {
            if textures.contains_key(&url) {
                continue;
            }
            let Some(source) = resolve_asset(assets_dir, &url) else {
                continue;
            };
            match load_texture(rl, thread, &source, client.as_ref()) {
                Ok(texture) => {
                    textures.insert(url, texture);
                }
                Err(e) => warn!(url = %url, "skipping image: {e:#}"),
            }
        }
        info!(loaded = textures.len(), "textures ready");
        Self { textures }
    }

    pub fn get(&self, url: &str) -> Option<&Texture2D> {
        self.textures.get(url)
    }
}

/// One screen of the site.
pub trait Page {
    /// Applies this frame's input to the site state.
    fn handle_input(&mut self, input: &Input, state: &mut SiteState, area: Rect);

    fn draw(&self, d: &mut RaylibDrawHandle, state: &SiteState, assets: &Assets, area: Rect);
}

pub struct Shell {
    home: HomePage,
    gallery: GalleryPage,
    detail: DetailPage,
    about: AboutPage,
    contact: ContactPage,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            home: HomePage::default(),
            gallery: GalleryPage::default(),
            detail: DetailPage,
            about: AboutPage::default(),
            contact: ContactPage::default(),
        }
    }

    fn page_mut(&mut self, route: &Route) -> &mut dyn Page {
        match route {
            Route::Home => &mut self.home,
            Route::Gallery => &mut self.gallery,
            Route::Artwork(_) | Route::NotFound(_) => &mut self.detail,
            Route::About => &mut self.about,
            Route::Contact => &mut self.contact,
        }
    }

    /// Runs one frame: input, update, draw.
    pub fn frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, state: &mut SiteState, assets: &Assets) {
        let input = Input::poll(rl);
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        let area = layout::content(width, height);

        // Header navigation
        let nav = layout::nav_items(width);
        let mut target = nav.iter().find(|(_, _, rect)| input.clicked(*rect)).map(|(route, _, _)| route.clone());
        for (key, route) in [
            (KeyboardKey::KEY_F1, Route::Home),
            (KeyboardKey::KEY_F2, Route::Gallery),
            (KeyboardKey::KEY_F3, Route::About),
            (KeyboardKey::KEY_F4, Route::Contact),
        ] {
            if input.pressed(key) {
                target = Some(route);
            }
        }

        match target {
            Some(route) => state.navigate(route),
            None => {
                let route = state.route().clone();
                self.page_mut(&route).handle_input(&input, state, area);
            }
        }

        let dt = Duration::try_from_secs_f32(rl.get_frame_time()).unwrap_or_default();
        state.update(dt);

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::WHITE);
        let route = state.route().clone();
        self.page_mut(&route).draw(&mut d, state, assets, area);
        draw_header(&mut d, state.route(), width);
        draw_footer(&mut d, width, height);
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_header(d: &mut RaylibDrawHandle, current: &Route, width: f32) {
    let header = layout::header(width);
    d.draw_rectangle_rec(rec(header), Color::WHITE);
    d.draw_line(0, header.h as i32, width as i32, header.h as i32, GALLERY_100);
    d.draw_text(SITE_NAME, layout::PADDING as i32, 20, 24, GALLERY_950);

    for (route, label, rect) in layout::nav_items(width) {
        let active = std::mem::discriminant(&route) == std::mem::discriminant(current)
            || (route == Route::Gallery && matches!(current, Route::Artwork(_)));
        let color = if active { ACCENT } else { GALLERY_950 };
        let tw = measure_text(label, 18) as f32;
        let (cx, cy) = rect.center();
        d.draw_text(label, (cx - tw / 2.0) as i32, (cy - 9.0) as i32, 18, color);
    }
}

fn draw_footer(d: &mut RaylibDrawHandle, width: f32, height: f32) {
    let footer = layout::footer(width, height);
    d.draw_rectangle_rec(rec(footer), Color::WHITE);
    d.draw_line(0, footer.y as i32, width as i32, footer.y as i32, GALLERY_100);
    let text = format!("(c) {SITE_NAME}");
    let tw = measure_text(&text, 14) as f32;
    d.draw_text(&text, ((width - tw) / 2.0) as i32, (footer.y + 13.0) as i32, 14, MUTED);
}

// --- Drawing helpers shared by pages ---

pub fn rec(r: Rect) -> Rectangle {
    Rectangle::new(r.x, r.y, r.w, r.h)
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (alpha.clamp(0.0, 1.0) * color.a as f32) as u8)
}

/// Draws an image cropped to fill `dest`, or a flat placeholder when the
/// image is not available locally.
pub fn draw_cover(d: &mut RaylibDrawHandle, assets: &Assets, url: &str, dest: Rect, alpha: f32) {
    match assets.get(url) {
        Some(texture) => {
            let src = layout::cover_source(texture.width() as f32, texture.height() as f32, dest);
            d.draw_texture_pro(texture, rec(src), rec(dest), Vector2::new(0.0, 0.0), 0.0, with_alpha(Color::WHITE, alpha));
        }
        None => {
            d.draw_rectangle_rec(rec(dest), with_alpha(GALLERY_900, alpha));
        }
    }
}

/// Draws an image letterboxed inside `dest`.
pub fn draw_contain(d: &mut RaylibDrawHandle, assets: &Assets, url: &str, dest: Rect) {
    d.draw_rectangle_rec(rec(dest), GALLERY_900);
    if let Some(texture) = assets.get(url) {
        let (tw, th) = (texture.width() as f32, texture.height() as f32);
        let fit = layout::contain(tw, th, dest);
        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tw, th),
            rec(fit),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

/// Draws wrapped text and returns the y just below the last line.
pub fn draw_wrapped(d: &mut RaylibDrawHandle, text: &str, x: f32, y: f32, max_width: f32, size: i32, color: Color) -> f32 {
    let line_height = size as f32 * 1.5;
    let mut y = y;
    for line in layout::wrap(text, max_width, |s| measure_text(s, size) as f32) {
        d.draw_text(&line, x as i32, y as i32, size, color);
        y += line_height;
    }
    y
}

/// Centred title, optional subtitle and the short accent rule below them.
/// Returns the y below the heading.
pub fn draw_heading(d: &mut RaylibDrawHandle, title: &str, subtitle: Option<&str>, area: Rect, y: f32, dark: bool) -> f32 {
    let (title_color, subtitle_color) = if dark { (Color::WHITE, MUTED) } else { (GALLERY_950, Color::GRAY) };

    let tw = measure_text(title, 40) as f32;
    d.draw_text(title, (area.x + (area.w - tw) / 2.0) as i32, y as i32, 40, title_color);
    let mut y = y + 56.0;

    if let Some(subtitle) = subtitle {
        let max_width = (area.w - 2.0 * layout::PADDING).min(640.0);
        for line in layout::wrap(subtitle, max_width, |s| measure_text(s, 18) as f32) {
            let lw = measure_text(&line, 18) as f32;
            d.draw_text(&line, (area.x + (area.w - lw) / 2.0) as i32, y as i32, 18, subtitle_color);
            y += 27.0;
        }
    }

    y += 12.0;
    d.draw_rectangle((area.x + area.w / 2.0 - 32.0) as i32, y as i32, 64, 1, ACCENT);
    y + 24.0
}

pub fn draw_decor(d: &mut RaylibDrawHandle, variant: DecorVariant, area: Rect) {
    for ring in decor::shapes(variant) {
        let base = match ring.tint {
            Tint::Accent => ACCENT,
            Tint::White => Color::WHITE,
        };
        let color = with_alpha(base, ring.alpha);
        let cx = (area.x + ring.x * area.w) as i32;
        let cy = (area.y + ring.y * area.h) as i32;
        if ring.filled {
            d.draw_circle(cx, cy, ring.radius, color);
        } else {
            d.draw_circle_lines(cx, cy, ring.radius, color);
        }
    }
}

pub fn draw_button(d: &mut RaylibDrawHandle, label: &str, rect: Rect) {
    d.draw_rectangle_rounded(rec(rect), 1.0, 12, ACCENT);
    let tw = measure_text(label, 16) as f32;
    let (cx, cy) = rect.center();
    d.draw_text(label, (cx - tw / 2.0) as i32, (cy - 8.0) as i32, 16, GALLERY_950);
}

/// Opens the window and runs until it is closed.
pub fn run(config: &crate::config::Config, deck: SlideDeck, catalog: Catalog) {
    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title(SITE_NAME)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(crate::constants::FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape closes overlays instead of the window
    rl.set_exit_key(None);

    let assets = Assets::load(&mut rl, &thread, config.assets_dir.as_deref(), config.offline, &deck, &catalog);
    let mut state = SiteState::new(config.clone(), deck, catalog);
    let mut shell = Shell::new();

    while !rl.window_should_close() {
        shell.frame(&mut rl, &thread, &mut state, &assets);
    }
    info!("window closed");
}
