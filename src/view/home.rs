use raylib::core::text::measure_text;
use raylib::prelude::*;
use tracing::debug;

use super::{Assets, Input, Page, ACCENT, ERROR, GALLERY_900, GALLERY_950, MUTED};
use super::{draw_button, draw_cover, draw_decor, draw_heading, draw_wrapped, rec, with_alpha};
use crate::content;
use crate::decor::DecorVariant;
use crate::layout::{self, Rect};
use crate::routes::Route;
use crate::state::SiteState;

const NUMBER_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

#[derive(Debug, Default)]
pub struct HomePage {
    newsletter_focused: bool,
    error: Option<String>,
}

struct Regions {
    hero: Rect,
    explore: Rect,
    newsletter: Rect,
    email: Rect,
    subscribe: Rect,
    events: Rect,
}

fn regions(area: Rect) -> Regions {
    let hero = Rect::new(area.x, area.y, area.w, (area.h * 0.62).floor());
    let lower_y = hero.y + hero.h;
    let lower_h = area.h - hero.h;
    let newsletter = Rect::new(area.x, lower_y, area.w / 2.0, lower_h);
    let events = Rect::new(area.x + area.w / 2.0, lower_y, area.w / 2.0, lower_h);

    let field_w = (newsletter.w - 2.0 * layout::PADDING - 140.0).max(120.0);
    let field_y = newsletter.y + newsletter.h - 72.0;
    let email = Rect::new(newsletter.x + layout::PADDING, field_y, field_w, 40.0);
    let subscribe = Rect::new(email.x + email.w + 12.0, field_y, 128.0, 40.0);
    let explore = Rect::new(hero.x + layout::PADDING, hero.y + hero.h - 96.0, 180.0, 40.0);

    Regions { hero, explore, newsletter, email, subscribe, events }
}

impl HomePage {
    fn submit_newsletter(&mut self, state: &mut SiteState) {
        match state.newsletter.submit() {
            Ok(()) => {
                self.newsletter_focused = false;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn edit_email(&mut self, input: &Input, state: &mut SiteState) {
        for c in input.chars.iter().copied().filter(|c| !c.is_control()) {
            state.newsletter.email.push(c);
        }
        if input.pressed(KeyboardKey::KEY_BACKSPACE) {
            state.newsletter.email.pop();
        }
        if input.pressed(KeyboardKey::KEY_ENTER) {
            self.submit_newsletter(state);
        }
        if input.pressed(KeyboardKey::KEY_ESCAPE) {
            self.newsletter_focused = false;
        }
    }
}

impl Page for HomePage {
    fn handle_input(&mut self, input: &Input, state: &mut SiteState, area: Rect) {
        let r = regions(area);

        if input.clicked(r.explore) {
            state.navigate(Route::Gallery);
            return;
        }
        if !state.newsletter.is_subscribed() {
            if input.clicked(r.email) {
                self.newsletter_focused = true;
            } else if input.clicked(r.subscribe) {
                self.submit_newsletter(state);
                return;
            } else if input.click.is_some() {
                self.newsletter_focused = false;
            }
        }
        if self.newsletter_focused {
            self.edit_email(input, state);
            return;
        }

        let Some(hero) = state.hero_mut() else {
            return;
        };
        let controls = layout::hero_controls(r.hero, hero.carousel.len(), hero.carousel.current_index());

        if input.pressed(KeyboardKey::KEY_LEFT) || input.clicked(controls.previous) {
            hero.previous();
        } else if input.pressed(KeyboardKey::KEY_RIGHT) || input.clicked(controls.next) {
            hero.next();
        } else if let Some(index) = input.click.and_then(|(x, y)| layout::hit(&controls.dots, x, y)) {
            // One indicator per slide, so the index is always valid
            if let Err(e) = hero.go_to(index) {
                debug!("indicator click ignored: {e}");
            }
        } else if let Some(index) = NUMBER_KEYS.iter().position(|k| input.pressed(*k)) {
            if index < hero.carousel.len() {
                if let Err(e) = hero.go_to(index) {
                    debug!("number key ignored: {e}");
                }
            }
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, state: &SiteState, assets: &Assets, area: Rect) {
        let r = regions(area);
        d.draw_rectangle_rec(rec(r.hero), GALLERY_950);

        if let Some(hero) = state.hero() {
            for (i, slide) in hero.carousel.slides().iter().enumerate() {
                let alpha = hero.fade.opacity(i);
                if alpha > 0.0 {
                    draw_cover(d, assets, &slide.image_url, r.hero, alpha);
                }
            }
            d.draw_rectangle_gradient_v(
                r.hero.x as i32,
                r.hero.y as i32,
                r.hero.w as i32,
                r.hero.h as i32,
                with_alpha(GALLERY_950, 0.0),
                with_alpha(GALLERY_950, 0.9),
            );

            let slide = hero.carousel.current_slide();
            let title_y = r.explore.y - 110.0;
            d.draw_text(&slide.title, r.explore.x as i32, title_y as i32, 56, Color::WHITE);
            d.draw_text(&slide.subtitle, r.explore.x as i32, (title_y + 68.0) as i32, 20, MUTED);
            draw_button(d, "Explore Gallery", r.explore);

            let controls = layout::hero_controls(r.hero, hero.carousel.len(), hero.carousel.current_index());
            for (rect, glyph) in [(controls.previous, "<"), (controls.next, ">")] {
                let (cx, cy) = rect.center();
                d.draw_circle(cx as i32, cy as i32, rect.w / 2.0, with_alpha(Color::WHITE, 0.15));
                let gw = measure_text(glyph, 20) as f32;
                d.draw_text(glyph, (cx - gw / 2.0) as i32, (cy - 10.0) as i32, 20, Color::WHITE);
            }
            for (i, dot) in controls.dots.iter().enumerate() {
                let color = if i == hero.carousel.current_index() { ACCENT } else { with_alpha(Color::WHITE, 0.4) };
                d.draw_rectangle_rounded(rec(*dot), 1.0, 8, color);
            }
        }

        // --- Newsletter ---
        d.draw_rectangle_rec(rec(r.newsletter), GALLERY_900);
        draw_decor(d, DecorVariant::Left, r.newsletter);
        let y = draw_heading(
            d,
            "Stay Inspired",
            Some("Join our newsletter for exclusive previews, artist interviews, and invitations to private viewings."),
            r.newsletter,
            r.newsletter.y + 24.0,
            true,
        );

        if state.newsletter.is_subscribed() {
            let text = "Thank you for subscribing! We'll be in touch soon.";
            let tw = measure_text(text, 18) as f32;
            d.draw_text(text, (r.newsletter.x + (r.newsletter.w - tw) / 2.0) as i32, (y + 8.0) as i32, 18, ACCENT);
        } else {
            let border = if self.newsletter_focused { ACCENT } else { with_alpha(Color::WHITE, 0.1) };
            d.draw_rectangle_rounded(rec(r.email), 1.0, 12, with_alpha(Color::WHITE, 0.05));
            d.draw_rectangle_lines_ex(rec(r.email), 1.0, border);

            let (text, color) = if state.newsletter.email.is_empty() {
                ("Enter your email", Color::GRAY)
            } else {
                (state.newsletter.email.as_str(), Color::WHITE)
            };
            d.draw_text(text, (r.email.x + 20.0) as i32, (r.email.y + 11.0) as i32, 18, color);
            draw_button(d, "Subscribe", r.subscribe);

            if let Some(error) = &self.error {
                d.draw_text(error, r.email.x as i32, (r.email.y + 48.0) as i32, 14, ERROR);
            }
        }

        // --- Upcoming events ---
        let events = r.events;
        d.draw_rectangle_rec(rec(events), Color::WHITE);
        d.draw_text("Upcoming Events", (events.x + layout::PADDING) as i32, (events.y + 24.0) as i32, 28, GALLERY_950);
        let mut y = events.y + 68.0;
        let max_width = events.w - 2.0 * layout::PADDING;
        for event in content::upcoming_events() {
            if y > events.y + events.h - 40.0 {
                break;
            }
            let when = format!("{}  |  {}", event.date, event.time);
            d.draw_text(&when.to_uppercase(), (events.x + layout::PADDING) as i32, y as i32, 12, ACCENT);
            d.draw_text(&event.title, (events.x + layout::PADDING) as i32, (y + 18.0) as i32, 18, GALLERY_950);
            y = draw_wrapped(d, &event.description, events.x + layout::PADDING, y + 42.0, max_width, 12, Color::GRAY) + 8.0;
        }
    }
}
