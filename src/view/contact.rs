use raylib::prelude::*;

use super::{Assets, Input, Page, ACCENT, ERROR, GALLERY_100, GALLERY_950, MUTED};
use super::{draw_button, draw_decor, draw_heading, draw_wrapped, rec};
use crate::content::OPENING_HOURS;
use crate::decor::DecorVariant;
use crate::forms::ContactField;
use crate::layout::{self, Rect};
use crate::state::SiteState;

const BANNER_HEIGHT: f32 = 200.0;

#[derive(Debug, Default)]
pub struct ContactPage {
    error: Option<String>,
}

struct Regions {
    banner: Rect,
    fields: [(ContactField, Rect); 3],
    submit: Rect,
    info: Rect,
}

fn regions(area: Rect) -> Regions {
    let banner = Rect::new(area.x, area.y, area.w, BANNER_HEIGHT);
    let form_w = (area.w - 3.0 * layout::PADDING) * 0.6;
    let x = area.x + layout::PADDING;
    let top = banner.y + banner.h + layout::GAP;

    let name = Rect::new(x, top + 22.0, form_w, 36.0);
    let email = Rect::new(x, name.y + name.h + 34.0, form_w, 36.0);
    let message = Rect::new(x, email.y + email.h + 34.0, form_w, 110.0);
    let submit = Rect::new(x, message.y + message.h + 16.0, 160.0, 40.0);
    let info = Rect::new(x + form_w + layout::PADDING, top, area.w - form_w - 3.0 * layout::PADDING, area.y + area.h - top);

    Regions {
        banner,
        fields: [(ContactField::Name, name), (ContactField::Email, email), (ContactField::Message, message)],
        submit,
        info,
    }
}

fn next_field(field: ContactField) -> ContactField {
    match field {
        ContactField::Name => ContactField::Email,
        ContactField::Email => ContactField::Message,
        ContactField::Message => ContactField::Name,
    }
}

impl ContactPage {
    fn submit(&mut self, state: &mut SiteState) {
        match state.contact.submit() {
            Ok(()) => {
                self.error = None;
                state.contact_focus = ContactField::Name;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

impl Page for ContactPage {
    fn handle_input(&mut self, input: &Input, state: &mut SiteState, area: Rect) {
        let r = regions(area);

        if state.contact.is_submitted() {
            // "Send another message" sits where the submit button was
            if input.clicked(r.submit) || input.pressed(KeyboardKey::KEY_ENTER) {
                state.contact.send_another();
            }
            return;
        }

        if let Some((field, _)) = r.fields.iter().find(|(_, rect)| input.clicked(*rect)) {
            state.contact_focus = *field;
        }
        if input.clicked(r.submit) {
            self.submit(state);
            return;
        }
        if input.pressed(KeyboardKey::KEY_TAB) {
            state.contact_focus = next_field(state.contact_focus);
            return;
        }

        let focus = state.contact_focus;
        let value = state.contact.field_mut(focus);
        for c in input.chars.iter().copied().filter(|c| !c.is_control()) {
            value.push(c);
        }
        if input.pressed(KeyboardKey::KEY_BACKSPACE) {
            value.pop();
        }
        if input.pressed(KeyboardKey::KEY_ENTER) {
            if focus == ContactField::Message {
                value.push('\n');
            } else {
                self.submit(state);
            }
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, state: &SiteState, _assets: &Assets, area: Rect) {
        let r = regions(area);

        d.draw_rectangle_rec(rec(r.banner), GALLERY_950);
        draw_decor(d, DecorVariant::Both, r.banner);
        draw_heading(
            d,
            "Contact Us",
            Some("We'd love to hear from you. Whether you have a question about an exhibition, want to plan a visit, or are interested in collaboration, reach out."),
            r.banner,
            r.banner.y + 32.0,
            true,
        );

        if state.contact.is_submitted() {
            let x = r.fields[0].1.x;
            let y = r.fields[0].1.y;
            d.draw_text("Message Sent", x as i32, y as i32, 28, GALLERY_950);
            d.draw_text(
                "Thank you for reaching out. We'll get back to you within 24 hours.",
                x as i32,
                (y + 44.0) as i32,
                16,
                Color::GRAY,
            );
            draw_button(d, "Send another", r.submit);
        } else {
            for (field, rect) in &r.fields {
                let focused = *field == state.contact_focus;
                d.draw_text(field.label(), rect.x as i32, (rect.y - 20.0) as i32, 14, GALLERY_950);
                d.draw_rectangle_rec(rec(*rect), GALLERY_100);
                d.draw_rectangle_lines_ex(rec(*rect), 1.0, if focused { ACCENT } else { Color::LIGHTGRAY });

                let value = state.contact.get(*field);
                let inner = rect.inset(10.0);
                if value.is_empty() {
                    d.draw_text(field.placeholder(), inner.x as i32, inner.y as i32, 16, Color::GRAY);
                } else {
                    let mut y = inner.y;
                    for line in value.split('\n') {
                        if y + 16.0 > inner.y + inner.h {
                            break;
                        }
                        d.draw_text(line, inner.x as i32, y as i32, 16, GALLERY_950);
                        y += 20.0;
                    }
                }
            }
            draw_button(d, "Send Message", r.submit);
            if let Some(error) = &self.error {
                d.draw_text(error, (r.submit.x + r.submit.w + 16.0) as i32, (r.submit.y + 12.0) as i32, 16, ERROR);
            }
        }

        // --- Visit us ---
        let x = r.info.x;
        let mut y = r.info.y;
        d.draw_text("Visit Us", x as i32, y as i32, 24, GALLERY_950);
        y += 40.0;
        for hours in OPENING_HOURS {
            d.draw_text(hours.day, x as i32, y as i32, 16, GALLERY_950);
            let color = if hours.hours == "Closed" { MUTED } else { Color::GRAY };
            d.draw_text(hours.hours, (x + r.info.w * 0.5) as i32, y as i32, 16, color);
            y += 26.0;
        }
        y += 16.0;
        draw_wrapped(
            d,
            "Submissions stay on this kiosk. Nothing is sent to the gallery.",
            x,
            y,
            r.info.w,
            12,
            MUTED,
        );
    }
}
