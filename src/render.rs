use raylib::prelude::*;
use crate::audio::AudioSink;
use crate::constants::*;
use crate::engine::ItemView;
use crate::page::{NavButton, Page};
use crate::panels::{Focus, Panel};
use crate::texture_loader::PhotoLibrary;

const BACKGROUND: Color = Color::new(255, 240, 245, 255);
const NAV_BACKGROUND: Color = Color::new(250, 218, 228, 255);
const ACCENT: Color = Color::new(214, 86, 130, 255);
const INK: Color = Color::new(90, 40, 60, 255);

/// Every glyph the emoji font has to carry.
pub fn glyph_set() -> String {
    let mut glyphs: String = BOUQUET_GLYPHS.concat();
    glyphs.push_str(ICON_PAUSED);
    glyphs.push_str(ICON_PLAYING);
    glyphs
}

fn faded(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (opacity.clamp(0.0, 1.0) * color.a as f32) as u8)
}

fn draw_glyph(d: &mut RaylibDrawHandle, font: Option<&Font>, glyph: &str, position: Vector2, size: f32, color: Color) {
    match font {
        Some(font) => d.draw_text_ex(font, glyph, position, size, 0.0, color),
        None => {
            let default_font = d.get_font_default();
            d.draw_text_ex(&default_font, glyph, position, size, 0.0, color);
        }
    }
}

pub fn draw_page<S: AudioSink>(
    d: &mut RaylibDrawHandle,
    page: &Page<S>,
    library: &PhotoLibrary,
    font: Option<&Font>,
) {
    d.clear_background(BACKGROUND);

    match page.panels().visible() {
        Some(Panel::Photos) => draw_photos(d, page, library),
        Some(Panel::Flowers) => draw_flowers(d, page, font),
        Some(Panel::Message) => draw_message(d, page),
        None => {
            let content = page.layout().content;
            d.draw_text(
                "Pick something above (1, 2 or 3)",
                (content.x + 40.0) as i32,
                (content.y + 40.0) as i32,
                28,
                INK,
            );
        }
    }

    for floater in page.floats().floaters() {
        draw_glyph(d, font, floater.glyph, floater.position(), FLOAT_GLYPH_SIZE, faded(ACCENT, floater.opacity()));
    }

    draw_nav(d, page, font);
}

fn draw_nav<S: AudioSink>(d: &mut RaylibDrawHandle, page: &Page<S>, font: Option<&Font>) {
    let layout = page.layout();
    d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, layout.width, NAV_HEIGHT), NAV_BACKGROUND);

    for (button, rect) in layout.buttons() {
        match button {
            NavButton::Panel(panel) => {
                let pressed = page.panels().is_pressed(panel);
                let (fill, ink) = if pressed { (ACCENT, Color::WHITE) } else { (Color::WHITE, INK) };
                d.draw_rectangle_rounded(rect, 0.4, 8, fill);
                d.draw_text(panel.label(), (rect.x + 20.0) as i32, (rect.y + 10.0) as i32, 20, ink);
            }
            NavButton::Music => {
                let fill = if page.music().is_playing() { ACCENT } else { Color::WHITE };
                d.draw_rectangle_rounded(rect, 0.5, 8, fill);
                let icon = Vector2::new(rect.x + 6.0, rect.y + 4.0);
                draw_glyph(d, font, page.music().icon(), icon, rect.height - 8.0, INK);
            }
        }
    }
}

fn draw_photos<S: AudioSink>(d: &mut RaylibDrawHandle, page: &Page<S>, library: &PhotoLibrary) {
    let content = page.layout().content;
    let views = page.carousel().views();

    if views.is_empty() {
        let text = if library.set().all_settled() { "No photos yet" } else { "Loading photos..." };
        d.draw_text(text, (content.x + 40.0) as i32, (content.y + 40.0) as i32, 24, INK);
    }

    for view in views.iter() {
        if let Some(texture) = library.texture(view.photo) {
            draw_item(d, texture, view, content);
        }
    }

    if page.panels().heading_visible(Panel::Photos) {
        d.draw_text("Our photos", (content.x + 24.0) as i32, (content.y + 16.0) as i32, 28, INK);
    }
}

fn draw_item(d: &mut RaylibDrawHandle, texture: &Texture2D, view: &ItemView, content: Rectangle) {
    let scaled_width = view.width * view.scale;
    let scaled_height = view.height * view.scale;

    // Relative to the dest rectangle (ie. the center of the image)
    let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);
    let centre = Vector2::new(
        content.x + view.x + view.width * 0.5,
        content.y + view.y + view.height * 0.5,
    );

    if centre.x + scaled_width < content.x || centre.x - scaled_width > content.x + content.width {
        return;
    }

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
        Rectangle::new(centre.x, centre.y, scaled_width, scaled_height),
        origin,
        0.0,
        faded(Color::WHITE, view.opacity),
    );
}

fn draw_flowers<S: AudioSink>(d: &mut RaylibDrawHandle, page: &Page<S>, font: Option<&Font>) {
    let layout = page.layout();
    let bouquet = layout.bouquet;

    d.draw_rectangle_rounded(bouquet, 0.3, 12, NAV_BACKGROUND);
    draw_glyph(
        d,
        font,
        "💐",
        Vector2::new(bouquet.x + bouquet.width * 0.2, bouquet.y + bouquet.height * 0.2),
        bouquet.width * 0.6,
        ACCENT,
    );
    d.draw_text(
        "Click the bouquet or press Enter",
        (bouquet.x - 60.0) as i32,
        (bouquet.y + bouquet.height + 16.0) as i32,
        20,
        INK,
    );
}

fn draw_message<S: AudioSink>(d: &mut RaylibDrawHandle, page: &Page<S>) {
    let content = page.layout().content;

    if page.panels().heading_visible(Panel::Message) {
        d.draw_text("A message for you", (content.x + 40.0) as i32, (content.y + 24.0) as i32, 32, INK);
    }

    let Some(message) = page.message() else {
        return;
    };

    let region = Rectangle::new(content.x + 40.0, content.y + 80.0, content.width - 80.0, content.height - 120.0);
    d.draw_rectangle_rounded(region, 0.05, 8, Color::WHITE);
    if page.panels().focus() == Some(Focus::MessageContent) {
        d.draw_rectangle_lines_ex(region, 2.0, ACCENT);
    }

    for (i, line) in message.lines().enumerate() {
        d.draw_text(line, (region.x + 24.0) as i32, (region.y + 24.0 + i as f32 * 32.0) as i32, 24, INK);
    }
}
