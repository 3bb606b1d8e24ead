use imgui::{Condition, DrawListMut, Ui, WindowFlags};
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::countdown::Countdown;
use crate::physic_engine::{cursor::Tilt, PhysicEngine, Vec2};
use crate::renderer_engine::config::RendererConfig;

pub const RING_RADIUS: f32 = 120.0;
pub const RING_THICKNESS: f32 = 10.0;
pub const RING_SEGMENTS: usize = 96;
/// Durée du fondu du compteur après 0
pub const COUNTER_FADE_DURATION: f32 = 0.6;
/// Déplacement de la carte par degré d'inclinaison, en pixels
pub const CARD_SHIFT_PER_DEGREE: f32 = 1.5;
pub const CARD_SIZE: [f32; 2] = [560.0, 480.0];
const COUNTER_FONT_SCALE: f32 = 5.0;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const ACCENT: [f32; 4] = [0.55, 0.45, 1.0, 1.0];
const RING_TRACK: [f32; 4] = [1.0, 1.0, 1.0, 0.12];

/// Interactions remontées par le HUD à la frame courante
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HudActions {
    pub launch_clicked: bool,
    pub hovering_button: bool,
}

/// Points de l'arc de progression, du haut de l'anneau dans le sens horaire.
///
/// `progress` = fraction visible de l'anneau ; aucun point à 0.
pub fn ring_points(center: [f32; 2], radius: f32, progress: f32, segments: usize) -> Vec<[f32; 2]> {
    let progress = progress.clamp(0.0, 1.0);
    let steps = (segments as f32 * progress).ceil() as usize;
    if steps == 0 {
        return Vec::new();
    }
    let sweep = TAU * progress;
    (0..=steps)
        .map(|i| {
            let angle = -FRAC_PI_2 + sweep * (i as f32 / steps as f32);
            [center[0] + radius * angle.cos(), center[1] + radius * angle.sin()]
        })
        .collect()
}

/// Décalage de la carte induit par l'inclinaison (approximation 2D de la
/// rotation 3D : la carte « penche » vers le pointeur).
pub fn card_offset(tilt: Tilt) -> [f32; 2] {
    [
        tilt.rotate_y_deg * CARD_SHIFT_PER_DEGREE,
        -tilt.rotate_x_deg * CARD_SHIFT_PER_DEGREE,
    ]
}

/// Opacité du compteur : 1 jusqu'à la fin, puis fondu linéaire.
pub fn counter_alpha(since_finished: Option<f32>) -> f32 {
    match since_finished {
        Some(t) => (1.0 - t / COUNTER_FADE_DURATION).clamp(0.0, 1.0),
        None => 1.0,
    }
}

fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha]
}

/// Interface du show dessinée avec imgui : carte, anneau, compteur, fusée,
/// effets plein écran et curseur lumineux.
pub struct Hud {
    title: String,
    subtitle: String,
    redirect_text: String,
    show_custom_cursor: bool,
}

impl Hud {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            redirect_text: config.redirect_text.clone(),
            show_custom_cursor: config.show_custom_cursor,
        }
    }

    pub fn apply_config(&mut self, config: &RendererConfig) {
        *self = Self::new(config);
    }

    pub fn draw<P: PhysicEngine>(&self, ui: &Ui, physic: &P, countdown: &Countdown) -> HudActions {
        let display = ui.io().display_size;
        let fb_scale = ui.io().display_framebuffer_scale;
        // Coordonnées physiques (framebuffer) -> coordonnées imgui
        let to_ui = |p: Vec2| [p.x / fb_scale[0].max(1e-3), p.y / fb_scale[1].max(1e-3)];

        let effects = physic.effects();
        let shake = effects.shake_offset();
        let offset = card_offset(physic.tilt());
        let center = [
            display[0] / 2.0 + offset[0] + shake.x,
            display[1] / 2.0 + offset[1] + shake.y,
        ];
        let scale = physic.tilt().scale;

        {
            let draw_list = ui.get_background_draw_list();
            self.draw_card(&draw_list, center, scale);
            self.draw_titles(ui, &draw_list, center);
            if countdown.is_started() {
                self.draw_ring(&draw_list, center, countdown);
                self.draw_redirect_text(ui, &draw_list, center);
            }
            if let Some(progress) = effects.shockwave_progress() {
                let radius = RING_RADIUS + progress * display[0].max(display[1]) * 0.5;
                draw_list
                    .add_circle(center, radius, with_alpha(WHITE, 0.8 * (1.0 - progress)))
                    .thickness(4.0)
                    .num_segments(64)
                    .build();
            }
            self.draw_rocket(&draw_list, physic, &to_ui);
        }

        let mut actions = HudActions::default();
        if countdown.is_started() {
            self.draw_counter(ui, center, countdown);
        } else {
            actions = self.draw_launch_button(ui, center);
        }

        {
            let draw_list = ui.get_foreground_draw_list();
            let flash = effects.flash_alpha();
            if flash > 0.0 {
                draw_list
                    .add_rect([0.0, 0.0], display, with_alpha(WHITE, 0.35 * flash))
                    .filled(true)
                    .build();
            }
            if self.show_custom_cursor {
                ui.set_mouse_cursor(None);
                self.draw_cursor(&draw_list, physic, &to_ui);
            }
        }
        actions
    }

    fn draw_card(&self, draw_list: &DrawListMut, center: [f32; 2], scale: f32) {
        let half = [CARD_SIZE[0] * scale / 2.0, CARD_SIZE[1] * scale / 2.0];
        let p1 = [center[0] - half[0], center[1] - half[1]];
        let p2 = [center[0] + half[0], center[1] + half[1]];
        draw_list
            .add_rect(p1, p2, [0.08, 0.06, 0.2, 0.45])
            .filled(true)
            .rounding(24.0)
            .build();
        draw_list
            .add_rect(p1, p2, [1.0, 1.0, 1.0, 0.15])
            .rounding(24.0)
            .thickness(1.5)
            .build();
    }

    fn draw_titles(&self, ui: &Ui, draw_list: &DrawListMut, center: [f32; 2]) {
        let top = center[1] - CARD_SIZE[1] / 2.0;
        for (text, y, color) in [
            (&self.title, top + 28.0, WHITE),
            (&self.subtitle, top + 56.0, [0.8, 0.8, 0.95, 0.9]),
        ] {
            let size = ui.calc_text_size(text);
            draw_list.add_text([center[0] - size[0] / 2.0, y], color, text);
        }
    }

    fn draw_ring(&self, draw_list: &DrawListMut, center: [f32; 2], countdown: &Countdown) {
        let alpha = counter_alpha(countdown.time_since_finished());
        draw_list
            .add_circle(center, RING_RADIUS, with_alpha(RING_TRACK, alpha))
            .thickness(RING_THICKNESS)
            .num_segments(RING_SEGMENTS as u32)
            .build();
        let points = ring_points(center, RING_RADIUS, countdown.ring_progress(), RING_SEGMENTS);
        if points.len() >= 2 {
            draw_list
                .add_polyline(points, with_alpha(ACCENT, alpha))
                .thickness(RING_THICKNESS)
                .build();
        }
    }

    fn draw_redirect_text(&self, ui: &Ui, draw_list: &DrawListMut, center: [f32; 2]) {
        let size = ui.calc_text_size(&self.redirect_text);
        draw_list.add_text(
            [center[0] - size[0] / 2.0, center[1] + RING_RADIUS + 40.0],
            [0.85, 0.85, 1.0, 0.85],
            &self.redirect_text,
        );
    }

    fn draw_counter(&self, ui: &Ui, center: [f32; 2], countdown: &Countdown) {
        let alpha = counter_alpha(countdown.time_since_finished());
        if alpha <= 0.0 {
            return;
        }
        let text = countdown.display_value();
        let box_size = [RING_RADIUS * 2.0, RING_RADIUS * 2.0];
        ui.window("##counter")
            .position(
                [center[0] - RING_RADIUS, center[1] - RING_RADIUS],
                Condition::Always,
            )
            .size(box_size, Condition::Always)
            .flags(
                WindowFlags::NO_DECORATION
                    | WindowFlags::NO_BACKGROUND
                    | WindowFlags::NO_INPUTS
                    | WindowFlags::NO_SAVED_SETTINGS
                    | WindowFlags::NO_NAV,
            )
            .build(|| {
                ui.set_window_font_scale(COUNTER_FONT_SCALE);
                let size = ui.calc_text_size(&text);
                ui.set_cursor_pos([(box_size[0] - size[0]) / 2.0, (box_size[1] - size[1]) / 2.0]);
                ui.text_colored(with_alpha(WHITE, alpha), &text);
            });
    }

    fn draw_launch_button(&self, ui: &Ui, center: [f32; 2]) -> HudActions {
        let button_size = [220.0, 64.0];
        let mut actions = HudActions::default();
        ui.window("##launch")
            .position(
                [center[0] - button_size[0] / 2.0, center[1] - button_size[1] / 2.0],
                Condition::Always,
            )
            .flags(
                WindowFlags::NO_DECORATION
                    | WindowFlags::NO_BACKGROUND
                    | WindowFlags::ALWAYS_AUTO_RESIZE
                    | WindowFlags::NO_SAVED_SETTINGS
                    | WindowFlags::NO_MOVE,
            )
            .build(|| {
                ui.set_window_font_scale(1.6);
                actions.launch_clicked = ui.button_with_size("LAUNCH", button_size);
                actions.hovering_button = ui.is_item_hovered();
            });
        actions
    }

    fn draw_rocket<P, F>(&self, draw_list: &DrawListMut, physic: &P, to_ui: &F)
    where
        P: PhysicEngine,
        F: Fn(Vec2) -> [f32; 2],
    {
        let rocket = physic.rocket();
        if !rocket.visible || rocket.finished {
            return;
        }
        let (width, height) = physic.window_size();
        let mut top = Vec2::new(width / 2.0, rocket.screen_top(height));
        if rocket.shaking {
            top += physic.effects().rocket_jitter();
        }
        let nose = to_ui(top);
        let [x, y] = nose;
        let body_w = 28.0;
        let body_h = 70.0;

        draw_list
            .add_triangle([x, y], [x - body_w / 2.0, y + 26.0], [x + body_w / 2.0, y + 26.0], [0.9, 0.2, 0.3, 1.0])
            .filled(true)
            .build();
        draw_list
            .add_rect([x - body_w / 2.0, y + 26.0], [x + body_w / 2.0, y + 26.0 + body_h], [0.92, 0.92, 0.97, 1.0])
            .filled(true)
            .rounding(4.0)
            .build();
        draw_list
            .add_circle([x, y + 48.0], 7.0, [0.35, 0.7, 1.0, 1.0])
            .filled(true)
            .build();
        let base = y + 26.0 + body_h;
        for side in [-1.0f32, 1.0] {
            let edge = x + side * body_w / 2.0;
            draw_list
                .add_triangle([edge, base - 22.0], [edge + side * 14.0, base + 6.0], [edge, base], [0.9, 0.2, 0.3, 1.0])
                .filled(true)
                .build();
        }

        if rocket.fire {
            let flicker = 1.0 + 0.25 * physic.effects().rocket_jitter().x / 2.0;
            let length = 46.0 * flicker;
            draw_list
                .add_triangle([x - 11.0, base], [x + 11.0, base], [x, base + length], [1.0, 0.6, 0.1, 0.95])
                .filled(true)
                .build();
            draw_list
                .add_triangle([x - 6.0, base], [x + 6.0, base], [x, base + length * 0.6], [1.0, 0.95, 0.5, 1.0])
                .filled(true)
                .build();
        }
    }

    fn draw_cursor<P, F>(&self, draw_list: &DrawListMut, physic: &P, to_ui: &F)
    where
        P: PhysicEngine,
        F: Fn(Vec2) -> [f32; 2],
    {
        let cursor = physic.cursor();
        if !cursor.visible {
            return;
        }
        let (dot_radius, glow_radius) = if cursor.hovering { (7.0, 34.0) } else { (4.0, 22.0) };
        draw_list
            .add_circle(to_ui(cursor.pos), glow_radius, [0.6, 0.5, 1.0, 0.25])
            .filled(true)
            .build();
        draw_list
            .add_circle(to_ui(cursor.target), dot_radius, WHITE)
            .filled(true)
            .build();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_starts_at_top_and_turns_clockwise() {
        let points = ring_points([0.0, 0.0], 100.0, 1.0, 8);
        assert_eq!(points.len(), 9);
        assert!((points[0][0]).abs() < 1e-3);
        assert!((points[0][1] + 100.0).abs() < 1e-3);
        // un quart de tour plus loin : à droite du centre (y vers le bas)
        assert!((points[2][0] - 100.0).abs() < 1e-3);
        assert!(points[2][1].abs() < 1e-3);
    }

    #[test]
    fn test_ring_progress_bounds() {
        assert!(ring_points([0.0, 0.0], 100.0, 0.0, 96).is_empty());
        let half = ring_points([0.0, 0.0], 100.0, 0.5, 96);
        let last = half[half.len() - 1];
        assert!(last[0].abs() < 1e-3);
        assert!((last[1] - 100.0).abs() < 1e-3);
        assert_eq!(ring_points([0.0, 0.0], 10.0, 3.0, 8).len(), 9);
    }

    #[test]
    fn test_card_follows_pointer() {
        let tilt = Tilt::from_pointer(Vec2::new(1000.0, 0.0), 1000.0, 800.0, 15.0, 768.0);
        let offset = card_offset(tilt);
        assert!(offset[0] > 0.0);
        assert!(offset[1] < 0.0);
        assert_eq!(card_offset(Tilt::REST), [0.0, 0.0]);
    }

    #[test]
    fn test_counter_fades_after_finish() {
        assert_eq!(counter_alpha(None), 1.0);
        assert_eq!(counter_alpha(Some(0.0)), 1.0);
        assert!((counter_alpha(Some(COUNTER_FADE_DURATION / 2.0)) - 0.5).abs() < 1e-5);
        assert_eq!(counter_alpha(Some(10.0)), 0.0);
    }
}
