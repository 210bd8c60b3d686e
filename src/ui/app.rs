//! Main application for the Gomoku GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameOutcome, GameState};
use super::theme::*;
use crate::board::Stone;
use crate::config::THINK_DELAY_MS;
use crate::engine::AIEngine;

/// Settings shared by every game started from the app
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub engine: AIEngine,
    pub think_delay: Duration,
    /// Skip the mode-selection screen and start straight in this mode
    pub start_mode: Option<GameMode>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            engine: AIEngine::new(),
            think_delay: Duration::from_millis(THINK_DELAY_MS),
            start_mode: None,
        }
    }
}

/// Main Gomoku application
pub struct GomokuApp {
    settings: AppSettings,
    /// `None` while the mode-selection screen is shown
    state: Option<GameState>,
    board_view: BoardView,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_settings(AppSettings::default())
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        Self::with_settings(settings)
    }

    fn with_settings(settings: AppSettings) -> Self {
        let mut app = Self {
            settings,
            state: None,
            board_view: BoardView::default(),
        };
        if let Some(mode) = app.settings.start_mode {
            app.start_game(mode);
        }
        app
    }

    fn start_game(&mut self, mode: GameMode) {
        log::info!("starting {}", mode.label());
        self.state = Some(GameState::with_engine(
            mode,
            self.settings.engine.clone(),
            self.settings.think_delay,
        ));
    }

    /// Mode-selection screen
    fn render_mode_select(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.label(RichText::new("GOMOKU").size(40.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("Five in a row on a 15×15 board").size(14.0).color(TEXT_MUTED));
                ui.add_space(32.0);

                let button_size = Vec2::new(220.0, 44.0);
                for mode in [GameMode::PvP, GameMode::PvE { human: Stone::Black }] {
                    let button = egui::Button::new(RichText::new(mode.label()).size(18.0));
                    if ui.add_sized(button_size, button).clicked() {
                        self.start_game(mode);
                    }
                    ui.add_space(12.0);
                }
            });
        });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Side panel with game info; returns whether Home was pressed
    fn render_side_panel(ctx: &Context, state: &mut GameState) -> bool {
        let mut go_home = false;
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new(state.mode.label()).size(11.0).color(TEXT_MUTED));
                ui.add_space(12.0);

                Self::render_turn_card(ui, state);
                ui.add_space(10.0);

                Self::card_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("Reset").clicked() {
                            state.reset();
                        }
                        if ui.button("Home").clicked() {
                            go_home = true;
                        }
                    });
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("Move #{}", state.move_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });

                if let Some(result) = &state.last_bot_result {
                    ui.add_space(10.0);
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new("BOT").size(10.0).color(TEXT_MUTED));
                        ui.label(
                            RichText::new(format!("{:?}", result.search_type))
                                .size(11.0)
                                .strong()
                                .color(STATUS_OK),
                        );
                        ui.label(
                            RichText::new(format!(
                                "score {}  {} nodes  {}ms",
                                result.score, result.nodes, result.time_ms
                            ))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                        );
                    });
                }

                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(11.0).color(STATUS_ERROR));
                }
            });
        go_home
    }

    /// Current turn, thinking spinner, or the final result
    fn render_turn_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| match state.outcome {
            Some(GameOutcome::Won { winner, .. }) => {
                ui.label(
                    RichText::new(format!("{} wins!", stone_name(winner)))
                        .size(20.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
            Some(GameOutcome::Draw) => {
                ui.label(RichText::new("Draw").size(20.0).strong().color(TEXT_PRIMARY));
            }
            None => {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(Vec2::splat(32.0), egui::Sense::hover());
                    let (fill, ring) = match state.current_turn {
                        Stone::White => (WHITE_STONE, WHITE_STONE_SHADOW),
                        _ => (BLACK_STONE, BLACK_STONE_HIGHLIGHT),
                    };
                    ui.painter().circle_filled(rect.center(), 14.0, fill);
                    ui.painter().circle_stroke(rect.center(), 14.0, egui::Stroke::new(1.0, ring));
                    ui.add_space(8.0);

                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(stone_name(state.current_turn))
                                .size(18.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                        if state.is_bot_thinking() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                let secs = state.bot_thinking_elapsed().unwrap_or_default().as_secs_f32();
                                ui.label(
                                    RichText::new(format!("Bot thinking {secs:.1}s"))
                                        .size(12.0)
                                        .color(STATUS_BUSY),
                                );
                            });
                        } else {
                            ui.label(RichText::new("to move").size(12.0).color(TEXT_SECONDARY));
                        }
                    });
                });
            }
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        CentralPanel::default().show(ctx, |ui| {
            let accepting_input = !state.is_game_over() && state.is_human_turn() && !state.is_bot_thinking();
            let clicked = self.board_view.show(
                ui,
                &state.board,
                state.current_turn,
                state.last_move,
                state.winning_line(),
                accepting_input,
            );

            if let Some(pos) = clicked {
                if let Err(err) = state.try_place_stone(pos) {
                    state.message = Some(err.to_string());
                }
            }
        });
    }
}

fn stone_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black (X)",
        Stone::White => "White (O)",
        Stone::Empty => "-",
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let Some(state) = self.state.as_mut() else {
            self.render_mode_select(ctx);
            return;
        };

        state.poll_bot();
        state.start_bot_thinking();

        if Self::render_side_panel(ctx, state) {
            log::info!("back to mode selection");
            self.state = None;
            return;
        }
        self.render_board(ctx);

        let thinking = self.state.as_ref().is_some_and(GameState::is_bot_thinking);
        if thinking {
            ctx.request_repaint();
        }
    }
}
