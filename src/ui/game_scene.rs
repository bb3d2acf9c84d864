//! UI rendering for the playfield scene.
//!
//! The 800x600 logical playfield is scaled onto whatever terminal area is
//! available: each cell is mapped back to the logical pixel under its
//! center and classified as bird, pipe, or sky. Sprite art refines the
//! glyphs when loaded; without it everything is solid color blocks.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{
    BIRD_HEIGHT, BIRD_WIDTH, BIRD_X, PIPE_GAP, PIPE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::game::GameWorld;
use crate::sprites::{Sprite, SpriteSet};

/// Render the whole game scene into `area`.
pub fn render_game(frame: &mut Frame, area: Rect, world: &GameWorld, sprites: &SpriteSet) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Play area on top, 2-line status bar below
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, v_chunks[0], world, sprites);
    render_status_bar(frame, v_chunks[1], world);

    if world.game_over {
        render_game_over_overlay(frame, v_chunks[0], world);
    }
}

/// Render the scaled playfield with bird and pipes.
fn render_play_area(frame: &mut Frame, area: Rect, world: &GameWorld, sprites: &SpriteSet) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let x_scale = SCREEN_WIDTH as f64 / width as f64;
    let y_scale = SCREEN_HEIGHT as f64 / height as f64;

    let mut lines = Vec::with_capacity(height);
    for display_row in 0..height {
        let ly = (display_row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);
        for display_col in 0..width {
            let lx = (display_col as f64 + 0.5) * x_scale;
            spans.push(cell_span(lx, ly, world, sprites));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Classify the logical pixel under a cell center and pick its glyph.
/// The bird wins ties with the pipe so it stays visible in a crash.
fn cell_span(lx: f64, ly: f64, world: &GameWorld, sprites: &SpriteSet) -> Span<'static> {
    let bird_left = BIRD_X as f64;
    let bird_top = world.bird.y as f64;
    if lx >= bird_left
        && lx < bird_left + BIRD_WIDTH as f64
        && ly >= bird_top
        && ly < bird_top + BIRD_HEIGHT as f64
    {
        let glyph = sprite_glyph(
            sprites.bird.as_ref(),
            (lx - bird_left) / BIRD_WIDTH as f64,
            (ly - bird_top) / BIRD_HEIGHT as f64,
        );
        return Span::styled(
            glyph.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    }

    let pipe_left = world.pipe.x as f64;
    if lx >= pipe_left && lx < pipe_left + PIPE_WIDTH as f64 {
        let top_edge = (world.pipe.gap_y - world.top_pipe_height) as f64;
        let bottom_edge = (world.pipe.gap_y + PIPE_GAP) as f64;
        if ly < top_edge || ly >= bottom_edge {
            let glyph = sprite_glyph(
                sprites.pipe.as_ref(),
                (lx - pipe_left) / PIPE_WIDTH as f64,
                ly / SCREEN_HEIGHT as f64,
            );
            return Span::styled(glyph.to_string(), Style::default().fg(Color::Green));
        }
    }

    Span::raw(" ")
}

/// Solid block when no sprite art is loaded.
fn sprite_glyph(sprite: Option<&Sprite>, rel_x: f64, rel_y: f64) -> char {
    match sprite {
        Some(sprite) => sprite.sample(rel_x, rel_y),
        None => '█',
    }
}

/// Render the status bar: score (or crash notice) plus the key bindings.
fn render_status_bar(frame: &mut Frame, area: Rect, world: &GameWorld) {
    if area.height < 1 {
        return;
    }

    let (text, color) = if world.game_over {
        ("Crashed!".to_string(), Color::Red)
    } else {
        (format!("Score: {}", world.score), Color::Green)
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 {
        let controls = [("[Space/Up]", "Jump"), ("[F]", "Restart"), ("[Q/Esc]", "Quit")];
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render the centered game-over panel on top of the play area.
fn render_game_over_overlay(frame: &mut Frame, area: Rect, world: &GameWorld) {
    let panel_width = area.width.min(34);
    let panel_height: u16 = 7;
    if area.width < 10 || area.height < panel_height {
        return;
    }

    let panel = Rect::new(
        area.x + (area.width - panel_width) / 2,
        area.y + (area.height - panel_height) / 2,
        panel_width,
        panel_height,
    );

    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", world.score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'F' to Restart",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
