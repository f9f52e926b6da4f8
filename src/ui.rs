//! Layout and drawing: board, sidebar, instruction and game-over overlays, iceberg field.

use crate::bear::{BearGame, BearPhase, Direction as Jump, GameOverReason};
use crate::game::{Cue, GameState, Phase};
use crate::grid::Grid;
use crate::theme::Theme;
use crate::tile::{Lifecycle, Tile};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap};
use std::collections::HashSet;
use std::time::Instant;
use tachyonfx::{
    CellFilter, Duration as TfxDuration, Effect, EffectRenderer, Interpolation, fx, ref_count,
};

/// Terminal cells per tile: a 3-wide block plus a gutter column, and a gutter row below.
const CELL_WIDTH: u16 = 4;
const CELL_HEIGHT: u16 = 2;
const TILE_WIDTH: u16 = 3;

pub const SIDEBAR_WIDTH: u16 = 26;

/// Iceberg field pixels per terminal cell.
const FIELD_PX_PER_COL: f64 = 10.0;
const FIELD_PX_PER_ROW: f64 = 20.0;
const WATER: Color = Color::Rgb(0x1E, 0x3A, 0x5F);
const ICE: Color = Color::Rgb(0xE6, 0xF0, 0xF5);
const SHORE: Color = Color::Rgb(0x6E, 0x8B, 0x5A);

/// Centre a `content_w x content_h` block plus the sidebar in `area`.
fn split_centered(area: Rect, content_w: u16, content_h: u16) -> (Rect, Rect) {
    let total_w = content_w.saturating_add(SIDEBAR_WIDTH);
    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(total_w),
            Constraint::Fill(1),
        ])
        .split(area);
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(content_h),
            Constraint::Fill(1),
        ])
        .split(horiz[1]);
    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(content_w),
            Constraint::Length(SIDEBAR_WIDTH),
        ])
        .split(vert[1]);
    (inner[0], inner[1])
}

/// Terminal extent of `n` cells of `cell` columns or rows each, saturating.
fn span(n: usize, cell: u16) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX).saturating_mul(cell)
}

/// Board outer rect (with border) and sidebar for the grid's dimensions.
fn board_layout(area: Rect, grid: &Grid) -> (Rect, Rect) {
    let w = span(grid.cols(), CELL_WIDTH).saturating_add(2);
    let h = span(grid.rows(), CELL_HEIGHT).saturating_add(2);
    let (board, sidebar) = split_centered(area, w, h.max(MIN_SIDEBAR_HEIGHT));
    (
        Rect {
            height: board.height.min(h),
            ..board
        },
        sidebar,
    )
}

const MIN_SIDEBAR_HEIGHT: u16 = 20;

/// Board inner rect (no border); the same rect `draw_match` paints tiles into.
fn board_rect(area: Rect, grid: &Grid) -> Rect {
    let (outer, _) = board_layout(area, grid);
    let inner = Rect {
        x: outer.x + 1,
        y: outer.y + 1,
        width: span(grid.cols(), CELL_WIDTH).min(outer.width.saturating_sub(2)),
        height: span(grid.rows(), CELL_HEIGHT).min(outer.height.saturating_sub(2)),
    };
    inner.intersection(area)
}

/// Map a terminal click to a grid cell, through the grid's pixel geometry.
pub fn board_hit(area: Rect, grid: &Grid, column: u16, row: u16) -> Option<(usize, usize)> {
    let board = board_rect(area, grid);
    if !board.contains(Position::new(column, row)) {
        return None;
    }
    let g = grid.geometry();
    let fx = (f64::from(column - board.x) + 0.5) / f64::from(CELL_WIDTH) - 0.5;
    let fy = (f64::from(row - board.y) + 0.5) / f64::from(CELL_HEIGHT) - 0.5;
    grid.cell_at_point(g.origin_x + fx * g.tile_width, g.origin_y + fy * g.tile_height)
}

/// Screen position of a tile's block, from its pixel position. `None` when clipped.
fn tile_screen_pos(board: Rect, grid: &Grid, tile: &Tile) -> Option<(u16, u16)> {
    let g = grid.geometry();
    let col = ((tile.x - g.origin_x) / g.tile_width).round();
    let row = (g.row_at(tile.y) * f64::from(CELL_HEIGHT)).round();
    if col < 0.0 || row < 0.0 {
        return None;
    }
    let x = board.x.saturating_add((col as u16).saturating_mul(CELL_WIDTH));
    let y = board.y.saturating_add(row as u16);
    (x.saturating_add(TILE_WIDTH) <= board.right() && y < board.bottom()).then_some((x, y))
}

fn fill_bg(buf: &mut Buffer, rect: Rect, color: Color) {
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            buf[(x, y)].set_symbol(" ").set_style(Style::default().bg(color));
        }
    }
}

fn dim(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        ),
        other => other,
    }
}

/// Draw the match game: board, sidebar and any overlay for the current phase.
/// While tiles are dying a TachyonFX fade runs over their blocks; `removal_effect` and
/// `removal_time` hold it between frames and are reset by the caller when the wave ends.
pub fn draw_match(
    frame: &mut Frame,
    state: &GameState,
    theme: &Theme,
    cursor: (usize, usize),
    paused: bool,
    last_cue: Option<Cue>,
    removal_effect: &mut Option<Effect>,
    removal_time: &mut Option<Instant>,
    now: Instant,
) {
    let area = frame.area();
    let grid = state.grid();
    let (board_outer, sidebar) = board_layout(area, grid);
    let board = board_rect(area, grid);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.div_line).bg(theme.bg))
        .title(Span::styled(" Bloomtui ", theme.title));
    fill_bg(frame.buffer_mut(), board_outer.intersection(area), theme.bg);
    block.render(board_outer.intersection(area), frame.buffer_mut());

    if !matches!(state.phase(), Phase::Init | Phase::Instructions1 | Phase::Instructions2) {
        draw_tiles(frame.buffer_mut(), state, theme, board);
        if state.phase() == Phase::Ready && !paused {
            draw_cursor(frame.buffer_mut(), theme, board, cursor);
        }
    }

    draw_sidebar(frame, state, theme, sidebar.intersection(area), last_cue);

    if state.phase() == Phase::Removing {
        apply_removal_effect(frame, state, theme, board, removal_effect, removal_time, now);
    }

    match state.phase() {
        Phase::Init | Phase::Instructions1 => draw_message(
            frame,
            theme,
            board_outer,
            " How to play ",
            &[
                "Tap a group of three or more matching tiles to clear it.",
                "",
                "Every clear adds time to the clock.",
                "",
                "Tap to continue.",
            ],
        ),
        Phase::Instructions2 => draw_message(
            frame,
            theme,
            board_outer,
            " How to play ",
            &[
                "Five or more in one group leave a bomb (✱). Tap it to clear its surroundings.",
                "",
                "Lone tiles and rocks (▒) cost points and time.",
                "",
                "Tap to start.",
            ],
        ),
        Phase::GameOver => {
            let score = format!("Score: {}", state.score());
            draw_message(
                frame,
                theme,
                board_outer,
                " Time's up! ",
                &[score.as_str(), "", "Tap to play again.", "Q to quit."],
            );
        }
        _ if paused => draw_message(
            frame,
            theme,
            board_outer,
            " Paused ",
            &["P to resume", "Q to quit"],
        ),
        _ => {}
    }
}

fn draw_tiles(buf: &mut Buffer, state: &GameState, theme: &Theme, board: Rect) {
    let grid = state.grid();
    let timings = *grid.timings();
    for tile in state.tiles() {
        let Some((x, y)) = tile_screen_pos(board, grid, tile) else {
            continue;
        };
        let color = theme.tile_color(tile.kind.0);
        let glyph = Theme::tile_glyph(tile.kind.0);
        let style = match tile.lifecycle {
            // Bud: glyph only until half grown.
            Lifecycle::Spawning if tile.progress(&timings) < 0.5 => {
                Style::default().fg(color).bg(theme.bg)
            }
            Lifecycle::Spawning => Style::default().fg(theme.bg).bg(dim(color, 0.75)),
            Lifecycle::Dying => Style::default()
                .fg(theme.bg)
                .bg(color)
                .add_modifier(Modifier::BOLD),
            Lifecycle::Static | Lifecycle::Dropping => Style::default().fg(theme.bg).bg(color),
        };
        buf.set_string(x, y, format!(" {glyph} "), style);
    }
}

/// Top-left of a cell's block. `None` when clipped.
fn cell_origin(board: Rect, (row, col): (usize, usize)) -> Option<(u16, u16)> {
    let x = board.x.saturating_add(span(col, CELL_WIDTH));
    let y = board.y.saturating_add(span(row, CELL_HEIGHT));
    (x.saturating_add(TILE_WIDTH) <= board.right() && y < board.bottom()).then_some((x, y))
}

fn draw_cursor(buf: &mut Buffer, theme: &Theme, board: Rect, cell: (usize, usize)) {
    if let Some((x, y)) = cell_origin(board, cell) {
        let y = y + 1;
        if y < board.bottom() {
            buf.set_string(x, y, "▔▔▔", Style::default().fg(theme.cursor).bg(theme.bg));
        }
    }
}

/// Buffer positions covered by dying tiles still in their cells. A merge seed is
/// detached, so the bomb that replaced it does not fade.
fn dying_positions(board: Rect, state: &GameState) -> HashSet<(u16, u16)> {
    let grid = state.grid();
    state
        .tiles()
        .filter(|t| t.is_dying())
        .filter_map(|t| grid.cell_of(t.id))
        .filter_map(|cell| cell_origin(board, cell))
        .flat_map(|(x, y)| (x..x + TILE_WIDTH).map(move |bx| (bx, y)))
        .collect()
}

fn apply_removal_effect(
    frame: &mut Frame,
    state: &GameState,
    theme: &Theme,
    board: Rect,
    removal_effect: &mut Option<Effect>,
    removal_time: &mut Option<Instant>,
    now: Instant,
) {
    let delta = removal_time
        .map(|t| now.saturating_duration_since(t))
        .unwrap_or(std::time::Duration::ZERO);
    let delta_ms = delta.as_millis().min(u128::from(u32::MAX)) as u32;
    *removal_time = Some(now);

    if removal_effect.is_none() {
        let dying = dying_positions(board, state);
        let filter = CellFilter::PositionFn(ref_count(move |pos: Position| {
            dying.contains(&(pos.x, pos.y))
        }));
        let fade_ms = (state.grid().timings().die_secs * 1000.0) as u32;
        let bg = theme.bg;
        let effect = fx::fade_to(bg, bg, (fade_ms, Interpolation::Linear))
            .with_filter(filter)
            .with_area(board);
        *removal_effect = Some(effect);
    }

    if let Some(effect) = removal_effect {
        frame.render_effect(effect, board, TfxDuration::from_millis(delta_ms));
    }
}

fn cue_label(cue: Cue) -> (&'static str, Color) {
    match cue {
        Cue::MatchSucceeded => ("Bloom!", Color::Green),
        Cue::MatchFailed => ("Miss", Color::Red),
        Cue::TilesDropped => ("Drop", Color::Cyan),
        Cue::BombDetonated => ("Boom!", Color::Yellow),
    }
}

fn timer_color(ratio: f64) -> Color {
    if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn bordered(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.div_line).bg(theme.bg))
}

fn draw_sidebar(
    frame: &mut Frame,
    state: &GameState,
    theme: &Theme,
    area: Rect,
    last_cue: Option<Cue>,
) {
    let title_style = Style::default().fg(theme.title);
    let fg_style = Style::default().fg(theme.main_fg);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // score, last event
            Constraint::Length(4), // clock
            Constraint::Length(6), // legend
            Constraint::Length(5), // controls
        ])
        .split(area);

    let stats = bordered(theme);
    let stats_inner = stats.inner(chunks[0]);
    stats.render(chunks[0], frame.buffer_mut());
    let (cue_text, cue_color) = last_cue.map_or(("", theme.main_fg), cue_label);
    let lines = vec![
        Line::from(vec![
            Span::styled("Score: ", title_style),
            Span::styled(state.score().to_string(), fg_style),
        ]),
        Line::from(vec![
            Span::styled("Last:  ", title_style),
            Span::styled(
                cue_text,
                Style::default().fg(cue_color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    Paragraph::new(lines).render(stats_inner, frame.buffer_mut());

    let clock = bordered(theme).title(Span::styled("Time", title_style));
    let clock_inner = clock.inner(chunks[1]);
    clock.render(chunks[1], frame.buffer_mut());
    let ratio = state.timer_ratio();
    Gauge::default()
        .ratio(ratio)
        .label(format!("{:.1}s", state.timer().max(0.0)))
        .gauge_style(Style::default().fg(timer_color(ratio)).bg(theme.div_line))
        .render(clock_inner, frame.buffer_mut());

    let legend = bordered(theme).title(Span::styled("Tiles", title_style));
    let legend_inner = legend.inner(chunks[2]);
    legend.render(chunks[2], frame.buffer_mut());
    let palette = state.grid().palette();
    let swatch = |kind: u8, text: &'static str| {
        Line::from(vec![
            Span::styled(
                format!(" {} ", Theme::tile_glyph(kind)),
                Style::default().fg(theme.bg).bg(theme.tile_color(kind)),
            ),
            Span::styled(text, fg_style),
        ])
    };
    let ordinary: Vec<Span> = palette
        .spawnable()
        .into_iter()
        .filter(|k| !palette.is_hazard(*k))
        .map(|k| {
            Span::styled(
                Theme::tile_glyph(k.0),
                Style::default().fg(theme.tile_color(k.0)),
            )
        })
        .collect();
    let legend_lines = vec![
        Line::from(ordinary),
        swatch(palette.bomb.0, " bomb: clears around"),
        swatch(palette.hazard.0, " rock: costs time"),
    ];
    Paragraph::new(legend_lines).render(legend_inner, frame.buffer_mut());

    let help = bordered(theme);
    let help_inner = help.inner(chunks[3]);
    help.render(chunks[3], frame.buffer_mut());
    let hint = Style::default().fg(theme.inactive_fg);
    Paragraph::new(vec![
        Line::from(Span::styled("Click / Enter: tap", hint)),
        Line::from(Span::styled("Arrows, hjkl: move", hint)),
        Line::from(Span::styled("P pause  Q quit", hint)),
    ])
    .render(help_inner, frame.buffer_mut());
}

/// Centred popup over `over` with a title and wrapped lines.
fn draw_message(frame: &mut Frame, theme: &Theme, over: Rect, title: &str, lines: &[&str]) {
    let area = frame.area();
    let popup_w = over.width.saturating_sub(6).clamp(20, 44).min(area.width);
    let popup_h = (lines.len() as u16 + 6).min(area.height);
    let popup = Rect {
        x: over.x + over.width.saturating_sub(popup_w) / 2,
        y: over.y + over.height.saturating_sub(popup_h) / 2,
        width: popup_w,
        height: popup_h,
    }
    .intersection(area);
    fill_bg(frame.buffer_mut(), popup, theme.bg);
    let text: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(theme.main_fg))))
        .collect();
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.title).bg(theme.bg))
                .title(Span::styled(
                    title.to_string(),
                    Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
                )),
        )
        .render(popup, frame.buffer_mut());
}

// --- Iceberg field ---

fn field_cells(bear: &BearGame) -> (u16, u16) {
    let c = bear.config();
    (
        (c.field_width / FIELD_PX_PER_COL).ceil() as u16 + 1,
        (c.field_height / FIELD_PX_PER_ROW).ceil() as u16,
    )
}

/// Field outer rect (border + water + shore row) and sidebar.
fn bear_layout(area: Rect, bear: &BearGame) -> (Rect, Rect) {
    let (w, h) = field_cells(bear);
    split_centered(area, w + 2, (h + 3).max(MIN_SIDEBAR_HEIGHT))
}

fn field_to_screen(field: Rect, x: f64, y: f64) -> Option<(u16, u16)> {
    let col = (x / FIELD_PX_PER_COL).round();
    let row = (y / FIELD_PX_PER_ROW).round();
    if col < 0.0 || row < 0.0 {
        return None;
    }
    let (sx, sy) = (field.x + col as u16, field.y + row as u16);
    field.contains(Position::new(sx, sy)).then_some((sx, sy))
}

const BUTTON_WIDTH: u16 = 5;
const BUTTON_HEIGHT: u16 = 3;
const BUTTONS_TOP: u16 = 9;

/// Jump buttons in sidebar order: left, back, forward, right.
fn bear_buttons(sidebar: Rect) -> [(Jump, Rect); 4] {
    std::array::from_fn(|i| {
        let rect = Rect {
            x: sidebar.x + 1 + i as u16 * (BUTTON_WIDTH + 1),
            y: sidebar.y + BUTTONS_TOP,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        };
        (Jump::ALL[i], rect)
    })
}

/// Which jump button a click landed on.
pub fn bear_button_hit(area: Rect, bear: &BearGame, column: u16, row: u16) -> Option<Jump> {
    let (_, sidebar) = bear_layout(area, bear);
    bear_buttons(sidebar)
        .into_iter()
        .find(|(_, r)| r.contains(Position::new(column, row)))
        .map(|(dir, _)| dir)
}

fn arrow(dir: Jump) -> &'static str {
    match dir {
        Jump::Left => "◀",
        Jump::Backward => "▲",
        Jump::Forward => "▼",
        Jump::Right => "▶",
    }
}

pub fn draw_bear(frame: &mut Frame, bear: &BearGame, theme: &Theme, paused: bool) {
    let area = frame.area();
    let (outer, sidebar) = bear_layout(area, bear);
    let outer = outer.intersection(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.div_line).bg(theme.bg))
        .title(Span::styled(" Ice flow ", theme.title));
    let inner = block.inner(outer);
    block.render(outer, frame.buffer_mut());

    let (fw, fh) = field_cells(bear);
    let field = Rect {
        x: inner.x,
        y: inner.y,
        width: fw.min(inner.width),
        height: fh.min(inner.height),
    };
    let buf = frame.buffer_mut();
    fill_bg(buf, field, WATER);
    let shore = Rect {
        x: field.x,
        y: field.bottom(),
        width: field.width,
        height: 1,
    }
    .intersection(inner);
    for x in shore.left()..shore.right() {
        buf[(x, shore.y)]
            .set_symbol("▓")
            .set_style(Style::default().fg(SHORE).bg(WATER));
    }

    // Floes sit on the jump lattice around the start point.
    let c = *bear.config();
    let step_x = c.jump_speed_x * c.jump_secs;
    let step_y = c.jump_speed_y * c.jump_secs;
    for i in -2..=4 {
        for j in -1..=4 {
            let x = c.start_x + f64::from(i) * step_x;
            let y = c.start_y + f64::from(j) * step_y;
            if !(0.0..=c.field_width).contains(&x) || !(0.0..c.field_height).contains(&y) {
                continue;
            }
            if let Some((sx, sy)) = field_to_screen(field, x, y) {
                let left = sx.saturating_sub(3).max(field.x);
                let right = (sx + 4).min(field.right());
                for fx in left..right {
                    buf[(fx, sy)]
                        .set_symbol("▄")
                        .set_style(Style::default().fg(ICE).bg(WATER));
                }
            }
        }
    }

    let (bx, by) = bear.position();
    if let Some((sx, sy)) = field_to_screen(field, bx, by) {
        let glyph = if matches!(bear.phase(), BearPhase::Jumping(_)) { "◎" } else { "◉" };
        buf[(sx, sy)].set_symbol(glyph).set_style(
            Style::default()
                .fg(Color::White)
                .bg(WATER)
                .add_modifier(Modifier::BOLD),
        );
    }

    draw_bear_sidebar(frame, bear, theme, sidebar.intersection(area));

    match bear.phase() {
        BearPhase::Initialised => draw_message(
            frame,
            theme,
            outer,
            " Ice flow ",
            &[
                "Jump from iceberg to iceberg to cross the ice flow.",
                "",
                "Use the arrow keys or the buttons.",
                "",
                "Tap to continue.",
            ],
        ),
        BearPhase::Instructions => draw_message(
            frame,
            theme,
            outer,
            " Ice flow ",
            &[
                "Fall in the water or off the sides and you lose a life.",
                "",
                "Tap to start.",
            ],
        ),
        BearPhase::GameOver(reason) => {
            let why = match reason {
                GameOverReason::OutOfLives => "Out of lives.",
                GameOverReason::OutOfTime => "Out of time.",
            };
            draw_message(frame, theme, outer, " Game over ", &[why, "", "Tap to play again."]);
        }
        BearPhase::Complete => draw_message(
            frame,
            theme,
            outer,
            " Crossed! ",
            &["Great play.", "", "Tap for the next level."],
        ),
        _ if paused => draw_message(frame, theme, outer, " Paused ", &["P to resume", "Q to quit"]),
        _ => {}
    }
}

fn draw_bear_sidebar(frame: &mut Frame, bear: &BearGame, theme: &Theme, area: Rect) {
    let title_style = Style::default().fg(theme.title);
    let stats = bordered(theme);
    let stats_rect = Rect {
        height: area.height.min(5),
        ..area
    };
    let stats_inner = stats.inner(stats_rect);
    stats.render(stats_rect, frame.buffer_mut());
    let hearts = "♥ ".repeat(bear.lives() as usize);
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Level: ", title_style),
            Span::styled(bear.level().to_string(), Style::default().fg(theme.main_fg)),
        ]),
        Line::from(vec![
            Span::styled("Lives: ", title_style),
            Span::styled(hearts, Style::default().fg(Color::Red)),
        ]),
    ])
    .render(stats_inner, frame.buffer_mut());

    let clock_rect = Rect {
        y: area.y + 5,
        height: 4.min(area.height.saturating_sub(5)),
        ..area
    };
    let clock = bordered(theme).title(Span::styled("Time", title_style));
    let clock_inner = clock.inner(clock_rect);
    clock.render(clock_rect, frame.buffer_mut());
    let total = bear.config().duration_secs;
    let ratio = if total > 0.0 {
        (bear.remaining() / total).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Gauge::default()
        .ratio(ratio)
        .label(format!("{:.1}s", bear.remaining()))
        .gauge_style(Style::default().fg(timer_color(ratio)).bg(theme.div_line))
        .render(clock_inner, frame.buffer_mut());

    let ready = bear.phase() == BearPhase::Ready;
    for (dir, rect) in bear_buttons(area) {
        let rect = rect.intersection(frame.area());
        if rect.is_empty() {
            continue;
        }
        let fg = if ready { theme.title } else { theme.inactive_fg };
        Paragraph::new(Line::from(Span::styled(arrow(dir), Style::default().fg(fg))))
            .alignment(Alignment::Center)
            .block(bordered(theme))
            .render(rect, frame.buffer_mut());
    }
    let labels = Rect {
        y: area.y + BUTTONS_TOP + BUTTON_HEIGHT,
        height: 1,
        ..area
    }
    .intersection(frame.area());
    if !labels.is_empty() {
        let text = Jump::ALL
            .iter()
            .map(|d| format!("{:^6}", d.label()))
            .collect::<String>();
        frame.buffer_mut().set_string(
            labels.x,
            labels.y,
            text,
            Style::default().fg(theme.inactive_fg),
        );
    }
}
