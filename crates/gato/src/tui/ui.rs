//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use gato_tictactoe::Player;

use super::app::{App, Focus};
use super::layout::Regions;
use crate::view::{CellView, GameView};

/// Draws the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let regions = Regions::compute(frame.area());

    let title = Paragraph::new(view.title().as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, *regions.title());

    let status_style = if view.status().starts_with("Winner") {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status().as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, *regions.status());

    draw_board(frame, &regions, &view, app);
    draw_moves(frame, &regions, &view, app);

    let toggle = Paragraph::new(view.toggle_label().as_str())
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, *regions.toggle());

    let help = Paragraph::new("1-9 or ←↑→↓ Enter: Play | Tab: Board/Moves | t: Order | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, *regions.help());
}

fn draw_board(frame: &mut Frame, regions: &Regions, view: &GameView, app: &App) {
    let border_style = match app.focus() {
        Focus::Board => Style::default().fg(Color::Yellow),
        Focus::Moves => Style::default().fg(Color::DarkGray),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Board");
    frame.render_widget(block, *regions.board());

    for (cell, area) in view.cells().iter().zip(regions.cells()) {
        let focused = *app.focus() == Focus::Board && app.cursor() == cell.position();
        draw_cell(frame, *area, cell, focused);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, focused: bool) {
    let (symbol, mut style) = match cell.square().player() {
        None => (
            (cell.position().to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if *cell.winning() {
        style = style.bg(Color::Green);
    }

    let border_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, regions: &Regions, view: &GameView, app: &App) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.selected() {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.label().as_str()).style(style)
        })
        .collect();

    let border_style = match app.focus() {
        Focus::Moves => Style::default().fg(Color::Yellow),
        Focus::Board => Style::default().fg(Color::DarkGray),
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Moves"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let selected = app.list_selection();
    let mut list_state = ListState::default()
        .with_offset(regions.move_offset(selected))
        .with_selected(selected);
    frame.render_stateful_widget(list, *regions.moves(), &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatoConfig;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_lines(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen_text(app: &App) -> String {
        screen_lines(app, 80, 30).join("\n")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_screen() {
        let app = App::new(&GatoConfig::default());
        let text = screen_text(&app);

        assert!(text.contains("Next Player: X"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("Toggle Moves Order"));
    }

    #[test]
    fn test_screen_after_win() {
        let mut app = App::new(&GatoConfig::default());
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        let text = screen_text(&app);

        assert!(text.contains("Winner: X"));
        assert!(text.contains("Go to move #5"));
    }

    #[test]
    fn test_drawing_leaves_game_untouched() {
        let mut app = App::new(&GatoConfig::default());
        app.handle_key(key(KeyCode::Char('5')));
        let before = app.game().clone();

        screen_text(&app);
        screen_text(&app);
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_click_on_scrolled_move_list_jumps_to_drawn_entry() {
        let area = Rect::new(0, 0, 80, 20);
        let mut app = App::new(&GatoConfig::default());
        // Full board without a winner: ten history entries.
        for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.game().history().len(), 10);

        let regions = Regions::compute(area);
        let rows = regions.move_rows();
        let offset = regions.move_offset(app.list_selection());
        assert!(offset > 0, "list should scroll in a short terminal");

        let lines = screen_lines(&app, area.width, area.height);
        let first_visible = &lines[usize::from(rows.y)];
        assert!(first_visible.contains(&format!("Go to move #{}", offset)));

        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: rows.x + 1,
                row: rows.y,
                modifiers: KeyModifiers::NONE,
            },
            area,
        );
        assert_eq!(*app.game().current_step(), offset);
    }
}
