use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::render::Screen;

/// Title bar, control row, result body, status line.
pub fn draw(frame: &mut Frame, screen: &Screen) {
    let [title, controls, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(screen.title)
            .style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)),
        title,
    );
    frame.render_widget(
        Paragraph::new(screen.controls.as_str()).style(Style::default().fg(Color::Cyan)),
        controls,
    );
    frame.render_widget(
        Paragraph::new(screen.body.as_str())
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false }),
        body,
    );

    let status_style = if screen.busy {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(screen.status.as_str()).style(status_style),
        status,
    );
}
