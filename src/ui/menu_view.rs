use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_mode_menu(frame: &mut Frame, cursor: usize) {
    render_menu(
        frame,
        "Choose Game Mode",
        &["Player vs Player", "Player vs AI", "AI vs AI"],
        cursor,
        "↑/↓: Select  |  Enter: Start  |  Q: Quit",
    );
}

pub fn render_difficulty_menu(frame: &mut Frame, cursor: usize) {
    render_menu(
        frame,
        "Choose Difficulty",
        &["Easy", "Medium", "Hard"],
        cursor,
        "↑/↓: Select  |  Enter: Start  |  Esc: Back  |  Q: Quit",
    );
}

fn render_menu(frame: &mut Frame, subtitle: &str, items: &[&str], cursor: usize, help: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Items
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("CONNECT FOUR")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let mut lines = vec![
        Line::from(""),
        Line::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
        Line::from(""),
    ];
    for (i, item) in items.iter().enumerate() {
        if i == cursor {
            lines.push(Line::styled(
                format!("▸ {item}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            lines.push(Line::from(format!("  {item}")));
        }
        lines.push(Line::from(""));
    }

    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    let help_widget = Paragraph::new(help)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help_widget, chunks[2]);
}
