use analyzer_core::{ChatViewModel, Role};
use analyzer_gateway::download_url_for;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use url::Url;

const HINT: &str = "Enter: send | /attach <path>: pick a file | Esc: quit";

const WELCOME: &str = "Welcome to the Data Analyzer.\n\
Send spreadsheets or images for analysis by the backend agents.\n\
\n\
Spreadsheets (CSV/Excel) -> outlier detection\n\
Images (JPG/PNG) -> numeric data extraction\n\
\n\
Attach a file with /attach <path>, then press Enter.";

pub fn render(frame: &mut Frame, view: &ChatViewModel, notice: Option<&str>, base_url: &Url) {
    let [transcript_area, status_area, input_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let lines = transcript_lines(view, base_url);

    // Autoscroll: keep the newest lines visible.
    let inner_height = transcript_area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Conversation"))
        .scroll((scroll, 0));
    frame.render_widget(transcript, transcript_area);

    let status = match notice {
        Some(text) => Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(HINT, Style::default().fg(Color::DarkGray))),
    };
    frame.render_widget(Paragraph::new(status), status_area);

    let input_title = match &view.attachment_name {
        Some(name) => format!("Message (attachment: {name})"),
        None => "Message".to_string(),
    };
    let input_style = if view.is_sending {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let input = Paragraph::new(view.draft_text.as_str())
        .style(input_style)
        .block(Block::default().borders(Borders::ALL).title(input_title));
    frame.render_widget(input, input_area);
}

fn transcript_lines(view: &ChatViewModel, base_url: &Url) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if view.messages.is_empty() {
        for text in WELCOME.lines() {
            lines.push(Line::from(text.to_string()));
        }
        lines.push(Line::from(""));
    }

    for message in &view.messages {
        let (label, style) = match message.role {
            Role::User => (
                "You",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Role::Assistant => (
                "Assistant",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label} "), style),
            Span::styled(
                message.created_at.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for paragraph in &message.paragraphs {
            lines.push(Line::from(format!("  {paragraph}")));
        }
        if let Some(name) = &message.attachment_name {
            lines.push(Line::from(Span::styled(
                format!("  [attached: {name}]"),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if let Some(token) = &message.result_ref {
            lines.push(Line::from(Span::styled(
                format!("  Download: {}", download_url_for(base_url, token)),
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::from(""));
    }

    if view.is_sending {
        lines.push(Line::from(Span::styled(
            "Assistant is analyzing...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}
