//! Screen rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use super::{Entry, ExerciseScreen};

pub(super) fn render_browse(frame: &mut Frame, entries: &[Entry], list_state: &mut ListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new("fizyo - Egzersiz Kataloğu")
        .style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<16}", e.category_title), Style::default().fg(Color::DarkGray)),
                Span::raw(e.title),
                Span::styled(format!("  {}", e.params.path()), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Egzersizler"))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[1], list_state);

    let footer = Paragraph::new("q: quit | ↑/↓: select | enter: open")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}

pub(super) fn render_exercise(frame: &mut Frame, screen: &ExerciseScreen) {
    let record = &screen.record;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header: title with difficulty and equipment badges
    let header = Paragraph::new(Line::from(vec![
        Span::styled(record.title, Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        Span::styled(format!("[{}]", record.difficulty), Style::default().fg(Color::Blue)),
        Span::raw(" "),
        Span::styled(format!("[{}]", record.equipment), Style::default().fg(Color::Green)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(screen.params.path()));
    frame.render_widget(header, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(columns[0]);

    render_media(frame, left[0], screen);
    render_progress(frame, left[1], screen);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(record.warnings.len() as u16 + 2),
            Constraint::Length(4),
        ])
        .split(columns[1]);

    let mut details = vec![Line::from(record.description), Line::from("")];
    details.push(Line::styled("Talimatlar", Style::default().bold()));
    details.extend(
        record
            .instructions
            .iter()
            .enumerate()
            .map(|(i, step)| Line::from(format!("{}. {}", i + 1, step))),
    );
    let details = Paragraph::new(details)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Açıklama"));
    frame.render_widget(details, right[0]);

    let warnings: Vec<Line> = record.warnings.iter().map(|w| Line::from(format!("• {}", w))).collect();
    let warnings = Paragraph::new(warnings)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Uyarılar")
                .title_style(Style::default().fg(Color::LightRed)),
        );
    frame.render_widget(warnings, right[1]);

    let muscles = Paragraph::new(record.target_muscles.join(" · "))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Hedef Kaslar ve Bölgeler"));
    frame.render_widget(muscles, right[2]);

    let footer = Paragraph::new(
        "q: quit | esc: back | space/+: rep | -: undo rep | s: set | p: pause rest | r: reset | m: media",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}

fn render_media(frame: &mut Frame, area: Rect, screen: &ExerciseScreen) {
    let lines = if screen.show_video {
        vec![
            Line::from("▶ Video yakında eklenecek"),
            Line::styled("m: resmi göster", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        vec![
            Line::from(format!("🖼 {}", screen.record.media.image)),
            Line::styled("m: videoya dön", Style::default().fg(Color::DarkGray)),
        ]
    };
    let media = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Medya"));
    frame.render_widget(media, area);
}

fn render_progress(frame: &mut Frame, area: Rect, screen: &ExerciseScreen) {
    let block = Block::default().borders(Borders::ALL).title("İlerleme");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let tracker = screen.session.tracker();
    let state = tracker.state();

    let counts = Paragraph::new(format!(
        "Set: {}/{}    Rep: {}    Hedef: {}",
        state.current_set,
        tracker.total_sets(),
        state.current_rep,
        screen.record.reps.text,
    ));
    frame.render_widget(counts, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(tracker.progress())
        .label(format!("{}/{}", state.current_set, tracker.total_sets()));
    frame.render_widget(gauge, rows[1]);

    if state.is_resting {
        let (icon, hint) = if state.is_rest_timer_active {
            ("⏸", "p: duraklat")
        } else {
            ("▶", "p: devam")
        };
        let rest = Paragraph::new(Line::from(vec![
            Span::styled(format!("Dinlenme: {}s ", state.rest_time_left), Style::default().bold()),
            Span::raw(icon),
            Span::styled(format!("  {}", hint), Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(rest, rows[3]);
    }
}
