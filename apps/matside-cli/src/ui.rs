use std::{
    collections::VecDeque,
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use matside_types::{
    commands::MatchCommand,
    corner::{Corner, Position},
    game::{Competitor, CompetitorIdentity, MatchSnapshot, MatchStatus, WinMethod},
    scoring::{Attribution, LogEntry, ScoringAction},
    time_control::{format_clock, format_riding_time, riding_time_for, RidingAdvantage},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc::UnboundedSender;

const RED: Color = Color::LightRed;
const GREEN: Color = Color::LightGreen;

pub enum UiMessage {
    Snapshot(Box<MatchSnapshot>),
}

pub struct ConsoleSettings {
    pub red: CompetitorIdentity,
    pub green: CompetitorIdentity,
    pub max_log_rows: usize,
}

#[derive(Debug, PartialEq)]
enum KeyAction {
    Quit,
    Command(MatchCommand),
    Nothing,
}

pub fn run(
    receiver: Receiver<UiMessage>,
    commands: UnboundedSender<MatchCommand>,
    settings: ConsoleSettings,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let res = run_loop(&mut terminal, receiver, commands, &settings);

    terminal.show_cursor()?;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    res
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    receiver: Receiver<UiMessage>,
    commands: UnboundedSender<MatchCommand>,
    settings: &ConsoleSettings,
) -> Result<()> {
    let mut snapshot = MatchSnapshot::default();

    loop {
        loop {
            match receiver.try_recv() {
                Ok(UiMessage::Snapshot(next)) => snapshot = *next,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        terminal.draw(|f| match snapshot.status {
            MatchStatus::Setup => draw_setup(f, settings),
            MatchStatus::InProgress => draw_dashboard(f, &snapshot, settings.max_log_rows),
            MatchStatus::Finished => draw_summary(f, &snapshot, settings.max_log_rows),
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key_action(&snapshot, settings, key) {
                    KeyAction::Quit => break,
                    KeyAction::Command(command) => {
                        if commands.send(command).is_err() {
                            break;
                        }
                    }
                    KeyAction::Nothing => {}
                }
            }
        }
    }

    Ok(())
}

/// Red scores on the number row, green on its shifted symbols.
fn scoring_key(code: KeyCode) -> Option<(Corner, ScoringAction)> {
    let (corner, index) = match code {
        KeyCode::Char(c @ '1'..='6') => (Corner::Red, c as usize - '1' as usize),
        KeyCode::Char(c) => {
            let index = ['!', '@', '#', '$', '%', '^'].iter().position(|s| *s == c)?;
            (Corner::Green, index)
        }
        _ => return None,
    };
    Some((corner, ScoringAction::ALL[index]))
}

fn key_action(snapshot: &MatchSnapshot, settings: &ConsoleSettings, key: KeyEvent) -> KeyAction {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        return KeyAction::Quit;
    }
    let command = match snapshot.status {
        MatchStatus::Setup => match key.code {
            KeyCode::Enter => MatchCommand::StartMatch {
                red: settings.red.clone(),
                green: settings.green.clone(),
            },
            _ => return KeyAction::Nothing,
        },
        MatchStatus::Finished => match key.code {
            KeyCode::Enter => MatchCommand::ResetToSetup,
            _ => return KeyAction::Nothing,
        },
        MatchStatus::InProgress => {
            if let Some((corner, action)) = scoring_key(key.code) {
                return KeyAction::Command(MatchCommand::Score { corner, action });
            }
            match key.code {
                KeyCode::Char(' ') => MatchCommand::ToggleClock,
                KeyCode::Char('7') => MatchCommand::Stalling { corner: Corner::Red },
                KeyCode::Char('&') => MatchCommand::Stalling {
                    corner: Corner::Green,
                },
                KeyCode::Char('8') => MatchCommand::Caution { corner: Corner::Red },
                KeyCode::Char('*') => MatchCommand::Caution {
                    corner: Corner::Green,
                },
                KeyCode::Char('9') => MatchCommand::EndMatch {
                    winner: Corner::Red,
                    method: WinMethod::Fall,
                },
                KeyCode::Char('(') => MatchCommand::EndMatch {
                    winner: Corner::Green,
                    method: WinMethod::Fall,
                },
                KeyCode::Char('n') => MatchCommand::SetPosition {
                    position: Position::Neutral,
                },
                KeyCode::Char('r') => MatchCommand::SetPosition {
                    position: Position::RedTop,
                },
                KeyCode::Char('g') => MatchCommand::SetPosition {
                    position: Position::GreenTop,
                },
                KeyCode::Char('p') => MatchCommand::SetPeriod {
                    period: snapshot.period.next(),
                },
                KeyCode::Char('u') => MatchCommand::UndoLast,
                KeyCode::Char('d') => MatchCommand::EndByDecision,
                _ => return KeyAction::Nothing,
            }
        }
    };
    KeyAction::Command(command)
}

fn corner_color(corner: Corner) -> Color {
    match corner {
        Corner::Red => RED,
        Corner::Green => GREEN,
    }
}

fn pips(count: u32, slots: u32) -> String {
    (1..=slots)
        .map(|n| if count >= n { '●' } else { '○' })
        .collect()
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_setup(f: &mut Frame, settings: &ConsoleSettings) {
    let identity = |label: &str, id: &CompetitorIdentity, color: Color| {
        let name = if id.name.is_empty() {
            "(unnamed)".to_string()
        } else {
            id.name.clone()
        };
        Line::from(vec![
            Span::styled(format!("{label:<6}"), bold(color)),
            Span::raw(name),
            Span::raw("  "),
            Span::styled(id.school.clone(), Style::default().fg(Color::Gray)),
        ])
    };
    let body = Paragraph::new(vec![
        Line::from(""),
        identity("RED", &settings.red, RED),
        identity("GREEN", &settings.green, GREEN),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" start bout   "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Match Setup"));
    f.render_widget(body, f.size());
}

fn draw_dashboard(f: &mut Frame, snapshot: &MatchSnapshot, max_log_rows: usize) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(10),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    let state = if snapshot.is_running { "RUNNING" } else { "PAUSED" };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(format!("Period {}", snapshot.period), bold(Color::Cyan)),
        Span::raw("   "),
        Span::styled(format_clock(snapshot.match_clock), bold(Color::White)),
        Span::raw("   "),
        Span::styled(
            state,
            Style::default().fg(if snapshot.is_running {
                Color::Yellow
            } else {
                Color::Gray
            }),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Clock"));
    f.render_widget(header, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(38),
                Constraint::Percentage(24),
                Constraint::Percentage(38),
            ]
            .as_ref(),
        )
        .split(rows[1]);
    draw_competitor(f, columns[0], &snapshot.red, snapshot);
    draw_mat(f, columns[1], snapshot);
    draw_competitor(f, columns[2], &snapshot.green, snapshot);

    f.render_widget(log_list(&snapshot.logs, max_log_rows, "Match Log"), rows[2]);

    let help = Paragraph::new(
        "space clock | 1-6 red score, 7 stall, 8 caution, 9 pin | shift for green | \
         n/r/g position | p period | u undo | d decision | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, rows[3]);
}

fn draw_competitor(f: &mut Frame, area: Rect, competitor: &Competitor, snapshot: &MatchSnapshot) {
    let color = corner_color(competitor.corner);
    let riding = riding_time_for(competitor.corner, snapshot.riding_time);
    let lines = vec![
        Line::from(Span::styled(competitor.display_name(), bold(color))),
        Line::from(Span::styled(
            competitor.school.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(competitor.score.to_string(), bold(Color::White))),
        Line::from(format!("Stall   {}", pips(competitor.stalling_count, 5))),
        Line::from(format!("Caution {}", pips(competitor.caution_count, 3))),
        Line::from(format!("Riding  {}", format_clock(riding))),
        Line::from(format!(
            "TD {}  E {}  R {}  NF {}/{}/{}",
            competitor.stats.takedowns,
            competitor.stats.escapes,
            competitor.stats.reversals,
            competitor.stats.near_fall_2,
            competitor.stats.near_fall_3,
            competitor.stats.near_fall_4,
        )),
    ];
    let title = format!("{} corner", competitor.corner.as_str().to_uppercase());
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

fn draw_mat(f: &mut Frame, area: Rect, snapshot: &MatchSnapshot) {
    let position_color = snapshot
        .position
        .controller()
        .map(corner_color)
        .unwrap_or(Color::Gray);
    let advantage = RidingAdvantage::from_riding_time(snapshot.riding_time);
    let advantage_color = advantage.corner().map(corner_color).unwrap_or(Color::Gray);
    let lines = vec![
        Line::from(Span::styled(snapshot.position.label(), bold(position_color))),
        Line::from(""),
        Line::from("Riding Time"),
        Line::from(Span::styled(
            format_riding_time(snapshot.riding_time),
            bold(advantage_color),
        )),
        Line::from(Span::styled(
            advantage.label(),
            Style::default().fg(advantage_color),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Position"));
    f.render_widget(widget, area);
}

fn log_list<'a>(logs: &'a [LogEntry], max_rows: usize, title: &'a str) -> List<'a> {
    let items: Vec<ListItem> = logs
        .iter()
        .take(max_rows)
        .map(|entry| {
            let color = entry
                .attribution
                .corner()
                .map(corner_color)
                .unwrap_or(Color::Gray);
            let who = match entry.attribution {
                Attribution::Red => "RED  ",
                Attribution::Green => "GREEN",
                Attribution::Neutral => "-    ",
            };
            ListItem::new(Line::from(vec![
                Span::styled(who, Style::default().fg(color)),
                Span::raw(format!(" P{} @ {}  ", entry.period, entry.timestamp)),
                Span::raw(entry.description.clone()),
            ]))
        })
        .collect();
    List::new(items).block(Block::default().borders(Borders::ALL).title(title))
}

fn draw_summary(f: &mut Frame, snapshot: &MatchSnapshot, max_log_rows: usize) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)].as_ref())
        .split(f.size());

    let winner = snapshot.winner.unwrap_or(Corner::Red);
    let method = snapshot
        .win_method
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let box_score = |c: &Competitor| {
        Line::from(vec![
            Span::styled(format!("{:<24}", c.display_name()), bold(corner_color(c.corner))),
            Span::raw(format!("{:>4}", c.score)),
            Span::raw(format!(
                "   stall {}  caution {}",
                c.stalling_count, c.caution_count
            )),
        ])
    };
    let banner = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                snapshot.competitor(winner).display_name(),
                bold(corner_color(winner)),
            ),
            Span::raw(" defeats "),
            Span::styled(
                snapshot.competitor(winner.opponent()).display_name(),
                bold(corner_color(winner.opponent())),
            ),
        ]),
        Line::from(format!("Final Result: {method}")),
        Line::from(""),
        box_score(&snapshot.red),
        box_score(&snapshot.green),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" new match   "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Match Summary"));
    f.render_widget(banner, rows[0]);
    f.render_widget(log_list(&snapshot.logs, max_log_rows, "Timeline"), rows[1]);
}
