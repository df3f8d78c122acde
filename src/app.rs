//! Terminal adapter: application state, event handling, and rendering.
//!
//! All filtering and selection state lives in [`SeasonBrowser`]; this module
//! only owns cursor position, input mode, theme, and the layout rectangles
//! needed for mouse hit-testing.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::browser::{DismissReason, SeasonBrowser};
use crate::event::Event;
use crate::model::{Era, LeaderBadge, RankIndicator};
use crate::theme::{rank_icon, Theme};
use crate::view::{DetailView, RowView, FORMULA_DETAILS};

const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 20;

/// Border (1) + header row (1) + header bottom margin (1).
const TABLE_BODY_OFFSET: u16 = 3;

const CLOSE_ICON: &str = " ✕ ";
const CLOSE_BUTTON: &str = "[ Close ]";

/// Return value from event handling.
#[derive(Debug, PartialEq)]
pub enum Action {
    Continue,
    Quit,
}

/// Input mode for modal states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Search,
    Help,
}

/// Core application state.
pub struct App {
    pub browser: SeasonBrowser,

    // UI state
    pub table_state: TableState,
    pub mode: InputMode,
    pub theme: Theme,

    // Layout areas for mouse hit-testing
    pub list_area: Rect,
    pub toggle_area: Rect,
    pub popup_area: Rect,
    pub close_icon_area: Rect,
    pub close_button_area: Rect,
}

impl App {
    pub fn new(browser: SeasonBrowser, theme: Theme) -> Self {
        let mut app = Self {
            browser,
            table_state: TableState::default(),
            mode: InputMode::Normal,
            theme,
            list_area: Rect::default(),
            toggle_area: Rect::default(),
            popup_area: Rect::default(),
            close_icon_area: Rect::default(),
            close_button_area: Rect::default(),
        };
        app.clamp_cursor();
        app
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        let mut events = crate::event::EventHandler::new();

        loop {
            // RENDER
            terminal.draw(|frame| self.render(frame))?;

            // WAIT FOR EVENT
            let Some(event) = events.next().await else {
                break;
            };

            // UPDATE
            if self.handle_event(event) == Action::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a single event.
    pub fn handle_event(&mut self, event: Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(_, _) => Action::Continue,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Action {
        match self.mode {
            InputMode::Help => {
                // Any key dismisses
                self.mode = InputMode::Normal;
                return Action::Continue;
            }
            InputMode::Search => {
                match key.code {
                    KeyCode::Char(c) => self.browser.push_search(c),
                    KeyCode::Backspace => self.browser.pop_search(),
                    KeyCode::Enter => self.mode = InputMode::Normal,
                    KeyCode::Esc => {
                        self.browser.set_search("");
                        self.mode = InputMode::Normal;
                    }
                    _ => {}
                }
                self.clamp_cursor();
                return Action::Continue;
            }
            InputMode::Normal => {}
        }

        // Global keys
        match key.code {
            KeyCode::Char('?') => {
                self.mode = InputMode::Help;
                return Action::Continue;
            }
            KeyCode::Char('t') => {
                self.theme = self.theme.next();
                return Action::Continue;
            }
            _ => {}
        }

        // Rows and filters are inert while the detail panel is up
        if self.browser.is_panel_open() {
            match key.code {
                KeyCode::Esc => self.browser.dismiss(DismissReason::Escape),
                KeyCode::Char('c') => self.browser.dismiss(DismissReason::CloseButton),
                _ => {}
            }
            return Action::Continue;
        }

        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Enter => self.open_cursor_row(),
            KeyCode::Char('/') => self.mode = InputMode::Search,
            KeyCode::Char('p') => self.browser.cycle_player(true),
            KeyCode::Char('P') => self.browser.cycle_player(false),
            KeyCode::Char('e') => self.browser.cycle_era(true),
            KeyCode::Char('E') => self.browser.cycle_era(false),
            KeyCode::Char('x') => self.browser.reset_filters(),
            KeyCode::Char('i') => self.browser.toggle_formula(),
            _ => {}
        }
        self.clamp_cursor();

        Action::Continue
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Action {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.mode != InputMode::Normal {
                    self.mode = InputMode::Normal;
                    return Action::Continue;
                }
                if self.browser.is_panel_open() {
                    if self.close_icon_area.contains(pos) {
                        self.browser.dismiss(DismissReason::CloseIcon);
                    } else if self.close_button_area.contains(pos) {
                        self.browser.dismiss(DismissReason::CloseButton);
                    } else if !self.popup_area.contains(pos) {
                        self.browser.dismiss(DismissReason::Scrim);
                    }
                } else if self.toggle_area.contains(pos) {
                    self.browser.toggle_formula();
                } else if let Some(row) = self.row_at(pos) {
                    self.table_state.select(Some(row));
                    self.browser.activate(row);
                }
            }
            MouseEventKind::ScrollDown if !self.browser.is_panel_open() => self.select_next(),
            MouseEventKind::ScrollUp if !self.browser.is_panel_open() => self.select_previous(),
            _ => {}
        }
        Action::Continue
    }

    /// Filtered row under a screen position, if any.
    fn row_at(&self, pos: Position) -> Option<usize> {
        if !self.list_area.contains(pos) {
            return None;
        }
        let body_top = self.list_area.y + TABLE_BODY_OFFSET;
        let body_bottom = self.list_area.bottom().saturating_sub(1);
        if pos.y < body_top || pos.y >= body_bottom {
            return None;
        }
        let row = self.table_state.offset() + (pos.y - body_top) as usize;
        (row < self.browser.filtered_len()).then_some(row)
    }

    // ─────────────────────────────────────────────────────────
    // Cursor helpers
    // ─────────────────────────────────────────────────────────

    fn open_cursor_row(&mut self) {
        if let Some(row) = self.table_state.selected() {
            self.browser.activate(row);
        }
    }

    /// Keep the cursor inside the filtered list after it changes.
    fn clamp_cursor(&mut self) {
        let len = self.browser.filtered_len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let i = self.table_state.selected().map(|s| s.min(len - 1)).unwrap_or(0);
        self.table_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let len = self.browser.filtered_len();
        if len == 0 {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map(|s| (s + 1).min(len - 1))
            .unwrap_or(0);
        self.table_state.select(Some(i));
    }

    fn select_previous(&mut self) {
        if self.browser.filtered_len() == 0 {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map(|s| s.saturating_sub(1))
            .unwrap_or(0);
        self.table_state.select(Some(i));
    }

    fn select_first(&mut self) {
        if self.browser.filtered_len() > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        let len = self.browser.filtered_len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    // ─────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.list_area = Rect::default();
        self.toggle_area = Rect::default();
        self.popup_area = Rect::default();
        self.close_icon_area = Rect::default();
        self.close_button_area = Rect::default();

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            let msg = Paragraph::new(format!(
                "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(self.theme.error));
            frame.render_widget(msg, area);
            return;
        }

        let formula_height = if self.browser.formula_visible() {
            FORMULA_DETAILS.len() as u16 + 2
        } else {
            0
        };

        let [title_area, filter_area, toggle_area, formula_area, list_area, status_area] =
            Layout::vertical([
                Constraint::Length(1),              // title bar
                Constraint::Length(2),              // search + selectors
                Constraint::Length(1),              // formula toggle
                Constraint::Length(formula_height), // formula details
                Constraint::Fill(1),                // seasons table
                Constraint::Length(1),              // status bar
            ])
            .areas(area);

        self.render_title_bar(frame, title_area);
        self.render_filter_bar(frame, filter_area);
        self.render_formula_toggle(frame, toggle_area);
        if formula_height > 0 {
            self.render_formula_details(frame, formula_area);
        }
        self.render_season_table(frame, list_area);
        self.render_status_bar(frame, status_area);

        // Overlays
        if let Some(detail) = self.browser.detail() {
            self.render_detail_panel(frame, area, &detail);
        }
        if self.mode == InputMode::Help {
            self.render_help_overlay(frame, area);
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let counts = format!(
            "{} of {} seasons  │ {} ",
            self.browser.filtered_len(),
            self.browser.records().len(),
            self.theme.name
        );
        let heading = " ◆ QB Season Rankings";
        let padding = area
            .width
            .saturating_sub((heading.chars().count() + counts.chars().count()) as u16)
            as usize;

        let title = Line::from(vec![
            Span::styled(heading, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(padding)),
            Span::raw(counts),
        ]);

        frame.render_widget(
            Paragraph::new(title).style(
                Style::default()
                    .bg(self.theme.bar_bg)
                    .fg(self.theme.text_on_bar),
            ),
            area,
        );
    }

    fn render_filter_bar(&self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let filter = self.browser.filter();
        let [search_area, selector_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let mut search = vec![Span::styled(
            " Search: ",
            Style::default().fg(theme.text_secondary),
        )];
        if self.mode == InputMode::Search {
            search.push(Span::raw(filter.search.as_str()));
            search.push(Span::styled("█", Style::default().fg(theme.accent)));
        } else if filter.search.is_empty() {
            search.push(Span::styled(
                "player, season or team  (/)",
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::DIM),
            ));
        } else {
            search.push(Span::styled(
                filter.search.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(search)), search_area);

        let mut selectors = vec![
            Span::styled(" Player: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                format!("‹ {} ›", filter.player),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  Era:", Style::default().fg(theme.text_secondary)),
        ];
        for era in Era::ALL {
            if era == filter.era {
                selectors.push(Span::styled(
                    format!(" [{era}]"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                selectors.push(Span::styled(
                    format!("  {era} "),
                    Style::default().fg(theme.text_secondary),
                ));
            }
        }
        if !filter.is_default() {
            selectors.push(Span::styled(
                "  │  filtered (x to reset)",
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(selectors)), selector_area);
    }

    fn render_formula_toggle(&mut self, frame: &mut Frame, area: Rect) {
        let marker = if self.browser.formula_visible() { "▾" } else { "▸" };
        let label = format!(" {marker} {} ", self.browser.formula_toggle_label());
        self.toggle_area = Rect {
            width: (label.chars().count() as u16).min(area.width),
            ..area
        };

        let line = Line::from(vec![
            Span::styled(
                label,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(" (i)", Style::default().fg(self.theme.text_secondary)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_formula_details(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = FORMULA_DETAILS
            .iter()
            .map(|l| Line::styled(*l, Style::default().fg(self.theme.text_primary)))
            .collect();
        let block = Block::bordered()
            .title(" Formula ")
            .border_style(Style::default().fg(self.theme.border));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_season_table(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        self.list_area = area;

        let block = Block::bordered()
            .border_style(Style::default().fg(theme.border))
            .title(" Seasons ");

        let views = self.browser.rows();
        if views.is_empty() {
            let msg = Paragraph::new("No seasons match the current filters")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.text_secondary))
                .block(block);
            frame.render_widget(msg, area);
            return;
        }

        let header = Row::new(vec!["Rank", "Score", "Player", "Season", "Team", "MVP", "Bonuses"])
            .style(
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);

        let rows: Vec<Row> = views.iter().map(|view| season_row(view, &theme)).collect();

        let widths = [
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Length(6),
            Constraint::Length(20),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("▸ ");

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let keys: &[(&str, &str)] = if self.browser.is_panel_open() {
            &[("Esc/c", " Close  "), ("t", " Theme")]
        } else {
            &[
                (" ↑↓", " Navigate  "),
                ("Enter", " Details  "),
                ("/", " Search  "),
                ("p/P", " Player  "),
                ("e/E", " Era  "),
                ("x", " Reset  "),
                ("i", " Formula  "),
                ("?", " Help  "),
                ("q", " Quit"),
            ]
        };

        let spans: Vec<Span> = keys
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(*label),
                ]
            })
            .collect();

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(
                Style::default()
                    .bg(self.theme.bar_bg)
                    .fg(self.theme.text_on_bar),
            ),
            area,
        );
    }

    fn render_detail_panel(&mut self, frame: &mut Frame, area: Rect, detail: &DetailView) {
        let theme = self.theme;

        // Scrim
        frame
            .buffer_mut()
            .set_style(area, Style::default().fg(theme.scrim).add_modifier(Modifier::DIM));

        let popup = centered_rect(70, 17, area);
        self.popup_area = popup;
        frame.render_widget(Clear, popup);

        let (icon, icon_color) = rank_icon(RankIndicator::from_rank(detail.rank), &theme);
        let block = Block::bordered()
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface).fg(theme.text_primary))
            .title(Line::from(vec![
                Span::styled(format!(" {icon}"), Style::default().fg(icon_color)),
                Span::styled(
                    format!(" {} ", detail.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]))
            .title_top(
                Line::styled(CLOSE_ICON, Style::default().fg(theme.error)).right_aligned(),
            );
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let close_icon_width = CLOSE_ICON.chars().count() as u16;
        self.close_icon_area = Rect {
            x: popup.right().saturating_sub(close_icon_width + 1),
            y: popup.y,
            width: close_icon_width,
            height: 1,
        };

        let [subtitle_area, total_area, _, cards_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(detail.subtitle.as_str())
                .style(Style::default().fg(theme.text_secondary)),
            subtitle_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Total Score ", Style::default().fg(theme.text_secondary)),
                Span::styled(
                    detail.total_score.as_str(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ])),
            total_area,
        );

        self.render_stat_cards(frame, cards_area, detail);

        let button_width = CLOSE_BUTTON.chars().count() as u16;
        let [_, button, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(button_width),
            Constraint::Fill(1),
        ])
        .areas(button_area);
        self.close_button_area = button;
        frame.render_widget(
            Paragraph::new(CLOSE_BUTTON).style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            button,
        );
    }

    /// Five stat cards and the bonus card, in a 3x2 grid.
    fn render_stat_cards(&self, frame: &mut Frame, area: Rect, detail: &DetailView) {
        let theme = self.theme;
        let grid_rows: [Rect; 2] =
            Layout::vertical([Constraint::Length(4), Constraint::Length(4)]).areas(area);
        let cells: Vec<Rect> = grid_rows
            .iter()
            .flat_map(|row| {
                Layout::horizontal([Constraint::Ratio(1, 3); 3])
                    .split(*row)
                    .to_vec()
            })
            .collect();

        for (card, cell) in detail.stats.iter().zip(&cells) {
            let lines = vec![
                Line::styled(card.value.as_str(), Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(card.points.as_str(), Style::default().fg(theme.success)),
            ];
            frame.render_widget(
                Paragraph::new(lines).block(card_block(card.stat.label(), &theme)),
                *cell,
            );
        }

        if let Some(cell) = cells.get(detail.stats.len()) {
            let badges = if detail.bonus.badges.is_empty() {
                Line::styled("none", Style::default().fg(theme.text_secondary))
            } else {
                Line::from(badge_spans(&detail.bonus.badges, &theme))
            };
            let lines = vec![
                badges,
                Line::styled(
                    detail.bonus.points.as_str(),
                    Style::default().fg(theme.success),
                ),
            ];
            frame.render_widget(
                Paragraph::new(lines).block(card_block("Bonuses", &theme)),
                *cell,
            );
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 19, area);
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw("  ↑/k ↓/j   Move row cursor"),
            Line::raw("  Home/End  First/last season"),
            Line::raw("  Enter     Open season breakdown"),
            Line::raw("  Esc / c   Close season breakdown"),
            Line::raw("  /         Search player, season or team"),
            Line::raw("  p / P     Next / previous player"),
            Line::raw("  e / E     Next / previous era"),
            Line::raw("  x         Reset all filters"),
            Line::raw("  i         Show / hide formula details"),
            Line::raw("  t         Cycle theme"),
            Line::raw("  ?         Toggle this help"),
            Line::raw("  q         Quit"),
            Line::raw(""),
            Line::styled(
                "Press any key to close",
                Style::default().fg(self.theme.text_secondary),
            ),
        ];

        let help = Paragraph::new(help_text).block(
            Block::bordered()
                .title(" Help ")
                .border_style(Style::default().fg(self.theme.accent))
                .style(Style::default().bg(self.theme.surface)),
        );

        frame.render_widget(help, popup_area);
    }
}

// ─────────────────────────────────────────────────────────
// Standalone helper functions
// ─────────────────────────────────────────────────────────

fn season_row<'a>(view: &'a RowView, theme: &Theme) -> Row<'a> {
    let (icon, icon_color) = rank_icon(view.rank_indicator, theme);
    let rank = Line::from(vec![
        Span::styled(format!("{icon:<1} "), Style::default().fg(icon_color)),
        Span::raw(format!("#{}", view.rank)),
    ]);
    let finish = Span::styled(
        view.finish.as_str(),
        Style::default()
            .fg(theme.finish_fg(view.finish_text_class))
            .add_modifier(Modifier::BOLD),
    );

    let mut style = Style::default().fg(theme.text_primary);
    if let Some(bg) = theme.row_bg(view.finish_class) {
        style = style.bg(bg);
    }

    Row::new(vec![
        Cell::from(rank),
        Cell::from(Span::styled(
            view.score.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Cell::from(view.player.as_str()),
        Cell::from(view.season.as_str()),
        Cell::from(view.team.as_str()),
        Cell::from(finish),
        Cell::from(Line::from(badge_spans(&view.badges, theme))),
    ])
    .style(style)
}

fn badge_spans(badges: &[LeaderBadge], theme: &Theme) -> Vec<Span<'static>> {
    badges
        .iter()
        .map(|b| {
            Span::styled(
                format!("{} ", b.label()),
                Style::default()
                    .fg(theme.badge_fg(*b))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn card_block(label: &str, theme: &Theme) -> Block<'static> {
    Block::bordered()
        .title(Span::styled(
            format!(" {label} "),
            Style::default().fg(theme.text_secondary),
        ))
        .border_style(Style::default().fg(theme.border))
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
