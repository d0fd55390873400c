use crate::entities::{transaction_history, BankDirectory, GpiTransaction, TransactionStatus};
use crate::message::{synthesize, PaymentInstruction};
use crate::store::MessageStore;
use crate::tracer::{TracerOutcome, TracerValidation};
use crate::validator::{validate, ValidationVerdict};
use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::ThreadRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Tick period for the event loop; one tracer step per tick
const TICK_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    CreateMessage,
    Tracker,
    Message,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::CreateMessage => Page::Tracker,
            Page::Tracker => Page::Message,
            Page::Message => Page::CreateMessage,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::CreateMessage => Page::Message,
            Page::Tracker => Page::CreateMessage,
            Page::Message => Page::Tracker,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::CreateMessage => "Create Message",
            Page::Tracker => "GPI Tracker",
            Page::Message => "Message",
        }
    }
}

/// Form fields in focus order. SenderBank is the directory dropdown; the
/// rest are free-text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SenderBank,
    SenderReference,
    Amount,
    Currency,
    ReceiverBic,
    BeneficiaryName,
    BeneficiaryAccount,
    RemittanceInfo,
    Trn,
}

const FORM_FIELDS: [FormField; 9] = [
    FormField::SenderBank,
    FormField::SenderReference,
    FormField::Amount,
    FormField::Currency,
    FormField::ReceiverBic,
    FormField::BeneficiaryName,
    FormField::BeneficiaryAccount,
    FormField::RemittanceInfo,
    FormField::Trn,
];

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::SenderBank => "Sender Bank",
            FormField::SenderReference => "Sender Reference",
            FormField::Amount => "Amount",
            FormField::Currency => "Currency",
            FormField::ReceiverBic => "Receiver BIC",
            FormField::BeneficiaryName => "Beneficiary Name",
            FormField::BeneficiaryAccount => "Beneficiary Account",
            FormField::RemittanceInfo => "Remittance Information",
            FormField::Trn => "Transaction Reference Number (TRN)",
        }
    }
}

pub struct App {
    pub directory: BankDirectory,
    pub store: MessageStore,
    pub history: Vec<GpiTransaction>,
    pub current_page: Page,

    // Creation form
    pub form: PaymentInstruction,
    pub selected_bank: usize,
    pub focused_field: usize,
    pub status_line: Option<String>,

    // Tracker
    pub trn_input: String,
    pub verdict: Option<ValidationVerdict>,
    pub history_state: TableState,
    pub show_tracer_prompt: bool,
    pub show_tracer_dialog: bool,
    pub tracer: TracerValidation,

    // Message view
    pub show_raw: bool,
    pub message_scroll: u16,

    rng: ThreadRng,
}

impl App {
    pub fn new() -> Self {
        let history = transaction_history();
        let mut history_state = TableState::default();
        if !history.is_empty() {
            history_state.select(Some(0));
        }

        Self {
            directory: BankDirectory::new(),
            store: MessageStore::new(),
            history,
            current_page: Page::CreateMessage,
            form: PaymentInstruction::default(),
            selected_bank: 0,
            focused_field: 0,
            status_line: None,
            trn_input: String::new(),
            verdict: None,
            history_state,
            show_tracer_prompt: false,
            show_tracer_dialog: false,
            tracer: TracerValidation::new(),
            show_raw: false,
            message_scroll: 0,
            rng: rand::thread_rng(),
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    // ------------------------------------------------------------------
    // Creation form
    // ------------------------------------------------------------------

    pub fn focused(&self) -> FormField {
        FORM_FIELDS[self.focused_field]
    }

    pub fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % FORM_FIELDS.len();
    }

    pub fn previous_field(&mut self) {
        self.focused_field = if self.focused_field == 0 {
            FORM_FIELDS.len() - 1
        } else {
            self.focused_field - 1
        };
    }

    pub fn next_bank(&mut self) {
        self.selected_bank = (self.selected_bank + 1) % self.directory.count();
    }

    pub fn previous_bank(&mut self) {
        self.selected_bank = if self.selected_bank == 0 {
            self.directory.count() - 1
        } else {
            self.selected_bank - 1
        };
    }

    fn field_value_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            FormField::SenderBank => None,
            FormField::SenderReference => Some(&mut self.form.sender_reference),
            FormField::Amount => Some(&mut self.form.amount),
            FormField::Currency => Some(&mut self.form.currency),
            FormField::ReceiverBic => Some(&mut self.form.receiver_bic),
            FormField::BeneficiaryName => Some(&mut self.form.beneficiary_name),
            FormField::BeneficiaryAccount => Some(&mut self.form.beneficiary_account),
            FormField::RemittanceInfo => Some(&mut self.form.remittance_info),
            FormField::Trn => Some(&mut self.form.trn),
        }
    }

    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::SenderBank => &self.form.sender_bank,
            FormField::SenderReference => &self.form.sender_reference,
            FormField::Amount => &self.form.amount,
            FormField::Currency => &self.form.currency,
            FormField::ReceiverBic => &self.form.receiver_bic,
            FormField::BeneficiaryName => &self.form.beneficiary_name,
            FormField::BeneficiaryAccount => &self.form.beneficiary_account,
            FormField::RemittanceInfo => &self.form.remittance_info,
            FormField::Trn => &self.form.trn,
        }
    }

    pub fn form_input(&mut self, c: char) {
        if let Some(value) = self.field_value_mut() {
            value.push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(value) = self.field_value_mut() {
            value.pop();
        }
    }

    /// Submit the form: resolve the dropdown, synthesize, store, and jump to
    /// the Message page (the original opened a result dialog here).
    pub fn submit_form(&mut self) {
        let bank = &self.directory.all()[self.selected_bank];
        self.form.sender_bank = bank.name.clone();
        self.form.sender_bic = bank.bic.clone();

        let message = synthesize(&self.form, &mut self.rng, Utc::now());
        self.store.store(self.form.clone(), message);

        self.status_line = Some(format!(
            "SWIFT GPI Message Created - {} stored this session",
            self.store.count()
        ));
        self.show_raw = false;
        self.message_scroll = 0;
        self.current_page = Page::Message;
    }

    // ------------------------------------------------------------------
    // Tracker
    // ------------------------------------------------------------------

    pub fn trn_input_char(&mut self, c: char) {
        self.trn_input.push(c);
    }

    pub fn trn_backspace(&mut self) {
        self.trn_input.pop();
    }

    /// Validate the entered TRN; a failed verdict offers the tracer dialog
    pub fn submit_trn(&mut self) {
        let verdict = validate(&self.trn_input, &mut self.rng);
        self.show_tracer_prompt = !verdict.is_valid;
        self.verdict = Some(verdict);
    }

    pub fn accept_tracer_prompt(&mut self) {
        self.show_tracer_prompt = false;
        self.show_tracer_dialog = true;
        self.tracer.start();
    }

    pub fn decline_tracer_prompt(&mut self) {
        self.show_tracer_prompt = false;
    }

    pub fn close_tracer_dialog(&mut self) {
        self.show_tracer_dialog = false;
        self.tracer.cancel();
    }

    pub fn history_next(&mut self) {
        let len = self.history.len();
        if len == 0 {
            return;
        }
        let i = match self.history_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.history_state.select(Some(i));
    }

    pub fn history_previous(&mut self) {
        let len = self.history.len();
        if len == 0 {
            return;
        }
        let i = match self.history_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.history_state.select(Some(i));
    }

    // ------------------------------------------------------------------
    // Message view
    // ------------------------------------------------------------------

    pub fn toggle_raw(&mut self) {
        self.show_raw = !self.show_raw;
    }

    pub fn scroll_down(&mut self) {
        self.message_scroll = self.message_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.message_scroll = self.message_scroll.saturating_sub(1);
    }

    /// One event-loop tick: advances the tracer while its dialog is open
    pub fn on_tick(&mut self) {
        if self.show_tracer_dialog {
            self.tracer.tick(&mut self.rng);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(TICK_MS))? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key.code, key.modifiers) {
                    return Ok(());
                }
            }
        } else {
            app.on_tick();
        }
    }
}

/// Dispatch one key press. Returns true when the app should exit.
fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    // Dialogs swallow input first
    if app.show_tracer_prompt {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.accept_tracer_prompt(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.decline_tracer_prompt(),
            _ => {}
        }
        return false;
    }

    if app.show_tracer_dialog {
        if matches!(code, KeyCode::Esc | KeyCode::Enter) {
            app.close_tracer_dialog();
        }
        return false;
    }

    match code {
        KeyCode::Esc => return true,
        KeyCode::Tab => {
            if modifiers.contains(KeyModifiers::SHIFT) {
                app.previous_page();
            } else {
                app.next_page();
            }
        }
        KeyCode::BackTab => app.previous_page(),
        _ => match app.current_page {
            Page::CreateMessage => match code {
                KeyCode::Down => app.next_field(),
                KeyCode::Up => app.previous_field(),
                KeyCode::Left if app.focused() == FormField::SenderBank => app.previous_bank(),
                KeyCode::Right if app.focused() == FormField::SenderBank => app.next_bank(),
                KeyCode::Enter => app.submit_form(),
                KeyCode::Backspace => app.form_backspace(),
                KeyCode::Char(c) => app.form_input(c),
                _ => {}
            },
            Page::Tracker => match code {
                KeyCode::Down => app.history_next(),
                KeyCode::Up => app.history_previous(),
                KeyCode::Enter => app.submit_trn(),
                KeyCode::Backspace => app.trn_backspace(),
                KeyCode::Char(c) => app.trn_input_char(c),
                _ => {}
            },
            Page::Message => match code {
                KeyCode::Char('r') => app.toggle_raw(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                _ => {}
            },
        },
    }

    false
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::CreateMessage => render_create_form(f, chunks[1], app),
        Page::Tracker => render_tracker(f, chunks[1], app),
        Page::Message => render_message(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);

    // Dialog overlays
    if app.show_tracer_prompt {
        render_tracer_prompt(f);
    }
    if app.show_tracer_dialog {
        render_tracer_dialog(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::CreateMessage, Page::Tracker, Page::Message];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        "SWIFT GPI Simulator",
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Created: {}", app.store.count()),
        Style::default().fg(Color::Green),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_create_form(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    for (i, field) in FORM_FIELDS.iter().enumerate() {
        let focused = i == app.focused_field;
        let marker = if focused { "→ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let value_span = match field {
            FormField::SenderBank => {
                let bank = &app.directory.all()[app.selected_bank];
                Span::styled(
                    format!("◂ {} ({}) ▸", bank.name, bank.bic),
                    Style::default().fg(Color::White),
                )
            }
            _ => {
                let value = app.field_value(*field);
                if value.is_empty() {
                    Span::styled(
                        "<empty>",
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    )
                } else {
                    Span::styled(value.to_string(), Style::default().fg(Color::White))
                }
            }
        };

        let mut spans = vec![
            Span::raw(marker),
            Span::styled(format!("{:<36}", field.label()), label_style),
            value_span,
        ];
        if focused && *field != FormField::SenderBank {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(ref status) = app.status_line {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("✓ {}", status),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Create SWIFT GPI Message "),
    );

    f.render_widget(form, area);
}

fn render_tracker(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // TRN input
            Constraint::Length(3), // Verdict banner
            Constraint::Min(0),    // History table
        ])
        .split(area);

    // TRN input
    let input = Paragraph::new(Line::from(vec![
        Span::styled(app.trn_input.as_str(), Style::default().fg(Color::White)),
        Span::styled("▏", Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Validate UETR - enter 16-character TRN "),
    );
    f.render_widget(input, chunks[0]);

    // Verdict banner
    let banner = match &app.verdict {
        Some(verdict) if verdict.is_valid => Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("Valid UETR: {}", verdict.uetr),
                Style::default().fg(Color::Green),
            ),
        ]),
        Some(_) => Line::from(vec![
            Span::styled("✗ ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled("Invalid TRN", Style::default().fg(Color::Red)),
        ]),
        None => Line::from(Span::styled(
            "No validation run yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    };

    let verdict_panel = Paragraph::new(banner).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Validation Result "),
    );
    f.render_widget(verdict_panel, chunks[1]);

    render_history_table(f, chunks[2], app);
}

fn render_history_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["TRN", "UETR", "Status", "Amount", "Date"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.history.iter().map(|tx| {
        let color = status_color(tx.status);

        let cells = vec![
            Cell::from(tx.trn.clone()),
            Cell::from(truncate(&tx.uetr, 26)),
            Cell::from(tx.status.as_str()).style(Style::default().fg(color)),
            Cell::from(tx.amount.clone()),
            Cell::from(tx.date.clone()),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(28),
            Constraint::Length(13),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Recent Transactions - last 5 processed "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.history_state);
}

fn status_color(status: TransactionStatus) -> Color {
    match status {
        TransactionStatus::Completed => Color::Green,
        TransactionStatus::InProgress => Color::Yellow,
        TransactionStatus::Failed => Color::Red,
    }
}

fn render_message(f: &mut Frame, area: Rect, app: &App) {
    let (title, body) = match app.store.latest() {
        Some(stored) => {
            let variant = if app.show_raw { "raw" } else { "formatted" };
            let text = if app.show_raw {
                // CRLFs rendered visibly so the variant is distinguishable
                stored.message.raw.replace("\r\n", "␍␊\n")
            } else {
                stored.message.formatted.clone()
            };
            (
                format!(" SWIFT Message - Full Details ({}) ", variant),
                text,
            )
        }
        None => (
            " SWIFT Message ".to_string(),
            "No message created yet.\n\nFill in the Create Message form and press Enter."
                .to_string(),
        ),
    };

    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .scroll((app.message_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        );

    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![Span::styled(
        format!(" {} ", app.current_page.title()),
        Style::default().fg(Color::Cyan),
    )];

    status_spans.push(Span::raw("| "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));

    match app.current_page {
        Page::CreateMessage => {
            status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Field | "));
            status_spans.push(Span::styled("◂/▸", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Bank | "));
            status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Create | "));
        }
        Page::Tracker => {
            status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Validate | "));
            status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" History | "));
        }
        Page::Message => {
            status_spans.push(Span::styled("r", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Raw/Formatted | "));
            status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Scroll | "));
        }
    }

    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_tracer_prompt(f: &mut Frame) {
    let area = centered_rect(54, 7, f.size());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(
            "Would you like to perform a tracer validation to",
        )),
        Line::from(Span::raw("check the message status with the sender bank?")),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw("es  /  "),
            Span::styled("N", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw("o"),
        ]),
    ];

    let prompt = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" TRN Validation Failed "),
    );

    f.render_widget(prompt, area);
}

fn render_tracer_dialog(f: &mut Frame, app: &App) {
    let area = centered_rect(56, 10, f.size());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Tracer Validation ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1),
            Constraint::Length(1), // Status line
            Constraint::Min(0),    // Outcome
        ])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .percent(app.tracer.progress() as u16);
    f.render_widget(gauge, chunks[1]);

    let status = Paragraph::new(Span::styled(
        app.tracer.status().message(),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(status, chunks[3]);

    if let Some(outcome) = app.tracer.outcome() {
        let color = match outcome {
            TracerOutcome::Success => Color::Green,
            TracerOutcome::InProcess => Color::Yellow,
        };

        let mut lines = vec![Line::from(Span::styled(
            outcome.message(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        if let Some(reason) = outcome.reason() {
            lines.push(Line::from(Span::styled(
                format!("Reason: {}", reason),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let outcome_panel = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(outcome_panel, chunks[4]);
    }
}

/// Fixed-size centered rect for dialog overlays
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
