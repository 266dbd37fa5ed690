use datemask::config::FormatterConfig;
use datemask::field::DateField;
use datemask::mask::EditOutcome;
use datemask::terminal::{
    CursorPos, KeyCode, KeyEvent, Span, SpanLine, Terminal, TerminalEvent,
};
use std::env;
use std::error::Error;
use std::io;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "> ";
const HELP: &str = "  tab: format  enter: show date  esc: quit";
const FULL_DATE: &str = "%A, %B %-d, %Y";

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match env::args_os().nth(1) {
        Some(path) => FormatterConfig::load(path)?,
        None => FormatterConfig::default(),
    };

    let mut terminal = Terminal::new();
    terminal.enter_raw_mode()?;
    let result = event_loop(&mut terminal, Demo::new(&config));
    // Raw mode is left even when the loop or the final redraw failed.
    let finished = terminal.finish();
    let restored = terminal.exit_raw_mode();
    first_error([result, finished, restored])?;
    Ok(())
}

fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().collect()
}

fn event_loop(terminal: &mut Terminal, mut demo: Demo) -> io::Result<()> {
    terminal.draw(&demo.lines(), Some(demo.cursor()))?;

    loop {
        if !terminal.poll(Duration::from_millis(100))? {
            continue;
        }
        match terminal.read_event()? {
            TerminalEvent::Key(key) => {
                if demo.handle_key(key) == Flow::Quit {
                    return Ok(());
                }
            }
            TerminalEvent::Resize { .. } => {}
        }
        terminal.draw(&demo.lines(), Some(demo.cursor()))?;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Demo {
    field: DateField,
    status: Option<String>,
}

impl Demo {
    fn new(config: &FormatterConfig) -> Self {
        let field = DateField::from_config(config).with_listener(|change| {
            log::debug!("value changed: {:?} -> {:?}", change.text, change.date);
        });
        Self {
            field,
            status: None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let ctrl = key.is_ctrl();
        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if ctrl => return Flow::Quit,
            KeyCode::Char(ch) if !ctrl => {
                let outcome = self.field.type_str(ch.encode_utf8(&mut [0; 4]));
                self.status = match outcome {
                    EditOutcome::Veto(reason) => Some(reason.to_string()),
                    EditOutcome::Accept { .. } | EditOutcome::Replace { .. } => None,
                };
            }
            KeyCode::Backspace => {
                self.field.backspace();
                self.status = None;
            }
            KeyCode::Tab => {
                let next = self.field.formatter().format().next();
                self.field.set_format(next);
                self.status = None;
            }
            KeyCode::Enter => {
                self.status = Some(match self.field.date() {
                    Some(date) => date.format(FULL_DATE).to_string(),
                    None => "no date yet".to_string(),
                });
            }
            KeyCode::Char(_) | KeyCode::Other => {}
        }
        Flow::Continue
    }

    fn lines(&self) -> Vec<SpanLine> {
        let format = self.field.formatter().format();
        let mut lines = vec![
            vec![
                Span::new(format!("Date ({})", format.label())),
                Span::dim(HELP),
            ],
            vec![
                Span::new(PROMPT),
                Span::new(self.field.text()),
                Span::dim(self.hint()),
            ],
        ];
        if let Some(status) = &self.status {
            lines.push(vec![Span::new(status.as_str())]);
        }
        lines
    }

    /// Part of the placeholder not yet covered by typed text.
    fn hint(&self) -> String {
        self.field
            .placeholder()
            .chars()
            .skip(self.field.char_len())
            .collect()
    }

    fn cursor(&self) -> CursorPos {
        let width = PROMPT.width() + self.field.text().width();
        CursorPos {
            col: u16::try_from(width).unwrap_or(u16::MAX),
            row: 1,
        }
    }
}
