pub mod input_event;
pub mod span;
pub mod terminal;

pub use input_event::{KeyCode, KeyEvent, KeyModifiers};
pub use span::{Span, SpanLine};
pub use terminal::{CursorPos, Terminal, TerminalEvent};
