// third-party imports
use enum_map::EnumMap;

// local imports
use crate::{
    eseq::{Color, Sequence},
    level::Level,
};

// ---

/// Head and tail wrapped around a single console line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decoration {
    pub head: Sequence,
    pub tail: Sequence,
}

impl Decoration {
    pub fn new(head: impl Into<Sequence>, tail: impl Into<Sequence>) -> Self {
        Self {
            head: head.into(),
            tail: tail.into(),
        }
    }

    /// Styled head followed by a reset tail.
    pub fn styled(head: impl Into<Sequence>) -> Self {
        Self::new(head, Sequence::reset())
    }

    pub fn none() -> Self {
        Self::default()
    }
}

// ---

/// Per-level decorations used by the leveled printer.
#[derive(Clone, Debug)]
pub struct Theme {
    decorations: EnumMap<Level, Decoration>,
}

impl Theme {
    /// Theme without any escape sequences, suitable for files and pipes.
    pub fn plain() -> Self {
        Self {
            decorations: EnumMap::default(),
        }
    }

    /// Colored theme for interactive terminals.
    pub fn colored() -> Self {
        Self {
            decorations: EnumMap::from_fn(|level| match level {
                Level::Error => Decoration::styled(Color::Red.bright().fg()),
                Level::Warning => Decoration::styled(Color::Yellow.bright().fg()),
                Level::Info => Decoration::none(),
                Level::Debug => Decoration::styled(Color::White.fg()),
            }),
        }
    }

    pub fn with_colors(colors: bool) -> Self {
        if colors { Self::colored() } else { Self::plain() }
    }

    #[inline]
    pub fn decoration(&self, level: Level) -> &Decoration {
        &self.decorations[level]
    }

    pub fn set(&mut self, level: Level, decoration: Decoration) {
        self.decorations[level] = decoration;
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
