// std imports
use std::io::Write;

// ---

/// Erases the current terminal line and returns the cursor to column 0.
pub const CLEAR_LINE: &[u8] = b"\x1b[2K\r";

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Brightness {
    Normal,
    Bright,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorCode {
    Plain(Color, Brightness),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleCode {
    Foreground(ColorCode),
}

impl StyleCode {
    fn render(&self, buf: &mut Vec<u8>) {
        match self {
            Self::Foreground(color) => color.render(buf, 30),
        }
    }
}

impl Color {
    pub fn bright(self) -> ColorCode {
        ColorCode::Plain(self, Brightness::Bright)
    }

    pub fn fg(self) -> StyleCode {
        ColorCode::Plain(self, Brightness::Normal).fg()
    }

    fn render(&self, buf: &mut Vec<u8>, base: u8) {
        write!(buf, "{}", base + (*self as u8)).ok();
    }
}

impl ColorCode {
    pub fn fg(self) -> StyleCode {
        StyleCode::Foreground(self)
    }

    fn render(&self, buf: &mut Vec<u8>, base: u8) {
        match self {
            Self::Plain(color, Brightness::Normal) => color.render(buf, base),
            Self::Plain(color, Brightness::Bright) => color.render(buf, base + 60),
        }
    }
}

// ---

/// Rendered SGR escape sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    pub fn reset() -> Self {
        let mut buf = Vec::with_capacity(4);
        begin(&mut buf);
        end(&mut buf);
        Self(buf)
    }

    pub fn data(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<StyleCode> for Sequence {
    fn from(code: StyleCode) -> Self {
        let mut buf = Vec::with_capacity(8);
        begin(&mut buf);
        buf.push(b';');
        code.render(&mut buf);
        end(&mut buf);
        Self(buf)
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

#[inline]
fn begin(buf: &mut Vec<u8>) {
    buf.extend_from_slice(b"\x1b[0");
}

#[inline]
fn end(buf: &mut Vec<u8>) {
    buf.push(b'm');
}

#[cfg(test)]
mod tests;
