use super::*;

#[test]
fn test_color_render() {
    let mut buf = Vec::new();
    Color::Red.render(&mut buf, 30);
    assert_eq!(buf, b"31");

    buf.clear();
    Color::White.render(&mut buf, 30);
    assert_eq!(buf, b"37");
}

#[test]
fn test_color_code_render() {
    let mut buf = Vec::new();
    ColorCode::Plain(Color::Red, Brightness::Bright).render(&mut buf, 30);
    assert_eq!(buf, b"91");

    buf.clear();
    ColorCode::Plain(Color::Yellow, Brightness::Normal).render(&mut buf, 30);
    assert_eq!(buf, b"33");
}

#[test]
fn test_color_fg() {
    assert_eq!(
        Color::Yellow.bright().fg(),
        StyleCode::Foreground(ColorCode::Plain(Color::Yellow, Brightness::Bright))
    );
    assert_eq!(
        Color::Green.fg(),
        StyleCode::Foreground(ColorCode::Plain(Color::Green, Brightness::Normal))
    );
}

#[test]
fn test_sequence_reset() {
    assert_eq!(Sequence::reset().data(), b"\x1b[0m");
}

#[test]
fn test_sequence_from_style_code() {
    let seq: Sequence = Color::Red.bright().fg().into();
    assert_eq!(seq.data(), b"\x1b[0;91m");

    let seq: Sequence = Color::White.fg().into();
    assert_eq!(seq.data(), b"\x1b[0;37m");
}

#[test]
fn test_sequence_from_str() {
    let seq = Sequence::from("[+] ");
    assert_eq!(seq.data(), b"[+] ");
    assert!(!seq.is_empty());
    assert!(Sequence::default().is_empty());
}

#[test]
fn test_clear_line() {
    assert_eq!(CLEAR_LINE, b"\x1b[2K\r");
}
