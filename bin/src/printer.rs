use crossterm::terminal;

const FALLBACK_WIDTH: usize = 80;

/// Prints the text wrapped to the terminal width, followed by a newline.
pub fn print_wrapped(text: &str) {
    println!("{}", wrapped(text));
}

/// Wraps the text to the terminal width without printing it.
///
/// Explicit line breaks are preserved. Lines that already fit are left
/// verbatim; longer lines are broken at spaces, with words longer than the
/// width overflowing unbroken.
pub fn wrapped(text: &str) -> String {
    wrap(text, screen_width())
}

fn screen_width() -> usize {
    match terminal::size() {
        Ok((columns, _)) if columns > 0 => columns as usize,
        _ => FALLBACK_WIDTH,
    }
}

fn wrap(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<String>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }

    let mut wrapped = String::new();
    let mut line_length = 0;
    for word in line.split_whitespace() {
        let word_length = word.chars().count();
        if line_length == 0 {
            wrapped.push_str(word);
            line_length = word_length;
        } else if line_length + 1 + word_length <= width {
            wrapped.push(' ');
            wrapped.push_str(word);
            line_length += 1 + word_length;
        } else {
            wrapped.push('\n');
            wrapped.push_str(word);
            line_length = word_length;
        }
    }
    wrapped
}
