use crate::printer;
use std::io;
use std::io::Write;
use wordle_companion::LetterFeedback;

/// Prompts for a guess word of the given length. An empty line means the
/// user wants fresh suggestions instead.
pub fn word(word_length: usize) -> io::Result<Option<String>> {
    prompt_and_parse(
        "\nEnter your guess, or press the return key without guessing to see more suggestions\n> ",
        &format!(
            "Invalid guess. Your guess must be exactly {} letters.",
            word_length
        ),
        |response| {
            if response.is_empty() {
                return Some(None);
            }
            if response.len() == word_length
                && response.chars().all(|letter| letter.is_ascii_alphabetic())
            {
                Some(Some(response.to_lowercase()))
            } else {
                None
            }
        },
    )
}

/// Prompts for a yes or no answer.
pub fn yes_no(text: &str) -> io::Result<bool> {
    prompt_and_parse(text, "Please answer 'y' or 'n'.", |response| {
        match response.to_lowercase().as_str() {
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        }
    })
}

/// Prompts for the per-letter results of a guess, entered as a pattern like
/// `_g_y_`.
pub fn results(word_length: usize) -> io::Result<Vec<LetterFeedback>> {
    prompt_and_parse(
        "\nEnter your results\n> ",
        &format!(
            "Invalid entry. The response must contain {} characters, and each character \
             should be 'g', 'y', or '_'.",
            word_length
        ),
        |response| {
            let letters: Option<Vec<LetterFeedback>> =
                response.chars().map(LetterFeedback::from_char).collect();
            letters.filter(|letters| letters.len() == word_length)
        },
    )
}

/// Prompts until a line the parser accepts is entered, printing
/// `invalid_text` after each rejected line. Returns an error when stdin
/// closes before that happens.
fn prompt_and_parse<T>(
    text: &str,
    invalid_text: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> io::Result<T> {
    loop {
        print!("{}", printer::wrapped(text));
        io::stdout().flush()?;

        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before a valid response was entered",
            ));
        }
        match parse(buffer.trim()) {
            Some(value) => return Ok(value),
            None => printer::print_wrapped(invalid_text),
        }
    }
}
