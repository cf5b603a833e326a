#[macro_use]
extern crate assert_matches;

use wordle_companion::*;

#[test]
fn feedback_for_guess_correct() {
    let feedback = feedback_for_guess("abcb", "abcb");

    assert_eq!(feedback.guess, "abcb");
    assert_eq!(feedback.letters, vec![LetterFeedback::Correct; 4]);
}

#[test]
fn feedback_for_guess_partial() {
    let feedback = feedback_for_guess("mesas", "sassy");
    assert_eq!(
        feedback.letters,
        vec![
            LetterFeedback::Misplaced,
            LetterFeedback::Misplaced,
            LetterFeedback::Correct,
            LetterFeedback::Absent,
            LetterFeedback::Absent,
        ]
    );

    // The first 'b' claims the one unclaimed 'b' left in the answer; the
    // second gets nothing.
    let feedback = feedback_for_guess("abba", "babb");
    assert_eq!(
        feedback.letters,
        vec![
            LetterFeedback::Misplaced,
            LetterFeedback::Misplaced,
            LetterFeedback::Correct,
            LetterFeedback::Absent,
        ]
    );

    let feedback = feedback_for_guess("abcb", "bcce");
    assert_eq!(
        feedback.letters,
        vec![
            LetterFeedback::Misplaced,
            LetterFeedback::Absent,
            LetterFeedback::Correct,
            LetterFeedback::Absent,
        ]
    );
}

#[test]
fn feedback_for_guess_none_match() {
    let feedback = feedback_for_guess("abcb", "defg");

    assert_eq!(feedback.letters, vec![LetterFeedback::Absent; 4]);
}

#[test]
#[should_panic(expected = "same length")]
fn feedback_for_guess_mismatched_length_panics() {
    feedback_for_guess("goal", "guess");
}

#[test]
fn letter_feedback_from_char() {
    assert_eq!(LetterFeedback::from_char('g'), Some(LetterFeedback::Correct));
    assert_eq!(
        LetterFeedback::from_char('y'),
        Some(LetterFeedback::Misplaced)
    );
    assert_eq!(LetterFeedback::from_char('_'), Some(LetterFeedback::Absent));
    assert_eq!(LetterFeedback::from_char('x'), None);
    assert_eq!(LetterFeedback::from_char('G'), None);
}

#[test]
fn guess_feedback_from_pattern() {
    assert_matches!(
        GuessFeedback::from_pattern("flute", "_g_y_"),
        Some(GuessFeedback {
            guess: "flute",
            letters: _,
        })
    );
    let feedback = GuessFeedback::from_pattern("flute", "_g_y_").unwrap();
    assert_eq!(
        feedback.letters,
        vec![
            LetterFeedback::Absent,
            LetterFeedback::Correct,
            LetterFeedback::Absent,
            LetterFeedback::Misplaced,
            LetterFeedback::Absent,
        ]
    );

    // Wrong length or an unknown character is rejected.
    assert_matches!(GuessFeedback::from_pattern("flute", "_g_y"), None);
    assert_matches!(GuessFeedback::from_pattern("flute", "_g_y__"), None);
    assert_matches!(GuessFeedback::from_pattern("flute", "_g_x_"), None);
}

#[test]
fn guess_feedback_pattern_round_trips() {
    let feedback = feedback_for_guess("mesas", "sassy");

    assert_eq!(feedback.pattern(), "yyg__");
}
