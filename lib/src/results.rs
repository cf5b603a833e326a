use thiserror::Error;

/// The feedback for a single letter of a guess.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LetterFeedback {
    /// The letter is in the answer, at this exact position.
    Correct,
    /// The letter is in the answer, but not at this position.
    Misplaced,
    /// The letter has no further occurrence in the answer.
    Absent,
}

impl LetterFeedback {
    /// Parses the single-character form: 'g' (green), 'y' (yellow), '_' (gray).
    pub fn from_char(value: char) -> Option<LetterFeedback> {
        match value {
            'g' => Some(LetterFeedback::Correct),
            'y' => Some(LetterFeedback::Misplaced),
            '_' => Some(LetterFeedback::Absent),
            _ => None,
        }
    }

    /// The single-character form of this feedback.
    pub fn to_char(self) -> char {
        match self {
            LetterFeedback::Correct => 'g',
            LetterFeedback::Misplaced => 'y',
            LetterFeedback::Absent => '_',
        }
    }
}

/// Indicates that the entered feedback contradicts itself, i.e. the results
/// given so far cannot all be true of a single answer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum ConstraintError {
    /// A letter known to be in the answer has fewer possible positions left
    /// than the number of times it must occur.
    #[error("letter '{letter}' must occur at least {required} time(s), but only {left} position(s) could still hold it")]
    NoRoomForLetter {
        letter: char,
        required: usize,
        left: usize,
    },
    /// Evidence placed two different letters at the same position.
    #[error("position {position} is already fixed to '{current}' and cannot also be '{incoming}'")]
    PositionConflict {
        position: usize,
        current: char,
        incoming: char,
    },
}

/// The feedback for a full guess.
#[derive(Debug, PartialEq)]
pub struct GuessFeedback<'a> {
    pub guess: &'a str,
    /// The feedback for each letter, in the same order as the letters of the guess.
    pub letters: Vec<LetterFeedback>,
}

impl<'a> GuessFeedback<'a> {
    /// Builds the feedback for `guess` from a pattern like `"_g_y_"`, one
    /// character per letter. Returns `None` if the pattern contains an unknown
    /// character or its length doesn't match the guess.
    pub fn from_pattern(guess: &'a str, pattern: &str) -> Option<GuessFeedback<'a>> {
        let letters = pattern
            .chars()
            .map(LetterFeedback::from_char)
            .collect::<Option<Vec<_>>>()?;
        if letters.len() != guess.chars().count() {
            return None;
        }
        Some(GuessFeedback { guess, letters })
    }

    /// The pattern form of this feedback, e.g. `"_g_y_"`.
    pub fn pattern(&self) -> String {
        self.letters.iter().map(|letter| letter.to_char()).collect()
    }
}

/// Computes the feedback Wordle would show for `guess` against `answer`.
///
/// Correct letters claim their answer positions first. A remaining guess
/// letter is only marked `Misplaced` while unclaimed occurrences of it remain
/// in the answer, so repeated letters score the way the game scores them.
///
/// The guess and the answer must be the same length.
pub fn feedback_for_guess<'a>(answer: &str, guess: &'a str) -> GuessFeedback<'a> {
    let answer_letters: Vec<char> = answer.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    assert_eq!(
        answer_letters.len(),
        guess_letters.len(),
        "the guess and the answer must be the same length"
    );

    // Claim an unused occurrence of `letter` in the answer, if one is left.
    fn claim_unused(letter: char, answer: &[char], used: &mut [bool]) -> bool {
        for (i, other) in answer.iter().enumerate() {
            if !used[i] && *other == letter {
                used[i] = true;
                return true;
            }
        }
        false
    }

    let mut used = vec![false; answer_letters.len()];
    let mut letters = vec![LetterFeedback::Absent; guess_letters.len()];
    for (i, letter) in guess_letters.iter().enumerate() {
        if answer_letters[i] == *letter {
            letters[i] = LetterFeedback::Correct;
            used[i] = true;
        }
    }
    for (i, letter) in guess_letters.iter().enumerate() {
        if letters[i] != LetterFeedback::Correct && claim_unused(*letter, &answer_letters, &mut used)
        {
            letters[i] = LetterFeedback::Misplaced;
        }
    }
    GuessFeedback { guess, letters }
}
