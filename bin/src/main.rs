use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::rc::Rc;
use wordle_companion::*;

mod printer;
mod prompt;

/// A companion for Wordle players: it tracks the feedback from each guess and
/// narrows down the words the answer could still be.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Track your guesses interactively while you play.
    Interactive,
    /// Play a full game automatically against the given word, guessing at random.
    Simulate { word: String },
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let mut words_reader = io::BufReader::new(File::open(args.words_file)?);
    let word_bank = WordBank::from_reader(&mut words_reader, WORD_LENGTH)?;

    match args.command {
        Command::Interactive => run_session(&word_bank)?,
        Command::Simulate { word } => simulate(&word, &word_bank),
    }

    Ok(())
}

fn run_session(word_bank: &WordBank) -> io::Result<()> {
    printer::print_wrapped("✨ Welcome to the Wordle Companion! ✨\n");

    let mut engine = ConstraintEngine::new(word_bank);
    let first_guess_candidates = engine.first_guess_candidates();

    // One round fewer than the guess limit, so the user sees the full list of
    // remaining words for their final guess.
    for round in 0..GUESS_LIMIT - 1 {
        let candidates = if round == 0 && !first_guess_candidates.is_empty() {
            first_guess_candidates.clone()
        } else {
            engine.remaining_candidates().to_vec()
        };

        play_round(round, candidates, &mut engine)?;

        if engine.remaining_candidates().len() <= 1 {
            break;
        }
        printer::print_wrapped(&format!(
            "\n📝 There are {} valid words remaining!\n",
            engine.remaining_candidates().len()
        ));
    }

    let remaining = engine.remaining_candidates();
    if remaining.is_empty() {
        printer::print_wrapped("There are no remaining words. Sorry! 😢");
    } else if remaining.len() == 1 {
        printer::print_wrapped(&format!("\nThe correct answer is:\n✨ {} ✨\n", remaining[0]));
    } else {
        printer::print_wrapped("The remaining valid words are:\n");
        print_words(remaining);
        printer::print_wrapped("");
    }

    Ok(())
}

/// Runs one round: the user picks a word, plays it on Wordle, and enters the
/// results, which are folded into the engine.
fn play_round(
    round: usize,
    mut candidates: Vec<Rc<str>>,
    engine: &mut ConstraintEngine,
) -> io::Result<()> {
    printer::print_wrapped(&prompt_text_for_round(round, candidates.len()));
    print_words(&sample_words(&candidates, SUGGESTION_COUNT));

    let guess = loop {
        match prompt::word(engine.word_length())? {
            None => {
                // Reshuffle
                printer::print_wrapped("");
                print_words(&sample_words(&candidates, SUGGESTION_COUNT));
            }
            Some(word) => {
                let accepted = prompt::yes_no(&format!(
                    "\nEnter your guess ({}) on Wordle. Was it accepted? (y/n)\n> ",
                    word
                ))?;
                if accepted {
                    break word;
                }
                // Wordle doesn't know this word, so it can't be the answer.
                engine.remove_candidate(&word);
                candidates.retain(|candidate| candidate.as_ref() != word);
            }
        }
    };

    printer::print_wrapped(
        "\nEnter a sequence of characters '_' (no match), 'g' (green), and 'y' (yellow) \
         indicating the results from your guess on Wordle. For example, if you guessed \
         \"FLUTE\" and the letters 'L' and 'T' were green and yellow respectively, enter: \
         \"_g_y_\".",
    );

    loop {
        let letters = prompt::results(engine.word_length())?;
        let feedback = GuessFeedback {
            guess: guess.as_str(),
            letters,
        };

        let checkpoint = engine.clone();
        match engine.apply_feedback(&feedback) {
            Ok(()) => return Ok(()),
            Err(error) => {
                *engine = checkpoint;
                printer::print_wrapped(&format!(
                    "\nThose results contradict earlier feedback ({}). If you mistyped, \
                     enter them again.",
                    error
                ));
            }
        }
    }
}

fn prompt_text_for_round(round: usize, candidate_count: usize) -> String {
    const ORDINALS: [&str; 6] = ["first", "second", "third", "fourth", "fifth", "sixth"];

    let suffix = if candidate_count <= SUGGESTION_COUNT {
        format!(
            "You can enter any word, but considering there are only {} valid word choices \
             left, you might want to choose one of these:\n",
            candidate_count
        )
    } else {
        String::from("You can enter any word, but here are a few suggestions:\n")
    };

    match ORDINALS.get(round) {
        Some(ordinal) => format!("Choose a word for your {} guess.\n{}", ordinal, suffix),
        None => format!("Choose a word for guess #{}:\n{}", round + 1, suffix),
    }
}

fn print_words(words: &[Rc<str>]) {
    for word in words {
        printer::print_wrapped(word);
    }
}

fn simulate(answer: &str, word_bank: &WordBank) {
    if !word_bank
        .all_words()
        .iter()
        .any(|word| word.as_ref() == answer)
    {
        eprintln!("Error: given word not in the word list.");
        std::process::exit(1);
    }

    let mut engine = ConstraintEngine::new(word_bank);
    let first_guess_candidates = engine.first_guess_candidates();

    for round in 1..=GUESS_LIMIT {
        let candidates = if round == 1 && !first_guess_candidates.is_empty() {
            first_guess_candidates.clone()
        } else {
            engine.remaining_candidates().to_vec()
        };
        let guess = match sample_words(&candidates, 1).into_iter().next() {
            Some(word) => word,
            None => break,
        };

        let feedback = feedback_for_guess(answer, &guess);
        println!("Guess {}: {} ({})", round, guess, feedback.pattern());

        if feedback
            .letters
            .iter()
            .all(|letter| *letter == LetterFeedback::Correct)
        {
            println!("Solved it! It took me {} guesses.", round);
            return;
        }
        engine
            .apply_feedback(&feedback)
            .expect("feedback computed from the answer is consistent");
        engine.remove_candidate(&guess);
    }

    println!("I still couldn't solve it after {} guesses :(", GUESS_LIMIT);
}
