//! # Prompt composer
//!
//! Renders the instruction sent to the generative oracle. With no history it
//! asks for any common word; once rounds exist it lists the tried words,
//! explains the verdict categories and replays every round's feedback.

use crate::ledger::{FeedbackLedger, Round};
use crate::word::WordLength;

/// Build the prompt for the next guess. Pure: same inputs, same output.
pub fn compose_prompt(length: WordLength, ledger: &FeedbackLedger) -> String {
    let n = length.get();
    let mut prompt = format!(
        "Generate a valid {}-letter English word. The word should be a common English word.",
        n
    );

    if ledger.is_empty() {
        prompt.push_str(&format!(
            "\n\nReply with exactly one {}-letter word and nothing else.",
            n
        ));
        return prompt;
    }

    let tried: Vec<&str> = ledger.guesses().map(|g| g.as_str()).collect();
    prompt.push_str(&format!(
        "\n\nI've already tried these words: {}.",
        tried.join(", ")
    ));

    prompt.push_str(
        "\n\nPrevious guesses and feedback, where \"correct\" means the right letter in the \
         right position, \"present\" means the right letter in the wrong position, and \
         \"absent\" means the letter is not in the word:\n",
    );
    for round in ledger.history() {
        prompt.push_str(&render_round(round));
    }

    prompt.push_str(&format!(
        "\nBased on this feedback, provide a NEW {}-letter word I haven't tried yet. \
         Reply with exactly one {}-letter word, no explanation.",
        n, n
    ));
    prompt
}

fn render_round(round: &Round) -> String {
    let feedback: Vec<String> = round
        .verdicts
        .iter()
        .map(|v| format!("{} (position {}): {}", v.letter, v.position + 1, v.result))
        .collect();
    format!("Guess: {}\nFeedback: {}\n", round.guess, feedback.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{Guess, LetterVerdict, Verdict};

    fn play(ledger: &mut FeedbackLedger, word: &str, results: &[Verdict]) {
        let guess = Guess::new(word, WordLength::new(word.len()).unwrap()).unwrap();
        let verdicts = LetterVerdict::for_guess(&guess, results);
        ledger.append(Round::new(guess, verdicts)).unwrap();
    }

    #[test]
    fn test_every_length_is_requested_exactly() {
        let empty = FeedbackLedger::new();
        for length in WordLength::all() {
            let prompt = compose_prompt(length, &empty);
            assert!(prompt.contains(&format!("{}-letter", length.get())));
            assert!(!prompt.contains("already tried"));
        }
    }

    #[test]
    fn test_empty_ledger_asks_for_common_word() {
        let prompt = compose_prompt(WordLength::new(5).unwrap(), &FeedbackLedger::new());
        assert!(prompt.contains("common English word"));
        assert!(prompt.contains("exactly one 5-letter word"));
    }

    #[test]
    fn test_all_absent_round_is_restated() {
        let mut ledger = FeedbackLedger::new();
        play(&mut ledger, "crane", &[Verdict::Absent; 5]);
        let prompt = compose_prompt(WordLength::new(5).unwrap(), &ledger);

        assert!(prompt.contains("I've already tried these words: crane."));
        assert!(prompt.contains("Guess: crane"));
        for (i, letter) in "crane".chars().enumerate() {
            assert!(prompt.contains(&format!("{} (position {}): absent", letter, i + 1)));
        }
        assert!(prompt.contains("\"absent\" means the letter is not in the word"));
        assert!(prompt.contains("provide a NEW 5-letter word"));
        assert!(prompt.contains("no explanation"));
    }

    #[test]
    fn test_every_prior_guess_appears() {
        use Verdict::*;
        let mut ledger = FeedbackLedger::new();
        play(&mut ledger, "crane", &[Absent; 5]);
        play(&mut ledger, "train", &[Absent, Correct, Present, Absent, Correct]);
        play(&mut ledger, "briny", &[Absent, Correct, Correct, Correct, Absent]);
        let prompt = compose_prompt(WordLength::new(5).unwrap(), &ledger);

        assert!(prompt.contains("crane, train, briny"));
        for word in ["crane", "train", "briny"] {
            assert!(prompt.contains(&format!("Guess: {}\n", word)));
        }
        assert!(prompt.contains("r (position 2): correct"));
        assert!(prompt.contains("a (position 3): present"));
        assert!(prompt.contains("\"correct\" means the right letter in the right position"));
        assert!(prompt.contains("\"present\" means the right letter in the wrong position"));
    }

    #[test]
    fn test_is_deterministic() {
        let mut ledger = FeedbackLedger::new();
        play(&mut ledger, "plant", &[Verdict::Present; 5]);
        let length = WordLength::new(5).unwrap();
        assert_eq!(compose_prompt(length, &ledger), compose_prompt(length, &ledger));
    }
}
