//! Interactive front end.
//!
//! Prompts for the three query fields, runs the query and prints either
//! the matching trains or the error message.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::finder::{FindError, TrainFinder};
use crate::source::TrainSource;

const DEPARTURE_PROMPT: &str = "Enter departure station : ";
const ARRIVAL_PROMPT: &str = "Enter arrival station : ";
const CRITERIA_PROMPT: &str = "Enter criteria : ";

/// Prompt on `output`, read answers from `input`, and print the result.
///
/// Query failures are printed and are not an `Err`; only failures of
/// `input` or `output` themselves are.
pub fn run<S, R, W>(finder: &TrainFinder<S>, mut input: R, mut output: W) -> io::Result<()>
where
    S: TrainSource,
    R: BufRead,
    W: Write,
{
    let mut tokens = Tokens::new(&mut input);
    let departure = tokens.prompt(&mut output, DEPARTURE_PROMPT)?;
    let arrival = tokens.prompt(&mut output, ARRIVAL_PROMPT)?;
    let criteria = tokens.prompt(&mut output, CRITERIA_PROMPT)?;

    match finder.find(&departure, &arrival, &criteria) {
        Ok(trains) => {
            for train in &trains {
                writeln!(output, "{train}")?;
            }
        }
        Err(err) => {
            match &err {
                FindError::Source(source) => {
                    warn!(error = %source, "failed to load train data")
                }
                FindError::Validation(_) => debug!(kind = ?err.kind(), "query rejected"),
            }
            writeln!(output, "{err}")?;
        }
    }

    output.flush()
}

/// Whitespace-delimited tokens read across prompts.
///
/// Several answers may be typed on one line; leftover tokens are used by
/// the following prompts before any more input is read.
struct Tokens<'a, R> {
    input: &'a mut R,
    pending: VecDeque<String>,
}

impl<'a, R: BufRead> Tokens<'a, R> {
    fn new(input: &'a mut R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Show `message` and return the next token. When no tokens are
    /// buffered one line is read; a blank line or end of input gives an
    /// empty string.
    fn prompt<W: Write>(&mut self, output: &mut W, message: &str) -> io::Result<String> {
        write!(output, "{message}")?;
        output.flush()?;

        if self.pending.is_empty() {
            let mut line = String::new();
            self.input.read_line(&mut line)?;
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }

        Ok(self.pending.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::FinderConfig;
    use crate::source::MemorySource;

    const DATA: &str = r#"[
        {"TrainID":1,"DepartureStationID":1,"ArrivalStationID":2,"Price":30,
         "ArrivalTime":"10:00:00","DepartureTime":"09:00:00"},
        {"TrainID":2,"DepartureStationID":1,"ArrivalStationID":2,"Price":10,
         "ArrivalTime":"11:00:00","DepartureTime":"09:30:00"}
    ]"#;

    fn run_with(input: &str) -> String {
        let finder = TrainFinder::new(MemorySource::new(DATA), &FinderConfig::default());
        let mut output = Vec::new();
        run(&finder, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn prints_prompts_and_results() {
        let output = run_with("1\n2\nprice\n");

        assert_eq!(
            output,
            "Enter departure station : Enter arrival station : Enter criteria : \
             id=2 departure_station=1 arrival_station=2 departure_time=09:30:00 arrival_time=11:00:00 price=10\n\
             id=1 departure_station=1 arrival_station=2 departure_time=09:00:00 arrival_time=10:00:00 price=30\n"
        );
    }

    #[test]
    fn prints_error_message() {
        let output = run_with("1\n2\nfastest\n");

        assert!(output.ends_with("unsupported criteria\n"));
    }

    #[test]
    fn blank_line_is_empty_field() {
        let output = run_with("\n2\nprice\n");
        assert!(output.ends_with("empty departure station\n"));
    }

    #[test]
    fn end_of_input_is_empty_field() {
        let output = run_with("1\n");
        assert!(output.ends_with("empty arrival station\n"));
    }

    #[test]
    fn all_answers_on_one_line() {
        let output = run_with("1 2 price\n");
        assert_eq!(
            output,
            "Enter departure station : Enter arrival station : Enter criteria : \
             id=2 departure_station=1 arrival_station=2 departure_time=09:30:00 arrival_time=11:00:00 price=10\n\
             id=1 departure_station=1 arrival_station=2 departure_time=09:00:00 arrival_time=10:00:00 price=30\n"
        );
    }

    #[test]
    fn extra_token_feeds_next_prompt() {
        // "extra" becomes the arrival station rather than being dropped
        let output = run_with("1 extra\n2\nprice\n");
        assert!(output.ends_with("bad arrival station input\n"));
    }

    #[test]
    fn tokens_split_across_lines() {
        let output = run_with("  1\t2\n  price  \n");
        assert!(output.contains("id=2 "));
        assert!(output.contains("id=1 "));
    }

    #[test]
    fn blank_line_after_leftovers_is_consumed_in_turn() {
        // Leftover "2" answers the arrival prompt, then the blank line
        // leaves criteria empty
        let output = run_with("1 2\n\nprice\n");
        assert!(output.ends_with("unsupported criteria\n"));
    }

    #[test]
    fn rejected_input_is_not_a_warning() {
        let logs = crate::logger::capture_logs(tracing::Level::WARN, || {
            let output = run_with("1\n2\nfastest\n");
            assert!(output.ends_with("unsupported criteria\n"));
        });
        assert!(logs.is_empty(), "unexpected warnings: {logs}");
    }

    #[test]
    fn unreadable_data_is_a_warning() {
        let logs = crate::logger::capture_logs(tracing::Level::WARN, || {
            let finder = TrainFinder::new(MemorySource::new("[{"), &FinderConfig::default());
            let mut output = Vec::new();
            run(&finder, "1 2 price\n".as_bytes(), &mut output).unwrap();
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("failed to load train data"));
    }

    #[test]
    fn no_matches_prints_nothing_after_prompts() {
        let output = run_with("9\n9\nprice\n");
        assert_eq!(
            output,
            "Enter departure station : Enter arrival station : Enter criteria : "
        );
    }
}
