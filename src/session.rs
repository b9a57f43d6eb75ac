//! Interactive prompt loop: read a size, generate, then answer word queries

use crate::config::ParallelConfig;
use crate::error::{Result, StrHuntError};
use crate::game::Game;
use crate::search::sequential;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::time::Instant;

/// Token that ends the query loop
pub const EXIT_TOKEN: &str = "0";

/// Options for one interactive session
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// String size; prompted for on input when `None`
    pub size: Option<usize>,
    /// Dump the generated string before the first prompt
    pub print: bool,
    /// Also time a single-threaded scan for every query
    pub compare: bool,
}

/// Whitespace-delimited tokens read lazily from a line-oriented input
pub struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Parse a string size token.
pub fn parse_size(token: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|e| StrHuntError::InvalidSize(format!("'{}': {}", token, e)))
}

/// Run the prompt loop until the exit token or end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &ParallelConfig,
    options: &SessionOptions,
) -> Result<()> {
    let mut tokens = Tokens::new(input);

    let size = match options.size {
        Some(size) => size,
        None => {
            writeln!(output, "Insert the string size:")?;
            output.flush()?;
            let token = tokens
                .next_token()?
                .ok_or_else(|| StrHuntError::InvalidSize("no size given".to_string()))?;
            parse_size(&token)?
        }
    };

    writeln!(output, "Generating string with size {}...", size)?;
    output.flush()?;
    let game = Game::new(size, config)?;
    writeln!(output, "String generated!")?;

    if options.print {
        writeln!(output, "{}", game)?;
    }

    loop {
        writeln!(output, "Insert a word:")?;
        output.flush()?;

        let Some(guess) = tokens.next_token()? else {
            break;
        };
        if guess == EXIT_TOKEN {
            break;
        }

        let outcome = game.run_with_stats(&guess);
        if outcome.found {
            writeln!(output, "{} is in the string!", guess)?;
        } else {
            writeln!(output, "It looks like {} is not in the string.", guess)?;
        }

        if options.compare {
            let start_time = Instant::now();
            let sequential_found = sequential::contains(game.as_bytes(), guess.as_bytes());
            let sequential_time = start_time.elapsed();
            debug_assert_eq!(sequential_found, outcome.found);
            writeln!(
                output,
                "  parallel: {:?} ({} workers), sequential: {:?}",
                outcome.elapsed_time,
                game.num_workers(),
                sequential_time
            )?;
        }
    }

    output.flush()?;
    Ok(())
}
