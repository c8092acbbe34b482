//! Line-based console with validated choices.

use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::PromptError;

/// Wraps an input stream and an output stream for the interactive session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Direct access to the output stream, for multi-line reports.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompts until a line matches one of `options` exactly, ignoring case,
    /// and returns the matching option. Only the line terminator is stripped.
    ///
    /// There is no retry limit. Only a closed input stream ends the loop
    /// without a match.
    pub fn choose(&mut self, options: &[&str]) -> Result<String, PromptError> {
        let listing = options.join(" / ");
        let mut line = String::new();

        loop {
            write!(self.output, "\nPlease pick from {listing}: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::InputClosed);
            }

            let answer = line.trim_end_matches(['\n', '\r']).to_lowercase();
            if let Some(option) = options.iter().find(|o| o.to_lowercase() == answer) {
                return Ok((*option).to_string());
            }

            debug!(answer, "Rejected choice");
            writeln!(self.output, "Invalid choice!")?;
        }
    }

    /// Asks a yes/no question and returns `true` for "yes".
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        writeln!(self.output, "{question}")?;
        Ok(self.choose(&["yes", "no"])? == "yes")
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    #[test]
    fn test_choose_accepts_exact_match() {
        let mut c = console("month\n");
        assert_eq!(c.choose(&["month", "day"]).unwrap(), "month");
    }

    #[test]
    fn test_choose_is_case_insensitive() {
        let mut c = console("New York CITY\r\n");
        let choice = c.choose(&["chicago", "new york city"]).unwrap();
        assert_eq!(choice, "new york city");
    }

    #[test]
    fn test_choose_rejects_padded_input() {
        let mut c = console(" chicago\t\n  New York City \n");
        let err = c.choose(&["chicago", "new york city"]).unwrap_err();
        assert!(matches!(err, PromptError::InputClosed));
        assert_eq!(output(c).matches("Invalid choice!").count(), 2);
    }

    #[test]
    fn test_choose_reprompts_until_valid() {
        let mut c = console("boston\n\n13\nchicago\n");
        assert_eq!(c.choose(&["chicago", "washington"]).unwrap(), "chicago");

        let out = output(c);
        assert_eq!(out.matches("Invalid choice!").count(), 3);
        assert_eq!(out.matches("Please pick from").count(), 4);
    }

    #[test]
    fn test_choose_never_returns_non_member() {
        // every line is invalid, so the only way out is the closed stream
        let mut c = console("x\ny\nz\n");
        let err = c.choose(&["1", "2", "3", "4"]).unwrap_err();
        assert!(matches!(err, PromptError::InputClosed));
    }

    #[test]
    fn test_confirm() {
        let mut c = console("YES\nno\n");
        assert!(c.confirm("Continue?").unwrap());
        assert!(!c.confirm("Continue?").unwrap());
    }

    #[test]
    fn test_prompt_lists_options() {
        let mut c = console("yes\n");
        c.choose(&["yes", "no"]).unwrap();
        assert!(output(c).contains("Please pick from yes / no: "));
    }
}
