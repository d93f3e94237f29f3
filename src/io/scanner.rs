//! Whitespace token reader over a buffered input stream.
//!
//! Lines are pulled lazily, one at a time, so a prompt written before a read
//! is visible before the read blocks on an interactive terminal.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::errors::InputError;

/// Upper bound on pre-allocation; the count is untrusted until elements arrive.
const MAX_PREALLOCATED_ELEMENTS: usize = 1024;

pub struct TokenScanner<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next whitespace-separated token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(String::from));
        }
    }

    /// Read the element count.
    pub fn read_count(&mut self) -> Result<usize, InputError> {
        let token = self.next_token()?.ok_or(InputError::MissingCount)?;
        token
            .parse::<usize>()
            .map_err(|_| InputError::invalid_count(token))
    }

    /// Read exactly `count` integers.
    pub fn read_elements(&mut self, count: usize) -> Result<Vec<i64>, InputError> {
        let mut elements = Vec::with_capacity(count.min(MAX_PREALLOCATED_ELEMENTS));

        for index in 0..count {
            let token = self.next_token()?.ok_or(InputError::MissingElements {
                expected: count,
                found: index,
            })?;
            let value = token
                .parse::<i64>()
                .map_err(|_| InputError::invalid_element(index, token))?;
            elements.push(value);
        }

        if !self.pending.is_empty() {
            log::debug!(
                "Ignoring {} trailing token(s) after {} elements",
                self.pending.len(),
                count
            );
        }

        Ok(elements)
    }
}
