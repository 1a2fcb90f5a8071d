/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
// see https://stackoverflow.com/questions/36088116/how-to-do-polymorphic-io-from-either-a-file-or-stdin-in-rust
use std::io::{self, Write};

use crate::pagerank::error::PRResult;

/// Line sink for the command-line harness: stdout, or a caller-owned buffer
/// (used by tests).
pub struct Output<'a> {
    destination: Option<&'a mut Vec<u8>>,
}

impl<'a> Output<'a> {
    pub fn console() -> Output<'a> {
        Output { destination: None }
    }
    pub fn string(text: &'a mut Vec<u8>) -> Output<'a> {
        Output {
            destination: Some(text),
        }
    }
    pub fn print(&mut self, text: String) -> PRResult<()> {
        self.write_all(text.as_bytes())?;
        self.write_all(b"\n")?;
        self.flush()?;
        Ok(())
    }
}
impl<'a> Write for Output<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.destination {
            Some(destination) => destination.write(buf),
            None => io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.destination {
            Some(destination) => destination.flush(),
            None => io::stdout().flush(),
        }
    }
}
