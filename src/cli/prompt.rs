/// Line-oriented question and answer over a pair of streams.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

#[derive(Debug, thiserror::Error)]
pub enum Interrupt {
    #[error("end of input")]
    Eof,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl<R, W> Prompt<R, W>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `args` followed by a newline.
    pub fn say(&mut self, args: std::fmt::Arguments<'_>) -> Result<(), Interrupt> {
        self.output.write_fmt(args)?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Writes `message` and returns the next line of input without its line
    /// terminator.
    pub fn line(&mut self, message: &str) -> Result<String, Interrupt> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Interrupt::Eof);
        }
        let len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(len);
        Ok(buf)
    }

    /// Asks `message` until `parse` accepts the answer. Rejected answers are
    /// reported before asking again.
    pub fn ask<T, E>(
        &mut self,
        message: &str,
        mut parse: impl FnMut(&str) -> Result<T, E>,
    ) -> Result<T, Interrupt>
    where
        E: std::fmt::Display,
    {
        loop {
            let answer = self.line(message)?;
            match parse(&answer) {
                Ok(x) => return Ok(x),
                Err(e) => self.say(format_args!("Invalid input: {}", e))?,
            }
        }
    }
}
