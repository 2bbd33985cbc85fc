/// A tokenised, but not yet processed, line from a client connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMessage
{
    /// The command, upper-cased
    pub command: String,
    /// The list of arguments, with the trailing argument (if any) last
    pub args: Vec<String>,
}

impl ClientMessage
{
    /// Split a received line into command and arguments.
    ///
    /// A leading `:prefix` is accepted and ignored, since clients may not
    /// speak for anyone but themselves. Returns `None` for a line with no
    /// command.
    pub fn parse(raw: &str) -> Option<Self>
    {
        let mut raw = raw.trim_start();

        if let Some(prefixed) = raw.strip_prefix(':')
        {
            let (_, rest) = prefixed.split_once(' ')?;
            raw = rest.trim_start();
        }

        if raw.is_empty()
        {
            return None;
        }

        let (command, mut rest) = match raw.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (raw, "")
        };

        let mut args = Vec::new();

        loop
        {
            if let Some(arg) = rest.strip_prefix(':')
            {
                args.push(arg.to_string());
                break;
            }

            match rest.split_once(' ') {
                Some((arg, remainder)) => {
                    if !arg.is_empty()
                    {
                        args.push(arg.to_string());
                    }
                    rest = remainder;
                }
                None => {
                    if !rest.is_empty()
                    {
                        args.push(rest.to_string());
                    }
                    break;
                }
            }
        }

        Some(Self {
            command: command.to_ascii_uppercase(),
            args,
        })
    }

    /// The argument at `index`, if present
    pub fn arg(&self, index: usize) -> Option<&str>
    {
        self.args.get(index).map(String::as_str)
    }
}
