use serde::{Deserialize, Serialize};
use std::{
    convert::Infallible,
    fmt,
    str::FromStr,
};

/// A `nick!user@host` pattern, as used in ban lists.
///
/// Each part may contain wildcards; matching against users happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserMask
{
    pub nickname: String,
    pub username: String,
    pub hostname: String,
}

impl UserMask
{
    pub fn new(nickname: impl Into<String>, username: impl Into<String>, hostname: impl Into<String>) -> Self
    {
        Self {
            nickname: nickname.into(),
            username: username.into(),
            hostname: hostname.into(),
        }
    }
}

impl fmt::Display for UserMask
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}!{}@{}", self.nickname, self.username, self.hostname)
    }
}

fn part_or_wildcard(s: &str) -> String
{
    if s.is_empty() { "*".to_string() } else { s.to_string() }
}

impl FromStr for UserMask
{
    type Err = Infallible;

    /// Parse a full or partial mask. `nick`, `nick!user` and `user@host` are all
    /// accepted, with missing parts filled in as `*`.
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let (rest, host) = match s.split_once('@') {
            Some((rest, host)) => (rest, host),
            None => (s, "")
        };
        let (nick, user) = match rest.split_once('!') {
            Some((nick, user)) => (nick, user),
            None if !host.is_empty() => ("", rest),
            None => (rest, "")
        };

        Ok(Self::new(part_or_wildcard(nick), part_or_wildcard(user), part_or_wildcard(host)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(UserMask::new("nick", "user", "host").to_string(), "nick!user@host");
    }

    #[test]
    fn parse_partial() {
        assert_eq!("nick".parse::<UserMask>().unwrap().to_string(), "nick!*@*");
        assert_eq!("nick!user".parse::<UserMask>().unwrap().to_string(), "nick!user@*");
        assert_eq!("user@host".parse::<UserMask>().unwrap().to_string(), "*!user@host");
        assert_eq!("*!*@*.example".parse::<UserMask>().unwrap().to_string(), "*!*@*.example");
        assert_eq!("".parse::<UserMask>().unwrap().to_string(), "*!*@*");
    }
}
