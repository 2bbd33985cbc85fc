use lyra_wire::*;
use pretty_assertions::assert_eq;

use std::sync::{Arc, Mutex};

struct TestChannel
{
    name: String,
    server: Origin,
    nicks: Mutex<Vec<String>>,
}

impl TestChannel
{
    fn new(name: &str, nicks: &[&str]) -> Arc<Self>
    {
        Arc::new(Self {
            name: name.to_string(),
            server: Origin::new("irc.example", "irc.example"),
            nicks: Mutex::new(nicks.iter().map(|n| n.to_string()).collect()),
        })
    }
}

impl Identifier for TestChannel
{
    fn id(&self) -> String { self.name.clone() }
    fn nick(&self) -> String { self.name.clone() }
}

impl ChannelView for TestChannel
{
    fn name(&self) -> String { self.name.clone() }
    fn server(&self) -> Origin { self.server.clone() }
    fn nicks(&self) -> Vec<String> { self.nicks.lock().unwrap().clone() }
}

fn server() -> Origin
{
    Origin::new("irc.example", "irc.example")
}

fn viewer() -> Origin
{
    Origin::new("viewer!v@host", "viewer")
}

/// Recover the nicknames carried by a set of `353` lines
fn names_in(lines: &[String]) -> Vec<String>
{
    lines.iter()
         .filter(|l| l.split(' ').nth(1) == Some("353"))
         .flat_map(|l| l.splitn(2, " :").nth(1).unwrap_or("").split(' ').map(str::to_string).collect::<Vec<_>>())
         .filter(|n| !n.is_empty())
         .collect()
}

fn prefix_len(channel: &str) -> usize
{
    numeric::name_reply(&server(), channel, "").format(&viewer()).len()
}

#[test]
fn empty_channel_gives_only_terminator()
{
    let chan = TestChannel::new("#empty", &[]);
    let lines = ReplyEncoder::default().format(&NamesReply::new(chan).into(), &viewer());

    assert_eq!(lines, vec![":irc.example 366 viewer #empty :End of NAMES list".to_string()]);
}

#[test]
fn names_split_when_line_would_overflow()
{
    let nicks = ["alice", "bob", "carol", "dave"];
    let chan = TestChannel::new("chan", &nicks);

    // room for "alice bob carol" but not " dave"
    let max = prefix_len("chan") + "alice bob carol".len() + 2;
    let encoder = ReplyEncoder::new(EncoderConfig { max_reply_len: max });
    let lines = encoder.format(&NamesReply::new(chan).into(), &viewer());

    assert_eq!(lines, vec![
        ":irc.example 353 viewer = chan :alice bob carol".to_string(),
        ":irc.example 353 viewer = chan :dave".to_string(),
        ":irc.example 366 viewer chan :End of NAMES list".to_string(),
    ]);
    assert_eq!(names_in(&lines), nicks);
}

#[test]
fn names_fit_on_one_line_at_exact_bound()
{
    let chan = TestChannel::new("#c", &["alice", "bob"]);
    let max = prefix_len("#c") + "alice bob".len();
    let lines = ReplyEncoder::new(EncoderConfig { max_reply_len: max }).format(&NamesReply::new(chan).into(), &viewer());

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), max);
}

#[test]
fn packing_preserves_names_and_respects_bound()
{
    let nicks: Vec<String> = (0..200).map(|i| format!("user{}{}", i, "x".repeat(i % 13))).collect();
    let refs: Vec<&str> = nicks.iter().map(String::as_str).collect();
    let chan = TestChannel::new("#big", &refs);
    let reply: Reply = NamesReply::new(chan).into();

    for max in [40, 64, 100, 200, 510]
    {
        let lines = ReplyEncoder::new(EncoderConfig { max_reply_len: max }).format(&reply, &viewer());

        assert_eq!(names_in(&lines), nicks, "bound {}", max);
        assert!(lines.last().unwrap().contains(" 366 "));

        for line in &lines[..lines.len() - 1]
        {
            let names = names_in(std::slice::from_ref(line));
            assert!(line.len() <= max || names.len() == 1, "line {:?} exceeds {}", line, max);
        }
    }
}

#[test]
fn oversized_name_is_not_dropped()
{
    let long = "n".repeat(100);
    let chan = TestChannel::new("#c", &["a", long.as_str(), "b"]);
    let max = prefix_len("#c") + 10;

    let lines = ReplyEncoder::new(EncoderConfig { max_reply_len: max }).format(&NamesReply::new(chan).into(), &viewer());

    assert_eq!(names_in(&lines), vec!["a".to_string(), long.clone(), "b".to_string()]);
    assert_eq!(lines.len(), 4);
}

#[test]
fn names_reflect_membership_at_format_time()
{
    let chan = TestChannel::new("#live", &["alice"]);
    let reply: Reply = NamesReply::new(chan.clone()).into();

    chan.nicks.lock().unwrap().push("bob".to_string());

    let lines = ReplyEncoder::default().format(&reply, &viewer());
    assert_eq!(lines[0], ":irc.example 353 viewer = #live :alice bob");
    assert_eq!(reply.source(), Origin::new("#live", "#live"));
}

#[test]
fn nickname_in_use()
{
    let bob = Origin::new("bob!b@host", "bob");
    let reply: Reply = numeric::nickname_in_use(&server(), "nick").into();

    assert_eq!(ReplyEncoder::default().format(&reply, &bob), vec![":irc.example 433 bob nick :Nickname is already in use".to_string()]);
}

#[test]
fn numerics_are_zero_padded()
{
    let welcome = numeric::welcome(&server(), "alice!a@host");
    assert_eq!(welcome.code().value(), 1);
    assert_eq!(welcome.format(&viewer()), ":irc.example 001 viewer :Welcome to the Internet Relay Network alice!a@host");
}

#[test]
fn welcome_burst_bodies_are_trailing_parameters()
{
    let viewer = viewer();
    let lines = [
        numeric::welcome(&server(), "alice!a@host").format(&viewer),
        numeric::your_host(&server(), "irc.example", "lyra-0.1.0").format(&viewer),
        numeric::created(&server(), "today").format(&viewer),
    ];

    assert_eq!(lines[1], ":irc.example 002 viewer :Your host is irc.example, running version lyra-0.1.0");
    assert_eq!(lines[2], ":irc.example 003 viewer :This server was created today");
    for line in &lines
    {
        // prefix, code and target, then everything else as one parameter
        assert!(line.splitn(4, ' ').nth(3).map_or(false, |rest| rest.starts_with(':')), "{}", line);
    }
}

#[test]
fn numerics_follow_current_viewer_nick()
{
    let reply = numeric::no_motd(&server());
    assert_eq!(reply.format(&Origin::new("x", "before")), ":irc.example 422 before :MOTD File is missing");
    assert_eq!(reply.format(&Origin::new("x", "after")), ":irc.example 422 after :MOTD File is missing");
}

#[test]
fn text_messages()
{
    let alice = Origin::new("alice!a@host", "alice");
    let bob = Origin::new("bob!b@host", "bob");

    assert_eq!(message::privmsg(&alice, &bob, "hi there").format(), ":alice!a@host PRIVMSG bob :hi there");
    assert_eq!(message::join(&alice, "#chan").format(), ":alice!a@host JOIN #chan");
    assert_eq!(message::part(&alice, "#chan", "bye").format(), ":alice!a@host PART #chan :bye");
    assert_eq!(message::channel_mode(&alice, "#chan", "+o bob").format(), ":alice!a@host MODE #chan +o bob");
    assert_eq!(message::user_mode(&alice, "alice", "+i").format(), ":alice!a@host MODE alice :+i");
    assert_eq!(message::pong(&server(), &alice).format(), ":irc.example PONG alice");
    assert_eq!(message::quit(&alice, "gone").format(), ":alice!a@host QUIT :gone");
}

#[test]
fn ban_list_renders_mask()
{
    let mask = lyra_state::UserMask::new("*", "*", "*.example");
    let reply = numeric::ban_list(&server(), "#chan", &mask);
    assert_eq!(reply.format(&viewer()), ":irc.example 367 viewer #chan *!*@*.example");
}
