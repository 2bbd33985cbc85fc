extern crate proc_macro;

use proc_macro::TokenStream;

mod define_messages;

/// Define a table of protocol replies.
///
/// Each entry generates a snake-cased constructor function. Entries keyed by a
/// three-digit number return a `crate::NumericReply`; entries keyed by a name
/// return a `crate::TextReply` whose command is the upper-cased name, or the
/// string given in parentheses after it.
///
/// ```ignore
/// define_messages! {
///     Privmsg             => { (target: &dyn Identifier.nick(), text: &str) => "{target} :{text}" },
///     ChannelMode("MODE") => { (chan: &str, changes: &str)                  => "{chan} {changes}" },
///     433(NicknameInUse)  => { (nick: &str)                                 => "{nick} :Nickname is already in use" },
/// }
/// ```
#[proc_macro]
pub fn define_messages(input: TokenStream) -> TokenStream
{
    define_messages::define_messages(input)
}
