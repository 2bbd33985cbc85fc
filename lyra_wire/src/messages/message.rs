use super::*;

define_messages! {
    Privmsg             => { (target: &dyn Identifier.nick(), message: &str)    => "{target} :{message}" },
    Notice              => { (target: &dyn Identifier.nick(), message: &str)    => "{target} :{message}" },
    Nick                => { (new_nick: &str)                                   => "{new_nick}" },
    Join                => { (chan: &str)                                       => "{chan}" },
    Part                => { (chan: &str, message: &str)                        => "{chan} :{message}" },
    UserMode("MODE")    => { (nick: &str, changes: &str)                        => "{nick} :{changes}" },
    ChannelMode("MODE") => { (chan: &str, changes: &str)                        => "{chan} {changes}" },
    Topic               => { (chan: &str, text: &str)                           => "{chan} :{text}" },
    Ping                => { (target: &dyn Identifier.nick())                   => "{target}" },
    Pong                => { (target: &dyn Identifier.nick())                   => "{target}" },
    Quit                => { (message: &str)                                    => ":{message}" },
    Error               => { (target: &dyn Identifier.nick())                   => "{target}" },
    Invite              => { (chan: &str)                                       => "{chan}" },
}
