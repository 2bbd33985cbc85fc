use super::*;
use lyra_state::UserMask;

define_messages! {
    001(Welcome)            => { (id: &str)                     => ":Welcome to the Internet Relay Network {id}" },
    002(YourHost)           => { (server_name: &str, version: &str)
                                                                => ":Your host is {server_name}, running version {version}" },
    003(Created)            => { (when: &str)                   => ":This server was created {when}" },
    004(MyInfo)             => { (server_name: &str, version: &str)
                                                                => "{server_name} {version} aiOorsw abeIikmntpqrsl" },

    221(UModeIs)            => { (modes: &str)                  => "{modes}" },
    301(Away)               => { (nick: &str, message: &str)    => "{nick} :{message}" },
    303(IsOn)               => { (nicks: &str)                  => ":{nicks}" },
    305(UnAway)             => { ()                             => ":You are no longer marked as being away" },
    306(NowAway)            => { ()                             => ":You have been marked as being away" },
    311(WhoisUser)          => { (nick: &str, user: &str, host: &str, realname: &str)
                                                                => "{nick} {user} {host} * :{realname}" },
    315(EndOfWho)           => { (name: &str)                   => "{name} :End of WHO list" },
    318(EndOfWhois)         => { ()                             => ":End of WHOIS list" },
    324(ChannelModeIs)      => { (chan: &str, modes: &str)      => "{chan} {modes}" },
    331(NoTopic)            => { (chan: &str)                   => "{chan} :No topic is set" },
    332(Topic)              => { (chan: &str, topic: &str)      => "{chan} :{topic}" },
    341(Inviting)           => { (nick: &str, chan: &str)       => "{nick} {chan}" },
    352(WhoReply)           => { (chan: &str, user: &str, host: &str, server_name: &str, nick: &str, realname: &str)
                                                                => "{chan} {user} {host} {server_name} {nick} H :0 {realname}" },
    353(NameReply)          => { (chan: &str, names: &str)      => "= {chan} :{names}" },
    366(EndOfNames)         => { (chan: &str)                   => "{chan} :End of NAMES list" },
    367(BanList)            => { (chan: &str, mask: &UserMask)  => "{chan} {mask}" },
    368(EndOfBanList)       => { (chan: &str)                   => "{chan} :End of channel ban list" },
    372(Motd)               => { (line: &str)                   => ":- {line}" },
    375(MotdStart)          => { (server_name: &str)            => ":- {server_name} Message of the day - " },
    376(EndOfMotd)          => { ()                             => ":End of MOTD command" },
    381(YoureOper)          => { ()                             => ":You are now an IRC operator" },

    401(NoSuchNick)         => { (nick: &str)                   => "{nick} :No such nick/channel" },
    402(NoSuchServer)       => { (target: &str)                 => "{target} :No such server" },
    403(NoSuchChannel)      => { (chan: &str)                   => "{chan} :No such channel" },
    404(CannotSendToChan)   => { (chan: &str)                   => "{chan} :Cannot send to channel" },
    411(NoRecipient)        => { (command: &str)                => ":No recipient given ({command})" },
    412(NoTextToSend)       => { ()                             => ":No text to send" },
    421(UnknownCommand)     => { (command: &str)                => "{command} :Unknown command" },
    422(NoMotd)             => { ()                             => ":MOTD File is missing" },
    431(NoNicknameGiven)    => { ()                             => ":No nickname given" },
    432(ErroneousNickname)  => { (nick: &str)                   => "{nick} :Erroneous nickname" },
    433(NicknameInUse)      => { (nick: &str)                   => "{nick} :Nickname is already in use" },
    441(UserNotInChannel)   => { (nick: &str, chan: &str)       => "{nick} {chan} :They aren't on that channel" },
    442(NotOnChannel)       => { (chan: &str)                   => "{chan} :You're not on that channel" },
    443(UserOnChannel)      => { (nick: &str, chan: &str)       => "{nick} {chan} :is already on channel" },
    451(NotRegistered)      => { ()                             => ":You have not registered" },
    461(NeedMoreParams)     => { (command: &str)                => "{command} :Not enough parameters" },
    462(AlreadyRegistered)  => { ()                             => ":You may not reregister" },
    464(PasswdMismatch)     => { ()                             => ":Password incorrect" },
    473(InviteOnlyChan)     => { (chan: &str)                   => "{chan} :Cannot join channel (+i)" },
    475(BadChannelKey)      => { (chan: &str)                   => "{chan} :Cannot join channel (+k)" },
    477(NoChanModes)        => { (chan: &str)                   => "{chan} :Channel doesn't support modes" },
    481(NoPrivileges)       => { ()                             => ":Permission Denied" },
    482(ChanOPrivsNeeded)   => { (chan: &str)                   => "{chan} :You're not channel operator" },
    484(Restricted)         => { ()                             => ":Your connection is restricted!" },
    502(UsersDontMatch)     => { ()                             => ":Cannot change mode for other users" },
}
