use lyra_state::*;
use pretty_assertions::assert_eq;

use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct Channel
{
    name: String,
    members: Mutex<MembershipSet<Client>>,
}

#[derive(Debug)]
struct Client
{
    nick: Mutex<String>,
    channels: Mutex<EntitySet<Channel>>,
}

impl Named for Channel
{
    fn registry_key(&self) -> Option<String> { Some(self.name.clone()) }
}

impl Named for Client
{
    fn registry_key(&self) -> Option<String>
    {
        let nick = self.nick.lock().unwrap();
        if nick.is_empty() { None } else { Some(nick.clone()) }
    }
}

fn client(nick: &str) -> Arc<Client>
{
    Arc::new(Client { nick: Mutex::new(nick.to_string()), channels: Mutex::new(EntitySet::new()) })
}

fn channel(name: &str) -> Arc<Channel>
{
    Arc::new(Channel { name: name.to_string(), members: Mutex::new(MembershipSet::new()) })
}

#[test]
fn client_needs_nick_before_registration()
{
    let mut clients = NameRegistry::new();
    let pending = client("");

    assert_eq!(clients.add(Arc::clone(&pending)), Err(RegistryError::MissingKey));

    *pending.nick.lock().unwrap() = "alice".to_string();
    clients.add(Arc::clone(&pending)).unwrap();
    assert!(Arc::ptr_eq(clients.get("alice").unwrap(), &pending));
}

#[test]
fn nick_change_rebinds()
{
    let mut clients = NameRegistry::new();
    let alice = client("alice");
    clients.add(Arc::clone(&alice)).unwrap();

    clients.remove(&alice).unwrap();
    *alice.nick.lock().unwrap() = "alicia".to_string();
    clients.add(Arc::clone(&alice)).unwrap();

    assert!(clients.get("alice").is_none());
    assert!(Arc::ptr_eq(clients.get("alicia").unwrap(), &alice));

    let imposter = client("alicia");
    assert_eq!(clients.add(imposter), Err(RegistryError::DuplicateName("alicia".to_string())));
}

#[test]
fn join_and_part_bookkeeping()
{
    let mut channels = NameRegistry::new();
    let chan = channel("#chan");
    let other = channel("#other");
    channels.add(Arc::clone(&chan)).unwrap();
    channels.add(Arc::clone(&other)).unwrap();
    assert_eq!(channels.add(channel("#chan")), Err(RegistryError::DuplicateName("#chan".to_string())));

    let alice = client("alice");
    chan.members.lock().unwrap().add(&alice);
    chan.members.lock().unwrap().set_flag(&alice, MembershipFlags::OPERATOR);
    alice.channels.lock().unwrap().add(&chan);

    assert!(chan.members.lock().unwrap().has_flag(&alice, MembershipFlags::OPERATOR));
    assert!(Arc::ptr_eq(&alice.channels.lock().unwrap().first().unwrap(), &chan));

    chan.members.lock().unwrap().remove(&alice);
    alice.channels.lock().unwrap().remove(&chan);

    assert!(alice.channels.lock().unwrap().first().is_none());
    assert!(chan.members.lock().unwrap().is_empty());

    channels.remove(&chan).unwrap();
    assert_eq!(channels.len(), 1);
    assert!(channels.iter().all(|c| Arc::ptr_eq(c, &other)));
}
