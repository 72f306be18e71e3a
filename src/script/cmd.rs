use crate::util::types::{Key, Value, KEY_LEN, MAX_ARGS, MIN_ARGS, VALUE_LEN};
use rand::Rng;
use std::fmt;

/// alphabet keys are drawn from.
const KEY_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// alphabet values are drawn from: lowercase letters plus digits.
const VALUE_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

// commands understood by the key-value store.
pub enum Command {
    Read(Vec<Key>),           // fetch the values associated with the given keys.
    Write(Vec<(Key, Value)>), // upsert the given kv pairs into the store.
    Delete(Vec<Key>),         // remove the kv pairs associated with the given keys.
    Backup,                   // snapshot the store to a backup file.
    Show,                     // print all kv pairs in the store.
}

impl Command {
    /// draw one command with a uniformly chosen kind. each kind has equal
    /// probability and draws are independent across calls.
    pub fn random(rng: &mut impl Rng) -> Command {
        match rng.gen_range(0..5) {
            0 => Command::random_read(rng),
            1 => Command::random_write(rng),
            2 => Command::random_delete(rng),
            3 => Command::Backup,
            _ => Command::Show,
        }
    }

    /// draw a READ command with 1 to 5 random keys.
    pub fn random_read(rng: &mut impl Rng) -> Command {
        Command::Read(random_keys(rng))
    }

    /// draw a WRITE command with 1 to 5 random kv pairs.
    pub fn random_write(rng: &mut impl Rng) -> Command {
        let num_pairs = rng.gen_range(MIN_ARGS..=MAX_ARGS);
        let pairs = (0..num_pairs)
            .map(|_| (random_key(rng), random_value(rng)))
            .collect();
        Command::Write(pairs)
    }

    /// draw a DELETE command with 1 to 5 random keys.
    pub fn random_delete(rng: &mut impl Rng) -> Command {
        Command::Delete(random_keys(rng))
    }
}

impl fmt::Display for Command {
    /// encode the command in the store's textual protocol, one command per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Read(keys) => write!(f, "READ [{}]", keys.join(",")),
            Command::Write(pairs) => {
                write!(f, "WRITE [")?;
                for (key, val) in pairs.iter() {
                    write!(f, "({},{})", key, val)?;
                }
                write!(f, "]")
            }
            Command::Delete(keys) => write!(f, "DELETE [{}]", keys.join(",")),
            Command::Backup => write!(f, "BACKUP"),
            Command::Show => write!(f, "SHOW"),
        }
    }
}

/// draw a key of exactly KEY_LEN lowercase letters.
pub fn random_key(rng: &mut impl Rng) -> Key {
    random_string(rng, KEY_CHARSET, KEY_LEN)
}

/// draw a value of exactly VALUE_LEN lowercase letters and digits.
pub fn random_value(rng: &mut impl Rng) -> Value {
    random_string(rng, VALUE_CHARSET, VALUE_LEN)
}

/// draw 1 to 5 keys for a READ/DELETE argument list.
fn random_keys(rng: &mut impl Rng) -> Vec<Key> {
    let num_keys = rng.gen_range(MIN_ARGS..=MAX_ARGS);
    (0..num_keys).map(|_| random_key(rng)).collect()
}

fn random_string(rng: &mut impl Rng, charset: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}
