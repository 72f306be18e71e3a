use crate::script::cmd::Command;
use rand::Rng;

/// default number of commands in a generated script.
pub const DEFAULT_NUM_COMMANDS: usize = 10;

/// generate a script of `num_commands` random commands joined with newlines.
/// the command kind of each line is drawn independently and uniformly, with
/// no sequencing constraints between lines. no trailing newline is appended
/// at this stage.
pub fn generate_script(rng: &mut impl Rng, num_commands: usize) -> String {
    let commands: Vec<String> = (0..num_commands)
        .map(|_| Command::random(rng).to_string())
        .collect();
    commands.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::types::{KEY_LEN, MAX_ARGS, MIN_ARGS, VALUE_LEN};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_key(s: &str) -> bool {
        s.len() == KEY_LEN && s.chars().all(|c| c.is_ascii_lowercase())
    }

    fn is_value(s: &str) -> bool {
        s.len() == VALUE_LEN
            && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    }

    /// check one script line against the store's command grammar.
    fn is_valid_line(line: &str) -> bool {
        if line == "BACKUP" || line == "SHOW" {
            return true;
        }
        if let Some(keys) = line
            .strip_prefix("READ [")
            .or_else(|| line.strip_prefix("DELETE ["))
            .and_then(|rest| rest.strip_suffix(']'))
        {
            let keys: Vec<&str> = keys.split(',').collect();
            return keys.len() >= MIN_ARGS
                && keys.len() <= MAX_ARGS
                && keys.iter().all(|k| is_key(k));
        }
        if let Some(pairs) = line
            .strip_prefix("WRITE [")
            .and_then(|rest| rest.strip_suffix(']'))
        {
            // each pair occupies a fixed number of characters, so the pair
            // count falls out of the payload length.
            let pair_len = KEY_LEN + VALUE_LEN + 3;
            if pairs.len() % pair_len != 0 {
                return false;
            }
            let num_pairs = pairs.len() / pair_len;
            if num_pairs < MIN_ARGS || num_pairs > MAX_ARGS {
                return false;
            }
            return pairs
                .as_bytes()
                .chunks(pair_len)
                .map(|chunk| std::str::from_utf8(chunk).unwrap())
                .all(|pair| {
                    pair.strip_prefix('(')
                        .and_then(|p| p.strip_suffix(')'))
                        .and_then(|p| p.split_once(','))
                        .map(|(k, v)| is_key(k) && is_value(v))
                        .unwrap_or(false)
                });
        }
        false
    }

    /// check a generated script has the exact line count and every line is a
    /// well-formed command.
    #[test]
    fn script_line_count_and_grammar() {
        let mut rng = StdRng::seed_from_u64(3);
        for num_commands in [1, 10, 60] {
            let script = generate_script(&mut rng, num_commands);
            let lines: Vec<&str> = script.split('\n').collect();
            assert_eq!(lines.len(), num_commands);
            for line in lines {
                assert!(is_valid_line(line), "malformed line: {}", line);
            }
        }
    }

    /// check no trailing newline is appended by script assembly.
    #[test]
    fn script_has_no_trailing_newline() {
        let mut rng = StdRng::seed_from_u64(11);
        let script = generate_script(&mut rng, 5);
        assert!(!script.ends_with('\n'));
    }

    /// a zero-command script is empty.
    #[test]
    fn empty_script() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_script(&mut rng, 0), "");
    }
}
