use std::fmt;
use std::str::FromStr;

/// One line of a lexicon command script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconCommand {
    Load(String),
    Insert(String),
    /// Prefix plus the number of typos the completion may tolerate.
    Autocomplete { prefix: String, budget: u8 },
    /// Mutated word plus how many letters were changed.
    Autocorrect { word: String, mistakes: usize },
    Remove(String),
    Exit,
}

impl fmt::Display for LexiconCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconCommand::Load(p) => write!(f, "LOAD {p}"),
            LexiconCommand::Insert(w) => write!(f, "INSERT {w}"),
            LexiconCommand::Autocomplete { prefix, budget } => write!(f, "AUTOCOMPLETE {prefix} {budget}"),
            LexiconCommand::Autocorrect { word, mistakes } => write!(f, "AUTOCORRECT {word} {mistakes}"),
            LexiconCommand::Remove(w) => write!(f, "REMOVE {w}"),
            LexiconCommand::Exit => f.write_str("EXIT"),
        }
    }
}

impl FromStr for LexiconCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let arg = |i: usize| tokens.get(i).map(|s| s.to_string()).ok_or_else(|| format!("missing argument in {line:?}"));
        let cmd = match tokens.first().copied() {
            Some("LOAD") => LexiconCommand::Load(arg(1)?),
            Some("INSERT") => LexiconCommand::Insert(arg(1)?),
            Some("REMOVE") => LexiconCommand::Remove(arg(1)?),
            Some("AUTOCOMPLETE") => LexiconCommand::Autocomplete {
                prefix: arg(1)?,
                budget: arg(2)?.parse().map_err(|e| format!("bad budget: {e}"))?,
            },
            Some("AUTOCORRECT") => LexiconCommand::Autocorrect {
                word: arg(1)?,
                mistakes: arg(2)?.parse().map_err(|e| format!("bad mistake count: {e}"))?,
            },
            Some("EXIT") => LexiconCommand::Exit,
            Some(other) => return Err(format!("unknown directive {other:?}")),
            None => return Err("empty line".into()),
        };
        let arity = match cmd {
            LexiconCommand::Exit => 1,
            LexiconCommand::Autocomplete { .. } | LexiconCommand::Autocorrect { .. } => 3,
            _ => 2,
        };
        if tokens.len() != arity {
            return Err(format!("wrong argument count in {line:?}"));
        }
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_agree() {
        for line in ["LOAD data/dracula.txt", "INSERT apple", "AUTOCOMPLETE ap 2", "AUTOCORRECT apxle 1", "REMOVE apple", "EXIT"] {
            let cmd: LexiconCommand = line.parse().unwrap();
            assert_eq!(cmd.to_string(), line);
        }
    }

    #[test]
    fn rejects_bad_lines() {
        assert!("AUTOCOMPLETE ap".parse::<LexiconCommand>().is_err());
        assert!("AUTOCORRECT ap x".parse::<LexiconCommand>().is_err());
        assert!("INSERT a b".parse::<LexiconCommand>().is_err());
        assert!("FIND a".parse::<LexiconCommand>().is_err());
    }
}
