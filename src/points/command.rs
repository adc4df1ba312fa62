use std::fmt;
use std::str::FromStr;

/// One line of a point query script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointCommand {
    Load(String),
    /// Nearest-neighbor query for one point.
    Nn(Vec<i64>),
    /// Range search, one inclusive `(lo, hi)` per dimension.
    Rs(Vec<(i64, i64)>),
    Exit,
}

impl fmt::Display for PointCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointCommand::Load(path) => write!(f, "LOAD {path}"),
            PointCommand::Nn(point) => {
                f.write_str("NN")?;
                for v in point {
                    write!(f, " {v}")?;
                }
                Ok(())
            }
            PointCommand::Rs(ranges) => {
                f.write_str("RS")?;
                for (lo, hi) in ranges {
                    write!(f, " {lo} {hi}")?;
                }
                Ok(())
            }
            PointCommand::Exit => f.write_str("EXIT"),
        }
    }
}

fn parse_ints<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Vec<i64>, String> {
    tokens
        .map(|t| t.parse::<i64>().map_err(|e| format!("bad integer {t:?}: {e}")))
        .collect()
}

impl FromStr for PointCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let Some(op) = tokens.next() else {
            return Err("empty line".into());
        };
        match op {
            "LOAD" => {
                let path = tokens.next().ok_or("LOAD without a path")?;
                if tokens.next().is_some() {
                    return Err("LOAD takes one argument".into());
                }
                Ok(PointCommand::Load(path.to_string()))
            }
            "NN" => Ok(PointCommand::Nn(parse_ints(tokens)?)),
            "RS" => {
                let values = parse_ints(tokens)?;
                if values.len() % 2 != 0 {
                    return Err(format!("RS needs bound pairs, got {} values", values.len()));
                }
                Ok(PointCommand::Rs(values.chunks(2).map(|c| (c[0], c[1])).collect()))
            }
            "EXIT" => match tokens.next() {
                None => Ok(PointCommand::Exit),
                Some(_) => Err("EXIT takes no arguments".into()),
            },
            other => Err(format!("unknown directive {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_directives() {
        assert_eq!(PointCommand::Nn(vec![-3, 7]).to_string(), "NN -3 7");
        assert_eq!(PointCommand::Rs(vec![(1, 5), (-2, 0)]).to_string(), "RS 1 5 -2 0");
        assert_eq!(PointCommand::Load("data/kNN0.txt".into()).to_string(), "LOAD data/kNN0.txt");
    }

    #[test]
    fn parses_tolerating_trailing_space() {
        assert_eq!("NN 1 2 ".parse::<PointCommand>().unwrap(), PointCommand::Nn(vec![1, 2]));
        assert_eq!("RS 1 2 3 4".parse::<PointCommand>().unwrap(), PointCommand::Rs(vec![(1, 2), (3, 4)]));
        assert!("RS 1 2 3".parse::<PointCommand>().is_err());
        assert!("KNN 1".parse::<PointCommand>().is_err());
        assert!("".parse::<PointCommand>().is_err());
    }
}
