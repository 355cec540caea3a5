//! Line-oriented command parsing.

use cartkit_core::ItemId;

use crate::error::DemoError;

pub const HELP: &str = "\
commands:
  catalog          list purchasable items
  add <id>         add one unit of a catalog item
  remove <id>      remove a line from the cart
  qty <id> <n>     set a line's quantity (n >= 1)
  clear            empty the cart
  show             print the cart
  help             print this text
  quit             leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Catalog,
    Add(ItemId),
    Remove(ItemId),
    Quantity(ItemId, i64),
    Clear,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, DemoError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(DemoError::Parse("empty command".to_string()));
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("catalog", []) => Command::Catalog,
            ("add", [id]) => Command::Add(parse_id(id)?),
            ("remove", [id]) => Command::Remove(parse_id(id)?),
            ("qty", [id, n]) => {
                let n = n
                    .parse::<i64>()
                    .map_err(|e| DemoError::Parse(format!("bad quantity {n:?}: {e}")))?;
                Command::Quantity(parse_id(id)?, n)
            }
            ("clear", []) => Command::Clear,
            ("show", []) => Command::Show,
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (verb, _) => {
                return Err(DemoError::Parse(format!(
                    "unrecognized command {verb:?} with {} argument(s); try `help`",
                    args.len()
                )));
            }
        };
        Ok(command)
    }
}

fn parse_id(raw: &str) -> Result<ItemId, DemoError> {
    raw.parse::<ItemId>()
        .map_err(|e| DemoError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        assert_eq!(Command::parse("catalog").unwrap(), Command::Catalog);
        assert_eq!(Command::parse("add 2").unwrap(), Command::Add(ItemId::new(2)));
        assert_eq!(Command::parse("  REMOVE   3 ").unwrap(), Command::Remove(ItemId::new(3)));
        assert_eq!(
            Command::parse("qty 1 -4").unwrap(),
            Command::Quantity(ItemId::new(1), -4)
        );
        assert_eq!(Command::parse("clear").unwrap(), Command::Clear);
        assert_eq!(Command::parse("show").unwrap(), Command::Show);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_wrong_arity_and_bad_numbers() {
        for line in ["", "add", "add 1 2", "qty 1", "qty x 1", "qty 1 many", "dance"] {
            assert!(
                matches!(Command::parse(line), Err(DemoError::Parse(_))),
                "{line:?} should not parse"
            );
        }
    }
}
