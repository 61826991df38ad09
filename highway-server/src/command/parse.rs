//! Tokenising and parsing the command language.
//!
//! Commands are whitespace-separated words; line breaks carry no meaning,
//! so a station's fleet may be spread over several lines.

use crate::domain::{Autonomy, Distance};

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add-station <distance> <count> <autonomy>...`
    AddStation {
        distance: Distance,
        vehicles: Vec<Autonomy>,
    },
    /// `demolish-station <distance>`
    DemolishStation { distance: Distance },
    /// `add-car <distance> <autonomy>`
    AddCar {
        distance: Distance,
        autonomy: Autonomy,
    },
    /// `scrap-car <distance> <autonomy>`
    ScrapCar {
        distance: Distance,
        autonomy: Autonomy,
    },
    /// `plan-route <start> <end>`
    PlanRoute { start: Distance, end: Distance },
}

/// Malformed command input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The command word is not recognised
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Input ended before all arguments were read
    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// An argument is not a 64-bit integer
    #[error("{command}: {argument} is not an integer: {token}")]
    InvalidInteger {
        command: &'static str,
        argument: &'static str,
        token: String,
    },

    /// A vehicle count below zero
    #[error("add-station: negative vehicle count {0}")]
    NegativeCount(i64),
}

/// Streaming parser over a command script.
///
/// Yields one command at a time. After an error the token stream can no
/// longer be trusted, so the parser stops.
pub struct Parser<'a> {
    tokens: std::str::SplitAsciiWhitespace<'a>,
    failed: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_ascii_whitespace(),
            failed: false,
        }
    }

    fn integer(
        &mut self,
        command: &'static str,
        argument: &'static str,
    ) -> Result<i64, CommandError> {
        let token = self
            .tokens
            .next()
            .ok_or(CommandError::MissingArgument { command, argument })?;
        token.parse().map_err(|_| CommandError::InvalidInteger {
            command,
            argument,
            token: token.to_string(),
        })
    }

    fn command(&mut self, word: &str) -> Result<Command, CommandError> {
        match word {
            "add-station" => {
                let distance = Distance(self.integer("add-station", "distance")?);
                let count = self.integer("add-station", "vehicle count")?;
                let count = usize::try_from(count).map_err(|_| CommandError::NegativeCount(count))?;
                let vehicles = (0..count)
                    .map(|_| self.integer("add-station", "autonomy").map(Autonomy))
                    .collect::<Result<_, _>>()?;
                Ok(Command::AddStation { distance, vehicles })
            }
            "demolish-station" => Ok(Command::DemolishStation {
                distance: Distance(self.integer("demolish-station", "distance")?),
            }),
            "add-car" => Ok(Command::AddCar {
                distance: Distance(self.integer("add-car", "distance")?),
                autonomy: Autonomy(self.integer("add-car", "autonomy")?),
            }),
            "scrap-car" => Ok(Command::ScrapCar {
                distance: Distance(self.integer("scrap-car", "distance")?),
                autonomy: Autonomy(self.integer("scrap-car", "autonomy")?),
            }),
            "plan-route" => Ok(Command::PlanRoute {
                start: Distance(self.integer("plan-route", "start")?),
                end: Distance(self.integer("plan-route", "end")?),
            }),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Command, CommandError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let word = self.tokens.next()?;
        let parsed = self.command(word);
        self.failed = parsed.is_err();
        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(input: &str) -> Vec<Result<Command, CommandError>> {
        Parser::new(input).collect()
    }

    #[test]
    fn parses_every_command() {
        let input = "add-station 10 3 5 10 15\n\
                     demolish-station 10\n\
                     add-car 20 7\n\
                     scrap-car 20 7\n\
                     plan-route 0 30\n";
        let got: Vec<Command> = parse_all(input).into_iter().map(Result::unwrap).collect();
        assert_eq!(
            got,
            vec![
                Command::AddStation {
                    distance: Distance(10),
                    vehicles: vec![Autonomy(5), Autonomy(10), Autonomy(15)],
                },
                Command::DemolishStation {
                    distance: Distance(10)
                },
                Command::AddCar {
                    distance: Distance(20),
                    autonomy: Autonomy(7)
                },
                Command::ScrapCar {
                    distance: Distance(20),
                    autonomy: Autonomy(7)
                },
                Command::PlanRoute {
                    start: Distance(0),
                    end: Distance(30)
                },
            ]
        );
    }

    #[test]
    fn fleet_may_span_lines() {
        let got = parse_all("add-station 5 2\n  8\n\n9 plan-route 5 5");
        assert_eq!(
            got,
            vec![
                Ok(Command::AddStation {
                    distance: Distance(5),
                    vehicles: vec![Autonomy(8), Autonomy(9)],
                }),
                Ok(Command::PlanRoute {
                    start: Distance(5),
                    end: Distance(5)
                }),
            ]
        );
    }

    #[test]
    fn empty_fleet() {
        assert_eq!(
            parse_all("add-station -3 0"),
            vec![Ok(Command::AddStation {
                distance: Distance(-3),
                vehicles: vec![],
            })]
        );
    }

    #[test]
    fn empty_input() {
        assert!(parse_all("  \n\t ").is_empty());
    }

    #[test]
    fn unknown_command_stops_parsing() {
        let got = parse_all("launch-rocket 1 plan-route 1 2");
        assert_eq!(
            got,
            vec![Err(CommandError::UnknownCommand("launch-rocket".into()))]
        );
    }

    #[test]
    fn missing_argument() {
        assert_eq!(
            parse_all("add-car 10"),
            vec![Err(CommandError::MissingArgument {
                command: "add-car",
                argument: "autonomy"
            })]
        );
        assert_eq!(
            parse_all("add-station 10 3 1 2"),
            vec![Err(CommandError::MissingArgument {
                command: "add-station",
                argument: "autonomy"
            })]
        );
    }

    #[test]
    fn invalid_integer() {
        assert_eq!(
            parse_all("plan-route 0 far"),
            vec![Err(CommandError::InvalidInteger {
                command: "plan-route",
                argument: "end",
                token: "far".into()
            })]
        );
    }

    #[test]
    fn negative_count() {
        assert_eq!(
            parse_all("add-station 0 -1"),
            vec![Err(CommandError::NegativeCount(-1))]
        );
    }

    #[test]
    fn error_display() {
        let err = CommandError::MissingArgument {
            command: "scrap-car",
            argument: "autonomy",
        };
        assert_eq!(err.to_string(), "scrap-car: missing autonomy");

        let err = CommandError::InvalidInteger {
            command: "add-car",
            argument: "distance",
            token: "x1".into(),
        };
        assert_eq!(err.to_string(), "add-car: distance is not an integer: x1");
        assert_eq!(
            CommandError::UnknownCommand("fly".into()).to_string(),
            "unknown command: fly"
        );
        assert_eq!(
            CommandError::NegativeCount(-4).to_string(),
            "add-station: negative vehicle count -4"
        );
    }
}
