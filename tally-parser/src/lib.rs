#![warn(clippy::uninlined_format_args)]

//! Command grammar for the tally front end. One command per line,
//! keywords case-insensitive, amounts are non-negative decimals.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_till, take_while1},
    character::complete::{char, digit1, multispace1, u64},
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    sequence::{delimited, preceded},
    IResult, Parser,
};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payer {
    User,
    Friend,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Render the roster with balances and the current selection.
    Friends,
    /// Add a friend; the image reference is optional at the prompt.
    AddFriend {
        name: &'a str,
        image: Option<&'a str>,
    },
    /// Toggle selection of the friend with this id.
    Select(u64),
    /// Split a bill with the selected friend.
    Split {
        total: Decimal,
        paid_by_user: Decimal,
        payer: Payer,
    },
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized command: {0:?} (try `help`)")]
    Syntax(String),
}

/// Parses a single input line into a [`Command`]. Leading and trailing
/// whitespace is ignored; anything left over after a command is an error.
pub fn parse_command(input: &str) -> Result<Command<'_>, ParseError> {
    let line = input.trim();
    match all_consuming(command).parse(line) {
        Ok((_, cmd)) => Ok(cmd),
        Err(_) => Err(ParseError::Syntax(line.to_string())),
    }
}

fn command(input: &str) -> IResult<&str, Command<'_>> {
    alt((split, select, add_friend, friends, help, quit)).parse(input)
}

fn friends(input: &str) -> IResult<&str, Command<'_>> {
    value(Command::Friends, tag_no_case("friends")).parse(input)
}

fn help(input: &str) -> IResult<&str, Command<'_>> {
    value(Command::Help, tag_no_case("help")).parse(input)
}

fn quit(input: &str) -> IResult<&str, Command<'_>> {
    value(Command::Quit, alt((tag_no_case("quit"), tag_no_case("exit")))).parse(input)
}

fn select(input: &str) -> IResult<&str, Command<'_>> {
    map(
        preceded((tag_no_case("select"), multispace1), u64),
        Command::Select,
    )
    .parse(input)
}

fn add_friend(input: &str) -> IResult<&str, Command<'_>> {
    let (input, _) = (tag_no_case("add"), multispace1).parse(input)?;
    let (input, name) = friend_name(input)?;
    let (input, image) = opt(preceded(multispace1, word)).parse(input)?;
    Ok((input, Command::AddFriend { name, image }))
}

fn split(input: &str) -> IResult<&str, Command<'_>> {
    let (input, _) = (tag_no_case("split"), multispace1).parse(input)?;
    let (input, total) = amount(input)?;
    let (input, paid_by_user) = preceded(multispace1, amount).parse(input)?;
    let (input, payer) = preceded(multispace1, payer).parse(input)?;
    Ok((
        input,
        Command::Split {
            total,
            paid_by_user,
            payer,
        },
    ))
}

fn payer(input: &str) -> IResult<&str, Payer> {
    alt((
        value(Payer::User, tag_no_case("user")),
        value(Payer::Friend, tag_no_case("friend")),
    ))
    .parse(input)
}

/// A quoted name may contain spaces; a bare name runs to the next space.
fn friend_name(input: &str) -> IResult<&str, &str> {
    alt((delimited(char('"'), take_till(|c| c == '"'), char('"')), word)).parse(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace()).parse(input)
}

fn amount(input: &str) -> IResult<&str, Decimal> {
    map_res(
        recognize((digit1, opt((char('.'), digit1)))),
        str::parse::<Decimal>,
    )
    .parse(input)
}
